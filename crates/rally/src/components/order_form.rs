use rally_models::{ OrderModel, UserModel };
use rally_util::format_currency;

use super::contribution::Contribution;
use crate::view::Node;

pub struct OrderFormProps<'a> {
	pub order: &'a OrderModel,
	pub contribution: &'a Contribution,
	pub logged_in_user: &'a UserModel
}

pub fn render(props: &OrderFormProps<'_>) -> Node {
	let order = props.order;
	let contribution = props.contribution;
	let currency = contribution.currency(&order.collective.currency);

	let mut summary = Node::div("contribution")
		.child(Node::div("name").text(contribution.name()));
	summary = match contribution.presets() {
		Some(presets) => summary.child(
			Node::div("presets").children(presets.iter().map(|preset|
				Node::element("button")
					.class("preset")
					.attr("type", "button")
					.attr("value", preset.to_string())
					.text(format_currency(*preset, currency, 0))
					.into()
			))
		),
		None => summary.child(
			Node::div("amount").text(format_currency(contribution.displayed_amount(), currency, 0))
		)
	};
	if let Some(interval) = contribution.interval() {
		summary = summary.child(Node::div("interval").text(format!("per {}", interval.as_str())));
	}
	if let Some(description) = contribution.description() {
		summary = summary.child(Node::div("description").text(description));
	}

	let mut payment = Node::div("paymentMethods");
	if order.collective.payment_methods.is_empty() {
		payment = payment.child(Node::div("empty").text("No saved payment methods"));
	} else {
		payment = payment.child(Node::element("ul").children(
			order.collective.payment_methods.iter().map(|method|
				Node::element("li")
					.class("paymentMethod")
					.text(match &method.name {
						Some(name) => format!("{name} ({})", method.service),
						None => method.service.clone()
					})
					.into()
			)
		));
	}

	let mut form = Node::element("form")
		.class("OrderForm")
		.attr("data-contributor", props.logged_in_user.display_name())
		.child(summary)
		.child(payment);
	if let Some(message) = &order.public_message {
		form = form.child(Node::div("publicMessage").text(message.clone()));
	}

	form
		.child(Node::element("button")
			.class("submit")
			.attr("type", "submit")
			.text(contribution.button_label()))
		.into()
}
