use rally_models::SubscriptionModel;
use rally_util::format_currency;

use super::{ DataState, IdentityProvider, PageSession };
use crate::{
	components::{ layout, sign_in },
	view::Node,
	Result
};

pub struct SubscriptionsPage {
	pub slug: String
}

impl SubscriptionsPage {
	pub fn compose(&self, data: &DataState<Vec<SubscriptionModel>>, session: &PageSession) -> Node {
		let listing = match data {
			DataState::Error(message) => return layout::error_page(false, Some(message)),
			DataState::Loading if session.logged_in_user().is_some() => return layout::error_page(true, None),
			DataState::Loaded(subscriptions) if session.logged_in_user().is_some() => Self::listing(subscriptions),
			// anonymous or still resolving: the listing is private
			_ => sign_in::render()
		};

		layout::page("Subscriptions", session.is_loading(), session.logged_in_user(), vec![
			Node::div("Subscriptions-header")
				.child(Node::div("Subscriptions-title").text(format!("{}'s subscriptions", self.slug)))
				.child(Node::div("Subscriptions-description")
					.text("All the collectives that you are giving money to"))
				.into(),
			Node::div("Subscriptions-listing").child(listing).into()
		])
	}

	fn listing(subscriptions: &[SubscriptionModel]) -> Node {
		if subscriptions.is_empty() {
			return Node::div("empty").text("No subscriptions yet").into();
		}

		Node::div("Subscriptions")
			.children(subscriptions.iter().map(Self::subscription_card))
			.into()
	}

	fn subscription_card(subscription: &SubscriptionModel) -> Node {
		let mut card = Node::div("Subscription");
		if !subscription.is_subscription_active {
			card = card.class("inactive");
		}
		card = card
			.child(Node::element("a")
				.class("collective")
				.attr("href", format!("/{}", subscription.collective.slug))
				.text(subscription.collective.name.clone()))
			.child(Node::div("amount").text(match subscription.interval {
				Some(interval) => format!(
					"{} per {}",
					format_currency(subscription.total_amount, &subscription.currency, 0),
					interval.as_str()
				),
				None => format_currency(subscription.total_amount, &subscription.currency, 0)
			}));
		if let Some(created_at) = subscription.created_at {
			card = card.child(Node::div("since").text(format!("since {}", created_at.format("%B %Y"))));
		}
		card.into()
	}

	pub async fn render(&self, session: &mut PageSession, identity: &dyn IdentityProvider) -> Result<Node> {
		session.resolve_identity(identity).await?;

		// the listing is only fetched for a resolved visitor; anonymous
		// sessions short-circuit to the sign-in prompt
		let data = match (session.logged_in_user(), session.session_token()) {
			(Some(_), Some(token)) =>
				DataState::from_fetch(SubscriptionModel::for_collective(&self.slug, token).await),
			_ => DataState::Loading
		};
		Ok(self.compose(&data, session))
	}
}
