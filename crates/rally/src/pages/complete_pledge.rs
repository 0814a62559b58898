use rally_models::OrderModel;

use super::{ DataState, IdentityProvider, PageSession };
use crate::{
	components::{
		contribution::{ Contribution, PledgeModel },
		layout,
		order_form::{ self, OrderFormProps },
		sign_in
	},
	view::Node,
	Result
};

pub struct CompletePledgePage {
	pub order_id: i64
}

impl CompletePledgePage {
	/// Pure branch selection over the two fetches. Remote-data loading
	/// and errors substitute the whole page; an unresolved or anonymous
	/// visitor gets the sign-in prompt; only a resolved identity gets
	/// the interactive form.
	pub fn compose(&self, data: &DataState<OrderModel>, session: &PageSession) -> Node {
		let order = match data {
			DataState::Loading => return layout::error_page(true, None),
			DataState::Error(message) => return layout::error_page(false, Some(message)),
			DataState::Loaded(order) => order
		};

		let mut content = vec![
			Node::element("h1").text("Complete Your Pledge").into()
		];
		match session.logged_in_user() {
			Some(user) => {
				let contribution = Contribution::Pledge(PledgeModel::from_order(order));
				content.push(order_form::render(&OrderFormProps {
					order,
					contribution: &contribution,
					logged_in_user: user
				}));
			},
			None => content.push(sign_in::render())
		}

		layout::page("Complete Pledge", session.is_loading(), session.logged_in_user(), content)
	}

	pub async fn render(&self, session: &mut PageSession, identity: &dyn IdentityProvider) -> Result<Node> {
		// identity and the order resolve concurrently; each keeps its own
		// loading and error handling
		let (identity_result, order_result) = futures::future::join(
			session.resolve_identity(identity),
			OrderModel::get(self.order_id)
		).await;
		identity_result?;

		Ok(self.compose(&DataState::from_fetch(order_result), session))
	}
}

#[cfg(test)]
mod tests {
	use rally_models::{ Interval, OrderCollective, OrderModel, PaymentMethodModel, UserModel };

	use super::{ CompletePledgePage, DataState };
	use crate::{
		pages::{ IdentityProvider, PageSession },
		view::Node,
		BoxFuture, Result
	};

	fn order(total_amount: Option<i64>) -> OrderModel {
		OrderModel {
			id: 821,
			interval: Some(Interval::Month),
			public_message: Some("keep it up!".into()),
			quantity: Some(1),
			total_amount,
			collective: OrderCollective {
				id: 4,
				slug: "webpack".into(),
				name: "webpack".into(),
				currency: "USD".into(),
				website: None,
				host: None,
				payment_methods: vec![
					PaymentMethodModel { id: 2, name: Some("visa".into()), service: "stripe".into() }
				]
			},
			from_collective: None
		}
	}

	fn user() -> UserModel {
		UserModel {
			id: 7,
			username: Some("jan".into()),
			first_name: None,
			last_name: None,
			image: None,
			collective_slug: None
		}
	}

	struct FixedProvider(Option<UserModel>);

	impl IdentityProvider for FixedProvider {
		fn get_logged_in_user<'a>(&'a self, _session_token: Option<&'a str>) -> BoxFuture<'a, Result<Option<UserModel>>> {
			let value = self.0.clone();
			Box::pin(async move { Ok(value) })
		}
	}

	async fn resolved_session(user: Option<UserModel>) -> PageSession {
		let mut session = PageSession::new(Some("token".into()));
		session.resolve_identity(&FixedProvider(user)).await.unwrap();
		session
	}

	fn page() -> CompletePledgePage {
		CompletePledgePage { order_id: 821 }
	}

	fn classes_of(node: &Node, class: &str) -> usize {
		node.as_element().unwrap().find_all(class).len()
	}

	#[test]
	fn loading_data_substitutes_the_page() {
		let session = PageSession::new(None);
		let node = page().compose(&DataState::Loading, &session);
		let element = node.as_element().unwrap();
		assert!(element.has_class("ErrorPage"));
		assert!(element.has_class("loading"));
	}

	#[test]
	fn a_fetch_error_substitutes_the_page_with_its_message() {
		let session = PageSession::new(None);
		let node = page().compose(&DataState::Error("order 821 not found".into()), &session);
		let element = node.as_element().unwrap();
		assert!(element.has_class("ErrorPage"));
		assert!(element.inner_text().contains("order 821 not found"));
	}

	#[tokio::test]
	async fn an_unresolved_identity_never_renders_the_form() {
		let session = PageSession::new(None);
		let node = page().compose(&DataState::Loaded(order(None)), &session);
		assert_eq!(classes_of(&node, "OrderForm"), 0);
		assert_eq!(classes_of(&node, "SignInForm"), 1);
		// the header carries the loading flag until identity settles
		assert!(node.as_element().unwrap().find_all("Header")[0].has_class("loading"));
	}

	#[tokio::test]
	async fn an_anonymous_visitor_gets_the_sign_in_prompt() {
		let session = resolved_session(None).await;
		let node = page().compose(&DataState::Loaded(order(None)), &session);
		assert_eq!(classes_of(&node, "SignInForm"), 1);
		assert_eq!(classes_of(&node, "OrderForm"), 0);
		assert!(!node.as_element().unwrap().find_all("Header")[0].has_class("loading"));
	}

	#[tokio::test]
	async fn a_resolved_identity_gets_the_pledge_form() {
		let session = resolved_session(Some(user())).await;
		let node = page().compose(&DataState::Loaded(order(None)), &session);
		assert_eq!(classes_of(&node, "OrderForm"), 1);
		assert_eq!(classes_of(&node, "SignInForm"), 0);

		let element = node.as_element().unwrap();
		// the synthesised pledge drives the form: donate button, presets
		// offered because the order carried no amount
		assert!(element.inner_text().contains("donate"));
		assert_eq!(element.find_all("preset").len(), 3);
		assert_eq!(element.find_all("paymentMethod").len(), 1);
	}

	#[tokio::test]
	async fn a_specified_amount_shows_no_presets() {
		let session = resolved_session(Some(user())).await;
		let node = page().compose(&DataState::Loaded(order(Some(2000))), &session);
		let element = node.as_element().unwrap();
		assert!(element.find_all("preset").is_empty());
		assert_eq!(element.find_all("amount")[0].inner_text(), "$20");
	}
}
