use rally_models::{ CollectiveModel, CollectiveType, ContributorCollective, TierModel };
use rally_util::format_currency;
use std::collections::HashSet;

use super::avatar;
use crate::{
	router::{ route_path, RouteParams, Router },
	view::Node,
	Result
};

pub struct TierCard<'a> {
	pub tier: &'a TierModel,
	pub collective: &'a CollectiveModel,
	pub referral: Option<&'a str>
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TierErrorReason {
	HostMissing,
	CollectiveInactive
}

impl TierErrorReason {
	pub fn message(self) -> &'static str {
		match self {
			Self::HostMissing => "Your collective needs a host before you can start accepting money.",
			Self::CollectiveInactive => "Your collective needs to be activated by your host before you can start accepting money."
		}
	}
}

impl<'a> TierCard<'a> {
	pub fn anchor(&self) -> String {
		self.tier.slug
			.clone()
			.unwrap_or_else(|| self.tier.name.to_lowercase().replace(' ', "-"))
	}

	pub fn amount(&self) -> i64 {
		self.tier.displayed_amount()
	}

	pub fn currency(&self) -> &str {
		self.tier.currency.as_deref().unwrap_or(&self.collective.currency)
	}

	/// Free tiers stay clickable no matter the collective's state; money
	/// can only change hands once the collective is active.
	pub fn is_disabled(&self) -> bool {
		self.amount() > 0 && !self.collective.is_active
	}

	pub fn error_reason(&self) -> Option<TierErrorReason> {
		if self.collective.host.is_none() {
			Some(TierErrorReason::HostMissing)
		} else if !self.collective.is_active {
			Some(TierErrorReason::CollectiveInactive)
		} else {
			None
		}
	}

	pub fn tooltip(&self) -> Option<&'static str> {
		if self.is_disabled() {
			self.error_reason().map(TierErrorReason::message)
		} else {
			None
		}
	}

	pub fn action_label(&self) -> &str {
		self.tier.button.as_deref().unwrap_or("contribute")
	}

	pub fn link_params(&self) -> RouteParams {
		let mut params = RouteParams::new();
		params.insert("collectiveSlug", self.collective.slug.clone());
		params.insert("TierId", self.tier.id.to_string());
		if let Some(referral) = self.referral {
			params.insert("referral", referral.to_owned());
		}
		params
	}

	/// The contributors behind this tier's orders, deduplicated by id,
	/// filtered to the given collective types, first seen kept.
	pub fn contributors(&self, kinds: &[CollectiveType], limit: usize) -> Vec<&ContributorCollective> {
		let mut seen = HashSet::new();
		self.tier.orders
			.iter()
			.filter_map(|order| order.from_collective.as_ref())
			.filter(|collective| kinds.contains(&collective.kind))
			.filter(|collective| seen.insert(collective.id))
			.take(limit)
			.collect()
	}

	/// Clicking a disabled card is suppressed entirely. Otherwise the
	/// order route is pushed first and the anchor applied only once it
	/// has resolved, so the page does not visibly jump mid-navigation.
	pub async fn on_action_click(&self, router: &dyn Router) -> Result<()> {
		if self.is_disabled() {
			return Ok(());
		}

		router.push_route("orderCollectiveTier", &self.link_params()).await?;
		router.set_anchor("#content");
		Ok(())
	}

	fn last_orders(&self, kinds: &[CollectiveType], limit: usize) -> Option<Node> {
		let contributors = self.contributors(kinds, limit);
		if contributors.is_empty() {
			return None;
		}

		let user_style = kinds.contains(&CollectiveType::User);
		let group = if user_style { "user" } else { "organization" };
		Some(Node::div("fromCollectives")
			.class(group)
			.children(contributors.into_iter().map(|contributor| {
				let visual = if user_style {
					avatar::avatar(contributor.image.as_deref(), &contributor.name, 32)
				} else {
					avatar::logo(contributor.image.as_deref(), contributor.website.as_deref(), &contributor.name, 32)
				};
				Node::div("image")
					.child(Node::element("a")
						.attr("href", format!("/{}", contributor.slug))
						.attr("title", contributor.name.clone())
						.child(visual))
					.into()
			}))
			.into())
	}

	fn amount_block(&self) -> Option<Node> {
		let amount = self.amount();
		if amount <= 0 {
			return None;
		}

		let mut block = Node::div("amount").text(format_currency(amount, self.currency(), 0));
		if self.tier.presets.is_some() {
			block = block.child(Node::element("span").text("+"));
		}
		if let Some(interval) = self.tier.interval {
			block = block.child(Node::div("interval").text(format!("per {}", interval.as_str())));
		}
		Some(block.into())
	}

	fn description(&self) -> String {
		self.tier.description.clone().unwrap_or_else(|| {
			let amount = format_currency(self.amount(), self.currency(), 0);
			match self.tier.interval {
				Some(interval) => format!(
					"Become a {} for {amount} per {} and help us sustain our activities!",
					self.tier.name, interval.as_str()
				),
				None => format!(
					"Become a {} for {amount} and help us sustain our activities!",
					self.tier.name
				)
			}
		})
	}

	pub fn render(&self) -> Result<Node> {
		let mut card = Node::div("TierCard").class(self.anchor());
		card = card.child(Node::div("name").text(self.tier.name.clone()));
		if let Some(amount) = self.amount_block() {
			card = card.child(amount);
		}
		if self.tier.max_quantity > 0 {
			let available = self.tier.stats.available_quantity.unwrap_or(0);
			card = card.child(Node::div("limited")
				.text(format!("LIMITED: {available} LEFT OUT OF {}", self.tier.max_quantity)));
		}
		card = card.child(Node::div("description").text(self.description()));

		let total_orders = self.tier.stats.total_orders;
		if total_orders > 0 {
			let mut footer = Node::div("footer")
				.child(Node::div("totalOrders").text(format!(
					"{total_orders} {}",
					if total_orders == 1 { "contribution" } else { "contributions" }
				)));
			if let Some(users) = self.last_orders(&[CollectiveType::User], 10) {
				footer = footer.child(users);
			}
			if let Some(organisations) = self.last_orders(&[CollectiveType::Organization, CollectiveType::Collective], 10) {
				footer = footer.child(organisations);
			}
			card = card.child(Node::div("divider")).child(footer);
		}

		let mut action = Node::element("a")
			.class("action")
			.attr("href", route_path("orderCollectiveTier", &self.link_params())?)
			.text(self.action_label());
		if self.is_disabled() {
			action = action.class("disabled");
		}
		if let Some(tooltip) = self.tooltip() {
			action = action.attr("title", tooltip);
		}

		Ok(card.child(action).into())
	}
}
