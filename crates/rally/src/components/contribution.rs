use rally_models::{ Interval, OrderModel, TierModel };

/// Something a visitor can put money into. Tiers come straight off the
/// remote API; pledges are synthesised from a not-yet-confirmed order so
/// the same form can collect the rest of the details.
#[derive(Clone, Debug)]
pub enum Contribution {
	Tier(TierModel),
	Pledge(PledgeModel)
}

#[derive(Clone, Debug)]
pub struct PledgeModel {
	pub name: String,
	pub amount: i64,
	pub presets: Option<Vec<i64>>,
	pub currency: String,
	pub interval: Option<Interval>,
	pub button: String,
	pub description: String
}

const PLEDGE_PRESETS: [i64; 3] = [1000, 5000, 10000];

impl PledgeModel {
	/// Presets are only offered when the pledge arrived without an amount
	/// of its own; the contributor picks one at payment time.
	pub fn from_order(order: &OrderModel) -> Self {
		let amount = order.total_amount.unwrap_or(0);
		Self {
			name: "Pledge".into(),
			amount,
			presets: if amount > 0 { None } else { Some(PLEDGE_PRESETS.to_vec()) },
			currency: order.collective.currency.clone(),
			interval: order.interval,
			button: "donate".into(),
			description: "Thank you for your kind donation".into()
		}
	}

	pub fn displayed_amount(&self) -> i64 {
		self.presets
			.as_ref()
			.and_then(|presets| presets.first())
			.copied()
			.unwrap_or(self.amount)
	}
}

impl Contribution {
	pub fn name(&self) -> &str {
		match self {
			Self::Tier(tier) => &tier.name,
			Self::Pledge(pledge) => &pledge.name
		}
	}

	pub fn displayed_amount(&self) -> i64 {
		match self {
			Self::Tier(tier) => tier.displayed_amount(),
			Self::Pledge(pledge) => pledge.displayed_amount()
		}
	}

	pub fn presets(&self) -> Option<&[i64]> {
		match self {
			Self::Tier(tier) => tier.presets.as_deref(),
			Self::Pledge(pledge) => pledge.presets.as_deref()
		}
	}

	pub fn currency<'a>(&'a self, fallback: &'a str) -> &'a str {
		match self {
			Self::Tier(tier) => tier.currency.as_deref().unwrap_or(fallback),
			Self::Pledge(pledge) => &pledge.currency
		}
	}

	pub fn interval(&self) -> Option<Interval> {
		match self {
			Self::Tier(tier) => tier.interval,
			Self::Pledge(pledge) => pledge.interval
		}
	}

	pub fn button_label(&self) -> &str {
		match self {
			Self::Tier(tier) => tier.button.as_deref().unwrap_or("contribute"),
			Self::Pledge(pledge) => &pledge.button
		}
	}

	pub fn description(&self) -> Option<&str> {
		match self {
			Self::Tier(tier) => tier.description.as_deref(),
			Self::Pledge(pledge) => Some(&pledge.description)
		}
	}
}

#[cfg(test)]
mod tests {
	use rally_models::{ Interval, OrderCollective, OrderModel };

	use super::{ Contribution, PledgeModel };

	fn order(total_amount: Option<i64>) -> OrderModel {
		OrderModel {
			id: 821,
			interval: Some(Interval::Month),
			public_message: None,
			quantity: Some(1),
			total_amount,
			collective: OrderCollective {
				id: 4,
				slug: "webpack".into(),
				name: "webpack".into(),
				currency: "EUR".into(),
				website: None,
				host: None,
				payment_methods: vec![]
			},
			from_collective: None
		}
	}

	#[test]
	fn an_unspecified_amount_offers_presets() {
		let pledge = PledgeModel::from_order(&order(None));
		assert_eq!(pledge.presets.as_deref(), Some([1000, 5000, 10000].as_slice()));
		assert_eq!(pledge.displayed_amount(), 1000);
	}

	#[test]
	fn a_specified_amount_suppresses_presets() {
		let pledge = PledgeModel::from_order(&order(Some(2000)));
		assert_eq!(pledge.presets, None);
		assert_eq!(pledge.displayed_amount(), 2000);
	}

	#[test]
	fn a_zero_amount_counts_as_unspecified() {
		let pledge = PledgeModel::from_order(&order(Some(0)));
		assert!(pledge.presets.is_some());
	}

	#[test]
	fn the_pledge_inherits_order_details() {
		let pledge = PledgeModel::from_order(&order(None));
		assert_eq!(pledge.currency, "EUR");
		assert_eq!(pledge.interval, Some(Interval::Month));
		assert_eq!(pledge.name, "Pledge");
		assert_eq!(pledge.button, "donate");
	}

	#[test]
	fn the_shared_contract_covers_both_variants() {
		let contribution = Contribution::Pledge(PledgeModel::from_order(&order(None)));
		assert_eq!(contribution.name(), "Pledge");
		assert_eq!(contribution.button_label(), "donate");
		assert_eq!(contribution.currency("USD"), "EUR");
		assert_eq!(contribution.description(), Some("Thank you for your kind donation"));
	}
}
