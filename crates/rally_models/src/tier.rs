use rally_util::query;
use serde::Deserialize;

use crate::{ order::OrderSummary, Result };

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierModel {
	pub id: i64,
	#[serde(default)]
	pub slug: Option<String>,
	pub name: String,
	#[serde(default)]
	pub amount: i64,
	#[serde(default)]
	pub presets: Option<Vec<i64>>,
	#[serde(default)]
	pub currency: Option<String>,
	#[serde(default)]
	pub interval: Option<Interval>,
	#[serde(default)]
	pub max_quantity: i64,
	#[serde(default)]
	pub stats: TierStats,
	#[serde(default)]
	pub orders: Vec<OrderSummary>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub button: Option<String>
}

impl TierModel {
	/// The amount shown on the card. Tiers carrying presets advertise the
	/// cheapest entry point: the first preset, capped by the tier amount.
	pub fn displayed_amount(&self) -> i64 {
		self.presets
			.as_ref()
			.and_then(|presets| presets.first())
			.map_or(self.amount, |preset| (*preset).min(self.amount))
	}
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierStats {
	#[serde(default)]
	pub total_orders: i64,
	#[serde(default)]
	pub available_quantity: Option<i64>
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
	Month,
	Year
}

impl Interval {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Month => "month",
			Self::Year => "year"
		}
	}
}

const GET_COLLECTIVE_TIERS: &str = "
	query getCollectiveTiers($slug: String!) {
		Collective(slug: $slug) {
			tiers {
				id
				slug
				name
				amount
				presets
				currency
				interval
				maxQuantity
				description
				button
				stats {
					totalOrders
					availableQuantity
				}
				orders {
					fromCollective {
						id
						slug
						name
						type
						image
						website
					}
				}
			}
		}
	}
";

#[derive(Deserialize)]
struct GetCollectiveTiers {
	#[serde(rename = "Collective")]
	collective: CollectiveTiers
}

#[derive(Deserialize)]
struct CollectiveTiers {
	#[serde(default)]
	tiers: Vec<TierModel>
}

impl TierModel {
	pub async fn for_collective(slug: &str) -> Result<Vec<Self>> {
		let response: GetCollectiveTiers = query(
			GET_COLLECTIVE_TIERS,
			serde_json::json!({ "slug": slug }),
			None
		).await?;
		Ok(response.collective.tiers)
	}
}
