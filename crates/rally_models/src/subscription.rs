use chrono::{ DateTime, Utc };
use rally_util::query;
use serde::Deserialize;

use crate::{ collective::ContributorCollective, tier::Interval, Result };

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionModel {
	pub id: i64,
	#[serde(default)]
	pub total_amount: i64,
	pub currency: String,
	#[serde(default)]
	pub interval: Option<Interval>,
	#[serde(default)]
	pub is_subscription_active: bool,
	#[serde(default)]
	pub created_at: Option<DateTime<Utc>>,
	pub collective: ContributorCollective
}

const GET_COLLECTIVE_SUBSCRIPTIONS: &str = "
	query getCollectiveSubscriptions($slug: String!) {
		allOrders(fromCollectiveSlug: $slug, subscriptionsOnly: true) {
			id
			totalAmount
			currency
			interval
			isSubscriptionActive
			createdAt
			collective {
				id
				slug
				name
				type
				image
				website
			}
		}
	}
";

#[derive(Deserialize)]
struct GetCollectiveSubscriptions {
	#[serde(rename = "allOrders", default)]
	orders: Vec<SubscriptionModel>
}

impl SubscriptionModel {
	/// The subscriptions a collective is paying out to others. Requires the
	/// visitor's session token, the listing is not public.
	pub async fn for_collective(slug: &str, session_token: &str) -> Result<Vec<Self>> {
		let response: GetCollectiveSubscriptions = query(
			GET_COLLECTIVE_SUBSCRIPTIONS,
			serde_json::json!({ "slug": slug }),
			Some(session_token)
		).await?;
		Ok(response.orders)
	}
}
