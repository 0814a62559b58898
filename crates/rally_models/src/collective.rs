use rally_util::query;
use serde::Deserialize;

use crate::Result;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectiveModel {
	pub id: i64,
	pub slug: String,
	pub name: String,
	pub currency: String,
	#[serde(default)]
	pub is_active: bool,
	#[serde(default)]
	pub host: Option<HostModel>,
	#[serde(default)]
	pub image: Option<String>,
	#[serde(default)]
	pub website: Option<String>
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostModel {
	pub id: i64,
	pub name: String,
	#[serde(default)]
	pub slug: Option<String>
}

/// A collective as it appears on someone else's record, e.g. the
/// contributor behind an order or the target of a subscription.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorCollective {
	pub id: i64,
	pub slug: String,
	pub name: String,
	#[serde(rename = "type")]
	pub kind: CollectiveType,
	#[serde(default)]
	pub image: Option<String>,
	#[serde(default)]
	pub website: Option<String>
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectiveType {
	User,
	Organization,
	Collective
}

const GET_COLLECTIVE: &str = "
	query getCollective($slug: String!) {
		Collective(slug: $slug) {
			id
			slug
			name
			currency
			isActive
			image
			website
			host {
				id
				name
				slug
			}
		}
	}
";

#[derive(Deserialize)]
struct GetCollective {
	#[serde(rename = "Collective")]
	collective: CollectiveModel
}

impl CollectiveModel {
	pub async fn get(slug: &str) -> Result<Self> {
		let response: GetCollective = query(
			GET_COLLECTIVE,
			serde_json::json!({ "slug": slug }),
			None
		).await?;
		Ok(response.collective)
	}
}
