use rally_util::query;
use serde::Deserialize;

use crate::{ collective::ContributorCollective, Result };

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberModel {
	pub id: i64,
	#[serde(default)]
	pub role: Option<String>,
	#[serde(default)]
	pub stats: MemberStats,
	#[serde(default)]
	pub member: Option<ContributorCollective>
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
	#[serde(default)]
	pub total_donations: i64
}

/// How a member card presents its subject: people get the avatar
/// treatment, sponsoring organisations get the logo treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
	User,
	Organization
}

impl DisplayMode {
	/// Legacy derivation for callers still passing a free-text style hint.
	/// A case-insensitive "sponsor" anywhere in the hint selects the
	/// organisation treatment.
	pub fn from_style_hint(hint: &str) -> Self {
		if hint.to_ascii_lowercase().contains("sponsor") {
			Self::Organization
		} else {
			Self::User
		}
	}
}

const GET_COLLECTIVE_MEMBERS: &str = "
	query getCollectiveMembers($slug: String!) {
		allMembers(collectiveSlug: $slug) {
			id
			role
			stats {
				totalDonations
			}
			member {
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
struct GetCollectiveMembers {
	#[serde(rename = "allMembers", default)]
	members: Vec<MemberModel>
}

impl MemberModel {
	pub async fn for_collective(slug: &str) -> Result<Vec<Self>> {
		let response: GetCollectiveMembers = query(
			GET_COLLECTIVE_MEMBERS,
			serde_json::json!({ "slug": slug }),
			None
		).await?;
		Ok(response.members)
	}
}

#[cfg(test)]
mod tests {
	use super::DisplayMode;

	#[test]
	fn sponsor_hints_select_the_organisation_treatment() {
		assert_eq!(DisplayMode::from_style_hint("sponsors-grid"), DisplayMode::Organization);
		assert_eq!(DisplayMode::from_style_hint("SPONSOR"), DisplayMode::Organization);
	}

	#[test]
	fn other_hints_select_the_user_treatment() {
		assert_eq!(DisplayMode::from_style_hint("users"), DisplayMode::User);
		assert_eq!(DisplayMode::from_style_hint(""), DisplayMode::User);
	}
}
