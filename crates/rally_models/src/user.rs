use rally_util::query;
use serde::Deserialize;

use crate::Result;

/// The resolved identity of the current visitor. `None` anywhere a
/// `UserModel` is expected means the visitor is anonymous.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserModel {
	pub id: i64,
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub first_name: Option<String>,
	#[serde(default)]
	pub last_name: Option<String>,
	#[serde(default)]
	pub image: Option<String>,
	#[serde(default)]
	pub collective_slug: Option<String>
}

impl UserModel {
	pub fn display_name(&self) -> String {
		match (&self.first_name, &self.last_name) {
			(Some(first), Some(last)) => format!("{first} {last}"),
			(Some(first), None) => first.clone(),
			_ => self.username.clone().unwrap_or_else(|| "anonymous".into())
		}
	}
}

const GET_LOGGED_IN_USER: &str = "
	query getLoggedInUser {
		LoggedInUser {
			id
			username
			firstName
			lastName
			image
			collectiveSlug
		}
	}
";

#[derive(Deserialize)]
struct GetLoggedInUser {
	#[serde(rename = "LoggedInUser")]
	logged_in_user: Option<UserModel>
}

impl UserModel {
	/// Resolves the identity behind a session token. `Ok(None)` is the
	/// anonymous case, the token was missing from or unknown to the
	/// identity service.
	pub async fn get_logged_in(session_token: &str) -> Result<Option<Self>> {
		let response: GetLoggedInUser = query(
			GET_LOGGED_IN_USER,
			serde_json::json!({}),
			Some(session_token)
		).await?;
		Ok(response.logged_in_user)
	}
}
