use moka::future::{ Cache, CacheBuilder };
use rally_models::UserModel;
use std::time::Duration;

use crate::Result;

/// Short-lived memo of session token to resolved identity, so a page
/// resolves its visitor once per mount instead of once per render.
pub struct SessionCache {
	users: Cache<String, Option<UserModel>>
}

impl Default for SessionCache {
	fn default() -> Self {
		Self {
			users: CacheBuilder::new(512)
				.time_to_live(Duration::from_secs(60))
				.build()
		}
	}
}

impl SessionCache {
	pub async fn logged_in_user(&self, session_token: &str) -> Result<Option<UserModel>> {
		if let Some(user) = self.users.get(session_token).await {
			return Ok(user);
		}

		let user = UserModel::get_logged_in(session_token)
			.await?;
		self.users.insert(session_token.to_owned(), user.clone())
			.await;

		Ok(user)
	}

	pub async fn invalidate(&self, session_token: &str) {
		self.users.invalidate(session_token).await;
	}
}
