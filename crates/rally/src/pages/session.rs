use rally_cache::CACHE;
use rally_models::UserModel;
use tokio_util::sync::CancellationToken;
use tracing::warn;
use uuid::Uuid;

use crate::{
	error::ErrorKind,
	BoxFuture, Result
};

pub trait IdentityProvider: Send + Sync {
	fn get_logged_in_user<'a>(&'a self, session_token: Option<&'a str>) -> BoxFuture<'a, Result<Option<UserModel>>>;
}

/// Production identity provider, memoised per session token so a page
/// resolves its visitor once per mount.
pub struct ApiIdentityProvider;

impl IdentityProvider for ApiIdentityProvider {
	fn get_logged_in_user<'a>(&'a self, session_token: Option<&'a str>) -> BoxFuture<'a, Result<Option<UserModel>>> {
		Box::pin(async move {
			Ok(match session_token {
				Some(token) => CACHE.session.logged_in_user(token).await?,
				None => None
			})
		})
	}
}

enum SessionState {
	Loading,
	Resolved(Option<UserModel>)
}

/// One page mount. Owns the cancellation token guarding its async
/// continuations and resolves the visitor's identity exactly once;
/// nothing authenticated renders until that has settled.
pub struct PageSession {
	pub id: Uuid,
	session_token: Option<String>,
	cancellation: CancellationToken,
	state: SessionState
}

impl PageSession {
	pub fn new(session_token: Option<String>) -> Self {
		Self {
			id: Uuid::new_v4(),
			session_token,
			cancellation: CancellationToken::new(),
			state: SessionState::Loading
		}
	}

	pub fn cancellation_token(&self) -> CancellationToken {
		self.cancellation.clone()
	}

	pub fn session_token(&self) -> Option<&str> {
		self.session_token.as_deref()
	}

	pub fn is_loading(&self) -> bool {
		matches!(self.state, SessionState::Loading)
	}

	pub fn logged_in_user(&self) -> Option<&UserModel> {
		match &self.state {
			SessionState::Resolved(user) => user.as_ref(),
			SessionState::Loading => None
		}
	}

	/// Resolves the visitor's identity through the provider. A cancelled
	/// session aborts instead of updating state after unmount; a provider
	/// failure degrades to the anonymous branch rather than killing the
	/// page.
	pub async fn resolve_identity(&mut self, provider: &dyn IdentityProvider) -> Result<Option<UserModel>> {
		if let SessionState::Resolved(user) = &self.state {
			return Ok(user.clone());
		}

		let resolved = tokio::select! {
			_ = self.cancellation.cancelled() => return Err(ErrorKind::SessionCancelled.into()),
			result = provider.get_logged_in_user(self.session_token.as_deref()) => result
		};
		let user = match resolved {
			Ok(user) => user,
			Err(error) => {
				warn!("identity resolution failed for session {}: {error}", self.id);
				None
			}
		};

		self.state = SessionState::Resolved(user.clone());
		Ok(user)
	}
}

#[cfg(test)]
mod tests {
	use rally_models::UserModel;
	use std::sync::atomic::{ AtomicUsize, Ordering };

	use super::{ IdentityProvider, PageSession };
	use crate::{
		error::ErrorKind,
		BoxFuture, Result
	};

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
			Box::pin(async move { Ok(self.0.clone()) })
		}
	}

	struct FailingProvider;

	impl IdentityProvider for FailingProvider {
		fn get_logged_in_user<'a>(&'a self, _session_token: Option<&'a str>) -> BoxFuture<'a, Result<Option<UserModel>>> {
			Box::pin(async move { Err(ErrorKind::Unknown.into()) })
		}
	}

	struct PendingProvider;

	impl IdentityProvider for PendingProvider {
		fn get_logged_in_user<'a>(&'a self, _session_token: Option<&'a str>) -> BoxFuture<'a, Result<Option<UserModel>>> {
			Box::pin(std::future::pending())
		}
	}

	struct CountingProvider(AtomicUsize);

	impl IdentityProvider for CountingProvider {
		fn get_logged_in_user<'a>(&'a self, _session_token: Option<&'a str>) -> BoxFuture<'a, Result<Option<UserModel>>> {
			self.0.fetch_add(1, Ordering::SeqCst);
			Box::pin(async move { Ok(Some(user())) })
		}
	}

	#[test]
	fn a_fresh_session_is_loading_and_anonymous() {
		let session = PageSession::new(None);
		assert!(session.is_loading());
		assert!(session.logged_in_user().is_none());
	}

	#[tokio::test]
	async fn resolution_settles_the_session() {
		let mut session = PageSession::new(Some("token".into()));
		let resolved = session.resolve_identity(&FixedProvider(Some(user()))).await.unwrap();
		assert!(resolved.is_some());
		assert!(!session.is_loading());
		assert_eq!(session.logged_in_user().map(|x| x.id), Some(7));
	}

	#[tokio::test]
	async fn a_provider_failure_degrades_to_anonymous() {
		let mut session = PageSession::new(Some("token".into()));
		let resolved = session.resolve_identity(&FailingProvider).await.unwrap();
		assert!(resolved.is_none());
		assert!(!session.is_loading());
	}

	#[tokio::test]
	async fn a_cancelled_session_never_updates_state() {
		let mut session = PageSession::new(Some("token".into()));
		session.cancellation_token().cancel();
		let result = session.resolve_identity(&PendingProvider).await;
		assert!(matches!(result.unwrap_err().kind, ErrorKind::SessionCancelled));
		assert!(session.is_loading());
	}

	#[tokio::test]
	async fn identity_is_resolved_exactly_once() {
		let provider = CountingProvider(AtomicUsize::new(0));
		let mut session = PageSession::new(Some("token".into()));
		session.resolve_identity(&provider).await.unwrap();
		session.resolve_identity(&provider).await.unwrap();
		assert_eq!(provider.0.load(Ordering::SeqCst), 1);
	}
}
