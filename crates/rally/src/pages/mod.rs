pub mod complete_pledge;
pub mod session;
pub mod subscriptions;

pub use session::{ ApiIdentityProvider, IdentityProvider, PageSession };

use crate::error::ErrorKind;

/// Where a page's remote record fetch stands. The loading and error
/// branches render independently of identity resolution.
pub enum DataState<T> {
	Loading,
	Error(String),
	Loaded(T)
}

impl<T> DataState<T> {
	pub fn from_fetch(result: rally_models::Result<T>) -> Self {
		match result {
			Ok(value) => Self::Loaded(value),
			Err(error) => Self::Error(ErrorKind::ModelError(error).to_string())
		}
	}
}
