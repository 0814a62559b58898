use once_cell::sync::Lazy;

use api::ApiCache;
use session::SessionCache;

pub mod api;
pub mod error;
pub mod session;

pub use error::{ Error, Result };

#[derive(Default)]
pub struct Cache {
	pub api: ApiCache,
	pub session: SessionCache
}

pub static CACHE: Lazy<Cache> = Lazy::new(Cache::default);
