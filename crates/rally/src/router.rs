use parking_lot::Mutex;
use std::{
	collections::BTreeMap,
	fmt::Write as _
};

use crate::{
	error::ErrorKind,
	BoxFuture, Result
};

pub type RouteParams = BTreeMap<&'static str, String>;

/// Navigation provider injected into anything that needs to move the
/// visitor around. The anchor directive is separate from navigation on
/// purpose: callers apply it after the route has resolved.
pub trait Router: Send + Sync {
	fn push_route<'a>(&'a self, name: &'a str, params: &'a RouteParams) -> BoxFuture<'a, Result<()>>;
	fn set_anchor(&self, anchor: &str);
}

fn param<'a>(params: &'a RouteParams, name: &'static str) -> Result<&'a str> {
	params
		.get(name)
		.map(String::as_str)
		.ok_or_else(|| ErrorKind::MissingRouteParam(name).into())
}

/// Resolves a named route and its parameters to a site-relative path.
/// Parameters the route pattern does not consume become the query string.
pub fn route_path(name: &str, params: &RouteParams) -> Result<String> {
	let (mut path, consumed): (String, &[&str]) = match name {
		"collective" => (
			format!("/{}", param(params, "collectiveSlug")?),
			&["collectiveSlug"]
		),
		"orderCollectiveTier" => (
			format!("/{}/order/{}", param(params, "collectiveSlug")?, param(params, "TierId")?),
			&["collectiveSlug", "TierId"]
		),
		"subscriptions" => (
			format!("/{}/subscriptions", param(params, "collectiveSlug")?),
			&["collectiveSlug"]
		),
		_ => return Err(ErrorKind::UnknownRoute(name.to_owned()).into())
	};

	let mut separator = '?';
	for (key, value) in params {
		if consumed.contains(key) {
			continue;
		}
		let _ = write!(path, "{separator}{key}={}", url_escape::encode_component(value));
		separator = '&';
	}

	Ok(path)
}

/// Collects the navigation performed while answering a request so the
/// HTTP layer can turn it into a redirect.
#[derive(Default)]
pub struct PageRouter {
	target: Mutex<Option<String>>,
	anchor: Mutex<Option<String>>
}

impl PageRouter {
	/// The recorded destination, anchor applied, if anything navigated.
	pub fn take_target(&self) -> Option<String> {
		let target = self.target.lock().take()?;
		Some(match self.anchor.lock().take() {
			Some(anchor) => format!("{target}{anchor}"),
			None => target
		})
	}
}

impl Router for PageRouter {
	fn push_route<'a>(&'a self, name: &'a str, params: &'a RouteParams) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move {
			let path = route_path(name, params)?;
			self.target.lock().replace(path);
			Ok(())
		})
	}

	fn set_anchor(&self, anchor: &str) {
		self.anchor.lock().replace(anchor.to_owned());
	}
}
