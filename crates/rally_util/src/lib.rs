use once_cell::sync::Lazy;

pub mod currency;
pub mod fetch;

pub use currency::format_currency;
pub use fetch::{ query, FetchJson, QueryError };

pub static API_URL: Lazy<String> = Lazy::new(||
	std::env::var("RALLY_API_URL")
		.unwrap_or_else(|_| "http://localhost:3060/graphql".into())
);

pub static WEBSITE_URL: Lazy<String> = Lazy::new(||
	std::env::var("RALLY_WEBSITE_URL")
		.unwrap_or_else(|_| "http://localhost:3000".into())
);
