use actix_web::{
	http::{ StatusCode, header::ContentType },
	middleware::Logger,
	App, HttpServer, HttpResponse
};
use derive_more::{ Error, Display };
use once_cell::sync::Lazy;

pub mod routes;

static BIND_ADDR: Lazy<String> = Lazy::new(||
	std::env::var("RALLY_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into())
);

pub async fn start() -> std::io::Result<()> {
	HttpServer::new(||
		App::new()
			.wrap(Logger::new("%r  →  %s, %b bytes, took %Dms"))
			.configure(routes::configure)
	)
		.bind(BIND_ADDR.as_str())?
		.run()
		.await
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display(fmt = "internal_error")]
	InternalError,

	#[display(fmt = "invalid_request")]
	GenericInvalidRequest,

	#[display(fmt = "collective_not_found")]
	CollectiveNotFound,

	#[display(fmt = "order_not_found")]
	OrderNotFound,

	#[display(fmt = "tier_not_found")]
	TierNotFound,

	#[display(fmt = "unknown")]
	Unknown
}

impl actix_web::error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.insert_header(ContentType::json())
			.body(format!(r#"{{
				"error": "{}"
			}}"#, self.to_string()))
	}

	fn status_code(&self) -> StatusCode {
		match *self {
			ApiError::Unknown |
			ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
			ApiError::GenericInvalidRequest => StatusCode::BAD_REQUEST,
			ApiError::CollectiveNotFound |
			ApiError::OrderNotFound |
			ApiError::TierNotFound => StatusCode::NOT_FOUND
		}
	}
}

impl From<crate::error::Error> for ApiError {
	fn from(_value: crate::error::Error) -> Self {
		Self::Unknown
	}
}

pub type ApiResult<T> = actix_web::Result<T, ApiError>;
