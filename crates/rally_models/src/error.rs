#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Query: {0}")]
	Query(#[from] rally_util::QueryError),

	#[error("Serde JSON: {0}")]
	SerdeJson(#[from] serde_json::Error)
}

pub type Result<T> = core::result::Result<T, Error>;
