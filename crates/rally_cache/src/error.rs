#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Model: {0}")]
	Model(#[from] rally_models::Error),

	#[error("Model not found")]
	ModelNotFound
}

pub type Result<T> = core::result::Result<T, Error>;
