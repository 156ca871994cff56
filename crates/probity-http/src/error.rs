//! Error types for response inspection and request preparation

use thiserror::Error;

/// Boxed error carried by body read failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias used across this crate
pub type Result<T> = std::result::Result<T, HttpError>;

#[derive(Debug, Error)]
pub enum HttpError {
	/// Collecting a response body failed. The underlying error is kept as-is.
	#[error("Failed to read response body: {0}")]
	Body(#[source] BoxError),

	#[error("Form encoding error: {0}")]
	Encode(#[from] serde_urlencoded::ser::Error),

	#[error("Invalid header value: {0}")]
	InvalidHeader(#[from] http::header::InvalidHeaderValue),

	#[error("HTTP error: {0}")]
	Request(#[from] http::Error),

	#[error("Invalid anti-forgery pattern: {0}")]
	Pattern(#[from] regex::Error),
}

impl HttpError {
	/// Returns true if the error came from reading a response body
	pub fn is_body(&self) -> bool {
		matches!(self, HttpError::Body(_))
	}
}
