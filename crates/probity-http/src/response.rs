//! Test response wrapper with the body already collected

use bytes::Bytes;
use http::{HeaderMap, Response, StatusCode, Version};
use http_body::Body;
use http_body_util::BodyExt;

use crate::error::{BoxError, HttpError, Result};
use crate::inspect::{AntiForgery, CookieSet, extract_cookies_from_headers};

/// Test response wrapper
///
/// Reading a response body is the only I/O the form helpers need, so it
/// happens once, up front, when the wrapper is built.
#[derive(Debug, Clone)]
pub struct TestResponse {
	status: StatusCode,
	headers: HeaderMap,
	body: Bytes,
	version: Version,
}

impl TestResponse {
	/// Collect an `http::Response` into a test response
	///
	/// # Examples
	///
	/// ```
	/// use probity_http::TestResponse;
	/// use http::{Response, StatusCode};
	/// use http_body_util::Full;
	/// use bytes::Bytes;
	///
	/// # tokio_test::block_on(async {
	/// let response = Response::builder()
	///     .status(StatusCode::OK)
	///     .body(Full::new(Bytes::from("Hello World")))
	///     .unwrap();
	/// let test_response = TestResponse::from_response(response).await.unwrap();
	/// assert_eq!(test_response.status(), StatusCode::OK);
	/// assert_eq!(test_response.text(), "Hello World");
	/// # });
	/// ```
	pub async fn from_response<B>(response: Response<B>) -> Result<Self>
	where
		B: Body,
		B::Error: Into<BoxError>,
	{
		let (parts, body) = response.into_parts();

		let body = body
			.collect()
			.await
			.map_err(|error| HttpError::Body(error.into()))?
			.to_bytes();

		Ok(Self {
			status: parts.status,
			headers: parts.headers,
			body,
			version: parts.version,
		})
	}

	/// Collect a `reqwest::Response` into a test response
	#[cfg(feature = "reqwest")]
	pub async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
		let status = response.status();
		let version = response.version();
		let headers = response.headers().clone();

		let body = response
			.bytes()
			.await
			.map_err(|error| HttpError::Body(Box::new(error)))?;

		Ok(Self {
			status,
			headers,
			body,
			version,
		})
	}

	/// Create a test response with status, headers, and body (defaults to HTTP/1.1)
	pub fn with_body(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
		Self {
			status,
			headers,
			body: body.into(),
			version: Version::HTTP_11,
		}
	}

	/// Get response status
	pub fn status(&self) -> StatusCode {
		self.status
	}

	/// Get HTTP version of the response
	pub fn version(&self) -> Version {
		self.version
	}

	/// Get response headers
	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	/// Get response body as bytes
	pub fn body(&self) -> &Bytes {
		&self.body
	}

	/// Get response body as string
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).to_string()
	}

	/// Get header value
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|v| v.to_str().ok())
	}

	/// Anti-forgery token rendered into the body, if any
	pub fn anti_forgery_token(&self) -> Option<String> {
		self.anti_forgery_token_with(&AntiForgery::default())
	}

	/// Anti-forgery token rendered into the body, looked up with a custom configuration
	pub fn anti_forgery_token_with(&self, anti_forgery: &AntiForgery) -> Option<String> {
		anti_forgery.extract(&self.text())
	}

	/// Cookies set by this response
	pub fn cookies(&self) -> CookieSet {
		extract_cookies_from_headers(&self.headers)
	}
}
