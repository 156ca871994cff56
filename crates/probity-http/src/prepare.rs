//! Form request preparation
//!
//! Turns form fields plus a previously received response into the body and
//! cookie headers of the next request, the way a browser would submit a
//! rendered form.

use bytes::Bytes;
use cookie::Cookie;
use http::header::{CONTENT_TYPE, COOKIE};
use http::{HeaderValue, Method, Request, Uri};
use http_body_util::Full;
use indexmap::IndexMap;

use crate::error::Result;
use crate::inspect::AntiForgery;
use crate::response::TestResponse;

/// Content type of the prepared body
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Form field name to value, encoded in insertion order
pub type FormData = IndexMap<String, String>;

/// Body and cookie headers for a form submission
#[derive(Debug, Clone)]
pub struct FormRequest {
	body: Bytes,
	cookies: Vec<HeaderValue>,
}

impl FormRequest {
	/// Encoded `application/x-www-form-urlencoded` body
	pub fn body(&self) -> &Bytes {
		&self.body
	}

	/// `Cookie` header values, one per cookie
	pub fn cookies(&self) -> &[HeaderValue] {
		&self.cookies
	}

	/// Split into body and cookie header values
	pub fn into_parts(self) -> (Bytes, Vec<HeaderValue>) {
		(self.body, self.cookies)
	}

	/// Build a complete request carrying the form body and cookies
	///
	/// # Examples
	///
	/// ```
	/// use probity_http::{FormData, TestResponse, prepare_form_request};
	/// use http::{HeaderMap, Method, StatusCode};
	///
	/// let page = TestResponse::with_body(StatusCode::OK, HeaderMap::new(), "<form></form>");
	/// let mut form = FormData::new();
	/// form.insert("name".to_string(), "Alice".to_string());
	///
	/// let request = prepare_form_request(form, &page)
	///     .unwrap()
	///     .into_request(Method::POST, "/users")
	///     .unwrap();
	/// assert_eq!(request.uri().path(), "/users");
	/// assert_eq!(request.headers()["content-type"], "application/x-www-form-urlencoded");
	/// ```
	pub fn into_request<U>(self, method: Method, uri: U) -> Result<Request<Full<Bytes>>>
	where
		Uri: TryFrom<U>,
		<Uri as TryFrom<U>>::Error: Into<http::Error>,
	{
		let mut builder = Request::builder()
			.method(method)
			.uri(uri)
			.header(CONTENT_TYPE, FORM_URLENCODED);

		for cookie in self.cookies {
			builder = builder.header(COOKIE, cookie);
		}

		Ok(builder.body(Full::new(self.body))?)
	}

	/// Attach the form body and cookies to a `reqwest` request builder
	#[cfg(feature = "reqwest")]
	pub fn apply_to_reqwest(self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
		let mut builder = builder.header(CONTENT_TYPE, FORM_URLENCODED);

		for cookie in self.cookies {
			builder = builder.header(COOKIE, cookie);
		}

		builder.body(self.body)
	}
}

/// Prepare a form submission from the response that rendered the form
///
/// The anti-forgery token found in the response body is added to the form
/// data under `__RequestVerificationToken`, replacing any value already
/// there. Every cookie the response set becomes its own `Cookie` header.
///
/// # Examples
///
/// ```
/// use probity_http::{FormData, TestResponse, prepare_form_request};
/// use http::{HeaderMap, HeaderValue, StatusCode};
/// use http::header::SET_COOKIE;
///
/// let mut headers = HeaderMap::new();
/// headers.append(SET_COOKIE, HeaderValue::from_static("session=abc; Path=/"));
/// let html = r#"<input name="__RequestVerificationToken" type="hidden" value="xyz" />"#;
/// let page = TestResponse::with_body(StatusCode::OK, headers, html);
///
/// let mut form = FormData::new();
/// form.insert("q".to_string(), "rust".to_string());
///
/// let prepared = prepare_form_request(form, &page).unwrap();
/// assert_eq!(prepared.body(), "q=rust&__RequestVerificationToken=xyz");
/// assert_eq!(prepared.cookies(), ["session=abc"]);
/// ```
pub fn prepare_form_request(form_data: FormData, response: &TestResponse) -> Result<FormRequest> {
	prepare_form_request_with(form_data, response, &AntiForgery::default())
}

/// Prepare a form submission using a custom anti-forgery configuration
pub fn prepare_form_request_with(
	mut form_data: FormData,
	response: &TestResponse,
	anti_forgery: &AntiForgery,
) -> Result<FormRequest> {
	if let Some(token) = response.anti_forgery_token_with(anti_forgery)
		&& !token.trim().is_empty()
	{
		form_data.insert(anti_forgery.field_name().to_string(), token);
	}

	let body = serde_urlencoded::to_string(&form_data)?;

	let cookies = response
		.cookies()
		.iter()
		.map(|(name, value)| {
			HeaderValue::from_str(&Cookie::new(name.as_str(), value.as_str()).to_string())
		})
		.collect::<std::result::Result<Vec<_>, _>>()?;

	tracing::debug!(
		fields = form_data.len(),
		cookies = cookies.len(),
		"prepared form request"
	);

	Ok(FormRequest {
		body: Bytes::from(body),
		cookies,
	})
}

/// Extension trait filling an existing request with a form submission
pub trait RequestExt {
	/// Replace the body with the encoded form, set the form content type and
	/// append one `Cookie` header per cookie from `response`
	fn setup_form(&mut self, form_data: FormData, response: &TestResponse) -> Result<()>;
}

impl RequestExt for Request<Full<Bytes>> {
	fn setup_form(&mut self, form_data: FormData, response: &TestResponse) -> Result<()> {
		let (body, cookies) = prepare_form_request(form_data, response)?.into_parts();

		let headers = self.headers_mut();
		headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));
		for cookie in cookies {
			headers.append(COOKIE, cookie);
		}

		*self.body_mut() = Full::new(body);
		Ok(())
	}
}
