//! Response inspection
//!
//! Pulls the two pieces of state a rendered form hands back to the client:
//! the anti-forgery token embedded in the HTML and the cookies set by the
//! response headers.

use std::sync::LazyLock;

use cookie::Cookie;
use http::HeaderMap;
use http::header::SET_COOKIE;
use indexmap::IndexMap;
use regex::Regex;

use crate::error::Result;

/// Name of the hidden form field carrying the anti-forgery token
pub const ANTI_FORGERY_FIELD: &str = "__RequestVerificationToken";

/// Cookie name to cookie value, in the order the cookies were first seen
pub type CookieSet = IndexMap<String, String>;

static DEFAULT_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(&token_pattern(ANTI_FORGERY_FIELD))
		.expect("DEFAULT_TOKEN_REGEX: invalid regex pattern")
});

// Attribute order and spacing are fixed to the markup the form helper renders.
fn token_pattern(field_name: &str) -> String {
	format!(
		r#"<input name="{}" type="hidden" value="([^"]+)" />"#,
		regex::escape(field_name)
	)
}

/// Anti-forgery token lookup configuration
///
/// The default looks for the `__RequestVerificationToken` hidden input.
///
/// # Examples
///
/// ```
/// use probity_http::AntiForgery;
///
/// let html = r#"<form><input name="csrf" type="hidden" value="abc123" /></form>"#;
///
/// let anti_forgery = AntiForgery::new("csrf").unwrap();
/// assert_eq!(anti_forgery.extract(html), Some("abc123".to_string()));
/// assert_eq!(AntiForgery::default().extract(html), None);
/// ```
#[derive(Debug, Clone)]
pub struct AntiForgery {
	field_name: String,
	pattern: Regex,
}

impl AntiForgery {
	/// Create a lookup for a custom hidden field name
	pub fn new(field_name: impl Into<String>) -> Result<Self> {
		let field_name = field_name.into();
		let pattern = Regex::new(&token_pattern(&field_name))?;
		Ok(Self {
			field_name,
			pattern,
		})
	}

	/// Name of the hidden field, also used as the form key when echoing the token
	pub fn field_name(&self) -> &str {
		&self.field_name
	}

	/// Extract the token from an HTML body
	///
	/// Returns the value of the first matching input, or `None` when the body
	/// contains no such input.
	pub fn extract(&self, body: &str) -> Option<String> {
		let token = self
			.pattern
			.captures(body)
			.and_then(|captures| captures.get(1))
			.map(|value| value.as_str().to_string());

		tracing::trace!(
			field = %self.field_name,
			found = token.is_some(),
			"anti-forgery token lookup"
		);

		token
	}
}

impl Default for AntiForgery {
	fn default() -> Self {
		Self {
			field_name: ANTI_FORGERY_FIELD.to_string(),
			pattern: DEFAULT_TOKEN_REGEX.clone(),
		}
	}
}

/// Extract the anti-forgery token from an HTML body
///
/// # Examples
///
/// ```
/// use probity_http::extract_anti_forgery_token;
///
/// let html = r#"<form><input name="__RequestVerificationToken" type="hidden" value="token-1" /></form>"#;
/// assert_eq!(extract_anti_forgery_token(html), Some("token-1".to_string()));
/// assert_eq!(extract_anti_forgery_token("<form></form>"), None);
/// ```
pub fn extract_anti_forgery_token(body: &str) -> Option<String> {
	AntiForgery::default().extract(body)
}

/// Extract name/value pairs from `Set-Cookie` header values
///
/// Cookie attributes are discarded. A later cookie with the same name
/// replaces the earlier value. Values that cannot be parsed are skipped.
///
/// # Examples
///
/// ```
/// use probity_http::extract_cookies;
///
/// let cookies = extract_cookies(["session=abc; Path=/; HttpOnly", "theme=dark"]);
/// assert_eq!(cookies.len(), 2);
/// assert_eq!(cookies["session"], "abc");
/// assert_eq!(cookies["theme"], "dark");
/// ```
pub fn extract_cookies<I, S>(header_values: I) -> CookieSet
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut cookies = CookieSet::new();

	for value in header_values {
		let value = value.as_ref();
		match Cookie::parse(value) {
			Ok(cookie) => {
				cookies.insert(cookie.name().to_string(), cookie.value().to_string());
			}
			Err(error) => {
				tracing::debug!(header = value, %error, "skipping malformed Set-Cookie value");
			}
		}
	}

	cookies
}

/// Extract cookies from every `Set-Cookie` header in a header map
pub fn extract_cookies_from_headers(headers: &HeaderMap) -> CookieSet {
	let values = headers
		.get_all(SET_COOKIE)
		.iter()
		.filter_map(|value| match value.to_str() {
			Ok(value) => Some(value),
			Err(_) => {
				tracing::debug!("skipping non-ASCII Set-Cookie value");
				None
			}
		});

	extract_cookies(values)
}
