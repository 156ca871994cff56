//! # Probity HTTP
//!
//! Helpers for integration tests that drive a web application through real
//! HTTP messages.
//!
//! ## Overview
//!
//! Submitting a form in a test usually takes two round trips: a `GET` that
//! renders the form (with an anti-forgery token and session cookies), then a
//! `POST` that must echo both back. This crate covers the glue in between:
//!
//! - **[`inspect`]**: extract the anti-forgery token from an HTML body and the
//!   cookies from `Set-Cookie` headers
//! - **[`prepare`]**: build an `application/x-www-form-urlencoded` body with the
//!   token added, plus one `Cookie` header per received cookie
//! - **[`TestResponse`]**: a response with its body already collected
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use probity_http::{FormData, TestResponse, prepare_form_request};
//! use http::Method;
//!
//! #[tokio::test]
//! async fn test_register() {
//!     let page = TestResponse::from_reqwest(client.get(url).send().await?).await?;
//!
//!     let mut form = FormData::new();
//!     form.insert("Email".to_string(), "alice@example.com".to_string());
//!
//!     let request = prepare_form_request(form, &page)?.into_request(Method::POST, "/register")?;
//! }
//! ```

pub mod error;
pub mod inspect;
pub mod logging;
pub mod prepare;
pub mod response;

pub use error::{BoxError, HttpError, Result};
pub use inspect::{
	ANTI_FORGERY_FIELD, AntiForgery, CookieSet, extract_anti_forgery_token, extract_cookies,
	extract_cookies_from_headers,
};
pub use logging::init_test_logging;
pub use prepare::{
	FORM_URLENCODED, FormData, FormRequest, RequestExt, prepare_form_request,
	prepare_form_request_with,
};
pub use response::TestResponse;
