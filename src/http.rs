//! HTTP module.
//!
//! Response inspection and form request preparation for integration tests.
//!
//! # Examples
//!
//! ```rust
//! use probity::http::{FormData, TestResponse, prepare_form_request};
//! use http::{HeaderMap, StatusCode};
//!
//! let html = r#"<input name="__RequestVerificationToken" type="hidden" value="abc" />"#;
//! let page = TestResponse::with_body(StatusCode::OK, HeaderMap::new(), html);
//!
//! let prepared = prepare_form_request(FormData::new(), &page).unwrap();
//! assert_eq!(prepared.body(), "__RequestVerificationToken=abc");
//! ```

pub use probity_http::*;
