//! # Probity
//!
//! Assertion helpers for testing web request handlers.
//!
//! Probity covers the two halves of handler testing:
//!
//! - **Unit tests** call a handler directly and check the [`ActionResult`]
//!   it returns: which kind of response it asked for and with what data
//! - **Integration tests** drive the application over HTTP and need to
//!   submit forms the way a browser would, echoing the anti-forgery token
//!   and cookies from the page that rendered the form
//!
//! ## Feature Flags
//!
//! - `http` - Response inspection and form request preparation ([`http`])
//! - `results` - Action result model and assertions ([`results`])
//! - `reqwest` - Build test responses from and apply prepared forms to `reqwest` messages
//! - `full` (default) - All of the above
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use probity::prelude::*;
//! use serde_json::json;
//!
//! #[test]
//! fn test_login_requires_email() {
//!     let result = AccountController::new().login(LoginForm::default());
//!
//!     let view = assert_view_result(&result, Some("Login"), None);
//!     assert_model_state_error(view, "Email", "The Email field is required.");
//! }
//!
//! #[tokio::test]
//! async fn test_login_form_round_trip() {
//!     let page = TestResponse::from_reqwest(client.get(url).send().await?).await?;
//!
//!     let mut form = FormData::new();
//!     form.insert("Email".to_string(), "alice@example.com".to_string());
//!
//!     let response = prepare_form_request(form, &page)?
//!         .apply_to_reqwest(client.post(url))
//!         .send()
//!         .await?;
//! }
//! ```

#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "results")]
pub mod results;

#[cfg(feature = "results")]
pub use probity_results::{ActionResult, ActionResultKind, AssertionError};

#[cfg(feature = "http")]
pub use probity_http::{FormData, FormRequest, HttpError, TestResponse};

/// Commonly used types and assertions
pub mod prelude {
	#[cfg(feature = "http")]
	pub use probity_http::{
		AntiForgery, FormData, FormRequest, RequestExt, TestResponse, init_test_logging,
		prepare_form_request,
	};

	#[cfg(feature = "results")]
	pub use probity_results::assertions::{
		assert_challenge_result, assert_json_result, assert_model_state, assert_model_state_error,
		assert_redirect_result, assert_redirect_to_action_result, assert_view_data,
		assert_view_data_entry, assert_view_result,
	};
	#[cfg(feature = "results")]
	pub use probity_results::{
		ActionResult, AuthenticationProperties, ChallengeResult, JsonResult, RedirectResult,
		RedirectToActionResult, ViewResult,
	};
}
