//! # Probity Results
//!
//! Action result model and assertions for unit-testing request handlers.
//!
//! ## Overview
//!
//! A handler under test returns an [`ActionResult`] describing the response
//! it wants: a rendered view, a JSON payload, a redirect, or an
//! authentication challenge. The [`assertions`] module checks the variant and
//! its fields, and hands back the narrowed value for further inspection.
//!
//! Models and payloads are compared as [`serde_json::Value`], so a freshly
//! built `json!` record compares equal to whatever the handler produced as
//! long as the structure matches.
//!
//! ## Quick Start
//!
//! ```
//! use probity_results::{ActionResult, ViewResult};
//! use probity_results::assertions::{assert_model_state, assert_view_result};
//! use serde_json::json;
//!
//! fn index() -> ActionResult {
//!     ViewResult::new()
//!         .with_view_name("Index")
//!         .with_model(json!({"title": "Home"}))
//!         .into()
//! }
//!
//! let result = index();
//! let view = assert_view_result(&result, Some("Index"), Some(&json!({"title": "Home"})));
//! assert_model_state(view, None);
//! ```
//!
//! ## Modules
//!
//! - [`result`]: the [`ActionResult`] sum type and its variants
//! - [`assertions`]: `check_*` (fallible) and `assert_*` (panicking) helpers
//! - [`error`]: [`AssertionError`]

pub mod assertions;
pub mod error;
pub mod result;

pub use error::{AssertionError, Result};
pub use result::{
	ActionResult, ActionResultKind, AuthenticationProperties, ChallengeResult, JsonResult,
	ModelState, ModelStateEntry, RedirectResult, RedirectToActionResult, RouteValues, ViewData,
	ViewResult,
};
