//! Action result assertions
//!
//! Every check comes in two forms:
//!
//! - `check_*` returns [`Result`] so a test can inspect the failure
//! - `assert_*` panics with the failure message, for use directly in tests
//!
//! Both verify the result variant first, then each relevant field, and
//! return the narrowed value on success.

use indexmap::IndexSet;
use serde_json::Value;

use crate::error::{AssertionError, Result};
use crate::result::{
	ActionResult, ActionResultKind, AuthenticationProperties, ChallengeResult, JsonResult,
	ModelState, RedirectResult, RedirectToActionResult, ViewData, ViewResult,
};

fn wrong_kind(expected: ActionResultKind, actual: &ActionResult) -> AssertionError {
	AssertionError::WrongKind {
		expected,
		actual: actual.kind(),
	}
}

fn describe_value(value: Option<&Value>) -> String {
	value.unwrap_or(&Value::Null).to_string()
}

fn describe_entries<'a, K, I>(entries: I) -> String
where
	K: AsRef<str> + 'a,
	I: IntoIterator<Item = (K, &'a Value)>,
{
	let parts: Vec<String> = entries
		.into_iter()
		.map(|(key, value)| format!("{:?}: {}", key.as_ref(), value))
		.collect();
	format!("{{{}}}", parts.join(", "))
}

// `None` and JSON `null` both mean "no value".
fn values_equal(expected: Option<&Value>, actual: Option<&Value>) -> bool {
	expected.unwrap_or(&Value::Null) == actual.unwrap_or(&Value::Null)
}

fn entries_equal(expected: &[(&str, Value)], actual: &indexmap::IndexMap<String, Value>) -> bool {
	expected.len() == actual.len()
		&& expected
			.iter()
			.zip(actual.iter())
			.all(|((expected_key, expected_value), (actual_key, actual_value))| {
				*expected_key == actual_key.as_str() && expected_value == actual_value
			})
}

fn ensure_equal<T: PartialEq + std::fmt::Debug>(
	field: &'static str,
	expected: T,
	actual: T,
) -> Result<()> {
	if expected == actual {
		Ok(())
	} else {
		Err(AssertionError::NotEqual {
			field,
			expected: format!("{:?}", expected),
			actual: format!("{:?}", actual),
		})
	}
}

#[track_caller]
fn unwrap_or_fail<T>(result: Result<T>) -> T {
	match result {
		Ok(value) => value,
		Err(error) => {
			tracing::debug!(%error, "action result assertion failed");
			panic!("{}", error)
		}
	}
}

// ============================================================================
// View results
// ============================================================================

/// Check that `result` is a view result with the given name and model
///
/// The model is compared by value. `None` matches both a missing model and a
/// JSON `null` model.
pub fn check_view_result<'a>(
	result: &'a ActionResult,
	view_name: Option<&str>,
	model: Option<&Value>,
) -> Result<&'a ViewResult> {
	let ActionResult::View(view) = result else {
		return Err(wrong_kind(ActionResultKind::View, result));
	};

	ensure_equal("view name", view_name, view.view_name.as_deref())?;

	if !values_equal(model, view.model.as_ref()) {
		return Err(AssertionError::NotEqual {
			field: "model",
			expected: describe_value(model),
			actual: describe_value(view.model.as_ref()),
		});
	}

	Ok(view)
}

/// Check that the view data holds exactly `items`, in order
pub fn check_view_data<'a>(view: &'a ViewResult, items: &[(&str, Value)]) -> Result<&'a ViewData> {
	if !entries_equal(items, &view.view_data) {
		return Err(AssertionError::NotEqual {
			field: "view data",
			expected: describe_entries(items.iter().map(|(key, value)| (*key, value))),
			actual: describe_entries(&view.view_data),
		});
	}

	Ok(&view.view_data)
}

/// Check that the view data holds exactly one entry, `key` set to `value`
pub fn check_view_data_entry<'a>(
	view: &'a ViewResult,
	key: &str,
	value: &Value,
) -> Result<&'a ViewData> {
	check_view_data(view, &[(key, value.clone())])
}

/// Check the validation state of a view
///
/// With no expected errors the state must be valid and hold no entries.
/// Otherwise it must be invalid, hold one entry per distinct expected key,
/// and each expected message must appear under its key. Other messages under
/// the same key are allowed.
pub fn check_model_state<'a>(
	view: &'a ViewResult,
	errors: Option<&[(&str, &str)]>,
) -> Result<&'a ModelState> {
	let state = &view.model_state;

	let errors = match errors {
		Some(errors) if !errors.is_empty() => errors,
		_ => {
			if !state.is_valid() {
				return Err(AssertionError::Invalid {
					subject: "model state",
					expected: "valid",
				});
			}
			ensure_equal("model state entry count", 0, state.len())?;
			return Ok(state);
		}
	};

	if state.is_valid() {
		return Err(AssertionError::Invalid {
			subject: "model state",
			expected: "invalid",
		});
	}

	let distinct_keys: IndexSet<&str> = errors.iter().map(|&(key, _)| key).collect();
	ensure_equal("model state entry count", distinct_keys.len(), state.len())?;

	for &(key, message) in errors {
		let Some(entry) = state.get(key) else {
			return Err(AssertionError::Missing {
				collection: "model state".to_string(),
				item: format!("{:?}", key),
				actual: format!("{:?}", state.keys().collect::<Vec<_>>()),
			});
		};

		if !entry.has_error(message) {
			return Err(AssertionError::Missing {
				collection: format!("model state errors for {:?}", key),
				item: format!("{:?}", message),
				actual: format!("{:?}", entry.errors),
			});
		}
	}

	Ok(state)
}

/// Check that the validation state holds exactly one field, with `message` among its errors
pub fn check_model_state_error<'a>(
	view: &'a ViewResult,
	key: &str,
	message: &str,
) -> Result<&'a ModelState> {
	check_model_state(view, Some(&[(key, message)]))
}

// ============================================================================
// JSON results
// ============================================================================

/// Check that `result` is a JSON result whose value equals `value`
pub fn check_json_result<'a>(result: &'a ActionResult, value: &Value) -> Result<&'a JsonResult> {
	let ActionResult::Json(json) = result else {
		return Err(wrong_kind(ActionResultKind::Json, result));
	};

	if json.value != *value {
		return Err(AssertionError::NotEqual {
			field: "value",
			expected: value.to_string(),
			actual: json.value.to_string(),
		});
	}

	Ok(json)
}

// ============================================================================
// Redirects
// ============================================================================

/// Check a redirect-to-action result
///
/// `None` for controller or route values means the result must not carry one.
pub fn check_redirect_to_action_result<'a>(
	result: &'a ActionResult,
	action_name: &str,
	controller_name: Option<&str>,
	route_values: Option<&[(&str, Value)]>,
) -> Result<&'a RedirectToActionResult> {
	let ActionResult::RedirectToAction(redirect) = result else {
		return Err(wrong_kind(ActionResultKind::RedirectToAction, result));
	};

	ensure_equal(
		"action name",
		Some(action_name),
		redirect.action_name.as_deref(),
	)?;
	ensure_equal(
		"controller name",
		controller_name,
		redirect.controller_name.as_deref(),
	)?;

	let matches = match (route_values, redirect.route_values.as_ref()) {
		(None, None) => true,
		(Some(expected), Some(actual)) => entries_equal(expected, actual),
		_ => false,
	};
	if !matches {
		let describe_expected = route_values
			.map(|items| describe_entries(items.iter().map(|(key, value)| (*key, value))))
			.unwrap_or_else(|| "None".to_string());
		let describe_actual = redirect
			.route_values
			.as_ref()
			.map(describe_entries)
			.unwrap_or_else(|| "None".to_string());
		return Err(AssertionError::NotEqual {
			field: "route values",
			expected: describe_expected,
			actual: describe_actual,
		});
	}

	Ok(redirect)
}

/// Check that `result` redirects to exactly `url`
pub fn check_redirect_result<'a>(
	result: &'a ActionResult,
	url: &str,
) -> Result<&'a RedirectResult> {
	let ActionResult::Redirect(redirect) = result else {
		return Err(wrong_kind(ActionResultKind::Redirect, result));
	};

	ensure_equal("url", url, redirect.url.as_str())?;

	Ok(redirect)
}

// ============================================================================
// Challenges
// ============================================================================

/// Check a challenge result
///
/// Properties must match exactly. `provider` only has to be one of the
/// challenged schemes.
pub fn check_challenge_result<'a>(
	result: &'a ActionResult,
	properties: Option<&AuthenticationProperties>,
	provider: &str,
) -> Result<&'a ChallengeResult> {
	let ActionResult::Challenge(challenge) = result else {
		return Err(wrong_kind(ActionResultKind::Challenge, result));
	};

	ensure_equal("properties", properties, challenge.properties.as_ref())?;

	if !challenge.authentication_schemes.contains(provider) {
		return Err(AssertionError::Missing {
			collection: "authentication schemes".to_string(),
			item: format!("{:?}", provider),
			actual: format!(
				"{:?}",
				challenge.authentication_schemes.iter().collect::<Vec<_>>()
			),
		});
	}

	Ok(challenge)
}

// ============================================================================
// Panicking forms
// ============================================================================

/// Assert that `result` is a view result with the given name and model
///
/// # Examples
///
/// ```
/// use probity_results::{ActionResult, ViewResult};
/// use probity_results::assertions::assert_view_result;
///
/// let result: ActionResult = ViewResult::new().with_view_name("Index").into();
/// let view = assert_view_result(&result, Some("Index"), None);
/// assert!(view.view_data.is_empty());
/// ```
///
/// # Panics
///
/// Panics if the result is not a view result, or the name or model differ.
#[track_caller]
pub fn assert_view_result<'a>(
	result: &'a ActionResult,
	view_name: Option<&str>,
	model: Option<&Value>,
) -> &'a ViewResult {
	unwrap_or_fail(check_view_result(result, view_name, model))
}

/// Assert that the view data holds exactly `items`, in order
///
/// # Panics
///
/// Panics if the entries differ in count, keys, values, or order.
#[track_caller]
pub fn assert_view_data<'a>(view: &'a ViewResult, items: &[(&str, Value)]) -> &'a ViewData {
	unwrap_or_fail(check_view_data(view, items))
}

/// Assert that the view data holds exactly one entry, `key` set to `value`
#[track_caller]
pub fn assert_view_data_entry<'a>(view: &'a ViewResult, key: &str, value: &Value) -> &'a ViewData {
	unwrap_or_fail(check_view_data_entry(view, key, value))
}

/// Assert the validation state of a view
///
/// # Examples
///
/// ```
/// use probity_results::ViewResult;
/// use probity_results::assertions::assert_model_state;
///
/// let view = ViewResult::new()
///     .with_model_error("Email", "Email is required.")
///     .with_model_error("Email", "Email is invalid.");
///
/// assert_model_state(&view, Some(&[("Email", "Email is required.")]));
/// ```
///
/// # Panics
///
/// Panics if validity, entry count, or any expected message does not match.
#[track_caller]
pub fn assert_model_state<'a>(
	view: &'a ViewResult,
	errors: Option<&[(&str, &str)]>,
) -> &'a ModelState {
	unwrap_or_fail(check_model_state(view, errors))
}

/// Assert that the validation state holds exactly one field, with `message` among its errors
#[track_caller]
pub fn assert_model_state_error<'a>(
	view: &'a ViewResult,
	key: &str,
	message: &str,
) -> &'a ModelState {
	unwrap_or_fail(check_model_state_error(view, key, message))
}

/// Assert that `result` is a JSON result whose value equals `value`
///
/// # Examples
///
/// ```
/// use probity_results::{ActionResult, JsonResult};
/// use probity_results::assertions::assert_json_result;
/// use serde_json::json;
///
/// let result: ActionResult = JsonResult::new(json!({"Value": "TestValue"})).into();
/// assert_json_result(&result, &json!({"Value": "TestValue"}));
/// ```
#[track_caller]
pub fn assert_json_result<'a>(result: &'a ActionResult, value: &Value) -> &'a JsonResult {
	unwrap_or_fail(check_json_result(result, value))
}

/// Assert a redirect-to-action result
#[track_caller]
pub fn assert_redirect_to_action_result<'a>(
	result: &'a ActionResult,
	action_name: &str,
	controller_name: Option<&str>,
	route_values: Option<&[(&str, Value)]>,
) -> &'a RedirectToActionResult {
	unwrap_or_fail(check_redirect_to_action_result(
		result,
		action_name,
		controller_name,
		route_values,
	))
}

/// Assert that `result` redirects to exactly `url`
#[track_caller]
pub fn assert_redirect_result<'a>(result: &'a ActionResult, url: &str) -> &'a RedirectResult {
	unwrap_or_fail(check_redirect_result(result, url))
}

/// Assert a challenge result against `provider`
#[track_caller]
pub fn assert_challenge_result<'a>(
	result: &'a ActionResult,
	properties: Option<&AuthenticationProperties>,
	provider: &str,
) -> &'a ChallengeResult {
	unwrap_or_fail(check_challenge_result(result, properties, provider))
}
