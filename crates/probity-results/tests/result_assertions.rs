//! Action result assertion integration tests
//!
//! Each assertion is exercised against a matching result, a result of the
//! wrong kind, and a result whose fields differ.

use probity_results::assertions::*;
use probity_results::{
	ActionResult, AssertionError, AuthenticationProperties, ChallengeResult, JsonResult,
	RedirectResult, RedirectToActionResult, ViewResult,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

/// Any result kind other than the one a test asserts
#[fixture]
fn other_result() -> ActionResult {
	RedirectResult::new("/elsewhere").into()
}

// ============================================================================
// View result
// ============================================================================

/// Test: A view named "Index" without model passes the view check
#[rstest]
fn test_view_result_matches() {
	// Arrange
	let result: ActionResult = ViewResult::new().with_view_name("Index").into();

	// Act
	let view = assert_view_result(&result, Some("Index"), None);

	// Assert
	assert_eq!(view.view_name.as_deref(), Some("Index"));
}

/// Test: A mismatched view name reports both names
#[rstest]
fn test_view_result_name_mismatch() {
	let result: ActionResult = ViewResult::new().with_view_name("Index").into();

	let error = check_view_result(&result, Some("Other"), None).unwrap_err();

	assert!(error.is_not_equal());
	let message = error.to_string();
	assert!(message.contains("Index"));
	assert!(message.contains("Other"));
}

#[rstest]
#[should_panic(expected = "Expected view name to equal Some(\"NotIndex\"), got Some(\"Index\")")]
fn test_assert_view_result_panics_on_name_mismatch() {
	let result: ActionResult = ViewResult::new().with_view_name("Index").into();

	assert_view_result(&result, Some("NotIndex"), None);
}

#[rstest]
#[should_panic(expected = "Expected ViewResult, got RedirectResult")]
fn test_assert_view_result_panics_on_wrong_kind(other_result: ActionResult) {
	assert_view_result(&other_result, None, None);
}

/// Test: Models compare by structure, not by identity
#[rstest]
#[case::same_record(json!({"Value": "TestValue"}), true)]
#[case::different_key(json!({"OtherValue": "TestValue"}), false)]
#[case::different_value(json!({"Value": "Other"}), false)]
#[case::nested(json!({"Value": "TestValue", "Extra": [1, 2]}), false)]
fn test_view_result_model_equality(#[case] expected: Value, #[case] matches: bool) {
	// Arrange
	let result: ActionResult = ViewResult::new()
		.with_model(json!({"Value": "TestValue"}))
		.into();

	// Act
	let outcome = check_view_result(&result, None, Some(&expected));

	// Assert
	assert_eq!(outcome.is_ok(), matches);
}

#[rstest]
fn test_view_result_null_model_matches_missing_model() {
	let result: ActionResult = ViewResult::new().with_model(Value::Null).into();

	assert!(check_view_result(&result, None, None).is_ok());
	assert!(check_view_result(&result, None, Some(&Value::Null)).is_ok());
}

#[rstest]
fn test_view_result_missing_model_rejects_expected_model() {
	let result: ActionResult = ViewResult::new().into();

	let error = check_view_result(&result, None, Some(&json!({"id": 1}))).unwrap_err();

	assert_eq!(
		error,
		AssertionError::NotEqual {
			field: "model",
			expected: r#"{"id":1}"#.to_string(),
			actual: "null".to_string(),
		}
	);
}

// ============================================================================
// View data
// ============================================================================

#[rstest]
fn test_view_data_matches_in_order() {
	// Arrange
	let view = ViewResult::new()
		.with_view_data("Title", "Home")
		.with_view_data("Count", 3);

	// Act
	let data = assert_view_data(&view, &[("Title", json!("Home")), ("Count", json!(3))]);

	// Assert
	assert_eq!(data.len(), 2);
}

#[rstest]
#[case::reordered(vec![("Count", json!(3)), ("Title", json!("Home"))])]
#[case::missing_entry(vec![("Title", json!("Home"))])]
#[case::extra_entry(vec![("Title", json!("Home")), ("Count", json!(3)), ("User", json!("alice"))])]
#[case::different_value(vec![("Title", json!("Home")), ("Count", json!(4))])]
fn test_view_data_mismatch(#[case] items: Vec<(&str, Value)>) {
	let view = ViewResult::new()
		.with_view_data("Title", "Home")
		.with_view_data("Count", 3);

	let error = check_view_data(&view, &items).unwrap_err();

	assert!(error.is_not_equal());
}

#[rstest]
fn test_view_data_single_entry() {
	let view = ViewResult::new().with_view_data("ReturnUrl", "/home");

	assert_view_data_entry(&view, "ReturnUrl", &json!("/home"));
	assert!(check_view_data_entry(&view, "ReturnUrl", &json!("/other")).is_err());
}

// ============================================================================
// Model state
// ============================================================================

/// Test: No validation errors passes with both None and an empty list
#[rstest]
fn test_model_state_valid_without_errors() {
	let view = ViewResult::new();

	let state = assert_model_state(&view, None);
	assert!(state.is_valid());
	assert_eq!(state.len(), 0);

	let state = assert_model_state(&view, Some(&[]));
	assert!(state.is_valid());
	assert_eq!(state.len(), 0);
}

#[rstest]
fn test_model_state_valid_but_not_empty_fails() {
	let mut view = ViewResult::new();
	view.model_state.mark_field_valid("Name");

	let error = check_model_state(&view, None).unwrap_err();

	assert_eq!(
		error,
		AssertionError::NotEqual {
			field: "model state entry count",
			expected: "0".to_string(),
			actual: "1".to_string(),
		}
	);
}

#[rstest]
#[should_panic(expected = "Expected model state to be valid")]
fn test_model_state_with_errors_is_not_valid() {
	let view = ViewResult::new().with_model_error("Email", "Email is required.");

	assert_model_state(&view, None);
}

#[rstest]
fn test_model_state_expected_errors_present() {
	// Arrange
	let view = ViewResult::new()
		.with_model_error("Email", "Email is required.")
		.with_model_error("Email", "Email is invalid.")
		.with_model_error("Password", "Password is too short.");

	// Act
	let state = assert_model_state(
		&view,
		Some(&[
			("Email", "Email is invalid."),
			("Email", "Email is required."),
			("Password", "Password is too short."),
		]),
	);

	// Assert
	assert_eq!(state.error_count(), 3);
}

/// Test: Unlisted messages under an expected key are tolerated
#[rstest]
fn test_model_state_extra_messages_tolerated() {
	let view = ViewResult::new()
		.with_model_error("Email", "Email is required.")
		.with_model_error("Email", "Email is invalid.");

	assert_model_state_error(&view, "Email", "Email is required.");
}

#[rstest]
fn test_model_state_expected_errors_on_valid_state() {
	let view = ViewResult::new();

	let error = check_model_state_error(&view, "Email", "Email is required.").unwrap_err();

	assert_eq!(
		error,
		AssertionError::Invalid {
			subject: "model state",
			expected: "invalid",
		}
	);
}

#[rstest]
fn test_model_state_extra_key_fails_count() {
	let view = ViewResult::new()
		.with_model_error("Email", "Email is required.")
		.with_model_error("Name", "Name is required.");

	let error = check_model_state_error(&view, "Email", "Email is required.").unwrap_err();

	assert!(error.is_not_equal());
}

#[rstest]
fn test_model_state_missing_key() {
	let view = ViewResult::new().with_model_error("Name", "Name is required.");

	let error = check_model_state_error(&view, "Email", "Email is required.").unwrap_err();

	assert!(error.is_missing());
	assert!(error.to_string().contains("\"Email\""));
}

#[rstest]
fn test_model_state_missing_message() {
	let view = ViewResult::new().with_model_error("Email", "Email is required.");

	let error = check_model_state_error(&view, "Email", "Email is invalid.").unwrap_err();

	assert_eq!(
		error.to_string(),
		concat!(
			"Expected model state errors for \"Email\" to contain \"Email is invalid.\", ",
			"got [\"Email is required.\"]"
		)
	);
}

// ============================================================================
// JSON result
// ============================================================================

#[rstest]
fn test_json_result_matches() {
	let result: ActionResult = JsonResult::new(json!({"Value": "TestValue"})).into();

	let json = assert_json_result(&result, &json!({"Value": "TestValue"}));

	assert_eq!(json.value["Value"], "TestValue");
}

/// Test: A payload with a different shape is a value mismatch
#[rstest]
fn test_json_result_different_shape() {
	let result: ActionResult = JsonResult::new(json!({"Value": "TestValue"})).into();

	let error = check_json_result(&result, &json!({"OtherValue": "TestValue"})).unwrap_err();

	assert_eq!(
		error,
		AssertionError::NotEqual {
			field: "value",
			expected: r#"{"OtherValue":"TestValue"}"#.to_string(),
			actual: r#"{"Value":"TestValue"}"#.to_string(),
		}
	);
}

#[rstest]
fn test_json_result_wrong_kind(other_result: ActionResult) {
	let error = check_json_result(&other_result, &json!({"Value": "TestValue"})).unwrap_err();

	assert!(error.is_wrong_kind());
}

// ============================================================================
// Redirect to action
// ============================================================================

#[fixture]
fn login_redirect() -> ActionResult {
	RedirectToActionResult::new("Login")
		.with_controller("Account")
		.with_route_value("ReturnUrl", "ReturnUrl")
		.into()
}

#[rstest]
fn test_redirect_to_action_matches(login_redirect: ActionResult) {
	let redirect = assert_redirect_to_action_result(
		&login_redirect,
		"Login",
		Some("Account"),
		Some(&[("ReturnUrl", json!("ReturnUrl"))]),
	);

	assert_eq!(redirect.action_name.as_deref(), Some("Login"));
}

#[rstest]
fn test_redirect_to_action_without_controller_or_routes() {
	let result: ActionResult = RedirectToActionResult::new("Index").into();

	assert_redirect_to_action_result(&result, "Index", None, None);
}

#[rstest]
#[case::action_name("Register", Some("Account"), "action name")]
#[case::controller_name("Login", Some("Home"), "controller name")]
#[case::missing_controller("Login", None, "controller name")]
fn test_redirect_to_action_name_mismatch(
	login_redirect: ActionResult,
	#[case] action: &str,
	#[case] controller: Option<&str>,
	#[case] field: &str,
) {
	let error = check_redirect_to_action_result(
		&login_redirect,
		action,
		controller,
		Some(&[("ReturnUrl", json!("ReturnUrl"))]),
	)
	.unwrap_err();

	assert!(matches!(error, AssertionError::NotEqual { field: f, .. } if f == field));
}

/// Test: Differing route values are a field mismatch on route values
#[rstest]
fn test_redirect_to_action_route_values_mismatch(login_redirect: ActionResult) {
	let error = check_redirect_to_action_result(
		&login_redirect,
		"Login",
		Some("Account"),
		Some(&[("ReturnUrl", json!("NotReturnUrl"))]),
	)
	.unwrap_err();

	assert_eq!(
		error,
		AssertionError::NotEqual {
			field: "route values",
			expected: r#"{"ReturnUrl": "NotReturnUrl"}"#.to_string(),
			actual: r#"{"ReturnUrl": "ReturnUrl"}"#.to_string(),
		}
	);
}

#[rstest]
fn test_redirect_to_action_unexpected_route_values(login_redirect: ActionResult) {
	let error = check_redirect_to_action_result(&login_redirect, "Login", Some("Account"), None)
		.unwrap_err();

	assert!(error.to_string().starts_with("Expected route values to equal None"));
}

#[rstest]
#[should_panic(expected = "Expected RedirectToActionResult, got RedirectResult")]
fn test_redirect_to_action_wrong_kind(other_result: ActionResult) {
	assert_redirect_to_action_result(&other_result, "Index", None, None);
}

// ============================================================================
// Redirect
// ============================================================================

#[rstest]
fn test_redirect_matches() {
	let result: ActionResult = RedirectResult::new("http://example.com").into();

	let redirect = assert_redirect_result(&result, "http://example.com");

	assert!(!redirect.permanent);
}

#[rstest]
#[should_panic(expected = "Expected url to equal \"http://other.example.com\"")]
fn test_redirect_url_mismatch() {
	let result: ActionResult = RedirectResult::new("http://example.com").into();

	assert_redirect_result(&result, "http://other.example.com");
}

#[rstest]
fn test_redirect_wrong_kind() {
	let result: ActionResult = JsonResult::new(json!(null)).into();

	let error = check_redirect_result(&result, "/").unwrap_err();

	assert!(error.is_wrong_kind());
}

// ============================================================================
// Challenge
// ============================================================================

#[fixture]
fn properties() -> AuthenticationProperties {
	AuthenticationProperties::new()
		.with_redirect_uri("/signin-callback")
		.with_item("LoginProvider", "TestProvider")
}

#[fixture]
fn challenge(properties: AuthenticationProperties) -> ActionResult {
	ChallengeResult::new(["TestProvider"])
		.with_properties(properties)
		.into()
}

#[rstest]
fn test_challenge_matches(challenge: ActionResult, properties: AuthenticationProperties) {
	let result = assert_challenge_result(&challenge, Some(&properties), "TestProvider");

	assert_eq!(result.authentication_schemes.len(), 1);
	assert!(result.authentication_schemes.contains("TestProvider"));
}

/// Test: An unknown provider is a membership miss
#[rstest]
fn test_challenge_unknown_provider(
	challenge: ActionResult,
	properties: AuthenticationProperties,
) {
	let error =
		check_challenge_result(&challenge, Some(&properties), "OtherTestProvider").unwrap_err();

	assert_eq!(
		error,
		AssertionError::Missing {
			collection: "authentication schemes".to_string(),
			item: "\"OtherTestProvider\"".to_string(),
			actual: "[\"TestProvider\"]".to_string(),
		}
	);
}

#[rstest]
fn test_challenge_provider_is_subset_check() {
	let result: ActionResult = ChallengeResult::new(["Google", "TestProvider"]).into();

	assert_challenge_result(&result, None, "TestProvider");
}

#[rstest]
fn test_challenge_properties_mismatch(challenge: ActionResult) {
	let other = AuthenticationProperties::new().with_redirect_uri("/elsewhere");

	let error = check_challenge_result(&challenge, Some(&other), "TestProvider").unwrap_err();

	assert!(matches!(
		error,
		AssertionError::NotEqual {
			field: "properties",
			..
		}
	));
}

#[rstest]
#[should_panic(expected = "Expected ChallengeResult, got RedirectResult")]
fn test_challenge_wrong_kind(other_result: ActionResult) {
	assert_challenge_result(&other_result, Some(&AuthenticationProperties::new()), "TestProvider");
}
