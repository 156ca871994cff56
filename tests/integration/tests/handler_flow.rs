//! End-to-end handler tests through the facade
//!
//! The account controller doubles are checked both ways: their return values
//! through the result assertions, and the rendered login page through the
//! request preparer.

use bytes::Bytes;
use http::Method;
use http::header::COOKIE;
use http_body_util::BodyExt;
use indexmap::IndexMap;
use probity::prelude::*;
use probity_integration_tests::{
	EXTERNAL_CALLBACK, LOGIN_PATH, LoginForm, external_login, login, login_page,
};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn test_login_without_email_renders_form_again() {
	let result = login(LoginForm::default());

	let view = assert_view_result(&result, Some("Login"), Some(&json!({"Email": ""})));
	assert_view_data_entry(view, "Title", &json!("Log in"));
	assert_model_state_error(view, "Email", "The Email field is required.");
}

#[rstest]
#[case::local_return(Some("/orders".to_string()))]
#[case::default_home(None)]
fn test_login_redirects(#[case] return_url: Option<String>) {
	let result = login(LoginForm {
		email: "alice@example.com".to_string(),
		return_url: return_url.clone(),
	});

	match return_url {
		Some(url) => {
			assert_redirect_result(&result, &url);
		}
		None => {
			assert_redirect_to_action_result(&result, "Index", Some("Home"), None);
		}
	}
}

#[rstest]
fn test_external_login_challenges_provider() {
	let result = external_login("TestProvider");

	let expected = AuthenticationProperties::new().with_redirect_uri(EXTERNAL_CALLBACK);
	assert_challenge_result(&result, Some(&expected), "TestProvider");
}

#[rstest]
#[should_panic(expected = "Expected JsonResult, got ChallengeResult")]
fn test_external_login_is_not_json() {
	let result = external_login("TestProvider");

	assert_json_result(&result, &json!({}));
}

#[rstest]
#[tokio::test]
async fn test_login_form_submission() {
	// Arrange
	init_test_logging();
	let page = TestResponse::from_response(login_page("CfDJ8Token", "s3ss10n"))
		.await
		.unwrap();
	let mut form: FormData = IndexMap::new();
	form.insert("Email".to_string(), "alice@example.com".to_string());

	// Act
	let request = prepare_form_request(form, &page)
		.unwrap()
		.into_request(Method::POST, LOGIN_PATH)
		.unwrap();

	// Assert
	assert_eq!(request.headers()[COOKIE], ".Session=s3ss10n");
	let body: Bytes = request.into_body().collect().await.unwrap().to_bytes();
	assert_eq!(
		body,
		"Email=alice%40example.com&__RequestVerificationToken=CfDJ8Token"
	);
}
