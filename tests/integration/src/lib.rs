//! Shared handler doubles for the cross-crate integration suite
//!
//! A small account controller: its action methods return [`ActionResult`]s
//! for the result assertions, and [`login_page`] renders the form that the
//! request preparer submits.

use http::header::SET_COOKIE;
use http::{HeaderValue, Response, StatusCode};
use probity::prelude::*;
use serde_json::json;

/// Path the login form posts to
pub const LOGIN_PATH: &str = "/Account/Login";

/// Where external providers send the user back to
pub const EXTERNAL_CALLBACK: &str = "/Account/ExternalLoginCallback";

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
	pub email: String,
	pub return_url: Option<String>,
}

/// Re-render the form on a missing email, otherwise redirect
pub fn login(form: LoginForm) -> ActionResult {
	if form.email.is_empty() {
		return ViewResult::new()
			.with_view_name("Login")
			.with_model(json!({"Email": form.email}))
			.with_view_data("Title", "Log in")
			.with_model_error("Email", "The Email field is required.")
			.into();
	}

	match form.return_url {
		Some(url) => RedirectResult::new(url).into(),
		None => RedirectToActionResult::new("Index")
			.with_controller("Home")
			.into(),
	}
}

pub fn external_login(provider: &str) -> ActionResult {
	ChallengeResult::new([provider])
		.with_properties(AuthenticationProperties::new().with_redirect_uri(EXTERNAL_CALLBACK))
		.into()
}

/// Rendered login page carrying an anti-forgery token and a session cookie
pub fn login_page(token: &str, session: &str) -> Response<String> {
	let body = format!(
		"<form action=\"{LOGIN_PATH}\" method=\"post\">\
		 <input name=\"__RequestVerificationToken\" type=\"hidden\" value=\"{token}\" />\
		 </form>"
	);

	let mut response = Response::new(body);
	*response.status_mut() = StatusCode::OK;
	if let Ok(cookie) = HeaderValue::from_str(&format!(".Session={session}; path=/; httponly")) {
		response.headers_mut().insert(SET_COOKIE, cookie);
	}
	response
}
