//! Action result model
//!
//! [`ActionResult`] is a closed set of variants. Each variant struct can be
//! built with chained `with_*` calls and converted into `ActionResult` with
//! `.into()`.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use serde_json::Value;

/// View data entries, in insertion order
pub type ViewData = IndexMap<String, Value>;

/// Route values of a redirect-to-action result, in insertion order
pub type RouteValues = IndexMap<String, Value>;

/// Variant tag of an [`ActionResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionResultKind {
	View,
	Json,
	RedirectToAction,
	Redirect,
	Challenge,
}

impl fmt::Display for ActionResultKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ActionResultKind::View => "ViewResult",
			ActionResultKind::Json => "JsonResult",
			ActionResultKind::RedirectToAction => "RedirectToActionResult",
			ActionResultKind::Redirect => "RedirectResult",
			ActionResultKind::Challenge => "ChallengeResult",
		};
		f.write_str(name)
	}
}

/// What a request handler wants the framework to respond with
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
	View(ViewResult),
	Json(JsonResult),
	RedirectToAction(RedirectToActionResult),
	Redirect(RedirectResult),
	Challenge(ChallengeResult),
}

impl ActionResult {
	/// Variant tag of this result
	pub fn kind(&self) -> ActionResultKind {
		match self {
			ActionResult::View(_) => ActionResultKind::View,
			ActionResult::Json(_) => ActionResultKind::Json,
			ActionResult::RedirectToAction(_) => ActionResultKind::RedirectToAction,
			ActionResult::Redirect(_) => ActionResultKind::Redirect,
			ActionResult::Challenge(_) => ActionResultKind::Challenge,
		}
	}
}

impl From<ViewResult> for ActionResult {
	fn from(result: ViewResult) -> Self {
		ActionResult::View(result)
	}
}

impl From<JsonResult> for ActionResult {
	fn from(result: JsonResult) -> Self {
		ActionResult::Json(result)
	}
}

impl From<RedirectToActionResult> for ActionResult {
	fn from(result: RedirectToActionResult) -> Self {
		ActionResult::RedirectToAction(result)
	}
}

impl From<RedirectResult> for ActionResult {
	fn from(result: RedirectResult) -> Self {
		ActionResult::Redirect(result)
	}
}

impl From<ChallengeResult> for ActionResult {
	fn from(result: ChallengeResult) -> Self {
		ActionResult::Challenge(result)
	}
}

/// Rendered view with its model and auxiliary state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewResult {
	/// `None` means the framework picks the view by convention
	pub view_name: Option<String>,
	pub model: Option<Value>,
	pub view_data: ViewData,
	pub model_state: ModelState,
}

impl ViewResult {
	/// Create a view result without name, model, or state
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the view name
	pub fn with_view_name(mut self, view_name: impl Into<String>) -> Self {
		self.view_name = Some(view_name.into());
		self
	}

	/// Set the model
	pub fn with_model(mut self, model: impl Into<Value>) -> Self {
		self.model = Some(model.into());
		self
	}

	/// Set the model from any serializable type
	///
	/// # Examples
	///
	/// ```
	/// use probity_results::ViewResult;
	/// use serde::Serialize;
	/// use serde_json::json;
	///
	/// #[derive(Serialize)]
	/// struct Profile {
	///     name: String,
	/// }
	///
	/// let view = ViewResult::new()
	///     .try_with_model(&Profile { name: "Alice".to_string() })
	///     .unwrap();
	/// assert_eq!(view.model, Some(json!({"name": "Alice"})));
	/// ```
	pub fn try_with_model<T: Serialize>(mut self, model: &T) -> Result<Self, serde_json::Error> {
		self.model = Some(serde_json::to_value(model)?);
		Ok(self)
	}

	/// Add a view data entry, replacing the value of an existing key
	pub fn with_view_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.view_data.insert(key.into(), value.into());
		self
	}

	/// Record a validation error
	pub fn with_model_error(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
		self.model_state.add_model_error(key, message);
		self
	}
}

/// Validation state of a single field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelStateEntry {
	pub errors: Vec<String>,
}

impl ModelStateEntry {
	/// Returns true if an error with exactly this message was recorded
	pub fn has_error(&self, message: &str) -> bool {
		self.errors.iter().any(|error| error == message)
	}
}

/// Validation state keyed by field name
///
/// The state is valid when no entry carries an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelState {
	entries: IndexMap<String, ModelStateEntry>,
}

impl ModelState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record an error message under a field
	pub fn add_model_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
		self.entries
			.entry(key.into())
			.or_default()
			.errors
			.push(message.into());
	}

	/// Record that a field was validated, without errors
	pub fn mark_field_valid(&mut self, key: impl Into<String>) {
		self.entries.entry(key.into()).or_default();
	}

	pub fn is_valid(&self) -> bool {
		self.entries.values().all(|entry| entry.errors.is_empty())
	}

	pub fn get(&self, key: &str) -> Option<&ModelStateEntry> {
		self.entries.get(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelStateEntry)> {
		self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
	}

	/// Total number of error messages across all fields
	pub fn error_count(&self) -> usize {
		self.entries.values().map(|entry| entry.errors.len()).sum()
	}
}

/// JSON payload result
#[derive(Debug, Clone, PartialEq)]
pub struct JsonResult {
	pub value: Value,
}

impl JsonResult {
	pub fn new(value: impl Into<Value>) -> Self {
		Self {
			value: value.into(),
		}
	}

	/// Create a JSON result from any serializable type
	pub fn try_new<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
		Ok(Self {
			value: serde_json::to_value(value)?,
		})
	}
}

/// Redirect to a named action, optionally on another controller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RedirectToActionResult {
	pub action_name: Option<String>,
	pub controller_name: Option<String>,
	pub route_values: Option<RouteValues>,
}

impl RedirectToActionResult {
	pub fn new(action_name: impl Into<String>) -> Self {
		Self {
			action_name: Some(action_name.into()),
			..Self::default()
		}
	}

	pub fn with_controller(mut self, controller_name: impl Into<String>) -> Self {
		self.controller_name = Some(controller_name.into());
		self
	}

	/// Add a route value, creating the route value map on first use
	pub fn with_route_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.route_values
			.get_or_insert_with(RouteValues::new)
			.insert(key.into(), value.into());
		self
	}
}

/// Redirect to a literal URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectResult {
	pub url: String,
	pub permanent: bool,
}

impl RedirectResult {
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			permanent: false,
		}
	}

	pub fn permanent(mut self) -> Self {
		self.permanent = true;
		self
	}
}

/// Opaque state carried through an authentication handshake
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthenticationProperties {
	pub items: IndexMap<String, String>,
	pub redirect_uri: Option<String>,
}

impl AuthenticationProperties {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.items.insert(key.into(), value.into());
		self
	}

	pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
		self.redirect_uri = Some(redirect_uri.into());
		self
	}
}

/// Start an authentication handshake against one or more schemes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChallengeResult {
	/// Scheme names in first-seen order
	pub authentication_schemes: IndexSet<String>,
	pub properties: Option<AuthenticationProperties>,
}

impl ChallengeResult {
	/// Create a challenge; repeated scheme names are kept once
	pub fn new<I, S>(schemes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			authentication_schemes: schemes.into_iter().map(Into::into).collect(),
			properties: None,
		}
	}

	pub fn with_properties(mut self, properties: AuthenticationProperties) -> Self {
		self.properties = Some(properties);
		self
	}
}
