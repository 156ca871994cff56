//! Assertion failures

use thiserror::Error;

use crate::result::ActionResultKind;

/// Result alias for the `check_*` helpers
pub type Result<T> = std::result::Result<T, AssertionError>;

/// Why a check failed
///
/// Every variant carries both sides of the comparison as display text, so the
/// message alone is enough to diagnose the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
	/// The result is a different variant than the one asserted
	#[error("Expected {expected}, got {actual}")]
	WrongKind {
		expected: ActionResultKind,
		actual: ActionResultKind,
	},

	/// A checked field differs from the expected value
	#[error("Expected {field} to equal {expected}, got {actual}")]
	NotEqual {
		field: &'static str,
		expected: String,
		actual: String,
	},

	/// An expected item is absent from a collection
	#[error("Expected {collection} to contain {item}, got {actual}")]
	Missing {
		collection: String,
		item: String,
		actual: String,
	},

	/// A derived state flag has the wrong value
	#[error("Expected {subject} to be {expected}")]
	Invalid {
		subject: &'static str,
		expected: &'static str,
	},
}

impl AssertionError {
	/// Returns true if the failure is a variant mismatch
	pub fn is_wrong_kind(&self) -> bool {
		matches!(self, AssertionError::WrongKind { .. })
	}

	/// Returns true if the failure is a field mismatch, including state flags
	pub fn is_not_equal(&self) -> bool {
		matches!(
			self,
			AssertionError::NotEqual { .. } | AssertionError::Invalid { .. }
		)
	}

	/// Returns true if the failure is a missing collection item
	pub fn is_missing(&self) -> bool {
		matches!(self, AssertionError::Missing { .. })
	}
}
