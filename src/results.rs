//! Results module.
//!
//! Action result model and the assertions that check it.

pub use probity_results::*;
pub use probity_results::assertions::*;
