//! Test logging for probity's own events
//!
//! The inspector and preparer emit `tracing` events. The `log` feature of
//! `tracing` forwards them to the `log` facade when no subscriber is set, so
//! an `env_logger` can show them. Only the probity targets are raised to
//! `debug`; everything else stays at `warn` unless `RUST_LOG` says otherwise.

use log::LevelFilter;
use std::sync::Once;

/// Log targets of the probity crates
pub const PROBITY_TARGETS: &[&str] = &["probity_http", "probity_results"];

static INIT: Once = Once::new();

/// Logger builder scoped to the probity targets, before `RUST_LOG` is applied
fn scoped_builder() -> env_logger::Builder {
	let mut builder = env_logger::Builder::new();
	builder.is_test(true).filter_level(LevelFilter::Warn);
	for target in PROBITY_TARGETS {
		builder.filter_module(target, LevelFilter::Debug);
	}
	builder
}

/// Route probity's debug events to the test output
///
/// Safe to call from every test; the logger is installed on the first call.
/// If another logger is already set, that one is kept.
///
/// # Examples
///
/// ```
/// use probity_http::logging::init_test_logging;
///
/// init_test_logging();
/// ```
pub fn init_test_logging() {
	INIT.call_once(|| {
		let mut builder = scoped_builder();
		builder.parse_default_env();
		if builder.try_init().is_err() {
			tracing::debug!("a logger is already installed; keeping it");
		}
	});
}
