//! # Tracing Setup
//!
//! Structured logging for every actor and client built on this crate.

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes the tracing/logging infrastructure for the application.
///
/// This sets up structured logging using the `tracing` crate with:
/// - **Environment-based filtering**: Controlled via the `RUST_LOG` environment variable,
///   falling back to [`DEFAULT_FILTER`]
/// - **Human-readable output** with timestamps and log levels
///
/// # Environment Variables
///
/// - `RUST_LOG=info` - Show info, warn, and error messages
/// - `RUST_LOG=debug` - Show debug and above (full request payloads)
/// - `RUST_LOG=product_registry=debug,tower_http=debug` - Per-crate levels
///
/// Calling this more than once is harmless; later calls leave the first subscriber in place.
pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
