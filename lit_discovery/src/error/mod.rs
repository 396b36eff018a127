//! Error types produced while discovering test suites.

mod constructors;
mod types;

pub use types::DiscoveryError;

pub(crate) use constructors::{file_error, invalid_data, invalid_input, not_found};

/// Result alias used throughout the crate.
///
/// Errors are shared behind an [`std::sync::Arc`] so a failure stored in the
/// discovery cache can be handed to every caller that asks for the same
/// directory.
pub type DiscoveryResult<T> = Result<T, std::sync::Arc<DiscoveryError>>;
