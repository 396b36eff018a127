//! Error types for `lit-discover`.

use std::sync::Arc;

use lit_discovery::DiscoveryError;
use thiserror::Error;

/// Errors surfaced by the `lit-discover` front end.
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error(transparent)]
    Discovery(#[from] Arc<DiscoveryError>),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
