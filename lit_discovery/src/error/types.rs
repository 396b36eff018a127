//! Primary error enum for discovery flows.

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

/// Errors that can occur while locating suites or loading their configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DiscoveryError {
    /// Error originating from a file or directory on disk.
    #[error("Configuration file error in '{}': {source}", path.display())]
    File {
        /// Path that triggered the failure.
        path: std::path::PathBuf,
        /// Underlying error reported by the filesystem or parser.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Cycle detected while resolving `extends`.
    #[error("cyclic extends detected: {cycle}")]
    CyclicExtends {
        /// Chain of configuration files participating in the cycle.
        cycle: String,
    },

    /// A marker file parsed but its values do not fit the testing config.
    #[error("Failed to load test configuration from '{path}': {source}")]
    Load {
        /// Marker file being loaded.
        path: Utf8PathBuf,
        /// Extraction failure reported by figment.
        #[source]
        source: Box<FigmentError>,
    },

    /// Error while gathering the global configuration layers.
    #[error("Failed to gather global configuration: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// A path could not be represented as UTF-8.
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// The offending path.
        path: std::path::PathBuf,
    },
}
