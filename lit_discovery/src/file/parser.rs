//! Format-specific parsing utilities for marker files.

use camino::Utf8Path;
#[cfg(feature = "yaml")]
use figment::providers::Yaml;
use figment::{
    Figment,
    providers::{Format, Toml},
};
#[cfg(feature = "json5")]
use figment_json5::Json5;

use crate::DiscoveryResult;
use crate::error::file_error;

/// Parse marker data according to the file extension.
///
/// `.json`/`.json5` and `.yaml`/`.yml` require the `json5` and `yaml`
/// features. Every other extension, including lit's bare `.cfg`, is read as
/// TOML.
///
/// # Errors
///
/// Returns a [`crate::DiscoveryError::File`] if the contents fail to parse or
/// the required feature is disabled.
pub(super) fn parse_config_by_format(path: &Utf8Path, data: &str) -> DiscoveryResult<Figment> {
    let ext = path.extension().map(str::to_ascii_lowercase);
    let figment = match ext.as_deref() {
        Some("json" | "json5") => {
            #[cfg(feature = "json5")]
            {
                Figment::from(Json5::string(data))
            }
            #[cfg(not(feature = "json5"))]
            {
                return Err(file_error(
                    path,
                    std::io::Error::other(
                        "json5 feature disabled: enable the 'json5' feature to support this file format",
                    ),
                ));
            }
        }
        Some("yaml" | "yml") => {
            #[cfg(feature = "yaml")]
            {
                Figment::from(Yaml::string(data))
            }
            #[cfg(not(feature = "yaml"))]
            {
                return Err(file_error(
                    path,
                    std::io::Error::other(
                        "yaml feature disabled: enable the 'yaml' feature to support this file format",
                    ),
                ));
            }
        }
        _ => {
            // Validate first so syntax errors carry the marker path.
            toml::from_str::<toml::Value>(data).map_err(|e| file_error(path, e))?;
            Figment::from(Toml::string(data))
        }
    };

    Ok(figment)
}
