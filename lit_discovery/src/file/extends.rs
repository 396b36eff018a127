//! Inheritance (`extends`) parsing and merge orchestration.

use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;

use crate::DiscoveryResult;
use crate::error::{file_error, invalid_data, invalid_input, not_found};
use crate::path::canonicalise;

use super::loader::load_config_file_inner;

/// Key naming the file a marker inherits from.
pub(crate) const EXTENDS_KEY: &str = "extends";

/// Validate and extract the `extends` value from `figment`.
///
/// Returns `Ok(None)` if the key is absent. Empty strings and non-string
/// values are rejected.
pub(super) fn get_extends(
    figment: &Figment,
    current_path: &Utf8Path,
) -> DiscoveryResult<Option<Utf8PathBuf>> {
    match figment.find_value(EXTENDS_KEY) {
        Ok(val) => {
            let base = val.as_str().ok_or_else(|| {
                let actual_type = match &val {
                    figment::value::Value::String(..) => "string",
                    figment::value::Value::Char(..) => "char",
                    figment::value::Value::Bool(..) => "bool",
                    figment::value::Value::Num(..) => "number",
                    figment::value::Value::Empty(..) => "null",
                    figment::value::Value::Dict(..) => "table",
                    figment::value::Value::Array(..) => "array",
                };
                invalid_data(
                    current_path,
                    format!("'extends' key must be a string, but found type: {actual_type}"),
                )
            })?;
            if base.is_empty() {
                return Err(invalid_data(
                    current_path,
                    "'extends' key must be a non-empty string",
                ));
            }
            Ok(Some(Utf8PathBuf::from(base)))
        }
        Err(e) if e.missing() => Ok(None),
        Err(e) => Err(file_error(current_path, e)),
    }
}

/// Resolve an `extends` target relative to the marker that names it.
///
/// Relative targets are joined onto the marker's directory; the result is
/// canonicalised so cycle detection sees one key per file.
fn resolve_base_path(current_path: &Utf8Path, base: Utf8PathBuf) -> DiscoveryResult<Utf8PathBuf> {
    let parent = current_path.parent().ok_or_else(|| {
        invalid_input(
            current_path,
            "Cannot determine parent directory for marker file when resolving 'extends'",
        )
    })?;
    let resolved_base = if base.is_absolute() {
        base
    } else {
        parent.join(base)
    };
    canonicalise(&resolved_base).map_err(|err| {
        if err.io_kind() == Some(std::io::ErrorKind::NotFound) {
            not_found(
                &resolved_base,
                format!(
                    "extended configuration file '{resolved_base}' does not exist (referenced from '{current_path}')"
                ),
            )
        } else {
            err
        }
    })
}

/// Apply inheritance using the `extends` key.
///
/// The referenced file is loaded first and `figment` is merged over it.
/// Cycles are detected using `visited`.
pub(super) fn process_extends(
    figment: Figment,
    current_path: &Utf8Path,
    visited: &mut HashSet<Utf8PathBuf>,
    stack: &mut Vec<Utf8PathBuf>,
) -> DiscoveryResult<Figment> {
    let Some(base) = get_extends(&figment, current_path)? else {
        return Ok(figment);
    };
    let canonical = resolve_base_path(current_path, base)?;
    if !canonical.is_file() {
        return Err(invalid_input(
            &canonical,
            "extended path is not a regular file",
        ));
    }
    let Some(parent_fig) = load_config_file_inner(&canonical, visited, stack)? else {
        return Err(not_found(
            &canonical,
            "extended file disappeared during load",
        ));
    };
    Ok(parent_fig.merge(figment))
}
