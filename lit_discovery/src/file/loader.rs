//! Runtime loading entrypoint for marker files and their `extends` chains.

use std::collections::HashSet;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;

use crate::error::file_error;
use crate::path::{canonicalise, normalise_cycle_key};
use crate::{DiscoveryError, DiscoveryResult};

use super::extends::process_extends;
use super::parser::parse_config_by_format;

/// Load a marker file, selecting the parser based on its extension and
/// following `extends`.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Examples
///
/// ```rust,no_run
/// use camino::Utf8Path;
/// use lit_discovery::load_config_file;
///
/// # fn run() -> lit_discovery::DiscoveryResult<()> {
/// if let Some(figment) = load_config_file(Utf8Path::new("lit.cfg"))? {
///     let name: String = figment.extract_inner("name").expect("suite name");
///     println!("suite {name}");
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns a [`DiscoveryError`] if reading or parsing the file (or any file it
/// extends) fails, or if the `extends` chain forms a cycle.
pub fn load_config_file(path: &Utf8Path) -> DiscoveryResult<Option<Figment>> {
    let mut visited = HashSet::new();
    let mut stack = Vec::new();
    load_config_file_inner(path, &mut visited, &mut stack)
}

pub(super) fn load_config_file_inner(
    path: &Utf8Path,
    visited: &mut HashSet<Utf8PathBuf>,
    stack: &mut Vec<Utf8PathBuf>,
) -> DiscoveryResult<Option<Figment>> {
    if !path.is_file() {
        return Ok(None);
    }
    let canonical = canonicalise(path)?;
    let key = normalise_cycle_key(&canonical);
    if !visited.insert(key.clone()) {
        let mut cycle: Vec<&str> = stack.iter().map(|p| p.as_str()).collect();
        cycle.push(canonical.as_str());
        return Err(Arc::new(DiscoveryError::CyclicExtends {
            cycle: cycle.join(" -> "),
        }));
    }
    stack.push(canonical.clone());
    let result = read_and_parse(&canonical)
        .and_then(|figment| process_extends(figment, &canonical, visited, stack));
    visited.remove(&key);
    stack.pop();
    result.map(Some)
}

fn read_and_parse(canonical: &Utf8Path) -> DiscoveryResult<Figment> {
    let data = std::fs::read_to_string(canonical).map_err(|e| file_error(canonical, e))?;
    parse_config_by_format(canonical, &data)
}
