//! Formatting discovery results for stdout.

use camino::Utf8Path;
use lit_discovery::SuiteSearch;

/// One line describing where `input` landed.
pub fn describe(input: &Utf8Path, found: &SuiteSearch) -> String {
    let Some(suite) = &found.suite else {
        return format!("{input}: no test suite found");
    };
    let line = format!("{input}: {} ({})", suite.name(), suite.source_root());
    if found.path_in_suite.is_empty() {
        return line;
    }
    format!("{line} :: {}", found.path_in_suite.join("/"))
}
