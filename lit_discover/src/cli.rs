//! Command-line interface definitions for `lit-discover`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed CLI arguments for `lit-discover`.
#[derive(Debug, Parser)]
#[command(name = "lit-discover")]
#[command(about = "Map paths onto lit test suites")]
#[command(version)]
pub struct Args {
    /// Global configuration file layered over the defaults.
    #[arg(long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,
    /// User parameter passed to suite configs (repeat for several).
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
    /// Emit a note for every marker file loaded.
    #[arg(long)]
    pub debug: bool,
    /// Print the collected tests instead of suite locations.
    #[arg(long)]
    pub list: bool,
    /// Increase log verbosity (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
    /// Paths to resolve.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<Utf8PathBuf>,
}

/// Splits `NAME=VALUE`; a bare `NAME` is treated as an empty value.
fn parse_param(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw.split_once('=').unwrap_or((raw, ""));
    if name.is_empty() {
        return Err(format!("parameter '{raw}' has no name"));
    }
    Ok((name.to_owned(), value.to_owned()))
}
