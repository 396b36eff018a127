//! CLI entrypoint for `lit-discover`.

mod cli;
mod error;
mod logging;
mod report;

use std::io::Write;

use clap::Parser;
use lit_discovery::{GlobalConfig, SuiteDiscovery};

use crate::cli::Args;
use crate::error::DiscoverError;
use crate::logging::Verbosity;

fn main() -> Result<(), DiscoverError> {
    let args = Args::parse();
    let config = build_config(&args)?;
    logging::init(Verbosity::from_flags(args.verbose, args.quiet), config.debug);
    run(&args, &config)
}

fn run(args: &Args, config: &GlobalConfig) -> Result<(), DiscoverError> {
    let mut discovery = SuiteDiscovery::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.list {
        let collection = discovery.collect_tests(&args.paths)?;
        for test in &collection.tests {
            writeln!(out, "{}", test.full_name())?;
        }
        for path in &collection.unresolved {
            writeln!(out, "{path}: no test suite found")?;
        }
        tracing::info!(tests = collection.tests.len(), "collected tests");
    } else {
        for path in &args.paths {
            let found = discovery.resolve(path)?;
            writeln!(out, "{}", report::describe(path, &found))?;
        }
    }
    Ok(())
}

fn build_config(args: &Args) -> Result<GlobalConfig, DiscoverError> {
    let mut config = GlobalConfig::load(args.config.as_deref())?;
    config.debug |= args.debug;
    config.params.user.extend(args.params.iter().cloned());
    Ok(config)
}
