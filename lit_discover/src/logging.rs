//! Log output for `lit-discover`.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// How much the front end logs to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    /// Maps the `-v`/`-q` flags onto a verbosity.
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    const fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directives for this verbosity. Marker notes stay visible when
    /// `notes` is set, whatever the level.
    fn directives(self, notes: bool) -> String {
        let level = self.level();
        let mut filter = format!("lit_discover={level},lit_discovery={level}");
        if notes && self < Self::Verbose {
            filter.push_str(",lit_discovery::note=info");
        }
        filter
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// flags.
pub fn init(verbosity: Verbosity, notes: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directives(notes)));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(verbosity >= Verbosity::Debug)
        .with_line_number(verbosity >= Verbosity::Debug)
        .compact();

    if verbosity > Verbosity::Normal {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
