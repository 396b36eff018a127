//! Hierarchical test-suite discovery for lit-style test runners.
//!
//! A directory becomes the root of a test suite when it holds a suite marker
//! file (see [`GlobalConfig::config_names`]) or a site marker
//! ([`GlobalConfig::site_config_names`]). Any path can be mapped onto its
//! enclosing suite with [`SuiteDiscovery::resolve`], and the configuration in
//! force for a directory inside a suite is rebuilt from local-override
//! markers with [`SuiteDiscovery::local_config`]. Both are memoised in a
//! [`DiscoveryCache`] owned by the discovery context.
//!
//! ```rust,no_run
//! use lit_discovery::{GlobalConfig, SuiteDiscovery};
//!
//! # fn run() -> lit_discovery::DiscoveryResult<()> {
//! let config = GlobalConfig::load(None)?;
//! let mut discovery = SuiteDiscovery::new(&config);
//! let collection = discovery.collect_tests(["test/"])?;
//! for test in &collection.tests {
//!     println!("{}", test.full_name());
//! }
//! # Ok(())
//! # }
//! ```

mod cache;
mod config;
mod discovery;
mod error;
mod file;
mod loader;
mod locate;
mod path;
mod result_ext;
mod suite;
mod testing_config;

pub use cache::DiscoveryCache;
pub use config::{
    DEFAULT_CONFIG_NAMES, DEFAULT_IGNORED_DIR_NAMES, DEFAULT_LOCAL_CONFIG_NAMES,
    DEFAULT_SITE_CONFIG_NAMES, GlobalConfig, GlobalConfigBuilder, Params,
};
pub use discovery::{SuiteDiscovery, Test, TestCollection};
pub use error::{DiscoveryError, DiscoveryResult};
pub use file::load_config_file;
pub use loader::{ConfigLoader, FileConfigLoader};
pub use locate::{choose_config_file, dir_contains_test_suite};
pub use path::{canonicalise, parent_and_name, to_utf8};
pub use suite::{SuiteSearch, TestSuite};
pub use testing_config::{TestingConfig, UNNAMED_SUITE};
