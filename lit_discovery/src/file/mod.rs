//! Helpers for reading marker files into Figment.

mod extends;
mod loader;
mod parser;

pub(crate) use extends::EXTENDS_KEY;
pub use loader::load_config_file;
