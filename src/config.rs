//! Configuration file parsing

pub mod dt_toml;

pub use dt_toml::{ColorOption, Config, OutputConfig, OutputFormat};
