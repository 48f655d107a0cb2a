//! Configuration layering for the CLI.
//!
//! Values are resolved with the precedence: command-line flag, then `--set KEY=VALUE`, then
//! the TOML file given with `--config`, then [`defaults::DefaultsConfig`].

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::build_config;
pub use models::AppConfig;
