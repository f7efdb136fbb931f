#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod error;
pub mod extensions;
pub mod logging;
pub mod models;
pub mod resolver;
pub mod stylesheet;

pub use config::ResolverConfig;
pub use error::{ConfigError, ResolveError};
pub use extensions::AllowedExtensions;
pub use resolver::PathResolver;
pub use stylesheet::{collect_stylesheet_references, resolve_stylesheet_assets};
