//! VM configuration: the resolved pair and the shared `config.json` lookup

pub mod resolver;
pub mod schema;

pub use resolver::{resolve, resolve_file, ConfigError};
pub use schema::{ConfigSource, ResolvedConfig};
