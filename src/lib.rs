//! VM Tray - VirtualBox VM control from the notification area
//!
//! Resolves which VM to drive (built in, or a section of a shared
//! `config.json` keyed by the program's own name), launches `VBoxManage`
//! to start or power it off, and keeps a three-item tray menu alive.

pub mod app;
pub mod cli;
pub mod config;
pub mod tray;
pub mod ui;
pub mod utils;
pub mod vm;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::{resolve, ConfigError, ConfigSource, ResolvedConfig};
pub use vm::manager::VmManager;

/// Library error type
pub type Result<T> = anyhow::Result<T>;
