//! Command line interface of the config-driven tray

pub mod commands;
pub mod completions;
