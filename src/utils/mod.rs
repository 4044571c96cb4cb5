//! Helpers shared by the binaries

pub mod logging;
pub mod paths;
pub mod system;
