//! VM control through the external VBoxManage tool

pub mod command;
pub mod launcher;
pub mod manager;

pub use command::{VmCommand, VmOperation};
pub use launcher::{LaunchError, Launcher, ProcessLauncher};
pub use manager::VmManager;

#[cfg(test)]
pub(crate) mod testing;
