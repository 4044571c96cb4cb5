//! Process launching for VM commands

use crate::vm::command::VmCommand;
use log::debug;
use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use thiserror::Error;

/// The OS refused to start the control tool
#[derive(Error, Debug)]
#[error("could not launch `{command}`: {source}")]
pub struct LaunchError {
    pub command: String,
    #[source]
    pub source: io::Error,
}

/// Starts a VM command without waiting for it to finish
pub trait Launcher {
    fn launch(&self, command: &VmCommand) -> Result<(), LaunchError>;
}

/// Spawns the tool as a detached child process
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

impl Launcher for ProcessLauncher {
    fn launch(&self, command: &VmCommand) -> Result<(), LaunchError> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        // Only the spawn itself can fail here; the exit status is not reported.
        let child = cmd.spawn().map_err(|source| LaunchError {
            command: command.to_string(),
            source,
        })?;
        debug!("spawned pid {} for `{}`", child.id(), command);
        let _ = reap(child);
        Ok(())
    }
}

/// Wait for `child` on a detached thread so it does not linger as a zombie
pub fn reap(mut child: Child) -> JoinHandle<io::Result<ExitStatus>> {
    thread::spawn(move || {
        let pid = child.id();
        let status = child.wait();
        if let Ok(status) = &status {
            debug!("pid {pid} exited with {status}");
        }
        status
    })
}
