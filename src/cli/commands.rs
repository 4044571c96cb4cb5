//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// VM tray (Rust)
#[derive(Parser, Debug)]
#[command(
    name = "vm-tray",
    version,
    about = "Tray icon that starts and stops a VirtualBox VM"
)]
pub struct Cli {
    /// Config file (default: config.json next to the executable)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Config section to use (default: this program's file name without extension)
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Runs the tray when omitted
    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

impl Cli {
    /// Whether this invocation writes to a terminal instead of showing the tray
    pub fn needs_console(&self) -> bool {
        !matches!(self.cmd, None | Some(Cmd::Run))
    }
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Run the tray icon (start the VM, then wait for menu clicks)
    Run,

    /// Resolve the configuration and show what would be used
    Check {
        /// Print the resolved configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the VM headless once and exit
    Start(LaunchArgs),

    /// Power the VM off once and exit
    Stop(LaunchArgs),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate man page
    ManPage,
}

#[derive(Args, Debug)]
pub struct LaunchArgs {
    /// Print the VBoxManage command line instead of running it
    #[arg(long)]
    pub dry_run: bool,
}
