// On Windows, use the "windows" subsystem so no console window appears.
#![cfg_attr(windows, windows_subsystem = "windows")]

use anyhow::Context;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use vm_tray::app::{self, TrayProfile};
use vm_tray::cli::commands::{Cli, Cmd, LaunchArgs};
use vm_tray::cli::completions::{generate_man_page, print_completions};
use vm_tray::config::{resolve_file, ResolvedConfig};
use vm_tray::ui::ConsoleNotifier;
use vm_tray::utils::logging::init_logging;
use vm_tray::utils::paths::ProgramIdentity;
use vm_tray::utils::system::{attach_parent_console, locate_tool};
use vm_tray::vm::{ProcessLauncher, VmCommand, VmManager, VmOperation};
use vm_tray::Result;

/// Config file and section this invocation uses
struct Target {
    path: PathBuf,
    key: String,
}

impl Target {
    fn from_cli(config: Option<PathBuf>, key: Option<String>) -> Result<Self> {
        let (path, key) = match (config, key) {
            (Some(path), Some(key)) => (path, key),
            (config, key) => {
                let identity = ProgramIdentity::detect()?;
                (
                    config.unwrap_or(identity.config_path),
                    key.unwrap_or(identity.lookup_key),
                )
            }
        };
        Ok(Self { path, key })
    }

    fn resolve(&self) -> Result<ResolvedConfig> {
        resolve_file(&self.key, &self.path)
            .with_context(|| format!("failed to load config from {}", self.path.display()))
    }
}

fn check(target: &Target, json: bool) -> Result<()> {
    let config = target.resolve()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("Config file: {}", target.path.display());
    println!("Section:     {}", target.key);
    println!("VM name:     {}", config.vm_name);
    println!("VBoxManage:  {}", config.tool_path);
    match locate_tool(&config.tool_path) {
        Some(found) => println!("Resolves to: {}", found.display()),
        None => println!("Resolves to: (not found)"),
    }
    Ok(())
}

fn launch_once(target: &Target, op: VmOperation, args: LaunchArgs) -> Result<()> {
    let config = target.resolve()?;
    if args.dry_run {
        println!("{}", VmCommand::for_operation(op, &config));
        return Ok(());
    }

    VmManager::new(config, ProcessLauncher, ConsoleNotifier)
        .run(op)
        .with_context(|| format!("Failed to {} VM", op.verb()))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.needs_console() {
        attach_parent_console();
    }
    init_logging();

    match cli.cmd {
        Some(Cmd::Completions { shell }) => {
            print_completions(shell, &mut Cli::command());
        }

        Some(Cmd::ManPage) => {
            generate_man_page(Cli::command())?;
        }

        Some(Cmd::Check { json }) => {
            check(&Target::from_cli(cli.config, cli.key)?, json)?;
        }

        Some(Cmd::Start(args)) => {
            launch_once(&Target::from_cli(cli.config, cli.key)?, VmOperation::Start, args)?;
        }

        Some(Cmd::Stop(args)) => {
            launch_once(&Target::from_cli(cli.config, cli.key)?, VmOperation::Stop, args)?;
        }

        Some(Cmd::Run) | None => {
            let target = Target::from_cli(cli.config, cli.key)?;
            app::run(TrayProfile::from_config_file(target.path, target.key))?;
        }
    }

    Ok(())
}
