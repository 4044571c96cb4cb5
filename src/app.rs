//! Startup routine shared by the tray binaries

use crate::config::{ConfigSource, ResolvedConfig};
use crate::tray::{ensure_tray_supported, run_event_loop};
use crate::ui::{DialogNotifier, Notifier, ERROR_TITLE};
use crate::vm::{Launcher, ProcessLauncher, VmManager};
use crate::Result;
use anyhow::Context;
use log::info;
use std::path::PathBuf;

/// How one tray program presents itself and where its VM comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayProfile {
    pub tooltip: String,
    /// Issue the start command once before the icon appears
    pub auto_start: bool,
    /// Pop up a dialog on success too, not only on failure
    pub status_dialogs: bool,
    pub source: ConfigSource,
}

impl TrayProfile {
    /// Generic tray for a VM named `Your_VM_Name`; no start at launch, errors only
    pub fn virtual_box_tray() -> Self {
        Self {
            tooltip: "VirtualBox VM Control".to_string(),
            auto_start: false,
            status_dialogs: false,
            source: ConfigSource::Fixed(ResolvedConfig::default()),
        }
    }

    /// Tray for the `vanderstack-docker-server` VM, started on launch
    pub fn docker_server() -> Self {
        Self::docker_vm(ConfigSource::Fixed(ResolvedConfig::with_default_tool(
            "vanderstack-docker-server",
        )))
    }

    /// Docker VM tray reading its section of a shared config file
    pub fn from_config_file(path: PathBuf, lookup_key: String) -> Self {
        Self::docker_vm(ConfigSource::File { path, lookup_key })
    }

    fn docker_vm(source: ConfigSource) -> Self {
        Self {
            tooltip: "Docker VM".to_string(),
            auto_start: true,
            status_dialogs: true,
            source,
        }
    }
}

/// Resolve the config and issue the launch-time start command.
///
/// A config error is shown through `notifier` and returned before any VM
/// command runs.
pub fn startup<L: Launcher, N: Notifier>(
    profile: &TrayProfile,
    launcher: L,
    notifier: N,
) -> Result<VmManager<L, N>> {
    let config = match profile.source.resolve() {
        Ok(config) => config,
        Err(err) => {
            notifier.error(ERROR_TITLE, &format!("Failed to load config: {err}"));
            return Err(err).context("failed to load config");
        }
    };
    info!(
        "controlling VM '{}' with {}",
        config.vm_name, config.tool_path
    );

    let manager = VmManager::new(config, launcher, notifier);
    if profile.auto_start {
        // Reported through the notifier; the tray still comes up so the user can retry.
        let _ = manager.start_vm();
    }
    Ok(manager)
}

/// Run the tray program described by `profile` until the user picks Exit.
///
/// Nothing is resolved or launched on platforms without tray support, and a
/// config error ends the program before any icon is created.
pub fn run(profile: TrayProfile) -> Result<()> {
    ensure_tray_supported()?;
    let manager = startup(
        &profile,
        ProcessLauncher,
        DialogNotifier::new(profile.status_dialogs),
    )?;
    run_event_loop(&profile.tooltip, manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::testing::{FakeLauncher, RecordingNotifier};
    use tempfile::TempDir;

    #[test]
    fn test_virtual_box_tray_profile() {
        let profile = TrayProfile::virtual_box_tray();
        assert_eq!(profile.tooltip, "VirtualBox VM Control");
        assert!(!profile.auto_start);
        assert!(!profile.status_dialogs);
        assert_eq!(
            profile.source.resolve().unwrap(),
            ResolvedConfig::new("Your_VM_Name", "VBoxManage")
        );
    }

    #[test]
    fn test_docker_server_profile() {
        let profile = TrayProfile::docker_server();
        assert_eq!(profile.tooltip, "Docker VM");
        assert!(profile.auto_start);
        assert!(profile.status_dialogs);
        assert_eq!(
            profile.source.resolve().unwrap().vm_name,
            "vanderstack-docker-server"
        );
    }

    #[test]
    fn test_config_file_profile() {
        let profile = TrayProfile::from_config_file(
            PathBuf::from("/opt/tray/config.json"),
            "docker-server".to_string(),
        );
        assert_eq!(profile.tooltip, "Docker VM");
        assert!(profile.auto_start);
        assert_eq!(
            profile.source,
            ConfigSource::File {
                path: PathBuf::from("/opt/tray/config.json"),
                lookup_key: "docker-server".to_string(),
            }
        );
    }

    #[test]
    fn test_config_failure_reports_and_launches_nothing() {
        let dir = TempDir::new().unwrap();
        let profile = TrayProfile::from_config_file(
            dir.path().join("config.json"),
            "docker-server".to_string(),
        );
        let launcher = FakeLauncher::default();
        let notifier = RecordingNotifier::default();

        let err = startup(&profile, &launcher, &notifier).err().unwrap();

        assert!(format!("{err:#}").contains("not found"));
        assert!(launcher.launched.borrow().is_empty());
        let messages = notifier.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, "Error");
        assert!(messages[0].1.starts_with("Failed to load config: "));
    }

    #[test]
    fn test_auto_start_issues_one_start() {
        let launcher = FakeLauncher::default();
        let notifier = RecordingNotifier::default();

        let manager = startup(&TrayProfile::docker_server(), &launcher, &notifier).unwrap();

        assert_eq!(manager.config().vm_name, "vanderstack-docker-server");
        assert_eq!(
            launcher.launched.borrow().as_slice(),
            [r#"VBoxManage startvm "vanderstack-docker-server" --type headless"#]
        );
        assert_eq!(notifier.messages.borrow()[0].0, "VM Control");
    }

    #[test]
    fn test_no_auto_start_launches_nothing() {
        let launcher = FakeLauncher::default();
        let notifier = RecordingNotifier::default();

        startup(&TrayProfile::virtual_box_tray(), &launcher, &notifier).unwrap();

        assert!(launcher.launched.borrow().is_empty());
        assert!(notifier.messages.borrow().is_empty());
    }

    #[cfg(not(any(windows, target_os = "macos")))]
    #[test]
    fn test_run_refuses_unsupported_platform_before_launching() {
        let err = run(TrayProfile::docker_server()).unwrap_err();
        assert!(err.to_string().contains("not supported"));
    }
}
