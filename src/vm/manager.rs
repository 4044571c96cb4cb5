//! VM lifecycle management

use crate::config::ResolvedConfig;
use crate::ui::{Notifier, ERROR_TITLE, STATUS_TITLE};
use crate::vm::command::{VmCommand, VmOperation};
use crate::vm::launcher::{LaunchError, Launcher};
use log::info;

/// Starts and stops one VM and reports each outcome
pub struct VmManager<L, N> {
    config: ResolvedConfig,
    launcher: L,
    notifier: N,
}

impl<L: Launcher, N: Notifier> VmManager<L, N> {
    /// Create a manager for the resolved VM
    pub fn new(config: ResolvedConfig, launcher: L, notifier: N) -> Self {
        Self {
            config,
            launcher,
            notifier,
        }
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Start the VM headless
    pub fn start_vm(&self) -> Result<(), LaunchError> {
        self.run(VmOperation::Start)
    }

    /// Power the VM off
    pub fn stop_vm(&self) -> Result<(), LaunchError> {
        self.run(VmOperation::Stop)
    }

    /// Launch `op` and report it. The error is returned after it has been shown.
    pub fn run(&self, op: VmOperation) -> Result<(), LaunchError> {
        let command = VmCommand::for_operation(op, &self.config);
        info!("{} VM '{}': {}", op.verb(), self.config.vm_name, command);

        match self.launcher.launch(&command) {
            Ok(()) => {
                self.notifier.info(
                    STATUS_TITLE,
                    &format!("VM '{}' {} successfully!", self.config.vm_name, op.past_tense()),
                );
                Ok(())
            }
            Err(err) => {
                self.notifier
                    .error(ERROR_TITLE, &format!("Failed to {} VM: {}", op.verb(), err));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::testing::{FakeLauncher, RecordingNotifier};
    use std::io;

    #[test]
    fn test_start_reports_success() {
        let launcher = FakeLauncher::default();
        let notifier = RecordingNotifier::default();
        let manager = VmManager::new(
            ResolvedConfig::new("srv1", "/usr/bin/VBoxManage"),
            &launcher,
            &notifier,
        );

        manager.start_vm().unwrap();

        assert_eq!(
            launcher.launched.borrow().as_slice(),
            [r#"/usr/bin/VBoxManage startvm "srv1" --type headless"#]
        );
        assert_eq!(
            notifier.messages.borrow().as_slice(),
            [(
                "VM Control".to_string(),
                "VM 'srv1' started successfully!".to_string()
            )]
        );
    }

    #[test]
    fn test_stop_reports_success() {
        let launcher = FakeLauncher::default();
        let notifier = RecordingNotifier::default();
        let manager = VmManager::new(ResolvedConfig::default(), &launcher, &notifier);

        manager.stop_vm().unwrap();

        assert_eq!(
            launcher.launched.borrow().as_slice(),
            [r#"VBoxManage controlvm "Your_VM_Name" poweroff"#]
        );
        assert_eq!(
            notifier.messages.borrow()[0].1,
            "VM 'Your_VM_Name' stopped successfully!"
        );
    }

    #[test]
    fn test_launch_failure_is_reported_and_later_commands_still_run() {
        let launcher = FakeLauncher::default();
        let notifier = RecordingNotifier::default();
        let manager = VmManager::new(ResolvedConfig::with_default_tool("srv1"), &launcher, &notifier);

        launcher.fail_next.set(true);
        let err = manager.start_vm().unwrap_err();
        assert_eq!(err.source.kind(), io::ErrorKind::PermissionDenied);

        {
            let messages = notifier.messages.borrow();
            assert_eq!(messages[0].0, "Error");
            assert!(messages[0].1.starts_with("Failed to start VM: "));
            assert!(messages[0].1.contains("access denied"));
        }

        manager.stop_vm().unwrap();
        assert_eq!(launcher.launched.borrow().len(), 1);
        assert_eq!(notifier.messages.borrow().len(), 2);
    }

    #[test]
    fn test_config_accessor() {
        let launcher = FakeLauncher::default();
        let notifier = RecordingNotifier::default();
        let manager = VmManager::new(ResolvedConfig::with_default_tool("x y"), &launcher, &notifier);

        assert_eq!(manager.config().vm_name, "x y");
    }
}
