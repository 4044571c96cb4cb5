//! In-memory launcher and notifier for unit tests

use crate::ui::Notifier;
use crate::vm::command::VmCommand;
use crate::vm::launcher::{LaunchError, Launcher};
use std::cell::{Cell, RefCell};
use std::io;

/// Records command lines instead of spawning them
#[derive(Default)]
pub(crate) struct FakeLauncher {
    pub launched: RefCell<Vec<String>>,
    pub fail_next: Cell<bool>,
}

impl Launcher for &FakeLauncher {
    fn launch(&self, command: &VmCommand) -> Result<(), LaunchError> {
        if self.fail_next.replace(false) {
            return Err(LaunchError {
                command: command.to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
            });
        }
        self.launched.borrow_mut().push(command.to_string());
        Ok(())
    }
}

/// Keeps every `(title, message)` pair it is asked to show
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub messages: RefCell<Vec<(String, String)>>,
}

impl Notifier for &RecordingNotifier {
    fn info(&self, title: &str, message: &str) {
        self.messages
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }

    fn error(&self, title: &str, message: &str) {
        self.messages
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }
}
