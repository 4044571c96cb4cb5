//! Status and error notifications

use log::{debug, error, info};
use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Title of success dialogs
pub const STATUS_TITLE: &str = "VM Control";

/// Title of failure dialogs
pub const ERROR_TITLE: &str = "Error";

/// Reports outcomes to the user
pub trait Notifier {
    fn info(&self, title: &str, message: &str);
    fn error(&self, title: &str, message: &str);
}

/// Blocking modal message boxes with an OK button
#[derive(Debug, Clone, Copy)]
pub struct DialogNotifier {
    show_success: bool,
}

impl DialogNotifier {
    /// `show_success: false` keeps successes in the log and only pops up errors
    pub fn new(show_success: bool) -> Self {
        Self { show_success }
    }

    fn show(level: MessageLevel, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl Default for DialogNotifier {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Notifier for DialogNotifier {
    fn info(&self, title: &str, message: &str) {
        info!("{message}");
        if self.show_success {
            Self::show(MessageLevel::Info, title, message);
        }
    }

    fn error(&self, title: &str, message: &str) {
        error!("{message}");
        Self::show(MessageLevel::Error, title, message);
    }
}

/// Prints successes to stdout for the one-shot CLI commands.
///
/// Failures are only logged; the caller returns them and `main` prints them.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn info(&self, _title: &str, message: &str) {
        println!("{message}");
    }

    fn error(&self, title: &str, message: &str) {
        debug!("{title}: {message}");
    }
}
