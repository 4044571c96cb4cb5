//! User-facing status reporting

pub mod notifier;

pub use notifier::{ConsoleNotifier, DialogNotifier, Notifier, ERROR_TITLE, STATUS_TITLE};
