//! Notification-area icon, its menu and the event loop driving it

pub mod icon;
pub mod menu;
pub mod session;

pub use menu::MenuAction;
pub use session::{ensure_tray_supported, run_event_loop, TraySession};
