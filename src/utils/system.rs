//! System utility functions

use std::path::{Path, PathBuf};

/// Where the OS would find `tool`: explicit paths must exist, bare names go
/// through PATH.
pub fn locate_tool(tool: &str) -> Option<PathBuf> {
    let path = Path::new(tool);
    if path.is_absolute() || path.components().count() > 1 {
        return path.is_file().then(|| path.to_path_buf());
    }
    which::which(tool).ok()
}

/// Reconnect stdout/stderr to the console the program was started from.
///
/// Windows GUI-subsystem binaries start without one; elsewhere this is a no-op.
pub fn attach_parent_console() {
    #[cfg(windows)]
    {
        use ::windows::Win32::System::Console::{AttachConsole, ATTACH_PARENT_PROCESS};
        // Fails when launched from Explorer, which has no console to attach to.
        let _ = unsafe { AttachConsole(ATTACH_PARENT_PROCESS) };
    }
}
