// On Windows, use the "windows" subsystem so no console window appears.
#![cfg_attr(windows, windows_subsystem = "windows")]

use vm_tray::app::{self, TrayProfile};
use vm_tray::utils::logging::init_logging;

fn main() {
    init_logging();

    if let Err(err) = app::run(TrayProfile::virtual_box_tray()) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
