//! Tray session and its winit event loop

use crate::tray::icon::tray_icon_image;
use crate::tray::menu::{build_menu, MenuAction};
use crate::ui::Notifier;
use crate::vm::{Launcher, VmManager};
use crate::Result;
use anyhow::anyhow;
use log::{debug, info, warn};
use tray_icon::menu::MenuEvent;
use tray_icon::{TrayIcon, TrayIconBuilder};
use winit::application::ApplicationHandler;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

/// Events forwarded into the loop from the menu callback
#[derive(Debug)]
pub enum TrayEvent {
    Menu(MenuEvent),
}

/// The live icon. Dropping it removes the icon from the notification area.
pub struct TraySession {
    #[allow(unused)]
    icon: TrayIcon,
}

impl TraySession {
    pub fn new(tooltip: &str) -> Result<Self> {
        let icon = TrayIconBuilder::new()
            .with_menu(Box::new(build_menu()?))
            .with_tooltip(tooltip)
            .with_icon(tray_icon_image()?)
            .build()?;
        Ok(Self { icon })
    }
}

struct TrayApp<L, N> {
    tooltip: String,
    manager: VmManager<L, N>,
    session: Option<TraySession>,
    failure: Option<anyhow::Error>,
}

impl<L: Launcher, N: Notifier> TrayApp<L, N> {
    fn dispatch(&mut self, action: MenuAction, event_loop: &ActiveEventLoop) {
        debug!("menu action {action:?}");
        // Launch failures were already shown to the user; the tray stays up.
        let outcome = match action {
            MenuAction::Start => self.manager.start_vm(),
            MenuAction::Stop => self.manager.stop_vm(),
            MenuAction::Exit => {
                info!("exit requested");
                drop(self.session.take());
                event_loop.exit();
                return;
            }
        };
        if let Err(err) = outcome {
            warn!("{} failed: {err}", action.label());
        }
    }
}

impl<L: Launcher, N: Notifier> ApplicationHandler<TrayEvent> for TrayApp<L, N> {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        if cause != StartCause::Init || self.session.is_some() {
            return;
        }
        match TraySession::new(&self.tooltip) {
            Ok(session) => {
                info!("tray icon ready ({})", self.tooltip);
                self.session = Some(session);
            }
            Err(err) => {
                self.failure = Some(err.context("failed to create tray icon"));
                event_loop.exit();
            }
        }
    }

    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, _event: WindowEvent) {
        // No windows; the tray icon is the whole UI
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: TrayEvent) {
        match event {
            TrayEvent::Menu(menu_event) => match MenuAction::from_id(menu_event.id.0.as_str()) {
                Some(action) => self.dispatch(action, event_loop),
                None => debug!("ignoring unknown menu id {:?}", menu_event.id),
            },
        }
    }
}

/// Fails on targets where the icon cannot run on the winit loop.
///
/// On Linux `tray-icon` builds its menu with GTK, which needs its own
/// initialised main loop.
pub fn ensure_tray_supported() -> Result<()> {
    if cfg!(any(windows, target_os = "macos")) {
        Ok(())
    } else {
        Err(anyhow!(
            "the tray icon is not supported on {}; use `vm-tray start` or `vm-tray stop` instead",
            std::env::consts::OS
        ))
    }
}

/// Show the tray icon and block until the user picks Exit
pub fn run_event_loop<L: Launcher, N: Notifier>(tooltip: &str, manager: VmManager<L, N>) -> Result<()> {
    let event_loop = EventLoop::<TrayEvent>::with_user_event().build()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        if proxy.send_event(TrayEvent::Menu(event)).is_err() {
            debug!("event loop closed, dropping menu event");
        }
    }));

    let mut app = TrayApp {
        tooltip: tooltip.to_string(),
        manager,
        session: None,
        failure: None,
    };
    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tray_support_matches_target() {
        let supported = ensure_tray_supported().is_ok();
        assert_eq!(supported, cfg!(any(windows, target_os = "macos")));
    }
}
