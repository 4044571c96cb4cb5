//! Tray context menu

use anyhow::Result;
use tray_icon::menu::{Menu, MenuItem};

/// The fixed set of things the tray menu can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Stop,
    Exit,
}

impl MenuAction {
    /// Menu order
    pub const ALL: [MenuAction; 3] = [MenuAction::Start, MenuAction::Stop, MenuAction::Exit];

    pub fn id(self) -> &'static str {
        match self {
            MenuAction::Start => "start-vm",
            MenuAction::Stop => "stop-vm",
            MenuAction::Exit => "exit",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Start => "Start VM",
            MenuAction::Stop => "Stop VM",
            MenuAction::Exit => "Exit",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }
}

/// Build the three-item context menu
pub fn build_menu() -> Result<Menu> {
    let menu = Menu::new();
    for action in MenuAction::ALL {
        menu.append(&MenuItem::with_id(action.id(), action.label(), true, None))?;
    }
    Ok(menu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels_in_order() {
        let labels: Vec<_> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["Start VM", "Stop VM", "Exit"]);
    }

    #[test]
    fn test_ids_map_back_to_actions() {
        for action in MenuAction::ALL {
            assert_eq!(MenuAction::from_id(action.id()), Some(action));
        }
        assert_eq!(MenuAction::from_id("reboot"), None);
    }
}
