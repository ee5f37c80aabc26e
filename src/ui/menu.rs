use crate::model::{Notice, NoticeSeverity, TargetState, UserAction};
use crate::utils::truncate;

pub const APP_NAME: &str = "Traywarden";

const MENU_ID_TOGGLE: &str = "toggle";
const MENU_ID_START: &str = "start";
const MENU_ID_STOP: &str = "stop";
const MENU_ID_EXIT: &str = "exit";
// Windows caps tray tooltips at 127 characters.
const MAX_TOOLTIP_LEN: usize = 127;

pub fn menu_id(action: UserAction) -> &'static str {
    match action {
        UserAction::Toggle => MENU_ID_TOGGLE,
        UserAction::Start => MENU_ID_START,
        UserAction::Stop => MENU_ID_STOP,
        UserAction::Exit => MENU_ID_EXIT,
    }
}

pub fn parse_menu_action(raw: &str) -> Option<UserAction> {
    match raw {
        MENU_ID_TOGGLE => Some(UserAction::Toggle),
        MENU_ID_START => Some(UserAction::Start),
        MENU_ID_STOP => Some(UserAction::Stop),
        MENU_ID_EXIT => Some(UserAction::Exit),
        _ => None,
    }
}

pub fn menu_label(action: UserAction, name: &str) -> String {
    match action {
        UserAction::Toggle => format!("Toggle {}", name),
        UserAction::Start => format!("Start {}", name),
        UserAction::Stop => format!("Stop {}", name),
        UserAction::Exit => "Exit".to_string(),
    }
}

/// Whether a separator follows `action` in the menu.
pub fn separator_after(action: UserAction) -> bool {
    matches!(action, UserAction::Toggle | UserAction::Stop)
}

pub fn build_tooltip(name: &str, state: TargetState, notice: Option<&Notice>) -> String {
    let mut lines = vec![format!("{}: {}", APP_NAME, name)];
    lines.push(format!("Target is {}", state));

    if let Some(notice) = notice {
        let prefix = match notice.severity {
            NoticeSeverity::Info => "",
            NoticeSeverity::Warning => "⚠️ ",
            NoticeSeverity::Error => "⛔ ",
        };
        lines.push(format!("Last action: {}{}", prefix, notice.message));
    }

    truncate(&lines.join("\n"), MAX_TOOLTIP_LEN)
}

#[cfg(target_os = "windows")]
pub use tray::build_menu;

#[cfg(target_os = "windows")]
mod tray {
    use anyhow::Result;
    use tray_icon::menu::{Menu, MenuItem, PredefinedMenuItem};

    use super::{menu_id, menu_label, separator_after};
    use crate::presentation::MenuEntry;

    pub fn build_menu(entries: &[MenuEntry], name: &str) -> Result<Menu> {
        let menu = Menu::new();
        for entry in entries {
            let item = MenuItem::with_id(
                menu_id(entry.action),
                menu_label(entry.action, name),
                entry.enabled,
                None,
            );
            menu.append(&item)?;
            if separator_after(entry.action) {
                menu.append(&PredefinedMenuItem::separator())?;
            }
        }
        Ok(menu)
    }
}
