//! What the tray affordance should look like for a given target state.
//!
//! The engine decides when to render and with which state; the sink decides
//! how. Everything here is a pure function of `TargetState`.

use crate::model::{Notice, TargetState, UserAction};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconSelector {
    On,
    Off,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub action: UserAction,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresentationDescriptor {
    pub state: TargetState,
    pub icon: IconSelector,
    pub menu: Vec<MenuEntry>,
}

impl PresentationDescriptor {
    pub fn for_state(state: TargetState) -> Self {
        let running = state.is_running();
        let icon = if running {
            IconSelector::On
        } else {
            IconSelector::Off
        };
        let menu = vec![
            MenuEntry {
                action: UserAction::Toggle,
                enabled: running,
            },
            MenuEntry {
                action: UserAction::Start,
                enabled: !running,
            },
            MenuEntry {
                action: UserAction::Stop,
                enabled: running,
            },
            MenuEntry {
                action: UserAction::Exit,
                enabled: true,
            },
        ];
        Self { state, icon, menu }
    }
}

/// Renders the affordance. Owned by the engine for its whole lifetime.
pub trait PresentationSink {
    fn show(&mut self, state: TargetState, icon: IconSelector);

    fn set_menu(&mut self, entries: &[MenuEntry]);

    /// Surface a one-shot diagnostic to the user.
    fn notify(&mut self, notice: &Notice);

    /// Secondary click on the affordance.
    fn open_menu(&mut self) {}

    /// Release the affordance. Called exactly once, while terminating.
    fn remove(&mut self);
}
