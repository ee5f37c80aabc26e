//! Tray-backed presentation sink.

use anyhow::{Context, Result, anyhow};
use log::{debug, error};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

use crate::model::{Notice, TargetState};
use crate::presentation::{IconSelector, MenuEntry, PresentationSink};
use crate::ui::icon::{IconImage, IconSet};
use crate::ui::menu::{build_menu, build_tooltip};

pub struct TrayPresenter {
    tray_icon: Option<TrayIcon>,
    icon_on: Icon,
    icon_off: Icon,
    name: String,
    state: TargetState,
    last_notice: Option<Notice>,
}

impl TrayPresenter {
    pub fn new(name: &str, icons: &IconSet) -> Result<Self> {
        let icon_on = to_tray_icon(&icons.on).context("failed to build IconOn")?;
        let icon_off = to_tray_icon(&icons.off).context("failed to build IconOff")?;
        let state = TargetState::Stopped;

        let tray_icon = TrayIconBuilder::new()
            .with_icon(icon_off.clone())
            .with_tooltip(build_tooltip(name, state, None))
            .with_menu_on_left_click(false)
            .build()
            .context("failed to create tray icon")?;
        tray_icon
            .set_visible(true)
            .context("failed to show tray icon")?;

        Ok(Self {
            tray_icon: Some(tray_icon),
            icon_on,
            icon_off,
            name: name.to_string(),
            state,
            last_notice: None,
        })
    }

    fn refresh_tooltip(&self) {
        let Some(tray_icon) = self.tray_icon.as_ref() else {
            return;
        };
        let tooltip = build_tooltip(&self.name, self.state, self.last_notice.as_ref());
        if let Err(err) = tray_icon.set_tooltip(Some(tooltip.as_str())) {
            error!("Failed to update tooltip: {}", err);
        }
    }
}

impl PresentationSink for TrayPresenter {
    fn show(&mut self, state: TargetState, icon: IconSelector) {
        self.state = state;
        let Some(tray_icon) = self.tray_icon.as_ref() else {
            return;
        };
        let icon = match icon {
            IconSelector::On => self.icon_on.clone(),
            IconSelector::Off => self.icon_off.clone(),
        };
        if let Err(err) = tray_icon.set_icon(Some(icon)) {
            error!("Failed to update tray icon: {}", err);
        }
        self.refresh_tooltip();
    }

    fn set_menu(&mut self, entries: &[MenuEntry]) {
        let Some(tray_icon) = self.tray_icon.as_ref() else {
            return;
        };
        match build_menu(entries, &self.name) {
            Ok(menu) => tray_icon.set_menu(Some(Box::new(menu))),
            Err(err) => error!("Failed to rebuild menu: {}", err),
        }
    }

    fn notify(&mut self, notice: &Notice) {
        self.last_notice = Some(notice.clone());
        self.refresh_tooltip();
        crate::notify::notify_user(&self.name, notice);
    }

    fn open_menu(&mut self) {
        // The native tray opens the context menu on secondary click itself.
        debug!("Context menu requested");
    }

    fn remove(&mut self) {
        if let Some(tray_icon) = self.tray_icon.take() {
            if let Err(err) = tray_icon.set_visible(false) {
                error!("Failed to hide tray icon: {}", err);
            }
            drop(tray_icon);
        }
    }
}

fn to_tray_icon(image: &IconImage) -> Result<Icon> {
    Icon::from_rgba(image.rgba.clone(), image.width, image.height)
        .map_err(|e| anyhow!("failed to create icon: {e}"))
}
