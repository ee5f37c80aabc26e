//! In-memory host and sink used by the unit tests.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use anyhow::{Result, bail};

use crate::config::{LaunchCommand, StopCommand, TargetConfig};
use crate::host::WindowHost;
use crate::model::{KillOutcome, Notice, TargetState};
use crate::presentation::{IconSelector, MenuEntry, PresentationSink};

#[derive(Clone, Debug)]
struct FakeWindow {
    id: usize,
    title: String,
    pid: u32,
    visible: bool,
}

pub struct FakeHost {
    windows: RefCell<Vec<FakeWindow>>,
    launches: RefCell<Vec<(String, String)>>,
    terminations: RefCell<Vec<u32>>,
    visibility_changes: RefCell<Vec<(usize, bool)>>,
    foregrounded: RefCell<Vec<usize>>,
    fail_launches: Cell<bool>,
    fail_visibility: Cell<bool>,
    kill_outcome: Cell<KillOutcome>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            windows: RefCell::new(Vec::new()),
            launches: RefCell::new(Vec::new()),
            terminations: RefCell::new(Vec::new()),
            visibility_changes: RefCell::new(Vec::new()),
            foregrounded: RefCell::new(Vec::new()),
            fail_launches: Cell::new(false),
            fail_visibility: Cell::new(false),
            kill_outcome: Cell::new(KillOutcome::Success),
        }
    }

    /// Appends a window to the end of the enumeration order.
    pub fn open_window(&self, id: usize, title: &str, pid: u32, visible: bool) -> usize {
        self.windows.borrow_mut().push(FakeWindow {
            id,
            title: title.to_string(),
            pid,
            visible,
        });
        id
    }

    pub fn close_window(&self, id: usize) {
        self.windows.borrow_mut().retain(|w| w.id != id);
    }

    pub fn set_window_visible(&self, id: usize, visible: bool) {
        if let Some(w) = self.windows.borrow_mut().iter_mut().find(|w| w.id == id) {
            w.visible = visible;
        }
    }

    pub fn window_visible(&self, id: usize) -> bool {
        self.windows
            .borrow()
            .iter()
            .any(|w| w.id == id && w.visible)
    }

    pub fn fail_launches(&self, fail: bool) {
        self.fail_launches.set(fail);
    }

    pub fn fail_visibility(&self, fail: bool) {
        self.fail_visibility.set(fail);
    }

    pub fn set_kill_outcome(&self, outcome: KillOutcome) {
        self.kill_outcome.set(outcome);
    }

    pub fn launches(&self) -> Vec<(String, String)> {
        self.launches.borrow().clone()
    }

    pub fn terminations(&self) -> Vec<u32> {
        self.terminations.borrow().clone()
    }

    pub fn visibility_changes(&self) -> Vec<(usize, bool)> {
        self.visibility_changes.borrow().clone()
    }

    pub fn foregrounded(&self) -> Vec<usize> {
        self.foregrounded.borrow().clone()
    }
}

impl WindowHost for FakeHost {
    type Window = usize;

    fn enumerate_windows(&self) -> Vec<usize> {
        self.windows.borrow().iter().map(|w| w.id).collect()
    }

    fn window_title(&self, window: usize) -> String {
        self.windows
            .borrow()
            .iter()
            .find(|w| w.id == window)
            .map(|w| w.title.clone())
            .unwrap_or_default()
    }

    fn is_visible(&self, window: usize) -> bool {
        self.window_visible(window)
    }

    fn set_visible(&self, window: usize, visible: bool) -> Result<()> {
        self.visibility_changes.borrow_mut().push((window, visible));
        if self.fail_visibility.get() {
            bail!("window {} refused", window);
        }
        self.set_window_visible(window, visible);
        Ok(())
    }

    fn bring_to_foreground(&self, window: usize) -> Result<()> {
        self.foregrounded.borrow_mut().push(window);
        Ok(())
    }

    fn owner_pid(&self, window: usize) -> Option<u32> {
        self.windows
            .borrow()
            .iter()
            .find(|w| w.id == window)
            .map(|w| w.pid)
    }

    fn launch(&self, command: &str, params: &str) -> Result<()> {
        self.launches
            .borrow_mut()
            .push((command.to_string(), params.to_string()));
        if self.fail_launches.get() {
            bail!("cannot find '{}'", command);
        }
        Ok(())
    }

    fn terminate(&self, pid: u32) -> KillOutcome {
        self.terminations.borrow_mut().push(pid);
        let outcome = self.kill_outcome.get();
        if outcome == KillOutcome::Success {
            self.windows.borrow_mut().retain(|w| w.pid != pid);
        }
        outcome
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Render {
    pub state: TargetState,
    pub icon: IconSelector,
    pub menu: Vec<MenuEntry>,
}

#[derive(Default)]
pub struct FakeSink {
    pub renders: Vec<Render>,
    pub notices: Vec<Notice>,
    pub menu_requests: usize,
    pub removed: usize,
    pending: Option<(TargetState, IconSelector)>,
}

impl PresentationSink for FakeSink {
    fn show(&mut self, state: TargetState, icon: IconSelector) {
        self.pending = Some((state, icon));
    }

    fn set_menu(&mut self, entries: &[MenuEntry]) {
        if let Some((state, icon)) = self.pending.take() {
            self.renders.push(Render {
                state,
                icon,
                menu: entries.to_vec(),
            });
        }
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }

    fn open_menu(&mut self) {
        self.menu_requests += 1;
    }

    fn remove(&mut self) {
        self.removed += 1;
    }
}

pub fn notepad_config() -> TargetConfig {
    TargetConfig {
        name: "Notepad".to_string(),
        window_title: "Notepad".to_string(),
        start: LaunchCommand {
            program: "notepad.exe".to_string(),
            params: "/A".to_string(),
        },
        stop: StopCommand::Run(LaunchCommand {
            program: "taskkill".to_string(),
            params: "/IM notepad.exe".to_string(),
        }),
        icon_on: None,
        icon_off: None,
        autostart: false,
        poll_interval: Duration::from_millis(200),
    }
}

pub fn kill_config() -> TargetConfig {
    TargetConfig {
        stop: StopCommand::Kill,
        ..notepad_config()
    }
}
