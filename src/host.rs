//! Window/process host facility
//!
//! Everything the core needs from the desktop environment, and nothing more.
//! The Win32 implementation lives under `platform::windows`; tests use the
//! in-memory host from `crate::testing`.

use anyhow::Result;

use crate::model::KillOutcome;

pub trait WindowHost {
    /// Native window reference. Cheap to copy, meaningless once the window closes.
    type Window: Copy + Eq + std::fmt::Debug;

    /// Top-level windows in whatever order the host reports them.
    fn enumerate_windows(&self) -> Vec<Self::Window>;

    fn window_title(&self, window: Self::Window) -> String;

    /// Live visibility attribute; never cached by callers.
    fn is_visible(&self, window: Self::Window) -> bool;

    fn set_visible(&self, window: Self::Window, visible: bool) -> Result<()>;

    /// Raise the window above others. Best-effort.
    fn bring_to_foreground(&self, window: Self::Window) -> Result<()>;

    fn owner_pid(&self, window: Self::Window) -> Option<u32>;

    /// Hand `command` to the host launcher and return once it is accepted.
    fn launch(&self, command: &str, params: &str) -> Result<()>;

    /// Forcibly terminate `pid` without waiting for it to exit.
    fn terminate(&self, pid: u32) -> KillOutcome;
}
