//! Start, stop, forced termination and visibility toggling
//!
//! Every operation is fire-and-forget: it returns as soon as the host has
//! accepted the request and never retries. Failures come back as a `Notice`
//! for the user; nothing here touches engine state.

use log::{info, warn};

use crate::config::{LaunchCommand, StopCommand, TargetConfig};
use crate::host::WindowHost;
use crate::model::{KillOutcome, Notice, TargetHandle};
use crate::target::locate;

pub struct ProcessController<'a, H: WindowHost> {
    host: &'a H,
    config: &'a TargetConfig,
}

impl<'a, H: WindowHost> ProcessController<'a, H> {
    pub fn new(host: &'a H, config: &'a TargetConfig) -> Self {
        Self { host, config }
    }

    pub fn start(&self) -> Result<(), Notice> {
        self.run(&self.config.start, "start")
    }

    /// Runs the configured stop command, or terminates the owning process when
    /// the stop command is `KILL`.
    pub fn stop(&self) -> Result<(), Notice> {
        match &self.config.stop {
            StopCommand::Run(command) => self.run(command, "stop"),
            StopCommand::Kill => self.force_kill(&self.config.window_title),
        }
    }

    /// Re-locates the target and terminates its owning process.
    ///
    /// Never reuses a handle from an earlier lookup, so a stale pid cannot be
    /// killed.
    pub fn force_kill(&self, title_substring: &str) -> Result<(), Notice> {
        let Some(handle) = locate(self.host, title_substring) else {
            return Err(Notice::warning(format!(
                "Target window '{}' not found",
                title_substring
            )));
        };
        let Some(pid) = handle.pid else {
            return Err(Notice::error(format!(
                "Unable to resolve the process owning '{}'",
                title_substring
            )));
        };

        match self.host.terminate(pid) {
            KillOutcome::Success => {
                info!("Terminated {} (PID {})", self.config.name, pid);
                Ok(())
            }
            KillOutcome::AlreadyExited => {
                info!("{} (PID {}) was already gone", self.config.name, pid);
                Ok(())
            }
            KillOutcome::PermissionDenied => Err(Notice::error(format!(
                "Permission denied terminating process {}",
                pid
            ))),
            KillOutcome::Failed(code) => Err(Notice::error(format!(
                "Failed to kill process {} (error {})",
                pid, code
            ))),
        }
    }

    /// Hides a visible window, or shows and raises a hidden one.
    ///
    /// Without a handle there is nothing to toggle and this is a no-op.
    pub fn toggle(&self, handle: Option<&TargetHandle<H::Window>>) -> Result<(), Notice> {
        let Some(handle) = handle else {
            return Ok(());
        };
        let window = handle.window;
        if self.host.is_visible(window) {
            self.host
                .set_visible(window, false)
                .map_err(|err| Notice::error(format!("Failed to hide {}: {}", self.config.name, err)))
        } else {
            self.host
                .set_visible(window, true)
                .map_err(|err| Notice::error(format!("Failed to show {}: {}", self.config.name, err)))?;
            if let Err(err) = self.host.bring_to_foreground(window) {
                warn!("Could not bring {} to the foreground: {}", self.config.name, err);
            }
            Ok(())
        }
    }

    fn run(&self, command: &LaunchCommand, verb: &str) -> Result<(), Notice> {
        match self.host.launch(&command.program, &command.params) {
            Ok(()) => {
                info!("Issued {} command: {} {}", verb, command.program, command.params);
                Ok(())
            }
            Err(err) => Err(Notice::error(format!(
                "Failed to {} {}: {}",
                verb, self.config.name, err
            ))),
        }
    }
}
