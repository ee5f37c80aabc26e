use std::fmt;

/// Classification of the supervised target, re-derived on every poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetState {
    Stopped,
    Hidden,
    Visible,
}

impl TargetState {
    pub fn is_running(self) -> bool {
        self != TargetState::Stopped
    }
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TargetState::Stopped => "stopped",
            TargetState::Hidden => "hidden",
            TargetState::Visible => "visible",
        };
        f.write_str(label)
    }
}

/// A located target window and the process that owns it.
///
/// Only valid for the lookup-then-act sequence that produced it. Never store
/// one across polls: the window may have closed and its pid been reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetHandle<W> {
    pub window: W,
    pub pid: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Toggle,
    Start,
    Stop,
    Exit,
}

/// Everything that can wake the engine, already stripped of host details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    Tick,
    UserAction(UserAction),
    MenuOpenRequest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnginePhase {
    Initializing,
    Running,
    Terminating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineFlow {
    Continue,
    Exit,
}

/// One-shot user-facing diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: NoticeSeverity,
}

impl Notice {
    pub fn new(message: String, severity: NoticeSeverity) -> Self {
        Self { message, severity }
    }

    pub fn warning(message: String) -> Self {
        Self::new(message, NoticeSeverity::Warning)
    }

    pub fn error(message: String) -> Self {
        Self::new(message, NoticeSeverity::Error)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeSeverity {
    Info,
    Warning,
    Error,
}

/// Result of asking the host to terminate a process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KillOutcome {
    Success,
    AlreadyExited,
    PermissionDenied,
    Failed(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_stopped_is_not_running() {
        assert!(!TargetState::Stopped.is_running());
        assert!(TargetState::Hidden.is_running());
        assert!(TargetState::Visible.is_running());
    }

    #[test]
    fn notice_constructors_set_severity() {
        assert_eq!(Notice::warning("b".into()).severity, NoticeSeverity::Warning);
        assert_eq!(Notice::error("c".into()).severity, NoticeSeverity::Error);
    }
}
