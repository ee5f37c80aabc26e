use crate::host::WindowHost;
use crate::model::{TargetHandle, TargetState};

/// Maps a lookup result onto a `TargetState`. Visibility is queried live.
pub fn classify<H: WindowHost>(host: &H, handle: Option<&TargetHandle<H::Window>>) -> TargetState {
    match handle {
        None => TargetState::Stopped,
        Some(handle) if host.is_visible(handle.window) => TargetState::Visible,
        Some(_) => TargetState::Hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::locate;
    use crate::testing::FakeHost;

    #[test]
    fn absent_target_is_stopped() {
        let host = FakeHost::new();
        assert_eq!(classify(&host, None), TargetState::Stopped);
    }

    #[test]
    fn visibility_selects_hidden_or_visible() {
        let host = FakeHost::new();
        host.open_window(1, "Notepad", 10, false);
        let handle = locate(&host, "Notepad");
        assert_eq!(classify(&host, handle.as_ref()), TargetState::Hidden);

        host.set_window_visible(1, true);
        assert_eq!(classify(&host, handle.as_ref()), TargetState::Visible);
    }
}
