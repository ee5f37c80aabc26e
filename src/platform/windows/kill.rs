//! Windows process termination using TerminateProcess API

use windows::Win32::Foundation::{
    CloseHandle, ERROR_ACCESS_DENIED, ERROR_INVALID_PARAMETER, ERROR_NOT_FOUND,
};
use windows::Win32::System::Threading::{OpenProcess, PROCESS_TERMINATE, TerminateProcess};
use windows::core::HRESULT;

use crate::model::KillOutcome;

/// Terminates `pid` immediately. Returns once the request is accepted; does
/// not wait for the process to exit.
pub fn terminate_pid(pid: u32) -> KillOutcome {
    // SAFETY: the handle comes from OpenProcess and is closed exactly once.
    unsafe {
        let handle = match OpenProcess(PROCESS_TERMINATE, false, pid) {
            Ok(h) => h,
            Err(e) => {
                log::error!("OpenProcess({}) failed: {:?}", pid, e);
                return outcome_for(e.code());
            }
        };

        let result = TerminateProcess(handle, 1);
        let _ = CloseHandle(handle);
        match result {
            Ok(()) => KillOutcome::Success,
            // Process may have exited between open and terminate
            Err(e) => outcome_for(e.code()),
        }
    }
}

fn outcome_for(code: HRESULT) -> KillOutcome {
    if code == HRESULT::from_win32(ERROR_ACCESS_DENIED.0) {
        KillOutcome::PermissionDenied
    } else if code == HRESULT::from_win32(ERROR_INVALID_PARAMETER.0)
        || code == HRESULT::from_win32(ERROR_NOT_FOUND.0)
    {
        KillOutcome::AlreadyExited
    } else {
        KillOutcome::Failed(code.0)
    }
}
