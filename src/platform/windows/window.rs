//! Win32 window host: enumeration, visibility, launch and termination.

use anyhow::{Result, bail};
use windows::Win32::Foundation::{BOOL, HWND, LPARAM};
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GWL_STYLE, GetWindowLongW, GetWindowTextW, GetWindowThreadProcessId, IsWindow,
    SW_HIDE, SW_SHOWNORMAL, SetForegroundWindow, ShowWindow, WS_VISIBLE,
};
use windows::core::{PCWSTR, w};

use crate::host::WindowHost;
use crate::model::KillOutcome;
use crate::platform::windows::kill::terminate_pid;
use crate::utils::to_wide;

const TITLE_CAPACITY: usize = 1024;

#[derive(Clone, Copy, Debug, Default)]
pub struct Win32Host;

unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam carries the `&mut Vec<HWND>` owned by `enumerate_windows`,
    // which outlives the EnumWindows call.
    let windows = unsafe { &mut *(lparam.0 as *mut Vec<HWND>) };
    windows.push(hwnd);
    BOOL(1)
}

impl WindowHost for Win32Host {
    type Window = HWND;

    fn enumerate_windows(&self) -> Vec<HWND> {
        let mut windows: Vec<HWND> = Vec::new();
        let lparam = LPARAM(&mut windows as *mut Vec<HWND> as isize);
        // SAFETY: collect_window only touches the vector behind lparam.
        if let Err(err) = unsafe { EnumWindows(Some(collect_window), lparam) } {
            log::warn!("EnumWindows failed: {}", err);
        }
        windows
    }

    fn window_title(&self, window: HWND) -> String {
        let mut buf = [0u16; TITLE_CAPACITY];
        // SAFETY: buf is a valid, writable UTF-16 buffer.
        let len = unsafe { GetWindowTextW(window, &mut buf) };
        if len <= 0 {
            return String::new();
        }
        String::from_utf16_lossy(&buf[..len as usize])
    }

    fn is_visible(&self, window: HWND) -> bool {
        // SAFETY: reading a style word has no side effects, even on a stale HWND.
        let style = unsafe { GetWindowLongW(window, GWL_STYLE) } as u32;
        style & WS_VISIBLE.0 == WS_VISIBLE.0
    }

    fn set_visible(&self, window: HWND, visible: bool) -> Result<()> {
        // SAFETY: IsWindow/ShowWindow accept any HWND value.
        unsafe {
            if !IsWindow(window).as_bool() {
                bail!("window no longer exists");
            }
            let _ = ShowWindow(window, if visible { SW_SHOWNORMAL } else { SW_HIDE });
        }
        Ok(())
    }

    fn bring_to_foreground(&self, window: HWND) -> Result<()> {
        // SAFETY: SetForegroundWindow accepts any HWND value.
        if !unsafe { SetForegroundWindow(window) }.as_bool() {
            bail!("SetForegroundWindow refused");
        }
        Ok(())
    }

    fn owner_pid(&self, window: HWND) -> Option<u32> {
        let mut pid = 0u32;
        // SAFETY: pid is a valid out pointer for the duration of the call.
        unsafe { GetWindowThreadProcessId(window, Some(&mut pid as *mut u32)) };
        (pid != 0).then_some(pid)
    }

    fn launch(&self, command: &str, params: &str) -> Result<()> {
        let file = to_wide(command);
        let params = to_wide(params);
        // SAFETY: both buffers are NUL-terminated and outlive the call.
        let result = unsafe {
            ShellExecuteW(
                HWND(std::ptr::null_mut()),
                w!("open"),
                PCWSTR(file.as_ptr()),
                PCWSTR(params.as_ptr()),
                PCWSTR::null(),
                SW_SHOWNORMAL,
            )
        };
        // ShellExecute reports success with a value greater than 32.
        let code = result.0 as isize;
        if code <= 32 {
            bail!("ShellExecute failed with code {}", code);
        }
        Ok(())
    }

    fn terminate(&self, pid: u32) -> KillOutcome {
        terminate_pid(pid)
    }
}
