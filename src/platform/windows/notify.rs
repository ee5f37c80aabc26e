//! Windows toast notifications using PowerShell, plus the fatal-error box.

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{MB_ICONERROR, MB_OK, MessageBoxW};
use windows::core::PCWSTR;

use crate::ui::menu::APP_NAME;
use crate::utils::{hidden_command, to_wide};

const TOAST_APP_ID: &str = "Traywarden.App";

/// Fire-and-forget toast; the PowerShell child is not awaited.
pub fn show_toast(title: &str, body: &str) {
    let title = escape(title);
    let body = escape(body);

    // BurntToast gives nicer toasts when installed; fall back to WinRT otherwise.
    let script = format!(
        r#"
$ErrorActionPreference = 'SilentlyContinue'

if (Get-Module -ListAvailable -Name BurntToast) {{
    Import-Module BurntToast
    New-BurntToastNotification -Text '{title}', '{body}'
}} else {{
    [Windows.UI.Notifications.ToastNotificationManager, Windows.UI.Notifications, ContentType = WindowsRuntime] | Out-Null
    [Windows.Data.Xml.Dom.XmlDocument, Windows.Data.Xml.Dom.XmlDocument, ContentType = WindowsRuntime] | Out-Null

    $template = @'
<toast>
    <visual>
        <binding template="ToastGeneric">
            <text>{title}</text>
            <text>{body}</text>
        </binding>
    </visual>
</toast>
'@

    $xml = New-Object Windows.Data.Xml.Dom.XmlDocument
    $xml.LoadXml($template)
    $toast = [Windows.UI.Notifications.ToastNotification]::new($xml)
    [Windows.UI.Notifications.ToastNotificationManager]::CreateToastNotifier('{app_id}').Show($toast)
}}
"#,
        title = title,
        body = body,
        app_id = TOAST_APP_ID,
    );

    if let Err(err) = hidden_command("powershell")
        .args([
            "-NoProfile",
            "-NonInteractive",
            "-WindowStyle",
            "Hidden",
            "-Command",
            &script,
        ])
        .spawn()
    {
        log::warn!("Failed to spawn toast notification: {}", err);
    }
}

/// Blocking message box for errors that end the process.
pub fn show_fatal(message: &str) {
    let text = to_wide(message);
    let caption = to_wide(APP_NAME);
    // SAFETY: both buffers are NUL-terminated and outlive the call.
    unsafe {
        MessageBoxW(
            HWND(std::ptr::null_mut()),
            PCWSTR(text.as_ptr()),
            PCWSTR(caption.as_ptr()),
            MB_OK | MB_ICONERROR,
        );
    }
}

// Single-quoted PowerShell strings only need quotes doubled; XML text needs
// the angle brackets and ampersand neutralised.
fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "''")
        .replace('`', "``")
}
