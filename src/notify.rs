use log::{error, info, warn};

use crate::model::{Notice, NoticeSeverity};

/// Surfaces a failed (or otherwise noteworthy) action to the user.
pub fn notify_user(name: &str, notice: &Notice) {
    match notice.severity {
        NoticeSeverity::Info => info!("{}: {}", name, notice.message),
        NoticeSeverity::Warning => warn!("{}: {}", name, notice.message),
        NoticeSeverity::Error => error!("{}: {}", name, notice.message),
    }

    #[cfg(target_os = "windows")]
    crate::platform::current::notify::show_toast(&toast_title(name, notice), &notice.message);
}

/// Reports an error that is about to terminate the process.
pub fn report_fatal(message: &str) {
    error!("{}", message);

    #[cfg(target_os = "windows")]
    crate::platform::current::notify::show_fatal(message);

    #[cfg(not(target_os = "windows"))]
    eprintln!("{}", message);
}

#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
fn toast_title(name: &str, notice: &Notice) -> String {
    match notice.severity {
        NoticeSeverity::Info => name.to_string(),
        NoticeSeverity::Warning => format!("{}: warning", name),
        NoticeSeverity::Error => format!("{}: action failed", name),
    }
}
