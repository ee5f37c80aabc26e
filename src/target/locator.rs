use crate::host::WindowHost;
use crate::model::TargetHandle;

/// First top-level window whose title contains `title_substring`.
///
/// Matching is case-sensitive. With several matching windows the first one in
/// host enumeration order wins; that order is not stable across window sets,
/// so duplicate titles give ambiguous results.
pub fn locate<H: WindowHost>(host: &H, title_substring: &str) -> Option<TargetHandle<H::Window>> {
    let window = host
        .enumerate_windows()
        .into_iter()
        .find(|&window| host.window_title(window).contains(title_substring))?;
    Some(TargetHandle {
        window,
        pid: host.owner_pid(window),
    })
}
