use tracing::{debug, info};

/// Root-window property a compositing window manager advertises when
/// per-window opacity works.
const OPACITY_ATOM: &str = "_NET_WM_WINDOW_OPACITY";

/// Whether the desktop can show through a transparent overlay.
#[cfg(target_os = "linux")]
pub fn transparency_supported() -> bool {
    match std::process::Command::new("xprop").arg("-root").output() {
        Ok(output) if output.status.success() => {
            root_props_support_opacity(&String::from_utf8_lossy(&output.stdout))
        }
        Ok(output) => {
            debug!(status = %output.status, "xprop -root failed");
            false
        }
        Err(err) => {
            debug!(error = %err, "xprop unavailable");
            false
        }
    }
}

#[cfg(not(target_os = "linux"))]
pub fn transparency_supported() -> bool {
    info!("transparency detection is not available here; pass --transparent to force it");
    false
}

pub fn root_props_support_opacity(props: &str) -> bool {
    props.contains(OPACITY_ATOM)
}

/// Combines the command-line request with detection.
pub fn use_transparency(requested: bool) -> bool {
    if requested {
        return true;
    }
    let supported = transparency_supported();
    if !supported {
        info!("drawing over a screenshot; pass --transparent to draw over the live desktop");
    }
    supported
}
