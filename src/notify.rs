//! Blocking browser dialogs.

pub fn alert(message: &str) {
    log::debug!("alert: {}", message);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Ask before a destructive action. Returns false when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Navigate the whole tab to an external address.
pub fn navigate_to(url: &str) {
    log::info!("Redirecting to {}", url);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("Navigation failed: {:?}", e);
        }
    }
}
