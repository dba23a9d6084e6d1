/// Blocking alert for errors the user has to acknowledge.
pub fn show_error(message: &str) {
    log::warn!("{}", message);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking yes/no prompt. Anything but an explicit yes counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
