use crate::prelude::*;

pub fn wndw() -> Result<web_sys::Window, ApiError> {
    web_sys::window().ok_or(ApiError::NoWindow)
}

/// Interrupts the user with a message they have to acknowledge.
pub fn notify_user(message: &str) {
    let result = wndw().map_err(|e| e.to_string())
        .and_then(|window| window.alert_with_message(message).map_err(|e| format!("{e:?}")));
    if let Err(e) = result {
        log!("could not notify user ({e}): {message}");
    }
}
