//! Status classification and the fixed user-facing messages.

pub const MSG_REQUEST_FAILED: &str = "request failed";
pub const MSG_LOGIN_REQUIRED: &str = "please log in";
pub const MSG_FORBIDDEN: &str = "insufficient permission";
pub const MSG_NOT_FOUND: &str = "resource not found";
pub const MSG_SERVER_ERROR: &str = "server error";
pub const MSG_NETWORK_ERROR: &str = "network error";
pub const MSG_CONNECTION_FAILED: &str = "network connection failed";
pub const MSG_LOGIN_FAILED: &str = "login failed";

pub fn is_access_denied_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// Message shown for an HTTP error status.
///
/// A 401 prefers the message the backend put in its envelope, since that
/// usually says why the credential was refused.
pub fn status_message(status: u16, server_message: Option<&str>) -> String {
    let fixed = match status {
        401 => {
            return server_message
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(MSG_LOGIN_REQUIRED)
                .to_string()
        }
        403 => MSG_FORBIDDEN,
        404 => MSG_NOT_FOUND,
        500 => MSG_SERVER_ERROR,
        _ => MSG_NETWORK_ERROR,
    };
    fixed.to_string()
}

/// Message for a non-success envelope; the backend's text when present.
pub fn envelope_message(message: &str) -> String {
    let message = message.trim();
    if message.is_empty() {
        MSG_REQUEST_FAILED.to_string()
    } else {
        message.to_string()
    }
}
