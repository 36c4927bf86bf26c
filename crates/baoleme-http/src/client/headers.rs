//! `Authorization` header handling.

use http::header::HeaderValue;

pub const AUTHORIZATION_HEADER: &str = "Authorization";

const BEARER_PREFIX: &str = "Bearer ";

/// `Bearer <token>`; `None` for an empty token.
pub fn bearer_value(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    let value = format!("{}{}", BEARER_PREFIX, token);
    // Tokens with control characters would be rejected by the transport.
    HeaderValue::from_str(&value).ok()?;
    Some(value)
}

/// Token part of a `Bearer <token>` header value.
pub fn parse_bearer(value: &str) -> Option<&str> {
    value
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
