//! Raw HTTP response as received from the network layer.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// HTTP response before envelope normalization.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Bytes,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        ApiResponse {
            status,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    /// A 200 response carrying `value` as its JSON body.
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string()).with_header("content-type", "application/json")
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    pub fn parse_json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl Default for ApiResponse {
    fn default() -> Self {
        ApiResponse {
            status: 200,
            headers: BTreeMap::new(),
            body: Bytes::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_basic() {
        let res = ApiResponse::new(200, "hello").with_header("Content-Type", "text/plain");
        assert_eq!(res.body_str(), Some("hello"));
        assert_eq!(res.header("content-type"), Some("text/plain"));
        assert!(res.is_success());
        assert!(!ApiResponse::new(404, "").is_success());
    }

    #[test]
    fn test_json_response() {
        let res = ApiResponse::json(200, &serde_json::json!({"code": 200}));
        let value: serde_json::Value = res.parse_json().unwrap();
        assert_eq!(value["code"], 200);
    }
}
