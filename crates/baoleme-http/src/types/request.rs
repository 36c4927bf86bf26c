//! Outgoing request description.

use crate::error::{ApiError, Result};
use crate::types::Role;
use bytes::Bytes;
use http::Method;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Where the outgoing interceptor finds the bearer token for a call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Credential {
    /// Send without an `Authorization` header.
    #[default]
    Anonymous,
    /// Use the stored token of this role.
    Role(Role),
    /// Infer the role from a navigation path; no role means no header.
    Path(String),
    /// Use this token as-is.
    Bearer(String),
}

/// One field of a multipart body.
#[derive(Clone, Debug, PartialEq)]
pub enum FormPart {
    File {
        name: String,
        file_name: String,
        content_type: String,
        bytes: Bytes,
    },
    Text {
        name: String,
        value: String,
    },
}

/// Request payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Body {
    #[default]
    Empty,
    Json(Bytes),
    Multipart(Vec<FormPart>),
}

/// A call against the delivery API, relative to the configured base URL.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Body,
    pub headers: BTreeMap<String, String>,
    pub credential: Credential,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: Body::Empty,
            headers: BTreeMap::new(),
            credential: Credential::Anonymous,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Serialize `payload` as the JSON body.
    pub fn with_json<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(payload)?;
        self.body = Body::Json(Bytes::from(bytes));
        Ok(self)
    }

    /// Flatten the fields of `params` into the query string.
    ///
    /// Absent (`None`) fields are left out rather than defaulted.
    pub fn with_query<T: Serialize + ?Sized>(mut self, params: &T) -> Result<Self> {
        let value = serde_json::to_value(params)?;
        let Value::Object(fields) = value else {
            return Err(ApiError::Config(
                "query parameters must serialize to an object".to_string(),
            ));
        };
        for (key, value) in fields {
            match value {
                Value::Null => {}
                Value::String(s) => self.query.push((key, s)),
                other => self.query.push((key, other.to_string())),
            }
        }
        Ok(self)
    }

    pub fn with_part(mut self, part: FormPart) -> Self {
        match &mut self.body {
            Body::Multipart(parts) => parts.push(part),
            _ => self.body = Body::Multipart(vec![part]),
        }
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = credential;
        self
    }

    /// Tag the call with the role whose token it should carry.
    pub fn as_role(self, role: Role) -> Self {
        self.with_credential(Credential::Role(role))
    }

    pub fn with_bearer(self, token: impl Into<String>) -> Self {
        self.with_credential(Credential::Bearer(token.into()))
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn is_multipart(&self) -> bool {
        matches!(self.body, Body::Multipart(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Paging {
        page: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        page_size: Option<u32>,
        status: Option<i32>,
        keyword: &'static str,
    }

    #[test]
    fn test_request_builder() {
        let req = ApiRequest::post("/user/login")
            .with_json(&serde_json::json!({"phone": "1", "password": "p"}))
            .unwrap()
            .as_role(Role::User)
            .with_header("X-Trace", "1");

        assert_eq!(req.method, Method::POST);
        assert_eq!(req.credential, Credential::Role(Role::User));
        assert_eq!(req.header("x-trace"), Some("1"));
        match req.body {
            Body::Json(bytes) => assert!(bytes.starts_with(b"{")),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_query_skips_absent_values() {
        let req = ApiRequest::get("/orders/available")
            .with_query(&Paging {
                page: 2,
                page_size: None,
                status: None,
                keyword: "noodles",
            })
            .unwrap();
        assert_eq!(
            req.query,
            vec![
                ("keyword".to_string(), "noodles".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_rejects_scalars() {
        assert!(ApiRequest::get("/x").with_query(&5).is_err());
    }

    #[test]
    fn test_parts_accumulate() {
        let req = ApiRequest::post("/image/upload-store-image")
            .with_part(FormPart::Text {
                name: "storeId".into(),
                value: "7".into(),
            })
            .with_part(FormPart::File {
                name: "file".into(),
                file_name: "a.png".into(),
                content_type: "image/png".into(),
                bytes: Bytes::from_static(b"png"),
            });
        assert!(req.is_multipart());
        match req.body {
            Body::Multipart(parts) => assert_eq!(parts.len(), 2),
            other => panic!("unexpected body {:?}", other),
        }
    }
}
