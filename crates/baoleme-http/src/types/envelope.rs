//! The uniform `{success, code, message, data}` response wrapper.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope code the pipeline treats as success.
///
/// The pipeline keys on `code` alone; the role façades also require
/// `success` before caching a profile or refetching after an update.
pub const SUCCESS_CODE: i64 = 200;

/// Response envelope returned by every endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope {
            success: true,
            code: SUCCESS_CODE,
            message: "success".to_string(),
            data,
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            success: self.success,
            code: self.code,
            message: self.message,
            data: f(self.data),
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

/// Envelope as it comes off the wire, before `data` is given a type.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Value,
}

impl RawEnvelope {
    pub fn parse(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Give `data` its endpoint-specific type.
    pub fn decode<T: DeserializeOwned>(self) -> serde_json::Result<Envelope<T>> {
        let data = serde_json::from_value(self.data)?;
        Ok(Envelope {
            success: self.success,
            code: self.code,
            message: self.message,
            data,
        })
    }
}
