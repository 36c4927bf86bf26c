use crate::error::Result;
use crate::types::{ApiRequest, ApiResponse};
use async_trait::async_trait;

/// Abstraction for network operations.
///
/// Implementations return `Ok` for any HTTP response, including error
/// statuses; `Err` is reserved for calls that produced no response.
#[async_trait]
pub trait ApiNetwork: Send + Sync + 'static {
    async fn fetch(&self, url: &str, request: ApiRequest) -> Result<ApiResponse>;
}

/// Abstraction for durable key-value storage.
///
/// Each operation touches a single key; there are no multi-key transactions.
pub trait KeyValueStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Global user-facing notification sink.
pub trait Notifier: Send + Sync + 'static {
    fn error(&self, message: &str);
}
