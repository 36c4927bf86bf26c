//! The authenticated request pipeline.

mod config;
mod fetch;
mod headers;
pub mod native_network;
mod notify;
mod utils;

pub use config::ClientConfig;
pub use fetch::ApiClient;
pub use headers::{bearer_value, parse_bearer, AUTHORIZATION_HEADER};
pub use native_network::NativeNetwork;
pub use notify::{LogNotifier, RecordingNotifier};
pub use utils::*;
