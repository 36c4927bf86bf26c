//! Client library for the Baoleme delivery platform.
//!
//! Every network call goes through [`ApiClient`], which attaches the bearer
//! credential of the calling role and normalizes the uniform response
//! envelope. Per-role session state lives in one [`SessionManager`]; the
//! façades in [`facade`] tie the endpoint tables in [`api`] to that state.

pub mod api;
pub mod client;
pub mod error;
pub mod facade;
pub mod guard;
pub mod session;
pub mod traits;
pub mod types;

pub use client::{ApiClient, ClientConfig, LogNotifier, RecordingNotifier};
pub use error::{ApiError, Result};
pub use facade::{AdminSession, MerchantSession, RiderSession, UserSession};
pub use guard::{GuardDecision, NavigationGuard};
pub use session::{
    FileStore, LoginState, MemoryStore, Profile, SessionManager, SessionValidity,
};
pub use traits::{ApiNetwork, KeyValueStore, Notifier};
pub use types::{ApiRequest, ApiResponse, Credential, Envelope, Role};
