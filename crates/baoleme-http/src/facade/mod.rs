//! Role state façades.
//!
//! A façade calls the endpoint tables and keeps the shared
//! [`SessionManager`] in step with the outcome: login stores the token and
//! loads the profile, a failed profile refresh may end the session, logout
//! always ends it. Every method hands the envelope or the error back to the
//! caller unchanged.

mod admin;
mod merchant;
mod rider;
mod user;

pub use admin::AdminSession;
pub use merchant::MerchantSession;
pub use rider::RiderSession;
pub use user::UserSession;

use crate::api::{LoginData, UpdateData};
use crate::client::{envelope_message, ApiClient, MSG_LOGIN_FAILED};
use crate::error::{ApiError, Result};
use crate::session::{Profile, SessionManager, SessionValidity};
use crate::types::{Envelope, Role};
use std::future::Future;
use tracing::{info, warn};

/// State shared by the four façades: the client, the role it acts for and
/// the policy deciding when a failed refresh ends the session.
#[derive(Clone, Debug)]
struct RoleCore {
    client: ApiClient,
    role: Role,
    validity: SessionValidity,
}

impl RoleCore {
    fn new(client: ApiClient, role: Role) -> Self {
        Self {
            client,
            role,
            validity: SessionValidity::default(),
        }
    }

    fn session(&self) -> &SessionManager {
        self.client.session()
    }

    fn is_logged_in(&self) -> bool {
        self.session().is_logged_in(self.role)
    }

    /// Store the token a login envelope carries.
    ///
    /// An envelope without one leaves the session untouched.
    async fn login<F>(&self, call: F) -> Result<Envelope<LoginData>>
    where
        F: Future<Output = Result<Envelope<LoginData>>>,
    {
        let envelope = call.await?;
        if envelope.data.token.is_empty() {
            let message = if envelope.message.is_empty() {
                MSG_LOGIN_FAILED.to_string()
            } else {
                envelope_message(&envelope.message)
            };
            warn!("[{}] Login envelope carried no token", self.role);
            return Err(ApiError::MissingToken(message));
        }
        self.session().set_token(self.role, &envelope.data.token);
        Ok(envelope)
    }

    /// Replace the cached snapshot with a fresh one, or apply the validity
    /// policy when the fetch fails.
    ///
    /// An envelope flagged `success: false` is a failure even with code 200.
    async fn refresh<T, F>(
        &self,
        call: F,
        into_profile: fn(T) -> Profile,
    ) -> Result<Envelope<T>>
    where
        T: Clone,
        F: Future<Output = Result<Envelope<T>>>,
    {
        let outcome = call.await.and_then(|envelope| {
            if envelope.success {
                Ok(envelope)
            } else {
                Err(ApiError::Envelope {
                    code: envelope.code,
                    message: envelope_message(&envelope.message),
                })
            }
        });
        match outcome {
            Ok(envelope) => {
                self.session().set_profile(into_profile(envelope.data.clone()));
                Ok(envelope)
            }
            Err(e) => {
                if self.validity.invalidates(&e) {
                    warn!("[{}] Profile refresh failed, ending session: {}", self.role, e);
                    self.session().clear_token(self.role);
                }
                Err(e)
            }
        }
    }

    /// Whether an update went through and the profile should be refetched.
    ///
    /// Renaming an account re-issues its token; the new one is stored first
    /// so the refetch authenticates.
    fn accept_update(&self, envelope: &Envelope<Option<UpdateData>>) -> bool {
        if !envelope.success {
            warn!("[{}] Update not applied: {}", self.role, envelope.message);
            return false;
        }
        if let Some(token) = envelope.data.as_ref().and_then(UpdateData::reissued_token) {
            info!("[{}] Adopting re-issued token", self.role);
            self.session().set_token(self.role, token);
        }
        true
    }

    /// Clear local state whatever `result` says, then hand it back.
    fn end_session<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            warn!("[{}] Server logout failed, clearing locally: {}", self.role, e);
        }
        self.session().clear_token(self.role);
        result
    }

    /// Clear local state only once the server confirmed.
    fn close_account<T>(&self, result: Result<T>) -> Result<T> {
        if result.is_ok() {
            info!("[{}] Account deleted", self.role);
            self.session().clear_token(self.role);
        }
        result
    }

    fn needs_restore(&self) -> bool {
        self.is_logged_in() && self.session().profile(self.role).is_none()
    }
}
