use super::RoleCore;
use crate::api::{
    self, Ack, LoginData, PhoneLogin, RegisterData, RegisterRequest, UpdateData, UserUpdate,
};
use crate::client::ApiClient;
use crate::error::Result;
use crate::session::{Profile, SessionValidity, UserInfo};
use crate::types::{Envelope, Role};

/// Consumer session.
#[derive(Clone, Debug)]
pub struct UserSession {
    core: RoleCore,
}

impl UserSession {
    pub fn new(client: ApiClient) -> Self {
        Self {
            core: RoleCore::new(client, Role::User),
        }
    }

    pub fn with_validity(mut self, validity: SessionValidity) -> Self {
        self.core.validity = validity;
        self
    }

    pub fn client(&self) -> &ApiClient {
        &self.core.client
    }

    pub fn is_logged_in(&self) -> bool {
        self.core.is_logged_in()
    }

    /// Cached profile snapshot.
    pub fn info(&self) -> Option<UserInfo> {
        self.core
            .session()
            .profile(Role::User)
            .and_then(|p| p.as_user().cloned())
    }

    pub async fn register(&self, body: &RegisterRequest) -> Result<Envelope<RegisterData>> {
        api::user::register(self.client(), body).await
    }

    /// Log in by phone, then load the profile.
    pub async fn login(&self, phone: &str, password: &str) -> Result<Envelope<LoginData>> {
        let body = PhoneLogin {
            phone: phone.to_string(),
            password: password.to_string(),
        };
        let envelope = self.core.login(api::user::login(self.client(), &body)).await?;
        self.get_user_info().await?;
        Ok(envelope)
    }

    pub async fn get_user_info(&self) -> Result<Envelope<UserInfo>> {
        self.core
            .refresh(api::user::info(self.client()), Profile::User)
            .await
    }

    /// Apply a partial update, then reload the whole profile when the
    /// backend reports success.
    pub async fn update_user_info(
        &self,
        patch: &UserUpdate,
    ) -> Result<Envelope<Option<UpdateData>>> {
        let envelope = api::user::update(self.client(), patch).await?;
        if self.core.accept_update(&envelope) {
            self.get_user_info().await?;
        }
        Ok(envelope)
    }

    pub async fn logout(&self) -> Result<Envelope<Ack>> {
        let result = api::user::logout(self.client()).await;
        self.core.end_session(result)
    }

    pub async fn delete_account(&self) -> Result<Envelope<Ack>> {
        let result = api::user::delete_account(self.client()).await;
        self.core.close_account(result)
    }

    /// Load the profile behind a token that survived a restart.
    ///
    /// Returns whether a snapshot is cached afterwards. A failure is handled
    /// like any refresh failure but not returned.
    pub async fn restore(&self) -> bool {
        if self.core.needs_restore() {
            let _ = self.get_user_info().await;
        }
        self.info().is_some()
    }
}
