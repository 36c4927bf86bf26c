use super::RoleCore;
use crate::api::{
    self, Ack, LoginData, PhoneLogin, RegisterData, RegisterRequest, RiderUpdate, UpdateData,
};
use crate::client::ApiClient;
use crate::error::Result;
use crate::session::{Profile, RiderInfo, SessionValidity};
use crate::types::{Envelope, Role};

/// Rider session.
#[derive(Clone, Debug)]
pub struct RiderSession {
    core: RoleCore,
}

impl RiderSession {
    pub fn new(client: ApiClient) -> Self {
        Self {
            core: RoleCore::new(client, Role::Rider),
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

    pub fn info(&self) -> Option<RiderInfo> {
        self.core
            .session()
            .profile(Role::Rider)
            .and_then(|p| p.as_rider().cloned())
    }

    pub async fn register(&self, body: &RegisterRequest) -> Result<Envelope<RegisterData>> {
        api::rider::register(self.client(), body).await
    }

    pub async fn login(&self, phone: &str, password: &str) -> Result<Envelope<LoginData>> {
        let body = PhoneLogin {
            phone: phone.to_string(),
            password: password.to_string(),
        };
        let envelope = self.core.login(api::rider::login(self.client(), &body)).await?;
        self.get_rider_info().await?;
        Ok(envelope)
    }

    pub async fn get_rider_info(&self) -> Result<Envelope<RiderInfo>> {
        self.core
            .refresh(api::rider::info(self.client()), Profile::Rider)
            .await
    }

    /// Change account fields or the dispatch settings, then reload.
    pub async fn update_rider_info(
        &self,
        patch: &RiderUpdate,
    ) -> Result<Envelope<Option<UpdateData>>> {
        let envelope = api::rider::update(self.client(), patch).await?;
        if self.core.accept_update(&envelope) {
            self.get_rider_info().await?;
        }
        Ok(envelope)
    }

    pub async fn logout(&self) -> Result<Envelope<Ack>> {
        let result = api::rider::logout(self.client()).await;
        self.core.end_session(result)
    }

    pub async fn delete_account(&self) -> Result<Envelope<Ack>> {
        let result = api::rider::delete_account(self.client()).await;
        self.core.close_account(result)
    }

    pub async fn restore(&self) -> bool {
        if self.core.needs_restore() {
            let _ = self.get_rider_info().await;
        }
        self.info().is_some()
    }
}
