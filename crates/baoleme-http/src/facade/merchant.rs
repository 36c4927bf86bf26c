use super::RoleCore;
use crate::api::{
    self, Ack, LoginData, MerchantLogin, MerchantRegisterRequest, MerchantUpdate, RegisterData,
    UpdateData,
};
use crate::client::ApiClient;
use crate::error::Result;
use crate::session::{MerchantInfo, Profile, SessionValidity};
use crate::types::{Envelope, Role};

/// Merchant session.
#[derive(Clone, Debug)]
pub struct MerchantSession {
    core: RoleCore,
}

impl MerchantSession {
    pub fn new(client: ApiClient) -> Self {
        Self {
            core: RoleCore::new(client, Role::Merchant),
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

    pub fn info(&self) -> Option<MerchantInfo> {
        self.core
            .session()
            .profile(Role::Merchant)
            .and_then(|p| p.as_merchant().cloned())
    }

    pub async fn register(&self, body: &MerchantRegisterRequest) -> Result<Envelope<RegisterData>> {
        api::merchant::register(self.client(), body).await
    }

    /// Merchants log in by username.
    pub async fn login(&self, username: &str, password: &str) -> Result<Envelope<LoginData>> {
        let body = MerchantLogin {
            username: Some(username.to_string()),
            phone: None,
            password: password.to_string(),
        };
        self.login_with(&body).await
    }

    /// Log in with either identifier set on `body`.
    pub async fn login_with(&self, body: &MerchantLogin) -> Result<Envelope<LoginData>> {
        let envelope = self.core.login(api::merchant::login(self.client(), body)).await?;
        self.get_merchant_info().await?;
        Ok(envelope)
    }

    pub async fn get_merchant_info(&self) -> Result<Envelope<MerchantInfo>> {
        self.core
            .refresh(api::merchant::info(self.client()), Profile::Merchant)
            .await
    }

    /// Update, then refetch rather than merging the patch into the cache,
    /// so the snapshot is whatever the server now holds.
    pub async fn update_merchant_info(
        &self,
        patch: &MerchantUpdate,
    ) -> Result<Envelope<Option<UpdateData>>> {
        let envelope = api::merchant::update(self.client(), patch).await?;
        if self.core.accept_update(&envelope) {
            self.get_merchant_info().await?;
        }
        Ok(envelope)
    }

    pub async fn logout(&self) -> Result<Envelope<Ack>> {
        let result = api::merchant::logout(self.client()).await;
        self.core.end_session(result)
    }

    pub async fn delete_account(&self) -> Result<Envelope<Ack>> {
        let result = api::merchant::delete_account(self.client()).await;
        self.core.close_account(result)
    }

    pub async fn restore(&self) -> bool {
        if self.core.needs_restore() {
            let _ = self.get_merchant_info().await;
        }
        self.info().is_some()
    }
}
