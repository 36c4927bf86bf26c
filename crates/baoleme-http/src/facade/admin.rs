use super::RoleCore;
use crate::api::{
    self, Ack, AccountQuery, AdminLogin, AdminOrderQuery, AdminReviewQuery, AdminSearchResults,
    LoginData, MerchantList, OrderList, Paging, ReviewList, RiderList, StoreList, TakeDown,
    UserList,
};
use crate::client::ApiClient;
use crate::error::Result;
use crate::session::{AdminInfo, Profile, SessionValidity};
use crate::types::{Envelope, Role};

/// Administrator session.
///
/// There is no admin profile endpoint: the snapshot is the id returned by
/// login, and a restarted process knows only that a token is stored.
#[derive(Clone, Debug)]
pub struct AdminSession {
    core: RoleCore,
}

impl AdminSession {
    pub fn new(client: ApiClient) -> Self {
        Self {
            core: RoleCore::new(client, Role::Admin),
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

    pub fn info(&self) -> Option<AdminInfo> {
        self.core
            .session()
            .profile(Role::Admin)
            .and_then(|p| p.as_admin().cloned())
    }

    pub async fn login(&self, admin_id: i64, password: &str) -> Result<Envelope<LoginData>> {
        let body = AdminLogin {
            admin_id,
            password: password.to_string(),
        };
        let envelope = self.core.login(api::admin::login(self.client(), &body)).await?;
        self.core.session().set_profile(Profile::Admin(AdminInfo {
            id: envelope.data.user_id,
        }));
        Ok(envelope)
    }

    pub async fn logout(&self) -> Result<Envelope<Ack>> {
        let result = api::admin::logout(self.client()).await;
        self.core.end_session(result)
    }

    /// Nothing to fetch; reports whether the login id is known.
    pub async fn restore(&self) -> bool {
        self.info().is_some()
    }

    pub async fn users(&self, query: &AccountQuery) -> Result<Envelope<UserList>> {
        api::admin::users(self.client(), query).await
    }

    pub async fn stores(&self, paging: &Paging) -> Result<Envelope<StoreList>> {
        api::admin::stores(self.client(), paging).await
    }

    pub async fn riders(&self, query: &AccountQuery) -> Result<Envelope<RiderList>> {
        api::admin::riders(self.client(), query).await
    }

    pub async fn merchants(&self, query: &AccountQuery) -> Result<Envelope<MerchantList>> {
        api::admin::merchants(self.client(), query).await
    }

    pub async fn take_down(&self, target: &TakeDown) -> Result<Envelope<Ack>> {
        api::admin::take_down(self.client(), target).await
    }

    pub async fn orders(&self, query: &AdminOrderQuery) -> Result<Envelope<OrderList>> {
        api::admin::orders(self.client(), query).await
    }

    pub async fn reviews(&self, query: &AdminReviewQuery) -> Result<Envelope<ReviewList>> {
        api::admin::reviews(self.client(), query).await
    }

    pub async fn search(&self, keyword: &str) -> Result<Envelope<AdminSearchResults>> {
        api::admin::search(self.client(), keyword).await
    }
}
