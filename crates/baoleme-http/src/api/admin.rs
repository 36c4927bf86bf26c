//! Administration endpoints.

use super::models::*;
use super::{send, send_json};
use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{ApiRequest, Envelope, Role};

const ROLE: Role = Role::Admin;

/// Admins sign in by numeric id. The result carries `id` and `token` only.
pub async fn login(client: &ApiClient, body: &AdminLogin) -> Result<Envelope<LoginData>> {
    send_json(client, ROLE, ApiRequest::post("/admin/login"), body).await
}

pub async fn logout(client: &ApiClient) -> Result<Envelope<Ack>> {
    send(client, ROLE, ApiRequest::post("/admin/logout")).await
}

pub async fn users(client: &ApiClient, query: &AccountQuery) -> Result<Envelope<UserList>> {
    send_json(client, ROLE, ApiRequest::post("/admin/userlist"), query).await
}

pub async fn stores(client: &ApiClient, paging: &Paging) -> Result<Envelope<StoreList>> {
    send_json(client, ROLE, ApiRequest::post("/admin/storelist"), paging).await
}

pub async fn riders(client: &ApiClient, query: &AccountQuery) -> Result<Envelope<RiderList>> {
    send_json(client, ROLE, ApiRequest::post("/admin/riderlist"), query).await
}

pub async fn merchants(client: &ApiClient, query: &AccountQuery) -> Result<Envelope<MerchantList>> {
    send_json(client, ROLE, ApiRequest::post("/admin/merchantlist"), query).await
}

/// Take down stores, products or accounts by name. The names travel in
/// the body of the DELETE.
pub async fn take_down(client: &ApiClient, target: &TakeDown) -> Result<Envelope<Ack>> {
    send_json(client, ROLE, ApiRequest::delete("/admin/delete"), target).await
}

pub async fn orders(client: &ApiClient, query: &AdminOrderQuery) -> Result<Envelope<OrderList>> {
    send_json(client, ROLE, ApiRequest::post("/admin/orderlist"), query).await
}

pub async fn reviews(client: &ApiClient, query: &AdminReviewQuery) -> Result<Envelope<ReviewList>> {
    send_json(client, ROLE, ApiRequest::post("/admin/reviewlist"), query).await
}

pub async fn store_products(
    client: &ApiClient,
    query: &AdminProductQuery,
) -> Result<Envelope<ProductList>> {
    send_json(client, ROLE, ApiRequest::post("/admin/productlist"), query).await
}

/// Stores and products matching `keyword`.
pub async fn search(client: &ApiClient, keyword: &str) -> Result<Envelope<AdminSearchResults>> {
    let body = KeywordQuery {
        key_word: keyword.to_string(),
    };
    send_json(client, ROLE, ApiRequest::post("/admin/search"), &body).await
}

pub async fn order_by_id(client: &ApiClient, order_id: i64) -> Result<Envelope<SingleOrder>> {
    send_json(
        client,
        ROLE,
        ApiRequest::post("/admin/search-order-by-id"),
        &OrderId { order_id },
    )
    .await
}

pub async fn review_by_id(client: &ApiClient, review_id: i64) -> Result<Envelope<SingleReview>> {
    send_json(
        client,
        ROLE,
        ApiRequest::post("/admin/search-review-by-id"),
        &ReviewRef { review_id },
    )
    .await
}
