//! Rider endpoints.

use super::models::*;
use super::{send, send_json, upload, Upload};
use crate::client::ApiClient;
use crate::error::Result;
use crate::session::RiderInfo;
use crate::types::{ApiRequest, Envelope, Role};

const ROLE: Role = Role::Rider;

pub async fn register(
    client: &ApiClient,
    body: &RegisterRequest,
) -> Result<Envelope<RegisterData>> {
    send_json(client, ROLE, ApiRequest::post("/rider/register"), body).await
}

pub async fn login(client: &ApiClient, body: &PhoneLogin) -> Result<Envelope<LoginData>> {
    send_json(client, ROLE, ApiRequest::post("/rider/login"), body).await
}

pub async fn logout(client: &ApiClient) -> Result<Envelope<Ack>> {
    send(client, ROLE, ApiRequest::post("/rider/logout")).await
}

pub async fn delete_account(client: &ApiClient) -> Result<Envelope<Ack>> {
    send(client, ROLE, ApiRequest::delete("/rider/delete")).await
}

pub async fn info(client: &ApiClient) -> Result<Envelope<RiderInfo>> {
    send(client, ROLE, ApiRequest::get("/rider/info")).await
}

pub async fn update(
    client: &ApiClient,
    body: &RiderUpdate,
) -> Result<Envelope<Option<UpdateData>>> {
    send_json(client, ROLE, ApiRequest::put("/rider/update"), body).await
}

pub async fn upload_avatar(client: &ApiClient, file: Upload) -> Result<Envelope<String>> {
    upload(client, ROLE, "/image/upload-rider-avatar", file, None).await
}

/// Orders waiting for a rider. Paging travels in the query string.
pub async fn available_orders(client: &ApiClient, paging: &Paging) -> Result<Envelope<OrderList>> {
    send(client, ROLE, ApiRequest::get("/orders/available").with_query(paging)?).await
}

pub async fn grab_order(client: &ApiClient, order_id: i64) -> Result<Envelope<Ack>> {
    send_json(client, ROLE, ApiRequest::put("/orders/grab"), &OrderId { order_id }).await
}

/// Let the backend assign the next order.
pub async fn auto_take_order(client: &ApiClient) -> Result<Envelope<Ack>> {
    send(client, ROLE, ApiRequest::post("/rider/auto-order-taking")).await
}

pub async fn cancel_order(client: &ApiClient, order_id: i64) -> Result<Envelope<Ack>> {
    send_json(client, ROLE, ApiRequest::put("/orders/cancel"), &OrderId { order_id }).await
}

pub async fn update_order_status(
    client: &ApiClient,
    order_id: i64,
    target_status: i32,
) -> Result<Envelope<OrderStatusChange>> {
    let body = RiderStatusUpdate {
        order_id,
        target_status,
    };
    send_json(client, ROLE, ApiRequest::post("/orders/rider-update-status"), &body).await
}

pub async fn order_history(
    client: &ApiClient,
    query: &OrderHistoryQuery,
) -> Result<Envelope<OrderList>> {
    send_json(client, ROLE, ApiRequest::post("/orders/rider-history-query"), query).await
}

pub async fn earnings(client: &ApiClient) -> Result<Envelope<RiderEarnings>> {
    send(client, ROLE, ApiRequest::get("/orders/rider-earnings")).await
}
