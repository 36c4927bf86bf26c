//! Shopping cart, owned by the consumer role.

use super::models::*;
use super::{send, send_json};
use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{ApiRequest, Envelope, Role};

const ROLE: Role = Role::User;

pub async fn items(client: &ApiClient) -> Result<Envelope<Vec<CartItem>>> {
    send(client, ROLE, ApiRequest::get("/cart")).await
}

pub async fn add(
    client: &ApiClient,
    product_id: i64,
    quantity: u32,
) -> Result<Envelope<Option<CartItem>>> {
    let body = CartAdd {
        product_id,
        quantity,
    };
    send_json(client, ROLE, ApiRequest::post("/cart"), &body).await
}

pub async fn set_quantity(
    client: &ApiClient,
    item_id: i64,
    quantity: u32,
) -> Result<Envelope<Option<CartItem>>> {
    send_json(
        client,
        ROLE,
        ApiRequest::put(format!("/cart/{}", item_id)),
        &Quantity { quantity },
    )
    .await
}

pub async fn remove(client: &ApiClient, item_id: i64) -> Result<Envelope<Ack>> {
    send(client, ROLE, ApiRequest::delete(format!("/cart/{}", item_id))).await
}

pub async fn clear(client: &ApiClient) -> Result<Envelope<Ack>> {
    send(client, ROLE, ApiRequest::delete("/cart")).await
}
