//! Consumer endpoints.

use super::models::*;
use super::{send, send_json, upload, Upload};
use crate::client::ApiClient;
use crate::error::Result;
use crate::session::UserInfo;
use crate::types::{ApiRequest, Envelope, Role};

const ROLE: Role = Role::User;

pub async fn register(
    client: &ApiClient,
    body: &RegisterRequest,
) -> Result<Envelope<RegisterData>> {
    send_json(client, ROLE, ApiRequest::post("/user/register"), body).await
}

pub async fn login(client: &ApiClient, body: &PhoneLogin) -> Result<Envelope<LoginData>> {
    send_json(client, ROLE, ApiRequest::post("/user/login"), body).await
}

pub async fn logout(client: &ApiClient) -> Result<Envelope<Ack>> {
    send(client, ROLE, ApiRequest::post("/user/logout")).await
}

pub async fn info(client: &ApiClient) -> Result<Envelope<UserInfo>> {
    send(client, ROLE, ApiRequest::get("/user/info")).await
}

pub async fn update(client: &ApiClient, body: &UserUpdate) -> Result<Envelope<Option<UpdateData>>> {
    send_json(client, ROLE, ApiRequest::put("/user/update"), body).await
}

/// Order history. Order status: 0 pending, 1 preparing, 2 delivering,
/// 3 completed, 4 cancelled.
pub async fn order_history(
    client: &ApiClient,
    query: &OrderHistoryQuery,
) -> Result<Envelope<OrderList>> {
    send_json(client, ROLE, ApiRequest::post("/user/history"), query).await
}

pub async fn favorite_store(client: &ApiClient, store_id: i64) -> Result<Envelope<Ack>> {
    send_json(client, ROLE, ApiRequest::post("/user/favorite"), &StoreRef { store_id }).await
}

pub async fn unfavorite_store(client: &ApiClient, store_id: i64) -> Result<Envelope<Ack>> {
    send_json(client, ROLE, ApiRequest::post("/user/deleteFavorite"), &StoreRef { store_id }).await
}

pub async fn favorite_stores(
    client: &ApiClient,
    filter: &SearchFilter,
) -> Result<Envelope<Vec<StoreSummary>>> {
    send_json(client, ROLE, ApiRequest::post("/user/favorite/watch"), filter).await
}

pub async fn claim_coupon(client: &ApiClient, coupon_id: i64) -> Result<Envelope<Ack>> {
    send_json(client, ROLE, ApiRequest::post("/user/coupon/claim"), &IdRef { id: coupon_id }).await
}

/// Coupons the user holds, optionally only those usable at `store_id`.
pub async fn my_coupons(
    client: &ApiClient,
    store_id: Option<i64>,
) -> Result<Envelope<Vec<Coupon>>> {
    send_json(client, ROLE, ApiRequest::post("/user/coupon"), &CouponQuery { store_id }).await
}

/// Coupons a store hands out.
pub async fn store_coupons(client: &ApiClient, store_id: i64) -> Result<Envelope<Vec<Coupon>>> {
    send_json(client, ROLE, ApiRequest::post("/user/coupon/view"), &StoreRef { store_id }).await
}

pub async fn delete_account(client: &ApiClient) -> Result<Envelope<Ack>> {
    send(client, ROLE, ApiRequest::delete("/user/delete")).await
}

pub async fn current_orders(client: &ApiClient) -> Result<Envelope<OrderList>> {
    send(client, ROLE, ApiRequest::get("/user/current")).await
}

pub async fn search(client: &ApiClient, filter: &SearchFilter) -> Result<Envelope<SearchResults>> {
    send_json(client, ROLE, ApiRequest::post("/user/search"), filter).await
}

/// Recommended stores. An empty filter lists everything.
pub async fn stores(client: &ApiClient, filter: &StoreFilter) -> Result<Envelope<StorePage>> {
    send_json(client, ROLE, ApiRequest::post("/store/user-view-stores"), filter).await
}

pub async fn store_products(
    client: &ApiClient,
    query: &ProductListQuery,
) -> Result<Envelope<Vec<ProductSummary>>> {
    send_json(client, ROLE, ApiRequest::post("/store/user-view-products"), query).await
}

pub async fn submit_review(
    client: &ApiClient,
    review: &ReviewSubmit,
) -> Result<Envelope<Option<Review>>> {
    send_json(client, ROLE, ApiRequest::post("/user/review"), review).await
}

pub async fn order_detail(client: &ApiClient, order_id: i64) -> Result<Envelope<OrderRecord>> {
    send_json(client, ROLE, ApiRequest::post("/user/searchOrder"), &OrderId { order_id }).await
}

pub async fn order_items(client: &ApiClient, order_id: i64) -> Result<Envelope<OrderItems>> {
    send_json(client, ROLE, ApiRequest::post("/user/searchOrderItem"), &OrderId { order_id }).await
}

pub async fn store_detail(client: &ApiClient, store_id: i64) -> Result<Envelope<StoreSummary>> {
    send_json(client, ROLE, ApiRequest::post("/store/storeInfo"), &IdRef { id: store_id }).await
}

pub async fn product_detail(
    client: &ApiClient,
    product_id: i64,
) -> Result<Envelope<ProductSummary>> {
    send_json(
        client,
        ROLE,
        ApiRequest::post("/product/productInfo"),
        &IdRef { id: product_id },
    )
    .await
}

/// Record a store visit; `view_time` is `YYYY-MM-DDTHH:mm:ss`.
pub async fn record_view(client: &ApiClient, record: &ViewRecord) -> Result<Envelope<Ack>> {
    send_json(client, ROLE, ApiRequest::post("/user/updateViewHistory"), record).await
}

pub async fn view_history(client: &ApiClient, paging: &Paging) -> Result<Envelope<StoreList>> {
    send_json(client, ROLE, ApiRequest::post("/user/viewHistory"), paging).await
}

pub async fn submit_order(
    client: &ApiClient,
    order: &OrderSubmit,
) -> Result<Envelope<Option<OrderRecord>>> {
    send_json(client, ROLE, ApiRequest::post("/user/order"), order).await
}

pub async fn upload_avatar(client: &ApiClient, file: Upload) -> Result<Envelope<String>> {
    upload(client, ROLE, "/image/upload-user-avatar", file, None).await
}
