//! Merchant endpoints: account, stores, products, coupons, orders, sales.

use super::models::*;
use super::{send, send_json, upload, Upload};
use crate::client::ApiClient;
use crate::error::Result;
use crate::session::MerchantInfo;
use crate::types::{ApiRequest, Envelope, Role};

const ROLE: Role = Role::Merchant;

pub async fn register(
    client: &ApiClient,
    body: &MerchantRegisterRequest,
) -> Result<Envelope<RegisterData>> {
    send_json(client, ROLE, ApiRequest::post("/merchant/register"), body).await
}

pub async fn login(client: &ApiClient, body: &MerchantLogin) -> Result<Envelope<LoginData>> {
    send_json(client, ROLE, ApiRequest::post("/merchant/login"), body).await
}

pub async fn logout(client: &ApiClient) -> Result<Envelope<Ack>> {
    send(client, ROLE, ApiRequest::post("/merchant/logout")).await
}

pub async fn delete_account(client: &ApiClient) -> Result<Envelope<Ack>> {
    send(client, ROLE, ApiRequest::delete("/merchant/delete")).await
}

pub async fn info(client: &ApiClient) -> Result<Envelope<MerchantInfo>> {
    send(client, ROLE, ApiRequest::get("/merchant/info")).await
}

pub async fn update(
    client: &ApiClient,
    body: &MerchantUpdate,
) -> Result<Envelope<Option<UpdateData>>> {
    send_json(client, ROLE, ApiRequest::put("/merchant/update"), body).await
}

// Stores

pub async fn create_store(client: &ApiClient, store: &StoreCreate) -> Result<Envelope<CreatedId>> {
    send_json(client, ROLE, ApiRequest::post("/store/create"), store).await
}

pub async fn update_store(client: &ApiClient, store: &StoreUpdate) -> Result<Envelope<Ack>> {
    send_json(client, ROLE, ApiRequest::put("/store/update"), store).await
}

/// The store id travels in the body of the DELETE.
pub async fn delete_store(client: &ApiClient, store_id: i64) -> Result<Envelope<Ack>> {
    send_json(client, ROLE, ApiRequest::delete("/store/delete"), &StoreRef { store_id }).await
}

pub async fn view_store(client: &ApiClient, store_id: i64) -> Result<Envelope<StoreSummary>> {
    send_json(client, ROLE, ApiRequest::post("/store/view"), &StoreRef { store_id }).await
}

pub async fn list_stores(
    client: &ApiClient,
    page: Option<u32>,
    page_size: Option<u32>,
) -> Result<Envelope<StorePage>> {
    let filter = StoreFilter {
        page,
        page_size,
        ..Default::default()
    };
    send_json(client, ROLE, ApiRequest::post("/store/list"), &filter).await
}

pub async fn store_reviews(
    client: &ApiClient,
    query: &ReviewQuery,
) -> Result<Envelope<ReviewPage>> {
    send_json(client, ROLE, ApiRequest::post("/store/reviews/list"), query).await
}

pub async fn filter_store_reviews(
    client: &ApiClient,
    query: &ReviewQuery,
) -> Result<Envelope<ReviewPage>> {
    send_json(client, ROLE, ApiRequest::post("/store/reviews/filter"), query).await
}

// Products

pub async fn create_product(
    client: &ApiClient,
    product: &ProductCreate,
) -> Result<Envelope<CreatedId>> {
    send_json(client, ROLE, ApiRequest::post("/product/create"), product).await
}

pub async fn update_product(client: &ApiClient, product: &ProductUpdate) -> Result<Envelope<Ack>> {
    send_json(client, ROLE, ApiRequest::put("/product/update"), product).await
}

pub async fn store_products(
    client: &ApiClient,
    query: &StoreProductsQuery,
) -> Result<Envelope<ProductPage>> {
    send_json(client, ROLE, ApiRequest::post("/product/store-products"), query).await
}

pub async fn delete_product(client: &ApiClient, product_id: i64) -> Result<Envelope<Ack>> {
    send_json(client, ROLE, ApiRequest::post("/product/delete"), &IdRef { id: product_id }).await
}

pub async fn view_product(client: &ApiClient, product_id: i64) -> Result<Envelope<ProductSummary>> {
    send_json(client, ROLE, ApiRequest::post("/product/view"), &ProductRef { product_id }).await
}

// Coupons and orders

pub async fn create_coupon(client: &ApiClient, coupon: &CouponCreate) -> Result<Envelope<Ack>> {
    send_json(client, ROLE, ApiRequest::post("/coupon/create"), coupon).await
}

pub async fn orders(client: &ApiClient, query: &MerchantOrderQuery) -> Result<Envelope<OrderList>> {
    send_json(client, ROLE, ApiRequest::post("/orders/merchant-list"), query).await
}

pub async fn update_order(
    client: &ApiClient,
    update: &MerchantOrderUpdate,
) -> Result<Envelope<OrderStatusChange>> {
    send_json(client, ROLE, ApiRequest::put("/orders/merchant-update"), update).await
}

// Sales statistics

pub async fn sales_overview(
    client: &ApiClient,
    query: &OverviewQuery,
) -> Result<Envelope<SalesOverview>> {
    send_json(client, ROLE, ApiRequest::post("/stats-store/overview"), query).await
}

pub async fn sales_trend(client: &ApiClient, query: &TrendQuery) -> Result<Envelope<SalesTrend>> {
    send_json(client, ROLE, ApiRequest::post("/stats-store/trend"), query).await
}

// Images

pub async fn upload_avatar(client: &ApiClient, file: Upload) -> Result<Envelope<String>> {
    upload(client, ROLE, "/image/upload-merchant-avatar", file, None).await
}

pub async fn upload_store_image(
    client: &ApiClient,
    store_id: i64,
    file: Upload,
) -> Result<Envelope<String>> {
    upload(client, ROLE, "/image/upload-store-image", file, Some(("storeId", store_id))).await
}

pub async fn upload_product_image(
    client: &ApiClient,
    product_id: i64,
    file: Upload,
) -> Result<Envelope<String>> {
    upload(client, ROLE, "/image/upload-product-image", file, Some(("productId", product_id))).await
}
