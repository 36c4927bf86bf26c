//! Request and result shapes shared by the endpoint tables.
//!
//! Results are lenient: missing fields take their default, `null` strings
//! and numbers decode as empty/zero, and unknown fields are ignored. The
//! backend mixes `snake_case` and `camelCase` between controllers, so the
//! affected fields carry an alias.

use crate::session::nullable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Data of endpoints whose payload carries nothing useful (`null`, or a
/// confirmation string). Accepts any JSON.
pub type Ack = serde::de::IgnoredAny;

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub phone: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MerchantRegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PhoneLogin {
    pub phone: String,
    pub password: String,
}

/// Merchants sign in with a username or a phone number.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MerchantLogin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AdminLogin {
    pub admin_id: i64,
    pub password: String,
}

/// Login result of every role. Admin login names the id `id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginData {
    #[serde(deserialize_with = "nullable")]
    pub token: String,
    #[serde(alias = "id", alias = "userId", deserialize_with = "nullable")]
    pub user_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub username: String,
    pub expires_in: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterData {
    #[serde(alias = "userId", deserialize_with = "nullable")]
    pub user_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub username: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RiderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch_mode: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MerchantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Result of a profile update. Renaming an account re-issues its token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateData {
    #[serde(alias = "new_token", alias = "newToken")]
    pub token: Option<String>,
    #[serde(alias = "userId")]
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

impl UpdateData {
    /// The re-issued token, if the server sent a non-empty one.
    pub fn reissued_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Stores and products
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSummary {
    #[serde(alias = "id", alias = "storeId", deserialize_with = "nullable")]
    pub store_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    #[serde(deserialize_with = "nullable")]
    pub rating: f64,
    #[serde(deserialize_with = "nullable")]
    pub status: i32,
    #[serde(deserialize_with = "nullable")]
    pub balance: f64,
    #[serde(alias = "createdAt", alias = "createAt", deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(deserialize_with = "nullable")]
    pub image: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductSummary {
    #[serde(alias = "productId", alias = "product_id", deserialize_with = "nullable")]
    pub id: i64,
    #[serde(alias = "storeId", deserialize_with = "nullable")]
    pub store_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub category: String,
    #[serde(deserialize_with = "nullable")]
    pub price: f64,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub image: String,
    #[serde(deserialize_with = "nullable")]
    pub stock: i64,
    #[serde(deserialize_with = "nullable")]
    pub rating: f64,
    #[serde(deserialize_with = "nullable")]
    pub status: i32,
    #[serde(alias = "createdAt", deserialize_with = "nullable")]
    pub created_at: String,
}

/// Filters for the consumer store listing. Unset filters are not sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StoreFilter {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// One page of the consumer store listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorePage {
    #[serde(alias = "stores", deserialize_with = "nullable")]
    pub data: Vec<StoreSummary>,
    #[serde(alias = "totalItems", deserialize_with = "nullable")]
    pub total: i64,
    #[serde(alias = "currentPage", deserialize_with = "nullable")]
    pub page: i64,
    #[serde(alias = "totalPages", deserialize_with = "nullable")]
    pub total_pages: i64,
}

/// Filters shared by the favorite listing and global search.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SearchFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(rename = "wishPrice", skip_serializing_if = "Option::is_none")]
    pub wish_price: Option<f64>,
    #[serde(rename = "startRating", skip_serializing_if = "Option::is_none")]
    pub start_rating: Option<f64>,
    #[serde(rename = "endRating", skip_serializing_if = "Option::is_none")]
    pub end_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    // the search controller spells the key "reults"
    #[serde(alias = "reults", deserialize_with = "nullable")]
    pub results: Vec<StoreSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProductListQuery {
    pub store_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StoreCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StoreUpdate {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedId {
    #[serde(alias = "product_id", alias = "store_id", deserialize_with = "nullable")]
    pub id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProductCreate {
    pub store_id: i64,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProductUpdate {
    pub product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StoreProductsQuery {
    pub store_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPage {
    #[serde(alias = "products", deserialize_with = "nullable")]
    pub items: Vec<ProductSummary>,
    #[serde(alias = "currentPage", deserialize_with = "nullable")]
    pub current_page: i64,
    #[serde(alias = "totalPages", deserialize_with = "nullable")]
    pub total_pages: i64,
    #[serde(alias = "totalItems", alias = "total", deserialize_with = "nullable")]
    pub total_items: i64,
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

/// An order as it appears in history, current and admin listings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRecord {
    #[serde(alias = "orderId", alias = "id", deserialize_with = "nullable")]
    pub order_id: i64,
    #[serde(alias = "userId", deserialize_with = "nullable")]
    pub user_id: i64,
    #[serde(alias = "storeId", deserialize_with = "nullable")]
    pub store_id: i64,
    #[serde(alias = "riderId", deserialize_with = "nullable")]
    pub rider_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub status: i32,
    #[serde(alias = "storeName", alias = "shop_name", deserialize_with = "nullable")]
    pub store_name: String,
    #[serde(alias = "storePhone", deserialize_with = "nullable")]
    pub store_phone: String,
    #[serde(alias = "storeLocation", alias = "shop_location", deserialize_with = "nullable")]
    pub store_location: String,
    #[serde(alias = "userLocation", alias = "delivery_address", deserialize_with = "nullable")]
    pub user_location: String,
    #[serde(alias = "riderName", deserialize_with = "nullable")]
    pub rider_name: String,
    #[serde(alias = "riderPhone", deserialize_with = "nullable")]
    pub rider_phone: String,
    #[serde(deserialize_with = "nullable")]
    pub remark: String,
    #[serde(alias = "totalPrice", alias = "total_amount", deserialize_with = "nullable")]
    pub total_price: f64,
    #[serde(alias = "actualPrice", deserialize_with = "nullable")]
    pub actual_price: f64,
    #[serde(alias = "deliveryPrice", alias = "delivery_fee", deserialize_with = "nullable")]
    pub delivery_price: f64,
    #[serde(alias = "createdAt", deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(alias = "endedAt", alias = "completed_at", deserialize_with = "nullable")]
    pub ended_at: String,
    #[serde(deserialize_with = "nullable")]
    pub deadline: String,
    #[serde(alias = "estimatedTime", deserialize_with = "nullable")]
    pub estimated_time: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderList {
    #[serde(deserialize_with = "nullable")]
    pub orders: Vec<OrderRecord>,
}

/// History filter used by users and riders. `start_time` and `end_time`
/// are `YYYY-MM-DDTHH:mm:ss`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OrderHistoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Paging {
    pub page: u32,
    pub page_size: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderId {
    pub order_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OrderLine {
    pub product_id: i64,
    pub quantity: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OrderSubmit {
    pub store_id: i64,
    pub items: Vec<OrderLine>,
    pub delivery_price: f64,
    #[serde(rename = "couponId", skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Line items and price breakdown of one order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItems {
    #[serde(alias = "orderItemList", deserialize_with = "nullable")]
    pub order_item_list: Vec<OrderItemLine>,
    #[serde(alias = "priceInfo", deserialize_with = "nullable")]
    pub price_info: BTreeMap<String, f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItemLine {
    #[serde(alias = "productId", deserialize_with = "nullable")]
    pub product_id: i64,
    #[serde(alias = "productName", alias = "name", deserialize_with = "nullable")]
    pub product_name: String,
    #[serde(deserialize_with = "nullable")]
    pub quantity: i64,
    #[serde(deserialize_with = "nullable")]
    pub price: f64,
    #[serde(deserialize_with = "nullable")]
    pub image: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RiderStatusUpdate {
    pub order_id: i64,
    pub target_status: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderStatusChange {
    #[serde(alias = "id", alias = "orderId", deserialize_with = "nullable")]
    pub order_id: i64,
    #[serde(alias = "newStatus", alias = "new_status", deserialize_with = "nullable")]
    pub status: i32,
    #[serde(alias = "oldStatus", deserialize_with = "nullable")]
    pub old_status: i32,
    #[serde(alias = "updatedAt", alias = "update_at", deserialize_with = "nullable")]
    pub updated_at: String,
    #[serde(alias = "cancelReason", deserialize_with = "nullable")]
    pub cancel_reason: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiderEarnings {
    #[serde(deserialize_with = "nullable")]
    pub total_earnings: f64,
    #[serde(deserialize_with = "nullable")]
    pub current_month: f64,
    #[serde(deserialize_with = "nullable")]
    pub completed_orders: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MerchantOrderQuery {
    pub store_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MerchantOrderUpdate {
    pub id: i64,
    pub store_id: i64,
    pub new_status: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,
}

// ---------------------------------------------------------------------------
// Reviews, coupons, favorites
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReviewSubmit {
    pub store_id: i64,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(alias = "userId", deserialize_with = "nullable")]
    pub user_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub username: String,
    #[serde(alias = "storeId", deserialize_with = "nullable")]
    pub store_id: i64,
    #[serde(alias = "productId", deserialize_with = "nullable")]
    pub product_id: i64,
    #[serde(alias = "productName", deserialize_with = "nullable")]
    pub product_name: String,
    #[serde(deserialize_with = "nullable")]
    pub rating: f64,
    #[serde(deserialize_with = "nullable")]
    pub comment: String,
    #[serde(alias = "createdAt", deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(alias = "userAvatar", deserialize_with = "nullable")]
    pub user_avatar: String,
    #[serde(deserialize_with = "nullable")]
    pub image: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReviewQuery {
    pub store_id: i64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i32>,
    #[serde(rename = "hasImage", skip_serializing_if = "Option::is_none")]
    pub has_image: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewPage {
    #[serde(deserialize_with = "nullable")]
    pub reviews: Vec<Review>,
    #[serde(alias = "currentPage", deserialize_with = "nullable")]
    pub current_page: i64,
    #[serde(alias = "pageSize", deserialize_with = "nullable")]
    pub page_size: i64,
    #[serde(alias = "totalCount", deserialize_with = "nullable")]
    pub total_count: i64,
    #[serde(alias = "totalPages", deserialize_with = "nullable")]
    pub total_pages: i64,
}

/// Coupon type 1 is a discount rate, type 2 is "reduce by X over Y".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coupon {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(alias = "storeId", deserialize_with = "nullable")]
    pub store_id: i64,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: i32,
    #[serde(deserialize_with = "nullable")]
    pub discount: f64,
    #[serde(alias = "fullAmount", deserialize_with = "nullable")]
    pub full_amount: f64,
    #[serde(alias = "reduceAmount", deserialize_with = "nullable")]
    pub reduce_amount: f64,
    #[serde(alias = "expirationDate", deserialize_with = "nullable")]
    pub expiration_date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CouponCreate {
    pub store_id: i64,
    #[serde(rename = "type")]
    pub kind: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_amount: Option<f64>,
}

/// Coupon listing filter; without a store every held coupon is returned.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CouponQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StoreRef {
    pub store_id: i64,
}

/// `{ "id": .. }` payloads: coupon claim, store and product detail.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct IdRef {
    pub id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProductRef {
    pub product_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ViewRecord {
    pub store_id: i64,
    pub view_time: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreList {
    #[serde(deserialize_with = "nullable")]
    pub stores: Vec<StoreSummary>,
}

// ---------------------------------------------------------------------------
// Sales statistics
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OverviewQuery {
    pub store_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesOverview {
    #[serde(alias = "totalSales", deserialize_with = "nullable")]
    pub total_sales: f64,
    #[serde(alias = "orderCount", deserialize_with = "nullable")]
    pub order_count: i64,
    #[serde(alias = "popularProducts", deserialize_with = "nullable")]
    pub popular_products: Vec<ProductSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TrendQuery {
    pub store_id: i64,
    #[serde(rename = "type")]
    pub kind: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_of_recent_days: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesTrend {
    #[serde(deserialize_with = "nullable")]
    pub dates: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub values: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Administration
// ---------------------------------------------------------------------------

/// An account row in the admin user, rider and merchant listings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSummary {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub username: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub avatar: String,
    #[serde(alias = "orderStatus", deserialize_with = "nullable")]
    pub order_status: i32,
    #[serde(alias = "dispatchMode", deserialize_with = "nullable")]
    pub dispatch_mode: i32,
    #[serde(deserialize_with = "nullable")]
    pub balance: f64,
    #[serde(alias = "createdAt", deserialize_with = "nullable")]
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserList {
    #[serde(deserialize_with = "nullable")]
    pub users: Vec<AccountSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiderList {
    #[serde(deserialize_with = "nullable")]
    pub riders: Vec<AccountSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantList {
    #[serde(deserialize_with = "nullable")]
    pub merchants: Vec<AccountSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductList {
    #[serde(deserialize_with = "nullable")]
    pub products: Vec<ProductSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewList {
    #[serde(deserialize_with = "nullable")]
    pub reviews: Vec<Review>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AccountQuery {
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_id: Option<i64>,
}

impl AccountQuery {
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            ..Default::default()
        }
    }
}

/// Names of the entities to take down; only the set ones are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TakeDown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AdminOrderQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AdminReviewQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AdminProductQuery {
    pub store_id: i64,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct KeywordQuery {
    pub key_word: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSearchHit {
    #[serde(alias = "storeId", deserialize_with = "nullable")]
    pub store_id: i64,
    #[serde(alias = "storeName", deserialize_with = "nullable")]
    pub store_name: String,
    /// Matching product names mapped to their ids.
    #[serde(deserialize_with = "nullable")]
    pub products: BTreeMap<String, i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSearchResults {
    #[serde(deserialize_with = "nullable")]
    pub results: Vec<AdminSearchHit>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReviewRef {
    pub review_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleOrder {
    pub order: Option<OrderRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleReview {
    pub review: Option<Review>,
}

// ---------------------------------------------------------------------------
// Cart
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartItem {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(rename = "productId", alias = "product_id", deserialize_with = "nullable")]
    pub product_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub quantity: u32,
    pub product: Option<ProductSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CartAdd {
    #[serde(rename = "productId")]
    pub product_id: i64,
    pub quantity: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Quantity {
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_filters_are_not_sent() {
        let filter = StoreFilter {
            min_rating: Some(4.5),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&filter).unwrap(), json!({"min_rating": 4.5}));

        let query = OrderHistoryQuery {
            page: 1,
            page_size: 10,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"page": 1, "page_size": 10})
        );
    }

    #[test]
    fn test_login_data_accepts_admin_shape() {
        let data: LoginData = serde_json::from_value(json!({"id": 1, "token": "t"})).unwrap();
        assert_eq!(data.user_id, 1);
        assert_eq!(data.token, "t");

        let data: LoginData = serde_json::from_value(json!({"token": null})).unwrap();
        assert_eq!(data.token, "");
    }

    #[test]
    fn test_order_record_from_camel_and_snake() {
        let admin: OrderRecord = serde_json::from_value(json!({
            "orderId": 9, "userId": 2, "totalPrice": 31.5, "createdAt": "2025-06-01T12:00:00"
        }))
        .unwrap();
        let user: OrderRecord = serde_json::from_value(json!({
            "order_id": 9, "user_id": 2, "total_price": 31.5, "created_at": "2025-06-01T12:00:00",
            "remark": null, "rider_name": null
        }))
        .unwrap();
        assert_eq!(admin.order_id, user.order_id);
        assert_eq!(admin.total_price, user.total_price);
        assert_eq!(admin.created_at, user.created_at);
        assert_eq!(user.remark, "");
    }

    #[test]
    fn test_search_results_tolerate_misspelled_key() {
        let results: SearchResults =
            serde_json::from_value(json!({"reults": [{"storeId": 3, "name": "noodles"}]})).unwrap();
        assert_eq!(results.results[0].store_id, 3);
    }

    #[test]
    fn test_update_data_reissued_token() {
        let data: UpdateData =
            serde_json::from_value(json!({"new_token": "n", "user_id": 1})).unwrap();
        assert_eq!(data.reissued_token(), Some("n"));
        let data: UpdateData = serde_json::from_value(json!({"token": ""})).unwrap();
        assert_eq!(data.reissued_token(), None);
    }

    #[test]
    fn test_cart_add_uses_camel_case() {
        let body = serde_json::to_value(CartAdd {
            product_id: 4,
            quantity: 2,
        })
        .unwrap();
        assert_eq!(body, json!({"productId": 4, "quantity": 2}));
    }
}
