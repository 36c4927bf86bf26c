//! Cached snapshots of the authenticated principal, one shape per role.
//!
//! The info endpoints name the id `user_id` and send `null` for unset
//! strings; both decode into the plain shapes below.

use crate::types::Role;
use serde::{Deserialize, Deserializer, Serialize};

/// `null` decodes as the type's default.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    #[serde(alias = "user_id")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub username: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub gender: String,
    #[serde(deserialize_with = "nullable")]
    pub avatar: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiderInfo {
    #[serde(alias = "user_id")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub username: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub order_status: i32,
    #[serde(deserialize_with = "nullable")]
    pub dispatch_mode: i32,
    #[serde(deserialize_with = "nullable")]
    pub balance: f64,
    #[serde(deserialize_with = "nullable")]
    pub avatar: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantInfo {
    #[serde(alias = "user_id")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub username: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable", alias = "createdAt")]
    pub created_at: String,
    #[serde(deserialize_with = "nullable")]
    pub avatar: String,
}

/// The backend has no admin profile endpoint; this is what login returns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminInfo {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Profile {
    User(UserInfo),
    Rider(RiderInfo),
    Merchant(MerchantInfo),
    Admin(AdminInfo),
}

impl Profile {
    pub fn role(&self) -> Role {
        match self {
            Profile::User(_) => Role::User,
            Profile::Rider(_) => Role::Rider,
            Profile::Merchant(_) => Role::Merchant,
            Profile::Admin(_) => Role::Admin,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Profile::User(info) => info.id,
            Profile::Rider(info) => info.id,
            Profile::Merchant(info) => info.id,
            Profile::Admin(info) => info.id,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Profile::User(info) => info.username.clone(),
            Profile::Rider(info) => info.username.clone(),
            Profile::Merchant(info) => info.username.clone(),
            Profile::Admin(info) => format!("admin #{}", info.id),
        }
    }

    pub fn as_user(&self) -> Option<&UserInfo> {
        match self {
            Profile::User(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_rider(&self) -> Option<&RiderInfo> {
        match self {
            Profile::Rider(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_merchant(&self) -> Option<&MerchantInfo> {
        match self {
            Profile::Merchant(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_admin(&self) -> Option<&AdminInfo> {
        match self {
            Profile::Admin(info) => Some(info),
            _ => None,
        }
    }
}
