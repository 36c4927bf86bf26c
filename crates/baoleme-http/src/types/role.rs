//! The four principals of the platform.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A platform role; selects the credential and API surface of a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Rider,
    Merchant,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::User, Role::Rider, Role::Merchant, Role::Admin];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Rider => "rider",
            Role::Merchant => "merchant",
            Role::Admin => "admin",
        }
    }

    /// Durable storage key holding this role's bearer token.
    #[inline]
    pub fn storage_key(self) -> &'static str {
        match self {
            Role::User => "token",
            Role::Rider => "rider_token",
            Role::Merchant => "merchant_token",
            Role::Admin => "admin_token",
        }
    }

    /// Navigation prefix of the role's pages, e.g. `/rider`.
    #[inline]
    pub fn path_prefix(self) -> &'static str {
        match self {
            Role::User => "/user",
            Role::Rider => "/rider",
            Role::Merchant => "/merchant",
            Role::Admin => "/admin",
        }
    }

    pub fn login_path(self) -> String {
        format!("{}/login", self.path_prefix())
    }

    /// Infer the role from the first segment of a navigation path.
    ///
    /// `/rider/home` is a rider page; `/checkout` and `/` belong to no role.
    /// Only whole segments match, so `/username` is not a user page.
    pub fn from_path(path: &str) -> Option<Role> {
        let segment = path
            .trim_start_matches('/')
            .split(['/', '?', '#'])
            .next()?;
        Self::ALL.into_iter().find(|role| role.as_str() == segment)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown role: {}", s))
    }
}
