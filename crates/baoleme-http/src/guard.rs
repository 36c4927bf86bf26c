//! Route access checks for navigation.

use crate::session::SessionManager;
use crate::types::Role;
use std::sync::Arc;
use tracing::debug;

/// Outcome of a navigation check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    /// Send the visitor to `to`, remembering where they were headed.
    Redirect { to: String, redirect: String },
}

impl GuardDecision {
    pub fn is_proceed(&self) -> bool {
        matches!(self, GuardDecision::Proceed)
    }
}

/// Blocks protected routes of roles that are not logged in.
///
/// A path outside the four role prefixes is treated as a consumer route.
#[derive(Clone, Debug)]
pub struct NavigationGuard {
    session: Arc<SessionManager>,
}

impl NavigationGuard {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self { session }
    }

    pub fn check(&self, path: &str, requires_auth: bool) -> GuardDecision {
        if !requires_auth {
            return GuardDecision::Proceed;
        }

        let role = Role::from_path(path).unwrap_or(Role::User);
        if self.session.is_logged_in(role) {
            return GuardDecision::Proceed;
        }

        debug!("[Guard] {} requires {} login", path, role);
        GuardDecision::Redirect {
            to: role.login_path(),
            redirect: path.to_string(),
        }
    }
}
