//! Per-role credentials and profile snapshots.
//!
//! One [`SessionManager`] holds the state of all four roles. A role is logged
//! in exactly when it holds a non-empty token; the flag is derived from the
//! token rather than stored beside it, so the two cannot drift apart.

mod profile;
mod storage;
mod validity;

pub(crate) use profile::nullable;
pub use profile::{AdminInfo, MerchantInfo, Profile, RiderInfo, UserInfo};
pub use storage::{FileStore, MemoryStore};
pub use validity::SessionValidity;

use crate::traits::KeyValueStore;
use crate::types::Role;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Logged-in flags of the four roles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub user: bool,
    pub rider: bool,
    pub merchant: bool,
    pub admin: bool,
}

impl LoginState {
    pub fn get(&self, role: Role) -> bool {
        match role {
            Role::User => self.user,
            Role::Rider => self.rider,
            Role::Merchant => self.merchant,
            Role::Admin => self.admin,
        }
    }

    fn set(&mut self, role: Role, logged_in: bool) {
        match role {
            Role::User => self.user = logged_in,
            Role::Rider => self.rider = logged_in,
            Role::Merchant => self.merchant = logged_in,
            Role::Admin => self.admin = logged_in,
        }
    }
}

#[derive(Clone, Debug, Default)]
struct RoleState {
    token: String,
    profile: Option<Profile>,
}

/// Session state of every role, persisted through a [`KeyValueStore`].
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    roles: RwLock<HashMap<Role, RoleState>>,
    state_tx: watch::Sender<LoginState>,
}

impl SessionManager {
    /// Seed memory from the durable store before first use, so a restart
    /// does not look like a logout.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let mut roles = HashMap::new();
        let mut state = LoginState::default();

        for role in Role::ALL {
            let token = match store.get(role.storage_key()) {
                Ok(Some(token)) if !token.is_empty() => token,
                Ok(_) => String::new(),
                Err(e) => {
                    warn!("[Session] Failed to read {}: {}", role.storage_key(), e);
                    String::new()
                }
            };
            state.set(role, !token.is_empty());
            roles.insert(
                role,
                RoleState {
                    token,
                    profile: None,
                },
            );
        }

        debug!("[Session] Restored login state {:?}", state);
        let (state_tx, _) = watch::channel(state);

        Self {
            store,
            roles: RwLock::new(roles),
            state_tx,
        }
    }

    /// A manager over a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Store `token` for `role` in memory and durably. An empty token clears.
    pub fn set_token(&self, role: Role, token: &str) {
        if token.is_empty() {
            self.clear_token(role);
            return;
        }

        if let Err(e) = self.store.set(role.storage_key(), token) {
            warn!("[Session] Failed to persist {} token: {}", role, e);
        }
        {
            let mut roles = self.roles.write();
            let entry = roles.entry(role).or_default();
            entry.token = token.to_string();
        }
        info!("[Session] {} logged in", role);
        self.publish(role, true);
    }

    /// Erase the token and cached profile of `role`. Safe to repeat.
    pub fn clear_token(&self, role: Role) {
        if let Err(e) = self.store.remove(role.storage_key()) {
            warn!("[Session] Failed to remove {} token: {}", role, e);
        }
        let was_logged_in = {
            let mut roles = self.roles.write();
            let entry = roles.entry(role).or_default();
            let was = !entry.token.is_empty();
            *entry = RoleState::default();
            was
        };
        if was_logged_in {
            info!("[Session] {} logged out", role);
        }
        self.publish(role, false);
    }

    /// In-memory token; empty when logged out.
    pub fn token(&self, role: Role) -> String {
        self.roles
            .read()
            .get(&role)
            .map(|s| s.token.clone())
            .unwrap_or_default()
    }

    /// Token as currently persisted, bypassing memory.
    pub fn stored_token(&self, role: Role) -> Option<String> {
        match self.store.get(role.storage_key()) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("[Session] Failed to read {}: {}", role.storage_key(), e);
                None
            }
        }
    }

    pub fn is_logged_in(&self, role: Role) -> bool {
        self.roles
            .read()
            .get(&role)
            .is_some_and(|s| !s.token.is_empty())
    }

    pub fn profile(&self, role: Role) -> Option<Profile> {
        self.roles.read().get(&role).and_then(|s| s.profile.clone())
    }

    /// Replace the cached snapshot of `profile.role()`.
    ///
    /// Ignored when that role is logged out, so a late response cannot
    /// resurrect a profile after logout.
    pub fn set_profile(&self, profile: Profile) -> bool {
        let role = profile.role();
        let mut roles = self.roles.write();
        match roles.get_mut(&role) {
            Some(state) if !state.token.is_empty() => {
                state.profile = Some(profile);
                true
            }
            _ => {
                warn!("[Session] Dropping {} profile: not logged in", role);
                false
            }
        }
    }

    pub fn login_state(&self) -> LoginState {
        *self.state_tx.borrow()
    }

    /// Watch login transitions of every role.
    pub fn subscribe(&self) -> watch::Receiver<LoginState> {
        self.state_tx.subscribe()
    }

    fn publish(&self, role: Role, logged_in: bool) {
        self.state_tx.send_modify(|state| state.set(role, logged_in));
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("login_state", &self.login_state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, Result};

    #[test]
    fn test_set_token_survives_reload_for_every_role() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let session = SessionManager::new(store.clone());
        for role in Role::ALL {
            session.set_token(role, &format!("{}-token", role));
        }

        let reloaded = SessionManager::new(store);
        for role in Role::ALL {
            assert!(reloaded.is_logged_in(role));
            assert_eq!(reloaded.token(role), format!("{}-token", role));
        }
    }

    #[test]
    fn test_clear_token_for_every_role() {
        let session = SessionManager::in_memory();
        for role in Role::ALL {
            session.set_token(role, "t");
            let profile = match role {
                Role::User => Profile::User(UserInfo::default()),
                Role::Rider => Profile::Rider(RiderInfo::default()),
                Role::Merchant => Profile::Merchant(MerchantInfo::default()),
                Role::Admin => Profile::Admin(AdminInfo::default()),
            };
            assert!(session.set_profile(profile));

            session.clear_token(role);
            assert!(!session.is_logged_in(role));
            assert_eq!(session.token(role), "");
            assert_eq!(session.profile(role), None);
            assert_eq!(session.stored_token(role), None);
        }
    }

    #[test]
    fn test_empty_stored_token_is_logged_out() {
        let store = MemoryStore::new().with_entry("token", "");
        let session = SessionManager::new(Arc::new(store));
        assert!(!session.is_logged_in(Role::User));
    }

    #[test]
    fn test_empty_set_token_clears() {
        let session = SessionManager::in_memory();
        session.set_token(Role::Rider, "r");
        session.set_token(Role::Rider, "");
        assert!(!session.is_logged_in(Role::Rider));
    }

    #[test]
    fn test_roles_are_independent() {
        let session = SessionManager::in_memory();
        session.set_token(Role::Merchant, "m");
        assert!(session.is_logged_in(Role::Merchant));
        assert!(!session.is_logged_in(Role::User));
        session.clear_token(Role::User);
        assert!(session.is_logged_in(Role::Merchant));
    }

    #[test]
    fn test_profile_requires_login() {
        let session = SessionManager::in_memory();
        assert!(!session.set_profile(Profile::User(UserInfo::default())));
        assert_eq!(session.profile(Role::User), None);
    }

    #[test]
    fn test_stored_token_reads_through() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let session = SessionManager::new(store.clone());
        store.set("rider_token", "from-another-tab").unwrap();
        assert_eq!(
            session.stored_token(Role::Rider).as_deref(),
            Some("from-another-tab")
        );
        assert!(!session.is_logged_in(Role::Rider));
    }

    #[tokio::test]
    async fn test_subscribe_sees_transitions() {
        let session = SessionManager::in_memory();
        let mut rx = session.subscribe();
        assert!(!rx.borrow().user);

        session.set_token(Role::User, "abc");
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().user);

        session.clear_token(Role::User);
        rx.changed().await.unwrap();
        assert!(!rx.borrow().user);
        assert_eq!(session.login_state(), LoginState::default());
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(ApiError::Storage("disk gone".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(ApiError::Storage("disk gone".into()))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Err(ApiError::Storage("disk gone".into()))
        }
    }

    #[test]
    fn test_storage_failures_keep_memory_consistent() {
        let session = SessionManager::new(Arc::new(BrokenStore));
        assert!(!session.is_logged_in(Role::User));
        session.set_token(Role::User, "abc");
        assert!(session.is_logged_in(Role::User));
        session.clear_token(Role::User);
        assert!(!session.is_logged_in(Role::User));
        assert_eq!(session.stored_token(Role::User), None);
    }
}
