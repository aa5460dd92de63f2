use std::sync::RwLock;

/// The signed-in user as seen by route authorization. Supplied by the
/// session layer; read-only here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdentity {
    pub roles: Vec<String>,
    pub is_super_admin: bool,
}

/// Session state the orchestrator reads and writes.
///
/// Passed in explicitly rather than read from a global so tests can run
/// against an isolated store. The only write from this subsystem is the
/// dynamic-mode home path.
pub trait SessionContext: Send + Sync {
    fn identity(&self) -> UserIdentity;

    /// Publishes the server-declared default landing path.
    fn set_home_path(&self, home: String);

    fn home_path(&self) -> Option<String>;
}

/// In-memory session store backing the default [`SessionContext`].
#[derive(Debug, Default)]
pub struct SessionStore {
    identity: RwLock<UserIdentity>,
    home_path: RwLock<Option<String>>,
}

impl SessionStore {
    pub fn new(identity: UserIdentity) -> Self {
        Self {
            identity: RwLock::new(identity),
            home_path: RwLock::new(None),
        }
    }

    /// Replaces the stored identity, e.g. on login or logout.
    pub fn set_identity(&self, identity: UserIdentity) {
        *self.identity.write().unwrap_or_else(|e| e.into_inner()) = identity;
    }
}

impl SessionContext for SessionStore {
    fn identity(&self) -> UserIdentity {
        self.identity
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set_home_path(&self, home: String) {
        *self.home_path.write().unwrap_or_else(|e| e.into_inner()) = Some(home);
    }

    fn home_path(&self) -> Option<String> {
        self.home_path
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_round_trips_identity_and_home_path() {
        let store = SessionStore::new(UserIdentity {
            roles: vec!["editor".to_string()],
            is_super_admin: false,
        });

        assert_eq!(store.identity().roles, vec!["editor".to_string()]);
        assert_eq!(store.home_path(), None);

        store.set_home_path("/home".to_string());
        assert_eq!(store.home_path().as_deref(), Some("/home"));

        store.set_identity(UserIdentity::default());
        assert!(store.identity().roles.is_empty());
    }
}
