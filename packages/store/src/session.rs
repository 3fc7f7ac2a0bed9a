//! # Persisted login session
//!
//! A [`Session`] is the client's proof of authentication: the bearer token the
//! backend issued at login plus a cached profile of the signed-in user.
//! [`SessionStore`] owns the lifecycle of that session in a [`KeyValueStore`]:
//!
//! | Step | Method | Effect on storage |
//! |------|--------|-------------------|
//! | login | [`SessionStore::save`] | writes `token`, `user`, `userRole`, `uid` |
//! | page load | [`SessionStore::restore`] | reads `token` + `user`, clears a corrupt pair |
//! | logout | [`SessionStore::clear`] | removes all four keys |
//!
//! `token` and `user` are authoritative. `userRole` (numeric role code) and
//! `uid` are written alongside for tools that read the flat keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const ROLE_KEY: &str = "userRole";
pub const UID_KEY: &str = "uid";

/// Every key the session writes.
pub const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, USER_KEY, ROLE_KEY, UID_KEY];

/// Role of a user; decides which UI actions are exposed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Professor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Professor, Role::Admin];

    /// Map the backend's numeric user type (`0` admin, `1` student,
    /// `2` professor).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Role::Admin),
            1 => Some(Role::Student),
            2 => Some(Role::Professor),
            _ => None,
        }
    }

    /// The backend's numeric user type.
    pub fn code(self) -> u8 {
        match self {
            Role::Admin => 0,
            Role::Student => 1,
            Role::Professor => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Professor => "professor",
            Role::Admin => "admin",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Professor => "Professor",
            Role::Admin => "Administrator",
        }
    }

    /// Parse the lowercase name used in forms and account listings.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Some(Role::Student),
            "professor" => Some(Role::Professor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cached profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl SessionUser {
    /// Name to show in the header, falling back to the login id.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// First character of the display name, for the avatar bubble.
    pub fn initial(&self) -> char {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

/// Token plus profile of an authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// Reads and writes the [`Session`] in a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the persisted session.
    ///
    /// Returns `None` when nothing is stored. A token without a parseable
    /// user (or the reverse) is a half-written session: it is cleared and
    /// treated as signed out.
    pub fn restore(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        let user = self.storage.get(USER_KEY);

        match (token, user) {
            (None, None) => None,
            (Some(token), Some(user)) => match serde_json::from_str::<SessionUser>(&user) {
                Ok(user) => Some(Session { token, user }),
                Err(e) => {
                    tracing::warn!("Discarding stored session with unreadable user: {e}");
                    self.clear();
                    None
                }
            },
            _ => {
                tracing::warn!("Discarding incomplete stored session");
                self.clear();
                None
            }
        }
    }

    /// Persist a freshly created session.
    pub fn save(&self, session: &Session) {
        let user = match serde_json::to_string(&session.user) {
            Ok(user) => user,
            Err(e) => {
                tracing::error!("Failed to serialize session user: {e}");
                return;
            }
        };
        self.storage.set(TOKEN_KEY, &session.token);
        self.storage.set(USER_KEY, &user);
        self.storage.set(ROLE_KEY, &session.user.role.code().to_string());
        self.storage.set(UID_KEY, &session.user.id);
    }

    /// Remove every session key.
    pub fn clear(&self) {
        for key in SESSION_KEYS {
            self.storage.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;

    fn professor_session() -> Session {
        Session {
            token: "tok-123".to_string(),
            user: SessionUser {
                id: "12000001".to_string(),
                name: "Lee Gihun".to_string(),
                role: Role::Professor,
            },
        }
    }

    #[test]
    fn test_role_codes() {
        assert_eq!(Role::from_code(0), Some(Role::Admin));
        assert_eq!(Role::from_code(1), Some(Role::Student));
        assert_eq!(Role::from_code(2), Some(Role::Professor));
        assert_eq!(Role::from_code(7), None);
        for role in Role::ALL {
            assert_eq!(Role::from_code(role.code()), Some(role));
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Professor).unwrap(), "\"professor\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_restore_empty() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(store.restore().is_none());
    }

    #[test]
    fn test_save_writes_all_keys() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.save(&professor_session());

        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-123"));
        assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("2"));
        assert_eq!(storage.get(UID_KEY).as_deref(), Some("12000001"));
        assert!(storage.get(USER_KEY).unwrap().contains("\"professor\""));
    }

    #[test]
    fn test_reload_restores_session() {
        let storage = MemoryStorage::new();
        SessionStore::new(storage.clone()).save(&professor_session());

        // A fresh store over the same storage is what a page reload sees.
        let reloaded = SessionStore::new(storage);
        assert_eq!(reloaded.restore(), Some(professor_session()));
    }

    #[test]
    fn test_clear_removes_everything() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.save(&professor_session());
        store.clear();

        for key in SESSION_KEYS {
            assert!(storage.get(key).is_none(), "{key} should be removed");
        }
        assert!(store.restore().is_none());
    }

    #[test]
    fn test_corrupt_user_is_cleared() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok");
        storage.set(USER_KEY, "{not json");
        storage.set(UID_KEY, "1");

        let store = SessionStore::new(storage.clone());
        assert!(store.restore().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_token_without_user_is_cleared() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok");

        let store = SessionStore::new(storage.clone());
        assert!(store.restore().is_none());
        assert!(storage.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let user = SessionUser {
            id: "2019203001".to_string(),
            name: " ".to_string(),
            role: Role::Student,
        };
        assert_eq!(user.display_name(), "2019203001");
        assert_eq!(user.initial(), '2');
        assert_eq!(professor_session().user.initial(), 'L');
    }
}
