//! Session lifecycle: restore on start, login, register, logout.
//!
//! [`SessionManager`] is the only code that touches persisted session state.
//! UI code holds one in context and never reads storage keys itself.

use store::{ClientConfig, KeyValueStore, Session, SessionStore};

use crate::auth::{self, Registration};
use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Clone, Debug)]
pub struct SessionManager<S> {
    config: ClientConfig,
    sessions: SessionStore<S>,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(config: ClientConfig, storage: S) -> Self {
        Self {
            config,
            sessions: SessionStore::new(storage),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Session persisted by an earlier page load, if any.
    pub fn restore(&self) -> Option<Session> {
        let session = self.sessions.restore();
        if let Some(ref s) = session {
            tracing::info!("Restored session for {}", s.user.id);
        }
        session
    }

    /// Client for `session`, or an anonymous one.
    pub fn client(&self, session: Option<&Session>) -> ApiClient {
        ApiClient::for_session(&self.config, session)
    }

    /// Log in and persist the session. On failure storage is left untouched.
    pub async fn login(&self, user_id: &str, password: &str) -> Result<Session, ApiError> {
        let session = auth::login(&self.client(None), user_id, password).await?;
        self.sessions.save(&session);
        Ok(session)
    }

    /// Create the account, then log in with the same credentials.
    pub async fn register(&self, registration: &Registration) -> Result<Session, ApiError> {
        auth::signup(&self.client(None), registration).await?;
        self.login(&registration.user_id, &registration.password).await
    }

    /// Forget the session. There is no logout endpoint; the token is simply
    /// dropped.
    pub fn logout(&self) {
        self.sessions.clear();
        tracing::info!("Signed out");
    }
}
