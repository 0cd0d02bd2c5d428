//! Browser-stored session and the storage-backed [`Authenticator`].

use store::{KeyValueStore, StorageHandle};

use super::Authenticator;
use crate::ApiError;

/// Key for storing the session token in local storage.
pub const SESSION_TOKEN_KEY: &str = "token";
/// Key for storing the signed-in user's role in local storage.
pub const SESSION_ROLE_KEY: &str = "userRole";
/// The only role allowed into the admin panel.
pub const ADMIN_ROLE: &str = "admin";

/// Session data kept in local storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Option<String>) -> Self {
        Self {
            token: token.into(),
            role,
        }
    }

    /// Whether this session may use the admin panel.
    pub fn can_access(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

/// [`Authenticator`] that treats a non-empty stored token as a signed-in session.
#[derive(Debug, Clone)]
pub struct SessionAuth {
    storage: StorageHandle,
}

impl SessionAuth {
    pub fn new(storage: StorageHandle) -> Self {
        Self { storage }
    }
}

impl Authenticator for SessionAuth {
    fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    fn session(&self) -> Option<Session> {
        let token = self
            .storage
            .get(SESSION_TOKEN_KEY)
            .filter(|t| !t.trim().is_empty())?;
        let role = self.storage.get(SESSION_ROLE_KEY);
        Some(Session { token, role })
    }

    fn login(&self, session: &Session) -> Result<(), ApiError> {
        if session.token.trim().is_empty() {
            return Err(ApiError::EmptyToken);
        }
        self.storage.set(SESSION_TOKEN_KEY, &session.token)?;
        match &session.role {
            Some(role) => self.storage.set(SESSION_ROLE_KEY, role)?,
            None => self.storage.remove(SESSION_ROLE_KEY)?,
        }
        tracing::info!("Signed in with role {:?}", session.role);
        Ok(())
    }

    fn logout(&self) {
        for key in [SESSION_TOKEN_KEY, SESSION_ROLE_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::error!("Failed to clear {}: {}", key, e);
            }
        }
    }
}
