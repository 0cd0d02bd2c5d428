//! # Debug records: login and dashboard diagnostics
//!
//! The sign-in flow and the dashboard leave small JSON records in local storage so
//! that an admin can inspect what happened after a failed login or an unexpected
//! redirect. This module owns their shape and their keys.
//!
//! ## Keys
//!
//! | [`DebugKey`] | Storage key | Value |
//! |--------------|-------------|-------|
//! | `Login` | `"loginDebug"` | JSON [`LoginDebug`] |
//! | `Dashboard` | `"dashboardDebug"` | JSON [`DashboardDebug`] |
//! | `RedirectReason` | `"redirectReason"` | plain string |
//!
//! ## Schema tolerance
//!
//! Records are written by code that may be older or newer than the reader, so every
//! field is optional and unknown fields are ignored. A record that is not valid JSON
//! at all is logged and treated as absent; it never reaches the UI as an error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, StorageError};

/// The local storage keys used for debug records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DebugKey {
    Login,
    Dashboard,
    RedirectReason,
}

impl DebugKey {
    pub const ALL: [DebugKey; 3] = [DebugKey::Login, DebugKey::Dashboard, DebugKey::RedirectReason];

    /// The exact key string in local storage.
    pub fn as_str(self) -> &'static str {
        match self {
            DebugKey::Login => "loginDebug",
            DebugKey::Dashboard => "dashboardDebug",
            DebugKey::RedirectReason => "redirectReason",
        }
    }
}

/// Snapshot of the session taken right after a sign-in attempt.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginDebug {
    pub user_role: Option<String>,
    /// Kind of value the role was stored as ("string", "number", ...).
    pub role_type: Option<String>,
    pub can_access: Option<bool>,
    pub token: Option<String>,
    /// Raw sign-in response, kept as arbitrary JSON.
    pub login_response: Option<serde_json::Value>,
}

/// Snapshot of the auth state seen by the dashboard when it mounted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDebug {
    pub is_authenticated: Option<bool>,
    pub token: Option<String>,
    pub user_role: Option<String>,
    pub can_access: Option<bool>,
    /// RFC 3339 timestamp.
    pub timestamp: Option<String>,
}

/// A single typed debug event.
#[derive(Clone, Debug, PartialEq)]
pub enum DebugEvent {
    Login(LoginDebug),
    Dashboard(DashboardDebug),
    Redirect(String),
}

/// Errors raised while persisting a [`DebugEvent`].
#[derive(Debug, thiserror::Error)]
pub enum DebugError {
    #[error("failed to encode debug record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl DebugEvent {
    /// The key this event is persisted under.
    pub fn key(&self) -> DebugKey {
        match self {
            DebugEvent::Login(_) => DebugKey::Login,
            DebugEvent::Dashboard(_) => DebugKey::Dashboard,
            DebugEvent::Redirect(_) => DebugKey::RedirectReason,
        }
    }

    /// Encode as the string stored in local storage. Redirect reasons are stored raw.
    pub fn to_storage_value(&self) -> Result<String, serde_json::Error> {
        match self {
            DebugEvent::Login(record) => serde_json::to_string(record),
            DebugEvent::Dashboard(record) => serde_json::to_string(record),
            DebugEvent::Redirect(reason) => Ok(reason.clone()),
        }
    }

    /// Write the event to `store`, replacing the previous record under the same key.
    pub fn persist(&self, store: &dyn KeyValueStore) -> Result<(), DebugError> {
        let value = self.to_storage_value()?;
        store.set(self.key().as_str(), &value)?;
        Ok(())
    }

    /// Short label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            DebugEvent::Login(_) => "Login",
            DebugEvent::Dashboard(_) => "Dashboard",
            DebugEvent::Redirect(_) => "Redirect",
        }
    }
}

/// Everything the debug inspector shows, read from local storage in one pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DebugSnapshot {
    pub login: Option<LoginDebug>,
    pub dashboard: Option<DashboardDebug>,
    pub redirect_reason: Option<String>,
}

impl DebugSnapshot {
    /// Read and parse all debug records. Malformed JSON records are logged and skipped.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            login: parse_record(store, DebugKey::Login),
            dashboard: parse_record(store, DebugKey::Dashboard),
            redirect_reason: store.get(DebugKey::RedirectReason.as_str()),
        }
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.login.is_none() && self.dashboard.is_none() && self.redirect_reason.is_none()
    }

    /// Remove every debug key from `store`.
    ///
    /// Every key is attempted even if an earlier removal fails; the first error is returned.
    pub fn clear(store: &dyn KeyValueStore) -> Result<(), StorageError> {
        let mut first_err = None;
        for key in DebugKey::ALL {
            if let Err(e) = store.remove(key.as_str()) {
                tracing::warn!("Failed to remove {}: {}", key.as_str(), e);
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn parse_record<T: DeserializeOwned>(store: &dyn KeyValueStore, key: DebugKey) -> Option<T> {
    let raw = store.get(key.as_str())?;
    match serde_json::from_str(&raw) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}", key.as_str(), e);
            None
        }
    }
}

/// Current time as an RFC 3339 string with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    const LOGIN_JSON: &str = r#"{
        "userRole": "admin",
        "roleType": "string",
        "canAccess": true,
        "token": "eyJhbGciOi",
        "loginResponse": {"user": {"id": 7, "role": "admin"}}
    }"#;

    #[test]
    fn test_keys_match_storage_names() {
        let names: Vec<_> = DebugKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["loginDebug", "dashboardDebug", "redirectReason"]);
    }

    #[test]
    fn test_empty_store_gives_empty_snapshot() {
        let store = MemoryStore::new();
        let snapshot = DebugSnapshot::load(&store);

        assert!(snapshot.is_empty());
        assert_eq!(snapshot, DebugSnapshot::default());
    }

    #[test]
    fn test_load_parses_login_record() {
        let store = MemoryStore::with_entries([("loginDebug", LOGIN_JSON)]);
        let snapshot = DebugSnapshot::load(&store);

        let login = snapshot.login.unwrap();
        assert_eq!(login.user_role.as_deref(), Some("admin"));
        assert_eq!(login.role_type.as_deref(), Some("string"));
        assert_eq!(login.can_access, Some(true));
        assert_eq!(login.login_response.unwrap()["user"]["id"], 7);
        assert!(snapshot.dashboard.is_none());
    }

    #[test]
    fn test_malformed_login_is_skipped() {
        let store = MemoryStore::with_entries([
            ("loginDebug", "{not json"),
            ("redirectReason", "No token"),
        ]);
        let snapshot = DebugSnapshot::load(&store);

        assert!(snapshot.login.is_none());
        assert_eq!(snapshot.redirect_reason.as_deref(), Some("No token"));
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_partial_and_unknown_fields_are_tolerated() {
        let store = MemoryStore::with_entries([(
            "dashboardDebug",
            r#"{"isAuthenticated": false, "extra": 1}"#,
        )]);
        let dashboard = DebugSnapshot::load(&store).dashboard.unwrap();

        assert_eq!(dashboard.is_authenticated, Some(false));
        assert!(dashboard.token.is_none());
        assert!(dashboard.timestamp.is_none());
    }

    #[test]
    fn test_clear_removes_only_debug_keys() {
        let store = MemoryStore::with_entries([
            ("loginDebug", LOGIN_JSON),
            ("dashboardDebug", "{}"),
            ("redirectReason", "expired"),
            ("token", "abc"),
        ]);

        DebugSnapshot::clear(&store).unwrap();

        for key in DebugKey::ALL {
            assert!(store.get(key.as_str()).is_none());
        }
        assert_eq!(store.get("token").as_deref(), Some("abc"));
        assert!(DebugSnapshot::load(&store).is_empty());
    }

    #[test]
    fn test_persist_writes_under_event_key() {
        let store = MemoryStore::new();

        DebugEvent::Redirect("Not authenticated".into()).persist(&store).unwrap();
        DebugEvent::Dashboard(DashboardDebug {
            is_authenticated: Some(true),
            user_role: Some("admin".into()),
            ..Default::default()
        })
        .persist(&store)
        .unwrap();

        assert_eq!(store.get("redirectReason").as_deref(), Some("Not authenticated"));
        let snapshot = DebugSnapshot::load(&store);
        let dashboard = snapshot.dashboard.unwrap();
        assert_eq!(dashboard.is_authenticated, Some(true));
        assert_eq!(dashboard.user_role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let ts = timestamp_now();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
        assert!(ts.ends_with('Z'));
    }
}
