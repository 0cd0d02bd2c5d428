//! Authentication collaborator used to gate the dashboard.

mod session;

pub use session::{Session, SessionAuth, ADMIN_ROLE, SESSION_ROLE_KEY, SESSION_TOKEN_KEY};

use crate::ApiError;

/// Synchronous authentication state as seen by the views.
pub trait Authenticator {
    /// Whether a user is currently signed in.
    fn is_authenticated(&self) -> bool;

    /// The current session, if signed in.
    fn session(&self) -> Option<Session>;

    /// Start a session.
    fn login(&self, session: &Session) -> Result<(), ApiError>;

    /// End the current session. Failures are logged, never surfaced.
    fn logout(&self);
}
