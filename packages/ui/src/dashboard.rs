//! Dashboard load sequence: auth gate, debug capture, statistics fetch.
//!
//! Kept free of rendering so the gate can be exercised without a virtual DOM.

use api::{Authenticator, DashboardStats, Session, StatsSource};
use store::debug::timestamp_now;
use store::{DashboardDebug, DebugEvent};

/// Reason recorded when the dashboard bounces an anonymous visitor.
pub const UNAUTHENTICATED_REASON: &str = "Not authenticated when opening the dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardPhase {
    Loading,
    Ready,
}

/// Outcome of [`load_dashboard`].
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardLoad {
    /// The visitor must be sent to the login page; the dashboard never becomes ready.
    Unauthenticated,
    /// Ready to render. `None` when the statistics could not be loaded.
    Ready(Option<DashboardStats>),
}

/// Capture the auth state the dashboard sees right now.
pub fn dashboard_debug(auth: &dyn Authenticator) -> DashboardDebug {
    let session = auth.session();
    DashboardDebug {
        is_authenticated: Some(auth.is_authenticated()),
        token: session.as_ref().map(|s| s.token.clone()),
        user_role: session.as_ref().and_then(|s| s.role.clone()),
        can_access: Some(session.as_ref().is_some_and(Session::can_access)),
        timestamp: Some(timestamp_now()),
    }
}

/// Run the dashboard's mount sequence.
///
/// Debug events are handed to `record` in the order they happen. A statistics failure
/// is logged and still yields [`DashboardLoad::Ready`].
pub async fn load_dashboard(
    auth: &dyn Authenticator,
    stats: &dyn StatsSource,
    mut record: impl FnMut(DebugEvent),
) -> DashboardLoad {
    record(DebugEvent::Dashboard(dashboard_debug(auth)));

    if !auth.is_authenticated() {
        tracing::info!("Dashboard opened without a session, redirecting to login");
        record(DebugEvent::Redirect(UNAUTHENTICATED_REASON.to_string()));
        return DashboardLoad::Unauthenticated;
    }

    match stats.load().await {
        Ok(loaded) => DashboardLoad::Ready(Some(loaded)),
        Err(e) => {
            tracing::error!("Error loading dashboard stats: {}", e);
            DashboardLoad::Ready(None)
        }
    }
}
