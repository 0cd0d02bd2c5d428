//! # Dashboard statistics
//!
//! [`DashboardStats`] is the fixed-shape summary the dashboard renders as six cards.
//! It is recreated on every dashboard mount and never persisted. Counts are unsigned,
//! so the only non-negativity that is not enforced by the type is on revenue and rating.
//!
//! Field names serialise in camelCase (`totalUsers`, `averageRating`, ...) to match
//! the JSON shape the remote statistics endpoint is expected to return.

use serde::{Deserialize, Serialize};

/// Business summary shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: u32,
    pub total_appointments: u32,
    pub total_barbers: u32,
    /// Revenue in whole currency units (cents as the fractional part).
    pub total_revenue: f64,
    pub pending_appointments: u32,
    /// Mean rating on a 0-5 scale.
    pub average_rating: f64,
}
