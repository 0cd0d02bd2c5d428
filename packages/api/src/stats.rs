//! Statistics loader behind the dashboard.
//!
//! Views depend only on [`StatsSource`]; swapping the stub for an HTTP-backed
//! source does not touch rendering.

use async_trait::async_trait;

use crate::{ApiError, DashboardStats};

/// Asynchronous source of [`DashboardStats`].
///
/// Futures are not `Send`: everything runs on the single-threaded browser event loop.
#[async_trait(?Send)]
pub trait StatsSource {
    async fn load(&self) -> Result<DashboardStats, ApiError>;
}

/// Placeholder source that resolves immediately with fixed figures.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubStatsSource;

impl StubStatsSource {
    pub const STATS: DashboardStats = DashboardStats {
        total_users: 150,
        total_appointments: 342,
        total_barbers: 25,
        total_revenue: 12_500.0,
        pending_appointments: 12,
        average_rating: 4.5,
    };
}

#[async_trait(?Send)]
impl StatsSource for StubStatsSource {
    async fn load(&self) -> Result<DashboardStats, ApiError> {
        tracing::debug!("Serving placeholder dashboard statistics");
        Ok(Self::STATS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_resolves_with_fixed_record() {
        let stats = StubStatsSource.load().await.unwrap();

        assert_eq!(stats.total_users, 150);
        assert_eq!(stats.total_appointments, 342);
        assert_eq!(stats.total_barbers, 25);
        assert_eq!(stats.total_revenue, 12_500.0);
        assert_eq!(stats.pending_appointments, 12);
        assert_eq!(stats.average_rating, 4.5);
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let source: Box<dyn StatsSource> = Box::new(StubStatsSource);
        assert_eq!(source.load().await.unwrap(), StubStatsSource::STATS);
    }
}
