//! Data models shared between collaborators and views.

pub mod stats;

pub use stats::DashboardStats;
