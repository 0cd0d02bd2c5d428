//! # API crate: collaborators behind the admin panel views
//!
//! The views never talk to storage or a backend directly. They go through the two
//! seams defined here, both of which are installed as Dioxus context by the web binary.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`Authenticator`] trait and the local-storage backed [`SessionAuth`] |
//! | [`stats`] | [`StatsSource`] trait and the placeholder [`StubStatsSource`] |
//! | [`models`] | [`DashboardStats`] |
//!
//! Failures are reported as [`ApiError`]; the views log them and recover.

pub mod auth;
mod error;
pub mod models;
pub mod stats;

pub use auth::{Authenticator, Session, SessionAuth};
pub use error::ApiError;
pub use models::DashboardStats;
pub use stats::{StatsSource, StubStatsSource};
