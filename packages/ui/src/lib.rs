//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;
pub use views::{DashboardContent, DashboardView, DebugInspector};

mod navbar;
pub use navbar::Navbar;

mod services;
pub use services::{use_services, Services, ServicesProvider};

pub mod dashboard;
pub use dashboard::{load_dashboard, DashboardLoad, DashboardPhase};

pub mod debug_log;
pub use debug_log::{record_debug, use_debug_log, DebugLog};

pub mod format;
pub use format::{summary_cards, SummaryCard};
