mod dashboard;
pub use dashboard::{DashboardContent, DashboardView};

mod debug_inspector;
pub use debug_inspector::DebugInspector;
