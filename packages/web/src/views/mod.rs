mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod debug_info;
pub use debug_info::DebugInfo;
