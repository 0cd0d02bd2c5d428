pub mod config;
pub mod debug;
pub mod storage;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::{ConfigError, PanelConfig};
pub use debug::{DashboardDebug, DebugEvent, DebugKey, DebugSnapshot, LoginDebug};
pub use storage::{KeyValueStore, StorageError, StorageHandle};
