use dioxus::prelude::*;
use store::debug::timestamp_now;
use store::{DebugEvent, KeyValueStore, StorageHandle};

#[derive(Clone, Debug, PartialEq)]
pub struct DebugEntry {
    pub timestamp: String,
    pub event: DebugEvent,
}

/// Typed debug events recorded during the current page session.
///
/// Provided as `Signal<DebugLog>` via context by [`crate::ServicesProvider`].
#[derive(Clone, Debug, Default)]
pub struct DebugLog {
    pub entries: Vec<DebugEntry>,
}

impl DebugLog {
    /// Append `event`, writing it to `storage` first when given.
    ///
    /// A failed write is logged; the event is still kept in memory.
    pub fn record(&mut self, event: DebugEvent, storage: Option<&dyn KeyValueStore>) {
        if let Some(store) = storage {
            if let Err(e) = event.persist(store) {
                tracing::error!("Failed to persist {}: {}", event.key().as_str(), e);
            }
        }
        tracing::debug!("Debug event: {:?}", event);
        self.entries.push(DebugEntry {
            timestamp: timestamp_now(),
            event,
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

pub fn use_debug_log() -> Signal<DebugLog> {
    use_context::<Signal<DebugLog>>()
}

pub fn record_debug(
    log: &mut Signal<DebugLog>,
    storage: &StorageHandle,
    persist: bool,
    event: DebugEvent,
) {
    let store: Option<&dyn KeyValueStore> = if persist { Some(&**storage) } else { None };
    log.write().record(event, store);
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{DebugSnapshot, MemoryStore};

    #[test]
    fn test_record_persists_and_keeps_entry() {
        let store = MemoryStore::new();
        let mut log = DebugLog::default();

        log.record(
            DebugEvent::Redirect("Not authenticated".into()),
            Some(&store as &dyn KeyValueStore),
        );

        assert_eq!(log.entries.len(), 1);
        assert_eq!(
            DebugSnapshot::load(&store).redirect_reason.as_deref(),
            Some("Not authenticated")
        );
    }

    #[test]
    fn test_record_without_storage_stays_in_memory() {
        let store = MemoryStore::new();
        let mut log = DebugLog::default();

        log.record(DebugEvent::Redirect("x".into()), None);

        assert_eq!(log.entries.len(), 1);
        assert!(store.is_empty());

        log.clear();
        assert!(log.entries.is_empty());
    }
}
