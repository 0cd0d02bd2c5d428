//! Collaborator context for the views.

use std::rc::Rc;

use api::{Authenticator, SessionAuth, StatsSource, StubStatsSource};
use dioxus::prelude::*;
use store::{PanelConfig, StorageHandle};

use crate::debug_log::DebugLog;

/// The external collaborators every view reaches through context.
#[derive(Clone)]
pub struct Services {
    pub auth: Rc<dyn Authenticator>,
    pub stats: Rc<dyn StatsSource>,
    pub storage: StorageHandle,
}

impl Services {
    pub fn new(
        storage: StorageHandle,
        auth: impl Authenticator + 'static,
        stats: impl StatsSource + 'static,
    ) -> Self {
        Self {
            auth: Rc::new(auth),
            stats: Rc::new(stats),
            storage,
        }
    }

    /// Session auth over `storage` and placeholder statistics.
    pub fn local(storage: StorageHandle) -> Self {
        let auth = SessionAuth::new(storage.clone());
        Self::new(storage, auth, StubStatsSource)
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.auth, &other.auth)
            && Rc::ptr_eq(&self.stats, &other.stats)
            && self.storage == other.storage
    }
}

/// Get the collaborators installed by [`ServicesProvider`].
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Provider component that installs the collaborators, the panel config and an empty
/// debug log. Wrap your app with this component.
#[component]
pub fn ServicesProvider(
    services: Services,
    #[props(default)] config: PanelConfig,
    children: Element,
) -> Element {
    use_context_provider(|| services);
    use_context_provider(|| config);
    use_context_provider(|| Signal::new(DebugLog::default()));

    rsx! {
        {children}
    }
}
