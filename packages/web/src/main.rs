use dioxus::prelude::*;

use store::{PanelConfig, StorageHandle};
use ui::{Services, ServicesProvider};
use views::{Dashboard, DebugInfo, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/debug")]
    DebugInfo {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const PANEL_CONFIG: &str = include_str!("../admin-panel.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> PanelConfig {
    match PanelConfig::from_toml(PANEL_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Falling back to default config: {}", e);
            PanelConfig::default()
        }
    }
}

fn make_storage() -> StorageHandle {
    #[cfg(target_arch = "wasm32")]
    {
        StorageHandle::new(store::LocalStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        StorageHandle::new(store::MemoryStore::new())
    }
}

#[component]
fn App() -> Element {
    let services = use_hook(|| Services::local(make_storage()));
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ServicesProvider {
            services: services,
            config: config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_dashboard() {
        assert!(matches!("/".parse::<Route>(), Ok(Route::Dashboard {})));
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
        assert_eq!(Route::DebugInfo {}.to_string(), "/debug");
    }

    #[test]
    fn test_embedded_config_parses() {
        assert_eq!(PanelConfig::from_toml(PANEL_CONFIG).ok(), Some(PanelConfig::default()));
    }
}
