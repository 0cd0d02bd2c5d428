use dioxus::prelude::*;
use ui::DashboardView;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        DashboardView {
            on_unauthenticated: move |_| {
                nav.replace(Route::Login {});
            },
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
            on_open_debug: move |_| {
                nav.push(Route::DebugInfo {});
            },
        }
    }
}
