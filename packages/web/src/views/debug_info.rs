use dioxus::prelude::*;
use ui::DebugInspector;

use crate::Route;

#[component]
pub fn DebugInfo() -> Element {
    rsx! {
        DebugInspector {}
        div {
            class: "back-link",
            Link { to: Route::Dashboard {}, "Back to dashboard" }
            Link { to: Route::Login {}, "Sign in" }
        }
    }
}
