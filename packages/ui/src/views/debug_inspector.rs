use dioxus::prelude::*;
use store::{DashboardDebug, DebugEvent, DebugSnapshot, KeyValueStore, LoginDebug};

use crate::debug_log::{DebugEntry, DebugLog};
use crate::{use_debug_log, use_services};

const DEBUG_CSS: Asset = asset!("/assets/styling/debug.css");

/// Shows the login/dashboard debug records left in local storage.
///
/// Records are read once, when the view mounts. Malformed records are skipped.
#[component]
pub fn DebugInspector() -> Element {
    let services = use_services();
    let mut debug_log = use_debug_log();
    let storage = services.storage.clone();
    let mut snapshot = use_signal(move || DebugSnapshot::load(&*storage));

    let handle_clear = move |_| {
        let remaining = clear_debug_info(&*services.storage, &mut debug_log.write());
        snapshot.set(remaining);
        reload_page();
    };

    let entries = debug_log().entries.clone();
    let current = snapshot();
    let is_empty = current.is_empty();
    let empty_message = if entries.is_empty() {
        "No debug information found"
    } else {
        "No debug information found in local storage"
    };
    let DebugSnapshot {
        login,
        dashboard,
        redirect_reason,
    } = current;

    rsx! {
        document::Link { rel: "stylesheet", href: DEBUG_CSS }
        div {
            class: "debug-page",
            h1 { class: "view-title", "Login Debug Information" }

            if is_empty {
                p { class: "debug-empty", "{empty_message}" }
            }

            if let Some(record) = login {
                LoginDebugPanel { record: record }
            }

            if let Some(record) = dashboard {
                DashboardDebugPanel { record: record }
            }

            if let Some(reason) = redirect_reason {
                div {
                    class: "debug-panel debug-panel-redirect",
                    h2 { "Redirect Reason" }
                    p { class: "debug-reason", "{reason}" }
                }
            }

            if !entries.is_empty() {
                SessionEvents { entries: entries }
            }

            button {
                class: "debug-clear",
                onclick: handle_clear,
                "Clear Debug Info"
            }
        }
    }
}

#[component]
fn LoginDebugPanel(record: LoginDebug) -> Element {
    let response = record.login_response.as_ref().map(|value| {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    });

    rsx! {
        div {
            class: "debug-panel debug-panel-login",
            h2 { "Login Debug" }
            TextField { label: "User Role", value: record.user_role }
            TextField { label: "Role Type", value: record.role_type }
            FlagField { label: "Can Access", value: record.can_access }
            TextField { label: "Token", value: record.token }
            div {
                class: "debug-field",
                span { class: "debug-label", "Login Response:" }
                {match response {
                    Some(json) => rsx! { pre { class: "debug-json", "{json}" } },
                    None => rsx! { span { class: "debug-missing", "N/A" } },
                }}
            }
        }
    }
}

#[component]
fn DashboardDebugPanel(record: DashboardDebug) -> Element {
    rsx! {
        div {
            class: "debug-panel debug-panel-dashboard",
            h2 { "Dashboard Debug" }
            FlagField { label: "Is Authenticated", value: record.is_authenticated }
            TextField { label: "Token", value: record.token }
            TextField { label: "User Role", value: record.user_role }
            FlagField { label: "Can Access", value: record.can_access }
            TextField { label: "Timestamp", value: record.timestamp }
        }
    }
}

#[component]
fn TextField(label: &'static str, value: Option<String>) -> Element {
    rsx! {
        div {
            class: "debug-field",
            span { class: "debug-label", "{label}:" }
            {match value {
                Some(v) => rsx! { span { class: "debug-value", "{v}" } },
                None => rsx! { span { class: "debug-missing", "N/A" } },
            }}
        }
    }
}

#[component]
fn FlagField(label: &'static str, value: Option<bool>) -> Element {
    rsx! {
        div {
            class: "debug-field",
            span { class: "debug-label", "{label}:" }
            {match value {
                Some(true) => rsx! { span { class: "debug-yes", "✓ Yes" } },
                Some(false) => rsx! { span { class: "debug-no", "✗ No" } },
                None => rsx! { span { class: "debug-missing", "N/A" } },
            }}
        }
    }
}

#[component]
fn SessionEvents(entries: Vec<DebugEntry>) -> Element {
    rsx! {
        div {
            class: "debug-panel debug-panel-events",
            h2 { "Recorded This Session" }
            ul {
                class: "debug-events",
                for (i, entry) in entries.iter().enumerate().rev() {
                    li {
                        key: "{i}",
                        span { class: "debug-time", "{entry.timestamp}" }
                        span { class: "debug-event-label", " {entry.event.label()}" }
                        if let DebugEvent::Redirect(reason) = &entry.event {
                            span { ": {reason}" }
                        }
                    }
                }
            }
        }
    }
}

/// Remove the stored debug records and forget this session's events.
///
/// Returns what storage still holds afterwards, which is empty unless a removal failed.
fn clear_debug_info(storage: &dyn KeyValueStore, log: &mut DebugLog) -> DebugSnapshot {
    if let Err(e) = DebugSnapshot::clear(storage) {
        tracing::error!("Failed to clear debug info: {}", e);
    }
    log.clear();
    DebugSnapshot::load(storage)
}

fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                tracing::error!("Failed to reload page: {:?}", e);
            }
        }
    }
}
