//! Development sign-in page: stores a token and role in the browser session.

use api::auth::ADMIN_ROLE;
use api::{ApiError, Session};
use dioxus::prelude::*;
use serde_json::json;
use store::{DebugEvent, LoginDebug, PanelConfig};
use ui::{record_debug, use_debug_log, use_services};

use crate::Route;

const ROLES: [&str; 3] = [ADMIN_ROLE, "barber", "client"];

/// Login page component.
#[component]
pub fn Login() -> Element {
    let services = use_services();
    let config = use_context::<PanelConfig>();
    let mut debug_log = use_debug_log();
    let nav = use_navigator();

    let mut token = use_signal(String::new);
    let mut role = use_signal(|| ADMIN_ROLE.to_string());
    let mut error = use_signal(|| Option::<String>::None);

    let handle_sign_in = move |_| {
        let session = Session::new(token().trim(), Some(role()));
        let result = services.auth.login(&session);
        record_debug(
            &mut debug_log,
            &services.storage,
            config.debug.persist_events,
            DebugEvent::Login(login_debug(&session, &result)),
        );
        match result {
            Ok(()) => {
                error.set(None);
                nav.push(Route::Dashboard {});
            }
            Err(e) => {
                tracing::warn!("Sign-in failed: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div {
            class: "login-container",

            h1 { class: "login-title", "Barbershop Admin" }
            p { class: "login-subtitle", "Sign in with an access token:" }

            div {
                class: "login-form",
                label { r#for: "login-token", "Token" }
                input {
                    id: "login-token",
                    r#type: "password",
                    placeholder: "Paste your access token",
                    value: token(),
                    oninput: move |evt: FormEvent| token.set(evt.value()),
                }

                label { r#for: "login-role", "Role" }
                select {
                    id: "login-role",
                    value: role(),
                    onchange: move |evt: FormEvent| role.set(evt.value()),
                    for r in ROLES {
                        option { key: "{r}", value: r, "{r}" }
                    }
                }

                if let Some(message) = error() {
                    p { class: "login-error", "{message}" }
                }

                button {
                    class: "login-btn",
                    onclick: handle_sign_in,
                    "Sign in"
                }
            }
        }
    }
}

/// The record the debug inspector shows for this sign-in attempt.
fn login_debug(session: &Session, result: &Result<(), ApiError>) -> LoginDebug {
    let role_type = if session.role.is_some() { "string" } else { "null" };
    let response = match result {
        Ok(()) => json!({ "success": true, "role": session.role }),
        Err(e) => json!({ "success": false, "error": e.to_string() }),
    };
    LoginDebug {
        user_role: session.role.clone(),
        role_type: Some(role_type.to_string()),
        can_access: Some(result.is_ok() && session.can_access()),
        token: Some(session.token.clone()),
        login_response: Some(response),
    }
}
