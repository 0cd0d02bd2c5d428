use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Page header with a title on the left and `children` as actions on the right.
#[component]
pub fn Navbar(title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        header {
            class: "navbar",
            h1 { class: "navbar-title", "{title}" }
            div {
                class: "navbar-actions",
                {children}
            }
        }
    }
}
