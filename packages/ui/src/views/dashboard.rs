use api::DashboardStats;
use dioxus::prelude::*;
use store::PanelConfig;

use crate::dashboard::{load_dashboard, DashboardLoad, DashboardPhase};
use crate::format::{summary_cards, CardKind, SummaryCard};
use crate::icons::{
    FaCalendarCheck, FaClock, FaDollarSign, FaRightFromBracket, FaScissors, FaStar, FaUsers,
};
use crate::{record_debug, use_debug_log, use_services, Icon, Navbar};

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// Admin dashboard: auth gate, statistics cards and quick actions.
///
/// Navigation is left to the platform package through the callbacks.
#[component]
pub fn DashboardView(
    /// Called instead of rendering when no user is signed in.
    on_unauthenticated: EventHandler<()>,
    /// Called after the session has been cleared.
    on_logout: EventHandler<()>,
    /// Called when the header's "Debug info" button is pressed.
    on_open_debug: EventHandler<()>,
) -> Element {
    let services = use_services();
    let config = use_context::<PanelConfig>();
    let mut debug_log = use_debug_log();
    let mut phase = use_signal(|| DashboardPhase::Loading);
    let mut stats = use_signal(|| Option::<DashboardStats>::None);

    let persist = config.debug.persist_events;
    let loader_services = services.clone();
    let _loader = use_resource(move || {
        let services = loader_services.clone();
        async move {
            let outcome = load_dashboard(services.auth.as_ref(), services.stats.as_ref(), |event| {
                record_debug(&mut debug_log, &services.storage, persist, event)
            })
            .await;
            match outcome {
                DashboardLoad::Unauthenticated => on_unauthenticated.call(()),
                DashboardLoad::Ready(loaded) => {
                    stats.set(loaded);
                    phase.set(DashboardPhase::Ready);
                }
            }
        }
    });

    let handle_logout = move |_| {
        services.auth.logout();
        on_logout.call(());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: DASHBOARD_CSS }
        div {
            class: "dashboard",
            Navbar {
                title: "Barbershop Admin",
                button {
                    class: "navbar-button secondary",
                    onclick: move |_| on_open_debug.call(()),
                    "Debug info"
                }
                button {
                    class: "navbar-button",
                    onclick: handle_logout,
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    span { "Logout" }
                }
            }
            DashboardContent {
                phase: phase(),
                stats: stats(),
                currency_symbol: config.display.currency_symbol.clone(),
            }
        }
    }
}

/// The stats grid (or its spinner) and the quick actions.
#[component]
pub fn DashboardContent(
    phase: DashboardPhase,
    stats: Option<DashboardStats>,
    currency_symbol: String,
) -> Element {
    let cards = summary_cards(stats.as_ref(), &currency_symbol);

    rsx! {
        section {
            class: "dashboard-section",
            h2 { class: "dashboard-section-title", "Overview" }
            if phase == DashboardPhase::Loading {
                div {
                    class: "dashboard-spinner",
                    role: "status",
                    div { class: "spinner" }
                    span { "Loading statistics..." }
                }
            } else {
                div {
                    class: "dashboard-grid",
                    for card in cards {
                        StatCard { key: "{card.title}", card: card.clone() }
                    }
                }
            }
        }
        QuickActions {}
    }
}

#[component]
fn StatCard(card: SummaryCard) -> Element {
    let icon = match card.kind {
        CardKind::Users => rsx! { Icon { icon: FaUsers, width: 20, height: 20 } },
        CardKind::Appointments => rsx! { Icon { icon: FaCalendarCheck, width: 20, height: 20 } },
        CardKind::Barbers => rsx! { Icon { icon: FaScissors, width: 20, height: 20 } },
        CardKind::Revenue => rsx! { Icon { icon: FaDollarSign, width: 20, height: 20 } },
        CardKind::Pending => rsx! { Icon { icon: FaClock, width: 20, height: 20 } },
        CardKind::Rating => rsx! { Icon { icon: FaStar, width: 20, height: 20 } },
    };

    rsx! {
        div {
            class: "stat-card",
            div { class: "stat-card-icon", {icon} }
            div {
                class: "stat-card-body",
                p { class: "stat-card-title", "{card.title}" }
                p { class: "stat-card-value", "{card.value}" }
            }
        }
    }
}

const QUICK_ACTIONS: [&str; 4] = [
    "Manage Users",
    "View Appointments",
    "Manage Barbers",
    "View Reports",
];

/// Placeholder buttons; the admin pages they point at are not built yet.
#[component]
fn QuickActions() -> Element {
    rsx! {
        section {
            class: "dashboard-section",
            h2 { class: "dashboard-section-title", "Quick Actions" }
            div {
                class: "quick-actions",
                for label in QUICK_ACTIONS {
                    button {
                        key: "{label}",
                        class: "quick-action",
                        onclick: move |_| tracing::debug!("Quick action not available yet: {}", label),
                        "{label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::dashboard::UNAUTHENTICATED_REASON;
    use crate::{Services, ServicesProvider};
    use api::{ApiError, SessionAuth, StatsSource, StubStatsSource};
    use dioxus::dioxus_core::NoOpMutations;
    use store::{DebugSnapshot, MemoryStore, StorageHandle};

    fn render(phase: DashboardPhase, stats: Option<DashboardStats>) -> String {
        let mut dom = VirtualDom::new_with_props(
            DashboardContent,
            DashboardContentProps {
                phase,
                stats,
                currency_symbol: "$".to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn card_values(html: &str) -> Vec<String> {
        let marker = "class=\"stat-card-value\">";
        html.match_indices(marker)
            .map(|(i, _)| {
                let rest = &html[i + marker.len()..];
                rest[..rest.find('<').unwrap_or(rest.len())].to_string()
            })
            .collect()
    }

    #[test]
    fn test_loading_shows_spinner_and_no_grid() {
        let html = render(DashboardPhase::Loading, None);

        assert!(html.contains("dashboard-spinner"));
        assert!(!html.contains("dashboard-grid"));
        assert!(card_values(&html).is_empty());
    }

    #[test]
    fn test_ready_with_stub_stats() {
        let html = render(DashboardPhase::Ready, Some(StubStatsSource::STATS));

        assert!(!html.contains("dashboard-spinner"));
        assert_eq!(
            card_values(&html),
            ["150", "342", "25", "$12,500", "12", "4.5"]
        );
    }

    #[test]
    fn test_ready_without_stats_shows_zeros() {
        let html = render(DashboardPhase::Ready, None);

        assert!(!html.contains("dashboard-spinner"));
        assert_eq!(card_values(&html), ["0", "0", "0", "$0", "0", "0.0"]);
    }

    #[test]
    fn test_quick_actions_are_rendered() {
        let html = render(DashboardPhase::Loading, None);
        for label in QUICK_ACTIONS {
            assert!(html.contains(label), "missing {label}");
        }
    }

    struct FailingStats;

    #[async_trait::async_trait(?Send)]
    impl StatsSource for FailingStats {
        async fn load(&self) -> Result<DashboardStats, ApiError> {
            Err(ApiError::Unavailable("connection refused".into()))
        }
    }

    #[component]
    fn SessionEventCount() -> Element {
        let count = use_debug_log()().entries.len();
        rsx! { span { class: "event-count", "{count}" } }
    }

    #[component]
    fn MountedDashboard(services: Services, redirects: Rc<Cell<u32>>) -> Element {
        rsx! {
            ServicesProvider {
                services: services.clone(),
                DashboardView {
                    on_unauthenticated: move |_| redirects.set(redirects.get() + 1),
                    on_logout: |_| {},
                    on_open_debug: |_| {},
                }
                SessionEventCount {}
            }
        }
    }

    /// Mount the dashboard over `store`, let the loader finish, and render.
    async fn mount(store: &MemoryStore, stats: impl StatsSource + 'static) -> (String, u32) {
        let storage = StorageHandle::new(store.clone());
        let services = Services::new(storage.clone(), SessionAuth::new(storage), stats);
        let redirects = Rc::new(Cell::new(0));
        let mut dom = VirtualDom::new_with_props(
            MountedDashboard,
            MountedDashboardProps {
                services,
                redirects: redirects.clone(),
            },
        );
        dom.rebuild_in_place();
        dom.wait_for_work().await;
        dom.render_immediate(&mut NoOpMutations);
        (dioxus_ssr::render(&dom), redirects.get())
    }

    fn signed_in_store() -> MemoryStore {
        MemoryStore::with_entries([("token", "tok-123"), ("userRole", "admin")])
    }

    #[tokio::test]
    async fn test_mount_without_session_redirects() {
        let store = MemoryStore::new();
        let (html, redirects) = mount(&store, StubStatsSource).await;

        assert_eq!(redirects, 1);
        assert!(!html.contains("dashboard-grid"));
        assert!(card_values(&html).is_empty());
        assert_eq!(
            DebugSnapshot::load(&store).redirect_reason.as_deref(),
            Some(UNAUTHENTICATED_REASON)
        );
    }

    #[tokio::test]
    async fn test_mount_with_session_shows_stub_stats() {
        let store = signed_in_store();
        let (html, redirects) = mount(&store, StubStatsSource).await;

        assert_eq!(redirects, 0);
        assert!(!html.contains("dashboard-spinner"));
        assert_eq!(
            card_values(&html),
            ["150", "342", "25", "$12,500", "12", "4.5"]
        );
        let dashboard = DebugSnapshot::load(&store).dashboard;
        assert_eq!(dashboard.and_then(|d| d.is_authenticated), Some(true));
    }

    #[tokio::test]
    async fn test_mount_with_failing_stats_shows_zeros() {
        let store = signed_in_store();
        let (html, redirects) = mount(&store, FailingStats).await;

        assert_eq!(redirects, 0);
        assert!(!html.contains("dashboard-spinner"));
        assert_eq!(card_values(&html), ["0", "0", "0", "$0", "0", "0.0"]);
    }
}
