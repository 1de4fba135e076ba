use dioxus::prelude::*;

use crate::core::{DashboardEngine, Tooltip};
use crate::dashboard::{
    chart_caption, chart_heading, use_dashboard_session, ChartTooltip, DashboardControls,
    DashboardSession, DataSources, KeyInsights, ProjectionChart,
};
use crate::i18n::use_locale;
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    let body = match use_dashboard_session() {
        DashboardSession::Ready(engine) => rsx! {
            DashboardPanels { engine: engine }
        },
        DashboardSession::Failed(message) => rsx! {
            LoadFailure { message: message() }
        },
    };

    rsx! {
        section { class: "page page-dashboard", {body} }
    }
}

#[component]
fn DashboardPanels(engine: Signal<DashboardEngine<'static>>) -> Element {
    use_locale();
    let hovered = use_signal(|| Option::<Tooltip>::None);

    let selection = engine.read().selection();
    let projection = engine.read().derive();
    let heading = chart_heading(&selection);
    let caption = chart_caption(&selection);

    rsx! {
        DashboardControls { engine: engine, hovered: hovered }

        section { class: "dashboard-card dashboard-view",
            h2 { class: "dashboard-view__title", "{heading}" }
            div { class: "dashboard-view__body",
                ProjectionChart { projection: projection, hovered: hovered }
                ChartTooltip { hovered: hovered }
            }
            p { class: "dashboard-view__caption", "{caption}" }
        }

        KeyInsights {}
        DataSources {}
    }
}

#[component]
fn LoadFailure(message: String) -> Element {
    use_locale();

    rsx! {
        section { class: "dashboard-card dashboard-error", role: "alert",
            h2 { {t!("load-error-title")} }
            p { {t!("load-error-hint")} }
            pre { class: "dashboard-error__detail", "{message}" }
        }
    }
}
