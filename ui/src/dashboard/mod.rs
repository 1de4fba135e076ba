//! Presentation adapter: Dioxus components that render projections from the
//! core engine and feed user selections back into it.

mod charts;
pub use charts::ProjectionChart;

mod controls;
pub use controls::DashboardControls;

mod insights;
pub use insights::{DataSources, KeyInsights};

mod tooltip_panel;
pub use tooltip_panel::ChartTooltip;

mod labels;
pub(crate) use labels::*;

use dioxus::prelude::*;

use crate::core::{fixture, DashboardEngine};

/// Builds an engine over the shared fixture, or the message shown in its place.
pub fn load_engine() -> Result<DashboardEngine<'static>, String> {
    fixture::shared()
        .map(DashboardEngine::new)
        .map_err(|err| format!("Couldn't load graduation data: {err}"))
}

/// The dashboard's selection state for one window or tab.
#[derive(Clone, Copy, PartialEq)]
pub enum DashboardSession {
    Ready(Signal<DashboardEngine<'static>>),
    Failed(Signal<String>),
}

impl DashboardSession {
    fn load() -> Self {
        match load_engine() {
            Ok(engine) => Self::Ready(Signal::new(engine)),
            Err(message) => Self::Failed(Signal::new(message)),
        }
    }
}

/// Provides the session to everything below the caller. Launchers call this
/// above the router so the selection outlives re-renders of the routed page.
pub fn use_dashboard_session_provider() -> DashboardSession {
    use_context_provider(DashboardSession::load)
}

/// The provided session, or one scoped to the calling component when no
/// launcher provided it.
pub fn use_dashboard_session() -> DashboardSession {
    let provided = try_use_context::<DashboardSession>();
    use_hook(|| provided.unwrap_or_else(DashboardSession::load))
}
