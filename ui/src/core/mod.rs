//! Platform-agnostic dashboard core: fixture data, selection state and the
//! projections derived from them. Nothing in here touches Dioxus.

pub mod fixture;
pub mod format;
pub mod projection;
pub mod selection;
pub mod tooltip;

pub use fixture::{
    load_fixture, CategoryRecord, DataIntegrityError, FixtureSet, GenderRecord, Percentage,
    TrendRecord, Year,
};
pub use projection::{palette_color, ColoredCategory, TrendPoint, ViewProjection};
pub use selection::{
    DashboardEngine, InstitutionType, InvalidSelectionError, ViewSelection, ViewType,
};
pub use tooltip::{tooltip_for, Tooltip, TooltipEntry, TooltipSource};

/// Window / page title, set once at startup.
pub const DASHBOARD_TITLE: &str = "U.S. College Graduation Rates Dashboard";
