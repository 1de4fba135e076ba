//! View-shaped data slices handed to the chart layer.

use serde::Serialize;

use super::fixture::{CategoryRecord, GenderRecord, Percentage, Year};
use super::selection::{InstitutionType, ViewType};

/// Bar colors for the demographic and state views, assigned by position.
pub const PALETTE: [&str; 6] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8", "#82ca9d",
];

/// Trend line stroke.
pub const TREND_COLOR: &str = "#8884d8";
pub const MALE_COLOR: &str = "#8884d8";
pub const FEMALE_COLOR: &str = "#82ca9d";

/// Every chart shares a fixed 0–100 value axis.
pub const AXIS_DOMAIN: (f64, f64) = (Percentage::MIN, Percentage::MAX);

/// Palette color for the bar at `index`. Wraps once the palette runs out.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub year: Year,
    pub rate: Percentage,
}

/// A category row with its display color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColoredCategory {
    #[serde(flatten)]
    pub record: CategoryRecord,
    pub color: &'static str,
}

impl ColoredCategory {
    pub fn assign(records: &[CategoryRecord]) -> Vec<Self> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| Self {
                record: record.clone(),
                color: palette_color(index),
            })
            .collect()
    }
}

/// Output of [`DashboardEngine::derive`](super::selection::DashboardEngine::derive),
/// one variant per view type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum ViewProjection {
    Trend {
        institution: InstitutionType,
        points: Vec<TrendPoint>,
    },
    Demographic {
        year: Year,
        bars: Vec<ColoredCategory>,
    },
    Gender {
        year: Year,
        groups: Vec<GenderRecord>,
    },
    State {
        year: Year,
        bars: Vec<ColoredCategory>,
    },
}

impl ViewProjection {
    pub fn view_type(&self) -> ViewType {
        match self {
            Self::Trend { .. } => ViewType::Trend,
            Self::Demographic { .. } => ViewType::Demographic,
            Self::Gender { .. } => ViewType::Gender,
            Self::State { .. } => ViewType::State,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Trend { points, .. } => points.len(),
            Self::Demographic { bars, .. } | Self::State { bars, .. } => bars.len(),
            Self::Gender { groups, .. } => groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// JSON form for script-side chart adapters.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
