//! View-selection engine: the dashboard's only mutable state.
//!
//! A [`DashboardEngine`] pairs the validated fixture with the current
//! [`ViewSelection`] and derives the data slice the active view renders.
//!
//! State model
//! -----------
//! - States are the four [`ViewType`]s; the initial state is `Trend` and there
//!   is no terminal state.
//! - Each setter stores exactly one field. Switching views never resets the
//!   institution filter or the year, so returning to a view restores the
//!   filter it was last shown with.
//! - Raw setters accept the token the presentation layer reports (e.g. the
//!   `value` of a `<select>` option) and reject anything outside the closed
//!   set, leaving the selection untouched.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::{debug, warn};
use serde::Serialize;

use super::fixture::{FixtureSet, Percentage, TrendRecord, Year};
use super::projection::{ColoredCategory, TrendPoint, ViewProjection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewType {
    #[default]
    Trend,
    Demographic,
    Gender,
    State,
}

impl ViewType {
    pub const ALL: [ViewType; 4] = [
        ViewType::Trend,
        ViewType::Demographic,
        ViewType::Gender,
        ViewType::State,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trend => "trend",
            Self::Demographic => "demographic",
            Self::Gender => "gender",
            Self::State => "state",
        }
    }

    /// Whether the institution-type filter applies (and the year filter does not).
    pub fn uses_institution_filter(self) -> bool {
        matches!(self, Self::Trend)
    }
}

impl FromStr for ViewType {
    type Err = InvalidSelectionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == raw)
            .ok_or_else(|| InvalidSelectionError::new(SelectionField::ViewType, raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InstitutionType {
    #[default]
    All,
    Public,
    PrivateNonprofit,
    PrivateForProfit,
}

impl InstitutionType {
    pub const ALL: [InstitutionType; 4] = [
        InstitutionType::All,
        InstitutionType::Public,
        InstitutionType::PrivateNonprofit,
        InstitutionType::PrivateForProfit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Public => "public",
            Self::PrivateNonprofit => "privateNonprofit",
            Self::PrivateForProfit => "privateForProfit",
        }
    }

    /// The trend column this filter reads. Exhaustive, so a new variant
    /// cannot fall through to `overall` by accident.
    pub fn trend_rate(self, record: &TrendRecord) -> Percentage {
        match self {
            Self::All => record.overall,
            Self::Public => record.public_4_year,
            Self::PrivateNonprofit => record.private_nonprofit_4_year,
            Self::PrivateForProfit => record.private_for_profit_4_year,
        }
    }
}

impl FromStr for InstitutionType {
    type Err = InvalidSelectionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == raw)
            .ok_or_else(|| InvalidSelectionError::new(SelectionField::InstitutionType, raw))
    }
}

/// Current UI selection. `institution_type` only matters for the trend view,
/// `selected_year` only for the others; both are kept regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSelection {
    pub view_type: ViewType,
    pub institution_type: InstitutionType,
    pub selected_year: Year,
}

impl Default for ViewSelection {
    fn default() -> Self {
        Self {
            view_type: ViewType::Trend,
            institution_type: InstitutionType::All,
            selected_year: Year::latest(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionField {
    ViewType,
    InstitutionType,
    Year,
}

impl SelectionField {
    fn name(self) -> &'static str {
        match self {
            Self::ViewType => "view type",
            Self::InstitutionType => "institution type",
            Self::Year => "year",
        }
    }

    fn accepted(self) -> Vec<&'static str> {
        match self {
            Self::ViewType => ViewType::ALL.iter().map(|v| v.as_str()).collect(),
            Self::InstitutionType => InstitutionType::ALL.iter().map(|t| t.as_str()).collect(),
            Self::Year => Year::ALL.iter().map(|y| y.as_str()).collect(),
        }
    }
}

/// A setter received a value outside its enumerated domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSelectionError {
    pub field: SelectionField,
    pub value: String,
}

impl InvalidSelectionError {
    pub fn new(field: SelectionField, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl Display for InvalidSelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported {} `{}`; expected {}",
            self.field.name(),
            self.value,
            self.field.accepted().join("|")
        )
    }
}

impl Error for InvalidSelectionError {}

/// Owns one dashboard's selection and derives its projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardEngine<'a> {
    fixture: &'a FixtureSet,
    selection: ViewSelection,
}

impl<'a> DashboardEngine<'a> {
    pub fn new(fixture: &'a FixtureSet) -> Self {
        Self::with_selection(fixture, ViewSelection::default())
    }

    pub fn with_selection(fixture: &'a FixtureSet, selection: ViewSelection) -> Self {
        Self { fixture, selection }
    }

    pub fn selection(&self) -> ViewSelection {
        self.selection
    }

    pub fn fixture(&self) -> &'a FixtureSet {
        self.fixture
    }

    pub fn set_view_type(&mut self, raw: &str) -> Result<ViewType, InvalidSelectionError> {
        let view = parse_token(raw)?;
        self.select_view(view);
        Ok(view)
    }

    pub fn set_institution_type(
        &mut self,
        raw: &str,
    ) -> Result<InstitutionType, InvalidSelectionError> {
        let kind = parse_token(raw)?;
        self.select_institution(kind);
        Ok(kind)
    }

    pub fn set_selected_year(&mut self, raw: &str) -> Result<Year, InvalidSelectionError> {
        let year = parse_token(raw)?;
        self.select_year(year);
        Ok(year)
    }

    pub fn select_view(&mut self, view: ViewType) {
        debug!("event=select module=selection field=view_type value={}", view.as_str());
        self.selection.view_type = view;
    }

    pub fn select_institution(&mut self, kind: InstitutionType) {
        debug!(
            "event=select module=selection field=institution_type value={}",
            kind.as_str()
        );
        self.selection.institution_type = kind;
    }

    pub fn select_year(&mut self, year: Year) {
        debug!("event=select module=selection field=year value={year}");
        self.selection.selected_year = year;
    }

    /// Data slice for the active view. Pure: repeated calls without a
    /// selection change return equal projections.
    pub fn derive(&self) -> ViewProjection {
        let ViewSelection {
            view_type,
            institution_type,
            selected_year: year,
        } = self.selection;

        match view_type {
            ViewType::Trend => ViewProjection::Trend {
                institution: institution_type,
                points: self
                    .fixture
                    .trend_series()
                    .iter()
                    .map(|record| TrendPoint {
                        year: record.year,
                        rate: institution_type.trend_rate(record),
                    })
                    .collect(),
            },
            ViewType::Demographic => ViewProjection::Demographic {
                year,
                bars: ColoredCategory::assign(self.fixture.demographic_table(year)),
            },
            ViewType::Gender => ViewProjection::Gender {
                year,
                groups: self.fixture.gender_table(year).to_vec(),
            },
            ViewType::State => ViewProjection::State {
                year,
                bars: ColoredCategory::assign(self.fixture.state_table(year)),
            },
        }
    }
}

fn parse_token<T>(raw: &str) -> Result<T, InvalidSelectionError>
where
    T: FromStr<Err = InvalidSelectionError>,
{
    raw.parse().inspect_err(|err| {
        warn!("event=select module=selection status=rejected reason=\"{err}\"");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixture::load_fixture;

    #[test]
    fn defaults_match_initial_state() {
        let selection = ViewSelection::default();
        assert_eq!(selection.view_type, ViewType::Trend);
        assert_eq!(selection.institution_type, InstitutionType::All);
        assert_eq!(selection.selected_year, Year::Y2024);
    }

    #[test]
    fn tokens_round_trip_through_from_str() {
        for view in ViewType::ALL {
            assert_eq!(view.as_str().parse::<ViewType>(), Ok(view));
        }
        for kind in InstitutionType::ALL {
            assert_eq!(kind.as_str().parse::<InstitutionType>(), Ok(kind));
        }
    }

    #[test]
    fn trend_mapping_reads_matching_column() {
        let fixture = load_fixture().unwrap();
        let record = &fixture.trend_series()[0];
        assert_eq!(InstitutionType::All.trend_rate(record), record.overall);
        assert_eq!(InstitutionType::Public.trend_rate(record), record.public_4_year);
        assert_eq!(
            InstitutionType::PrivateNonprofit.trend_rate(record),
            record.private_nonprofit_4_year
        );
        assert_eq!(
            InstitutionType::PrivateForProfit.trend_rate(record),
            record.private_for_profit_4_year
        );
    }

    #[test]
    fn rejected_input_keeps_previous_selection() {
        let fixture = load_fixture().unwrap();
        let mut engine = DashboardEngine::new(&fixture);
        engine.set_view_type("gender").unwrap();
        let before = engine.selection();

        assert!(engine.set_view_type("pie").is_err());
        assert!(engine.set_institution_type("community").is_err());
        assert!(engine.set_selected_year("2025").is_err());
        assert_eq!(engine.selection(), before);
    }

    #[test]
    fn tokens_must_match_exactly() {
        let fixture = load_fixture().unwrap();
        let mut engine = DashboardEngine::new(&fixture);
        let before = engine.selection();

        assert!(engine.set_selected_year(" 2020 ").is_err());
        assert!(engine.set_view_type("state ").is_err());
        assert!(engine.set_view_type("State").is_err());
        assert!(engine.set_institution_type("\tpublic").is_err());
        assert_eq!(engine.selection(), before);

        let err = " 2020 ".parse::<Year>().unwrap_err();
        assert_eq!(err.value, " 2020 ");
    }

    #[test]
    fn setters_only_touch_their_field() {
        let fixture = load_fixture().unwrap();
        let mut engine = DashboardEngine::new(&fixture);

        engine.set_selected_year("2021").unwrap();
        assert_eq!(engine.selection().view_type, ViewType::Trend);
        assert_eq!(engine.selection().institution_type, InstitutionType::All);

        engine.set_institution_type("privateForProfit").unwrap();
        assert_eq!(engine.selection().selected_year, Year::Y2021);
    }

    #[test]
    fn error_message_lists_accepted_tokens() {
        let err = "2019".parse::<Year>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported year `2019`; expected 2020|2021|2022|2023|2024"
        );
        let err = "pie".parse::<ViewType>().unwrap_err();
        assert_eq!(err.field, SelectionField::ViewType);
        assert!(err.to_string().contains("trend|demographic|gender|state"));
    }
}
