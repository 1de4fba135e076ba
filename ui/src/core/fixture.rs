//! Dataset fixture: the static graduation-rate tables the dashboard reports on.
//!
//! The tables are authored as plain string/number rows ([`RawFixture`]) and
//! validated once into typed records ([`FixtureSet`]). After that every lookup
//! is total: each year-keyed table holds exactly one entry per supported
//! [`Year`], so accessors return slices rather than `Option`s.
//!
//! Validation rejects (see [`DataIntegrityError`]):
//! - a supported year missing from a year-keyed table (or listed twice)
//! - a year key outside the supported set
//! - an empty per-year table
//! - a percentage outside `[0, 100]` (or not finite)
//! - a duplicated name within one year's table
//! - trend rows that are not strictly ascending by year

use std::collections::HashSet;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::{error, info, warn};
use once_cell::sync::Lazy;
use serde::Serialize;

use super::projection::PALETTE;
use super::selection::{InvalidSelectionError, SelectionField};

/// Reporting years covered by the fixture, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Year {
    #[serde(rename = "2020")]
    Y2020,
    #[serde(rename = "2021")]
    Y2021,
    #[serde(rename = "2022")]
    Y2022,
    #[serde(rename = "2023")]
    Y2023,
    #[serde(rename = "2024")]
    Y2024,
}

impl Year {
    pub const ALL: [Year; 5] = [
        Year::Y2020,
        Year::Y2021,
        Year::Y2022,
        Year::Y2023,
        Year::Y2024,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Most recent supported year; the default year filter.
    pub fn latest() -> Self {
        Year::Y2024
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Year::Y2020 => "2020",
            Year::Y2021 => "2021",
            Year::Y2022 => "2022",
            Year::Y2023 => "2023",
            Year::Y2024 => "2024",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Year {
    type Err = InvalidSelectionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Year::ALL
            .into_iter()
            .find(|year| year.as_str() == raw)
            .ok_or_else(|| InvalidSelectionError::new(SelectionField::Year, raw))
    }
}

/// A graduation rate in percent, guaranteed finite and within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// Returns `None` for NaN, infinities and anything outside `[0, 100]`.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && (Self::MIN..=Self::MAX).contains(&value)).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Display for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // f64's Display drops a trailing ".0", so 64.0 renders as "64".
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRecord {
    pub year: Year,
    #[serde(rename = "public4Year")]
    pub public_4_year: Percentage,
    #[serde(rename = "privateNonprofit4Year")]
    pub private_nonprofit_4_year: Percentage,
    #[serde(rename = "privateForProfit4Year")]
    pub private_for_profit_4_year: Percentage,
    pub overall: Percentage,
}

/// A named category mapped to a single rate (demographic and state tables).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRecord {
    pub name: String,
    pub value: Percentage,
}

/// An institution bucket with separate male and female rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderRecord {
    pub name: String,
    pub male: Percentage,
    pub female: Percentage,
}

/// One entry per supported year, indexed by [`Year`]. Lookups cannot miss.
#[derive(Debug, Clone, PartialEq)]
pub struct YearTable<T> {
    rows: [Vec<T>; Year::COUNT],
}

impl<T> YearTable<T> {
    pub fn get(&self, year: Year) -> &[T] {
        &self.rows[year.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Year, &[T])> {
        Year::ALL.into_iter().map(move |year| (year, self.get(year)))
    }
}

/// Names the fixture table a validation failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureTable {
    Trend,
    Demographic,
    Gender,
    State,
}

impl Display for FixtureTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Trend => "trend",
            Self::Demographic => "demographic",
            Self::Gender => "gender",
            Self::State => "state",
        };
        f.write_str(name)
    }
}

/// Fixture validation failures. Any of these is fatal for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum DataIntegrityError {
    MissingYear {
        table: FixtureTable,
        year: Year,
    },
    UnsupportedYear {
        table: FixtureTable,
        raw: String,
    },
    DuplicateYear {
        table: FixtureTable,
        year: Year,
    },
    EmptyTable {
        table: FixtureTable,
        year: Year,
    },
    PercentageOutOfRange {
        table: FixtureTable,
        entry: String,
        value: f64,
    },
    DuplicateName {
        table: FixtureTable,
        year: Year,
        name: String,
    },
    TrendOutOfOrder {
        previous: Year,
        next: Year,
    },
}

impl Display for DataIntegrityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingYear { table, year } => {
                write!(f, "{table} table has no entry for year {year}")
            }
            Self::UnsupportedYear { table, raw } => {
                write!(f, "{table} table contains unsupported year `{raw}`")
            }
            Self::DuplicateYear { table, year } => {
                write!(f, "{table} table lists year {year} more than once")
            }
            Self::EmptyTable { table, year } => {
                write!(f, "{table} table for year {year} is empty")
            }
            Self::PercentageOutOfRange { table, entry, value } => write!(
                f,
                "{table} table entry `{entry}` has percentage {value} outside [0, 100]"
            ),
            Self::DuplicateName { table, year, name } => {
                write!(f, "{table} table for year {year} repeats name `{name}`")
            }
            Self::TrendOutOfOrder { previous, next } => write!(
                f,
                "trend rows must be strictly ascending by year ({previous} followed by {next})"
            ),
        }
    }
}

impl Error for DataIntegrityError {}

/// Unvalidated trend row: `(year, public 4-year, private nonprofit 4-year, private for-profit 4-year, overall)`.
pub type RawTrendRow = (&'static str, f64, f64, f64, f64);
/// Unvalidated category row: `(name, value)`.
pub type RawCategoryRow = (&'static str, f64);
/// Unvalidated gender row: `(name, male, female)`.
pub type RawGenderRow = (&'static str, f64, f64);
/// Year-keyed rows before validation.
pub type RawYearTable<R> = &'static [(&'static str, &'static [R])];

/// Fixture tables exactly as authored.
#[derive(Debug, Clone, Copy)]
pub struct RawFixture {
    pub trend: &'static [RawTrendRow],
    pub demographic: RawYearTable<RawCategoryRow>,
    pub gender: RawYearTable<RawGenderRow>,
    pub state: RawYearTable<RawCategoryRow>,
}

/// Validated, immutable reference data.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSet {
    trend: Vec<TrendRecord>,
    demographic: YearTable<CategoryRecord>,
    gender: YearTable<GenderRecord>,
    state: YearTable<CategoryRecord>,
}

impl FixtureSet {
    pub fn from_raw(raw: &RawFixture) -> Result<Self, DataIntegrityError> {
        let trend = build_trend(raw.trend)?;
        let demographic = build_year_table(FixtureTable::Demographic, raw.demographic, |row| {
            category_record(FixtureTable::Demographic, row)
        })?;
        let gender = build_year_table(FixtureTable::Gender, raw.gender, gender_record)?;
        let state = build_year_table(FixtureTable::State, raw.state, |row| {
            category_record(FixtureTable::State, row)
        })?;

        check_unique_names(FixtureTable::Demographic, &demographic, |r| &r.name)?;
        check_unique_names(FixtureTable::Gender, &gender, |r| &r.name)?;
        check_unique_names(FixtureTable::State, &state, |r| &r.name)?;

        warn_on_palette_overflow(FixtureTable::Demographic, &demographic);
        warn_on_palette_overflow(FixtureTable::State, &state);

        Ok(Self {
            trend,
            demographic,
            gender,
            state,
        })
    }

    /// Trend rows ordered by year ascending.
    pub fn trend_series(&self) -> &[TrendRecord] {
        &self.trend
    }

    pub fn demographic_table(&self, year: Year) -> &[CategoryRecord] {
        self.demographic.get(year)
    }

    pub fn gender_table(&self, year: Year) -> &[GenderRecord] {
        self.gender.get(year)
    }

    pub fn state_table(&self, year: Year) -> &[CategoryRecord] {
        self.state.get(year)
    }
}

/// Validates the built-in tables.
pub fn load_fixture() -> Result<FixtureSet, DataIntegrityError> {
    match FixtureSet::from_raw(&GRADUATION_RATES) {
        Ok(set) => {
            info!(
                "event=fixture_load module=fixture status=ok trend_rows={} years={}",
                set.trend.len(),
                Year::COUNT
            );
            Ok(set)
        }
        Err(err) => {
            error!("event=fixture_load module=fixture status=error reason=\"{err}\"");
            Err(err)
        }
    }
}

static SHARED: Lazy<Result<FixtureSet, DataIntegrityError>> = Lazy::new(load_fixture);

/// Process-wide fixture, validated on first access and never mutated.
pub fn shared() -> Result<&'static FixtureSet, &'static DataIntegrityError> {
    Lazy::force(&SHARED).as_ref()
}

fn percentage(table: FixtureTable, entry: &str, value: f64) -> Result<Percentage, DataIntegrityError> {
    Percentage::new(value).ok_or_else(|| DataIntegrityError::PercentageOutOfRange {
        table,
        entry: entry.to_string(),
        value,
    })
}

fn parse_year(table: FixtureTable, raw: &str) -> Result<Year, DataIntegrityError> {
    raw.parse::<Year>().map_err(|_| DataIntegrityError::UnsupportedYear {
        table,
        raw: raw.to_string(),
    })
}

fn build_trend(rows: &[RawTrendRow]) -> Result<Vec<TrendRecord>, DataIntegrityError> {
    let table = FixtureTable::Trend;
    let mut records: Vec<TrendRecord> = Vec::with_capacity(rows.len());

    for &(raw_year, public, nonprofit, for_profit, overall) in rows {
        let year = parse_year(table, raw_year)?;
        if let Some(previous) = records.last().map(|r| r.year) {
            if previous == year {
                return Err(DataIntegrityError::DuplicateYear { table, year });
            }
            if previous > year {
                return Err(DataIntegrityError::TrendOutOfOrder {
                    previous,
                    next: year,
                });
            }
        }

        records.push(TrendRecord {
            year,
            public_4_year: percentage(table, raw_year, public)?,
            private_nonprofit_4_year: percentage(table, raw_year, nonprofit)?,
            private_for_profit_4_year: percentage(table, raw_year, for_profit)?,
            overall: percentage(table, raw_year, overall)?,
        });
    }

    Ok(records)
}

fn build_year_table<R, T>(
    table: FixtureTable,
    raw: RawYearTable<R>,
    build: impl Fn(&R) -> Result<T, DataIntegrityError>,
) -> Result<YearTable<T>, DataIntegrityError> {
    let mut slots: [Option<Vec<T>>; Year::COUNT] = Default::default();

    for (raw_year, rows) in raw {
        let year = parse_year(table, raw_year)?;
        let slot = &mut slots[year.index()];
        if slot.is_some() {
            return Err(DataIntegrityError::DuplicateYear { table, year });
        }
        if rows.is_empty() {
            return Err(DataIntegrityError::EmptyTable { table, year });
        }
        *slot = Some(rows.iter().map(&build).collect::<Result<Vec<_>, _>>()?);
    }

    if let Some(year) = Year::ALL
        .into_iter()
        .find(|year| slots[year.index()].is_none())
    {
        return Err(DataIntegrityError::MissingYear { table, year });
    }

    Ok(YearTable {
        rows: slots.map(Option::unwrap_or_default),
    })
}

fn category_record(
    table: FixtureTable,
    &(name, value): &RawCategoryRow,
) -> Result<CategoryRecord, DataIntegrityError> {
    Ok(CategoryRecord {
        name: name.to_string(),
        value: percentage(table, name, value)?,
    })
}

fn gender_record(&(name, male, female): &RawGenderRow) -> Result<GenderRecord, DataIntegrityError> {
    let table = FixtureTable::Gender;
    Ok(GenderRecord {
        name: name.to_string(),
        male: percentage(table, name, male)?,
        female: percentage(table, name, female)?,
    })
}

fn check_unique_names<T>(
    table: FixtureTable,
    rows: &YearTable<T>,
    name_of: impl Fn(&T) -> &String,
) -> Result<(), DataIntegrityError> {
    for (year, entries) in rows.iter() {
        let mut seen = HashSet::new();
        for entry in entries {
            let name = name_of(entry);
            if !seen.insert(name.as_str()) {
                return Err(DataIntegrityError::DuplicateName {
                    table,
                    year,
                    name: name.clone(),
                });
            }
        }
    }
    Ok(())
}

fn warn_on_palette_overflow(table: FixtureTable, rows: &YearTable<CategoryRecord>) {
    for (year, entries) in rows.iter() {
        if entries.len() > PALETTE.len() {
            warn!(
                "event=palette_wrap module=fixture table={table} year={year} entries={} palette={}",
                entries.len(),
                PALETTE.len()
            );
        }
    }
}

/// The built-in dataset (NCES / IPEDS / College Scorecard derived figures).
pub const GRADUATION_RATES: RawFixture = RawFixture {
    trend: &[
        ("2020", 63.0, 68.0, 29.0, 64.0),
        ("2021", 64.0, 69.0, 30.0, 65.0),
        ("2022", 65.0, 70.0, 31.0, 66.0),
        ("2023", 66.0, 71.0, 32.0, 67.0),
        ("2024", 67.0, 72.0, 33.0, 68.0),
    ],
    demographic: &[
        (
            "2020",
            &[
                ("Asian/Pacific Islander", 72.8),
                ("White/Caucasian", 63.6),
                ("Two or more races", 55.4),
                ("Hispanic/Latino", 53.4),
                ("Black/African American", 40.6),
            ],
        ),
        (
            "2021",
            &[
                ("Asian/Pacific Islander", 73.3),
                ("White/Caucasian", 64.1),
                ("Two or more races", 55.9),
                ("Hispanic/Latino", 53.9),
                ("Black/African American", 41.1),
            ],
        ),
        (
            "2022",
            &[
                ("Asian/Pacific Islander", 73.8),
                ("White/Caucasian", 64.6),
                ("Two or more races", 56.4),
                ("Hispanic/Latino", 54.4),
                ("Black/African American", 41.6),
            ],
        ),
        (
            "2023",
            &[
                ("Asian/Pacific Islander", 74.3),
                ("White/Caucasian", 65.1),
                ("Two or more races", 56.9),
                ("Hispanic/Latino", 54.9),
                ("Black/African American", 42.1),
            ],
        ),
        (
            "2024",
            &[
                ("Asian/Pacific Islander", 74.8),
                ("White/Caucasian", 65.6),
                ("Two or more races", 57.4),
                ("Hispanic/Latino", 55.4),
                ("Black/African American", 42.6),
            ],
        ),
    ],
    gender: &[
        (
            "2020",
            &[
                ("All Institutions", 58.0, 65.0),
                ("Public", 58.0, 64.0),
                ("Private Nonprofit", 62.0, 69.0),
                ("Private For-profit", 29.0, 26.0),
            ],
        ),
        (
            "2021",
            &[
                ("All Institutions", 58.5, 65.5),
                ("Public", 58.5, 64.5),
                ("Private Nonprofit", 62.5, 69.5),
                ("Private For-profit", 29.5, 26.5),
            ],
        ),
        (
            "2022",
            &[
                ("All Institutions", 59.0, 66.0),
                ("Public", 59.0, 65.0),
                ("Private Nonprofit", 63.0, 70.0),
                ("Private For-profit", 30.0, 27.0),
            ],
        ),
        (
            "2023",
            &[
                ("All Institutions", 59.5, 66.5),
                ("Public", 59.5, 65.5),
                ("Private Nonprofit", 63.5, 70.5),
                ("Private For-profit", 30.5, 27.5),
            ],
        ),
        (
            "2024",
            &[
                ("All Institutions", 60.0, 67.0),
                ("Public", 60.0, 66.0),
                ("Private Nonprofit", 64.0, 71.0),
                ("Private For-profit", 31.0, 28.0),
            ],
        ),
    ],
    state: &[
        (
            "2020",
            &[
                ("Rhode Island", 67.0),
                ("Massachusetts", 66.0),
                ("Connecticut", 65.0),
                ("New Hampshire", 64.0),
                ("Vermont", 63.0),
                ("Nevada", 39.0),
                ("Alaska", 38.0),
                ("New Mexico", 36.0),
            ],
        ),
        (
            "2021",
            &[
                ("Rhode Island", 67.5),
                ("Massachusetts", 66.5),
                ("Connecticut", 65.5),
                ("New Hampshire", 64.5),
                ("Vermont", 63.5),
                ("Nevada", 39.5),
                ("Alaska", 38.5),
                ("New Mexico", 36.5),
            ],
        ),
        (
            "2022",
            &[
                ("Rhode Island", 68.0),
                ("Massachusetts", 67.0),
                ("Connecticut", 66.0),
                ("New Hampshire", 65.0),
                ("Vermont", 64.0),
                ("Nevada", 40.0),
                ("Alaska", 39.0),
                ("New Mexico", 37.0),
            ],
        ),
        (
            "2023",
            &[
                ("Rhode Island", 68.5),
                ("Massachusetts", 67.5),
                ("Connecticut", 66.5),
                ("New Hampshire", 65.5),
                ("Vermont", 64.5),
                ("Nevada", 40.5),
                ("Alaska", 39.5),
                ("New Mexico", 37.5),
            ],
        ),
        (
            "2024",
            &[
                ("Rhode Island", 69.0),
                ("Massachusetts", 68.0),
                ("Connecticut", 67.0),
                ("New Hampshire", 66.0),
                ("Vermont", 65.0),
                ("Nevada", 41.0),
                ("Alaska", 40.0),
                ("New Mexico", 38.0),
            ],
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    const TREND: &[RawTrendRow] = &[("2020", 63.0, 68.0, 29.0, 64.0)];
    const CATEGORIES: &[RawCategoryRow] = &[("A", 10.0), ("B", 20.0)];
    const GENDER: &[RawGenderRow] = &[("All", 50.0, 55.0)];

    const FULL_CATEGORIES: RawYearTable<RawCategoryRow> = &[
        ("2020", CATEGORIES),
        ("2021", CATEGORIES),
        ("2022", CATEGORIES),
        ("2023", CATEGORIES),
        ("2024", CATEGORIES),
    ];
    const FULL_GENDER: RawYearTable<RawGenderRow> = &[
        ("2020", GENDER),
        ("2021", GENDER),
        ("2022", GENDER),
        ("2023", GENDER),
        ("2024", GENDER),
    ];

    fn minimal() -> RawFixture {
        RawFixture {
            trend: TREND,
            demographic: FULL_CATEGORIES,
            gender: FULL_GENDER,
            state: FULL_CATEGORIES,
        }
    }

    #[test]
    fn builtin_fixture_is_valid() {
        let set = load_fixture().expect("built-in fixture validates");
        assert_eq!(set.trend_series().len(), 5);
        for year in Year::ALL {
            assert_eq!(set.demographic_table(year).len(), 5);
            assert_eq!(set.gender_table(year).len(), 4);
            assert_eq!(set.state_table(year).len(), 8);
        }
    }

    #[test]
    fn minimal_fixture_is_valid() {
        assert!(FixtureSet::from_raw(&minimal()).is_ok());
    }

    #[test]
    fn missing_year_is_rejected() {
        let mut raw = minimal();
        raw.state = &[
            ("2020", CATEGORIES),
            ("2021", CATEGORIES),
            ("2022", CATEGORIES),
            ("2024", CATEGORIES),
        ];
        assert_eq!(
            FixtureSet::from_raw(&raw),
            Err(DataIntegrityError::MissingYear {
                table: FixtureTable::State,
                year: Year::Y2023,
            })
        );
    }

    #[test]
    fn year_tables_are_keyed_by_year_not_input_order() {
        let mut raw = minimal();
        raw.state = &[
            ("2024", &[("Late", 50.0)]),
            ("2022", CATEGORIES),
            ("2023", CATEGORIES),
            ("2021", CATEGORIES),
            ("2020", &[("Early", 40.0)]),
        ];
        let set = FixtureSet::from_raw(&raw).unwrap();
        assert_eq!(set.state_table(Year::Y2020)[0].name, "Early");
        assert_eq!(set.state_table(Year::Y2024)[0].name, "Late");
        assert_eq!(set.state_table(Year::Y2022), set.state_table(Year::Y2023));
    }

    #[test]
    fn earliest_missing_year_is_reported() {
        let mut raw = minimal();
        raw.gender = &[("2024", GENDER), ("2022", GENDER)];
        assert_eq!(
            FixtureSet::from_raw(&raw),
            Err(DataIntegrityError::MissingYear {
                table: FixtureTable::Gender,
                year: Year::Y2020,
            })
        );
    }

    #[test]
    fn unsupported_year_key_is_rejected() {
        let mut raw = minimal();
        raw.gender = &[("2019", GENDER)];
        let err = FixtureSet::from_raw(&raw).unwrap_err();
        assert!(matches!(
            err,
            DataIntegrityError::UnsupportedYear { table: FixtureTable::Gender, ref raw } if raw == "2019"
        ));
    }

    #[test]
    fn duplicate_year_key_is_rejected() {
        let mut raw = minimal();
        raw.demographic = &[("2020", CATEGORIES), ("2020", CATEGORIES)];
        assert_eq!(
            FixtureSet::from_raw(&raw),
            Err(DataIntegrityError::DuplicateYear {
                table: FixtureTable::Demographic,
                year: Year::Y2020,
            })
        );
    }

    #[test]
    fn empty_year_table_is_rejected() {
        let mut raw = minimal();
        raw.demographic = &[("2020", &[])];
        assert!(matches!(
            FixtureSet::from_raw(&raw),
            Err(DataIntegrityError::EmptyTable { year: Year::Y2020, .. })
        ));
    }

    #[test]
    fn out_of_range_percentage_is_rejected() {
        let mut raw = minimal();
        raw.trend = &[("2020", 63.0, 101.0, 29.0, 64.0)];
        assert!(matches!(
            FixtureSet::from_raw(&raw),
            Err(DataIntegrityError::PercentageOutOfRange { table: FixtureTable::Trend, value, .. }) if value == 101.0
        ));

        let mut raw = minimal();
        raw.state = &[("2020", &[("Nowhere", -0.5)])];
        assert!(matches!(
            FixtureSet::from_raw(&raw),
            Err(DataIntegrityError::PercentageOutOfRange { table: FixtureTable::State, .. })
        ));
    }

    #[test]
    fn duplicate_category_name_is_rejected() {
        let mut raw = minimal();
        raw.state = &[
            ("2020", CATEGORIES),
            ("2021", CATEGORIES),
            ("2022", &[("Vermont", 60.0), ("Vermont", 61.0)]),
            ("2023", CATEGORIES),
            ("2024", CATEGORIES),
        ];
        assert_eq!(
            FixtureSet::from_raw(&raw),
            Err(DataIntegrityError::DuplicateName {
                table: FixtureTable::State,
                year: Year::Y2022,
                name: "Vermont".to_string(),
            })
        );
    }

    #[test]
    fn trend_must_ascend_without_repeats() {
        let mut raw = minimal();
        raw.trend = &[("2021", 1.0, 1.0, 1.0, 1.0), ("2020", 1.0, 1.0, 1.0, 1.0)];
        assert_eq!(
            FixtureSet::from_raw(&raw),
            Err(DataIntegrityError::TrendOutOfOrder {
                previous: Year::Y2021,
                next: Year::Y2020,
            })
        );

        raw.trend = &[("2020", 1.0, 1.0, 1.0, 1.0), ("2020", 1.0, 1.0, 1.0, 1.0)];
        assert!(matches!(
            FixtureSet::from_raw(&raw),
            Err(DataIntegrityError::DuplicateYear { table: FixtureTable::Trend, .. })
        ));
    }

    #[test]
    fn percentage_bounds() {
        assert!(Percentage::new(0.0).is_some());
        assert!(Percentage::new(100.0).is_some());
        assert!(Percentage::new(100.01).is_none());
        assert!(Percentage::new(f64::NAN).is_none());
        assert_eq!(Percentage::new(64.0).unwrap().to_string(), "64");
        assert_eq!(Percentage::new(73.8).unwrap().to_string(), "73.8");
    }

    #[test]
    fn years_parse_and_order() {
        assert_eq!("2022".parse::<Year>(), Ok(Year::Y2022));
        assert!("2019".parse::<Year>().is_err());
        assert!(" 2022".parse::<Year>().is_err());
        assert!("2022\n".parse::<Year>().is_err());
        assert_eq!(Year::latest(), *Year::ALL.last().unwrap());
        assert!(Year::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn integrity_messages_name_the_table() {
        let err = DataIntegrityError::MissingYear {
            table: FixtureTable::Gender,
            year: Year::Y2021,
        };
        assert_eq!(err.to_string(), "gender table has no entry for year 2021");
    }
}
