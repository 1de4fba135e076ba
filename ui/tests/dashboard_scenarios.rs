//! End-to-end behaviour of the selection engine over the built-in dataset.

use ui::core::{
    load_fixture, tooltip_for, DashboardEngine, FixtureSet, InstitutionType, InvalidSelectionError,
    ViewProjection, ViewSelection, ViewType, Year,
};

fn fixture() -> FixtureSet {
    load_fixture().expect("built-in fixture validates")
}

fn every_selection() -> Vec<ViewSelection> {
    let mut all = Vec::new();
    for view_type in ViewType::ALL {
        for institution_type in InstitutionType::ALL {
            for selected_year in Year::ALL {
                all.push(ViewSelection {
                    view_type,
                    institution_type,
                    selected_year,
                });
            }
        }
    }
    all
}

#[test]
fn every_selection_derives_matching_shape() {
    let fixture = fixture();
    for selection in every_selection() {
        let engine = DashboardEngine::with_selection(&fixture, selection);
        let projection = engine.derive();
        assert_eq!(projection.view_type(), selection.view_type);
        assert!(!projection.is_empty(), "{selection:?} derived no rows");
    }
}

#[test]
fn derive_is_idempotent() {
    let fixture = fixture();
    for selection in every_selection() {
        let engine = DashboardEngine::with_selection(&fixture, selection);
        assert_eq!(engine.derive(), engine.derive());
    }
}

#[test]
fn trend_rate_follows_institution_column() {
    let fixture = fixture();
    let mut engine = DashboardEngine::new(&fixture);

    for kind in InstitutionType::ALL {
        engine.select_institution(kind);
        let ViewProjection::Trend { institution, points } = engine.derive() else {
            panic!("trend view expected");
        };
        assert_eq!(institution, kind);
        assert_eq!(points.len(), fixture.trend_series().len());

        for (point, record) in points.iter().zip(fixture.trend_series()) {
            let expected = match kind {
                InstitutionType::All => record.overall,
                InstitutionType::Public => record.public_4_year,
                InstitutionType::PrivateNonprofit => record.private_nonprofit_4_year,
                InstitutionType::PrivateForProfit => record.private_for_profit_4_year,
            };
            assert_eq!(point.year, record.year);
            assert_eq!(point.rate, expected);
        }
    }
}

#[test]
fn institution_filter_survives_view_switches() {
    let fixture = fixture();
    let mut engine = DashboardEngine::new(&fixture);

    engine.set_institution_type("public").unwrap();
    engine.set_view_type("demographic").unwrap();
    engine.set_view_type("trend").unwrap();

    assert_eq!(engine.selection().institution_type, InstitutionType::Public);
    let ViewProjection::Trend { points, .. } = engine.derive() else {
        panic!("trend view expected");
    };
    assert_eq!(points[0].rate.value(), 63.0);
}

#[test]
fn year_filter_survives_view_switches() {
    let fixture = fixture();
    let mut engine = DashboardEngine::new(&fixture);

    engine.set_view_type("state").unwrap();
    engine.set_selected_year("2021").unwrap();
    engine.set_view_type("trend").unwrap();
    engine.set_view_type("gender").unwrap();

    assert_eq!(engine.selection().selected_year, Year::Y2021);
}

#[test]
fn every_year_keyed_table_is_complete() {
    let fixture = fixture();
    for year in Year::ALL {
        assert!(!fixture.demographic_table(year).is_empty());
        assert!(!fixture.gender_table(year).is_empty());
        assert!(!fixture.state_table(year).is_empty());
    }
}

#[test]
fn overall_trend_spans_2020_to_2024() {
    let fixture = fixture();
    let engine = DashboardEngine::new(&fixture);
    let ViewProjection::Trend { points, .. } = engine.derive() else {
        panic!("trend view expected");
    };

    let pairs: Vec<_> = points
        .iter()
        .map(|p| (p.year.as_str(), p.rate.value()))
        .collect();
    assert!(pairs.contains(&("2020", 64.0)));
    assert!(pairs.contains(&("2024", 68.0)));
}

#[test]
fn demographic_2022_leads_with_asian_pacific_islander() {
    let fixture = fixture();
    let mut engine = DashboardEngine::new(&fixture);
    engine.set_view_type("demographic").unwrap();
    engine.set_selected_year("2022").unwrap();

    let ViewProjection::Demographic { year, bars } = engine.derive() else {
        panic!("demographic view expected");
    };
    assert_eq!(year, Year::Y2022);
    assert_eq!(bars[0].record.name, "Asian/Pacific Islander");
    assert_eq!(bars[0].record.value.value(), 73.8);
    assert_eq!(bars[0].color, "#0088FE");
}

#[test]
fn gender_2024_includes_private_for_profit() {
    let fixture = fixture();
    let mut engine = DashboardEngine::new(&fixture);
    engine.set_view_type("gender").unwrap();

    let ViewProjection::Gender { year, groups } = engine.derive() else {
        panic!("gender view expected");
    };
    assert_eq!(year, Year::Y2024);
    let row = groups
        .iter()
        .find(|g| g.name == "Private For-profit")
        .expect("private for-profit row");
    assert_eq!(row.male.value(), 31.0);
    assert_eq!(row.female.value(), 28.0);

    let tooltip = tooltip_for(Some(row)).unwrap();
    assert_eq!(tooltip.lines(), vec!["Male: 31%", "Female: 28%"]);
}

#[test]
fn state_2020_lists_eight_states_led_by_rhode_island() {
    let fixture = fixture();
    let mut engine = DashboardEngine::new(&fixture);
    engine.set_view_type("state").unwrap();
    engine.set_selected_year("2020").unwrap();

    let ViewProjection::State { bars, .. } = engine.derive() else {
        panic!("state view expected");
    };
    assert_eq!(bars.len(), 8);

    let values: Vec<f64> = bars.iter().map(|b| b.record.value.value()).collect();
    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    assert_eq!((min, max), (36.0, 67.0));

    let top = bars
        .iter()
        .max_by(|a, b| a.record.value.value().total_cmp(&b.record.value.value()))
        .unwrap();
    assert_eq!(top.record.name, "Rhode Island");

    // Eight bars over a six-color palette: the last two reuse the first colors.
    assert_eq!(bars[6].color, bars[0].color);
    assert_eq!(bars[7].color, bars[1].color);
}

#[test]
fn unsupported_year_is_rejected_without_side_effects() {
    let fixture = fixture();
    let mut engine = DashboardEngine::new(&fixture);
    engine.set_view_type("demographic").unwrap();
    let before = engine.derive();

    let err: InvalidSelectionError = engine.set_selected_year("2019").unwrap_err();
    assert_eq!(err.value, "2019");
    assert_eq!(engine.selection().selected_year, Year::Y2024);
    assert_eq!(engine.derive(), before);
}

#[test]
fn projection_json_matches_source_keys() {
    let fixture = fixture();
    let mut engine = DashboardEngine::new(&fixture);
    engine.set_view_type("gender").unwrap();
    engine.set_selected_year("2020").unwrap();

    let json: serde_json::Value = serde_json::from_str(&engine.derive().to_json().unwrap()).unwrap();
    assert_eq!(json["view"], "gender");
    assert_eq!(json["year"], "2020");
    assert_eq!(json["groups"][0]["name"], "All Institutions");
    assert_eq!(json["groups"][0]["male"], 58.0);
    assert_eq!(json["groups"][0]["female"], 65.0);
}
