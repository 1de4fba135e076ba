use crate::core::{InstitutionType, ViewSelection, ViewType};
use crate::t;

pub(crate) fn view_label(view: ViewType) -> String {
    match view {
        ViewType::Trend => t!("view-trend"),
        ViewType::Demographic => t!("view-demographic"),
        ViewType::Gender => t!("view-gender"),
        ViewType::State => t!("view-state"),
    }
}

pub(crate) fn institution_label(kind: InstitutionType) -> String {
    match kind {
        InstitutionType::All => t!("institution-all"),
        InstitutionType::Public => t!("institution-public"),
        InstitutionType::PrivateNonprofit => t!("institution-private-nonprofit"),
        InstitutionType::PrivateForProfit => t!("institution-private-for-profit"),
    }
}

pub(crate) fn chart_heading(selection: &ViewSelection) -> String {
    let year = selection.selected_year.as_str();
    match selection.view_type {
        ViewType::Trend => match selection.institution_type {
            InstitutionType::All => t!("chart-trend-title-all"),
            InstitutionType::Public => t!("chart-trend-title-public"),
            InstitutionType::PrivateNonprofit => t!("chart-trend-title-private-nonprofit"),
            InstitutionType::PrivateForProfit => t!("chart-trend-title-private-for-profit"),
        },
        ViewType::Demographic => t!("chart-demographic-title", year = year),
        ViewType::Gender => t!("chart-gender-title", year = year),
        ViewType::State => t!("chart-state-title", year = year),
    }
}

pub(crate) fn chart_caption(selection: &ViewSelection) -> String {
    let year = selection.selected_year.as_str();
    match selection.view_type {
        ViewType::Trend => t!("chart-trend-caption"),
        ViewType::Demographic => t!("chart-demographic-caption", year = year),
        ViewType::Gender => t!("chart-gender-caption", year = year),
        ViewType::State => t!("chart-state-caption", year = year),
    }
}
