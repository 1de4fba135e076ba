use dioxus::prelude::*;

use crate::core::{DashboardEngine, InstitutionType, Tooltip, ViewType, Year};
use crate::dashboard::{institution_label, view_label};
use crate::i18n::use_locale;
use crate::t;

/// View-type select plus whichever filter the active view uses.
#[component]
pub fn DashboardControls(
    engine: Signal<DashboardEngine<'static>>,
    hovered: Signal<Option<Tooltip>>,
) -> Element {
    use_locale();
    let mut engine = engine;
    let mut hovered = hovered;
    let selection = engine.read().selection();

    // Rejected tokens leave the engine untouched; the engine logs them.
    let on_view = move |evt: FormEvent| {
        if engine.write().set_view_type(&evt.value()).is_ok() {
            hovered.set(None);
        }
    };
    let on_institution = move |evt: FormEvent| {
        if engine.write().set_institution_type(&evt.value()).is_ok() {
            hovered.set(None);
        }
    };
    let on_year = move |evt: FormEvent| {
        if engine.write().set_selected_year(&evt.value()).is_ok() {
            hovered.set(None);
        }
    };

    rsx! {
        section { class: "dashboard-card dashboard-controls",
            div { class: "dashboard-controls__field",
                label { r#for: "view-type", {t!("control-view-type")} }
                select {
                    id: "view-type",
                    value: "{selection.view_type.as_str()}",
                    oninput: on_view,
                    for view in ViewType::ALL {
                        option { key: "{view.as_str()}", value: "{view.as_str()}", {view_label(view)} }
                    }
                }
            }

            if selection.view_type.uses_institution_filter() {
                div { class: "dashboard-controls__field",
                    label { r#for: "institution-type", {t!("control-institution-type")} }
                    select {
                        id: "institution-type",
                        value: "{selection.institution_type.as_str()}",
                        oninput: on_institution,
                        for kind in InstitutionType::ALL {
                            option { key: "{kind.as_str()}", value: "{kind.as_str()}", {institution_label(kind)} }
                        }
                    }
                }
            } else {
                div { class: "dashboard-controls__field",
                    label { r#for: "selected-year", {t!("control-year")} }
                    select {
                        id: "selected-year",
                        value: "{selection.selected_year}",
                        oninput: on_year,
                        for year in Year::ALL {
                            option { key: "{year}", value: "{year}", "{year}" }
                        }
                    }
                }
            }
        }
    }
}
