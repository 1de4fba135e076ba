use dioxus::prelude::*;

use crate::core::Tooltip;
use crate::i18n::use_locale;
use crate::t;

/// Shows the hovered point's tooltip, or a hint while nothing is hovered.
#[component]
pub fn ChartTooltip(hovered: Signal<Option<Tooltip>>) -> Element {
    use_locale();
    let current = hovered();

    rsx! {
        aside { class: "dashboard-tooltip", aria_live: "polite",
            if let Some(tooltip) = current {
                p { class: "dashboard-tooltip__title", "{tooltip.title}" }
                for line in tooltip.lines() {
                    p { key: "{line}", class: "dashboard-tooltip__line", "{line}" }
                }
            } else {
                p { class: "dashboard-tooltip__hint", {t!("chart-tooltip-hint")} }
            }
        }
    }
}
