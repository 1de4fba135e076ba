use dioxus::prelude::*;

use crate::i18n::use_locale;
use crate::t;

#[component]
pub fn KeyInsights() -> Element {
    use_locale();
    let insights = [
        t!("insight-national"),
        t!("insight-demographic"),
        t!("insight-institution"),
        t!("insight-gender"),
        t!("insight-state"),
    ];

    rsx! {
        section { class: "dashboard-card dashboard-insights",
            h2 { {t!("insights-title")} }
            ul { class: "dashboard-insights__list",
                for (index, insight) in insights.into_iter().enumerate() {
                    li { key: "{index}", "{insight}" }
                }
            }
        }
    }
}

#[component]
pub fn DataSources() -> Element {
    use_locale();
    let sources = [
        t!("source-nces"),
        t!("source-ipeds"),
        t!("source-scorecard"),
        t!("source-sheeo"),
        t!("source-chronicle"),
    ];

    rsx! {
        section { class: "dashboard-card dashboard-sources",
            h2 { {t!("about-title")} }
            p { {t!("about-intro")} }
            ul { class: "dashboard-sources__list",
                for (index, source) in sources.into_iter().enumerate() {
                    li { key: "{index}", "{source}" }
                }
            }
            p { class: "dashboard-sources__definition", {t!("about-definition")} }
        }
    }
}
