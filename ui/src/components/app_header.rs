use crate::i18n::{self, use_locale};
use crate::t;
use dioxus::prelude::*;
use log::{debug, warn};

/// Dashboard header: title, tagline and the locale switcher.
///
/// The chosen locale is written into the launcher's `Signal<String>` context;
/// every component reading it through [`use_locale`] re-renders in place.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let lang = use_locale();
    let langs = use_hook(i18n::available_languages);
    let show_switcher = langs.len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                debug!("event=locale_switch module=header status=ok value={val}");
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!("event=locale_switch module=header status=rejected reason=\"{err}\""),
        }
    };

    rsx! {
        header {
            id: "dashboard-header",
            class: "dashboard-header",
            div { class: "dashboard-header__inner",
                div { class: "dashboard-header__brand",
                    h1 { class: "dashboard-header__title", {t!("app-title")} }
                    p { class: "dashboard-header__tagline", {t!("app-tagline")} }
                    p { class: "dashboard-header__source", {t!("app-source-note")} }
                }

                if show_switcher {
                    div { class: "dashboard-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{lang}",
                            oninput: on_change,
                            for code in langs {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
