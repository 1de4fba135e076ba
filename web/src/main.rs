use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::core::DASHBOARD_TITLE;
use ui::dashboard::use_dashboard_session_provider;
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Locale code read by every localized component; AppHeader writes it.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_dashboard_session_provider();

    rsx! {
        // Page title is set once; it never follows the selection.
        document::Title { "{DASHBOARD_TITLE}" }
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared header which allows us to use the
/// web-specific `Route` enum.
#[component]
fn WebLayout() -> Element {
    rsx! {
        AppHeader { }
        Outlet::<Route> {}
    }
}
