#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::info;

use ui::components::AppHeader;
use ui::core::DASHBOARD_TITLE;
use ui::dashboard::use_dashboard_session_provider;
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let _logger = start_logging();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(DASHBOARD_TITLE)
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    let _logger = start_logging();
    LaunchBuilder::server().launch(App);
}

/// stderr logging; `RUST_LOG` overrides the build-mode default.
fn start_logging() -> Option<LoggerHandle> {
    match try_start_logging() {
        Ok(handle) => {
            info!(
                "event=app_start module=desktop status=ok platform={} version={}",
                std::env::consts::OS,
                env!("CARGO_PKG_VERSION")
            );
            Some(handle)
        }
        Err(err) => {
            eprintln!("logging disabled: {err}");
            None
        }
    }
}

fn try_start_logging() -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(default_log_level())?
        .log_to_stderr()
        .format(flexi_logger::detailed_format)
        .start()
}

fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Locale code read by every localized component; AppHeader writes it.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    // Session lives above the router; routed pages only read it.
    use_dashboard_session_provider();

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A desktop-specific layout around the shared header which allows us to use
/// the desktop-specific `Route` enum.
#[component]
fn DesktopLayout() -> Element {
    rsx! {
        AppHeader { }

        Outlet::<Route> {}
    }
}
