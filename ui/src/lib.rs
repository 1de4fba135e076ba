//! Shared UI crate for the graduation-rates dashboard. The data core and every
//! cross-platform view live here; the platform crates only launch them.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application header (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;
}
