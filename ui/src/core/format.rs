//! Formatting helpers for presenting rates.

use super::fixture::Percentage;
use super::projection::AXIS_DOMAIN;

pub fn format_percent(value: Percentage) -> String {
    format!("{value}%")
}

/// Position of `value` along the shared value axis, in `[0, 1]`.
pub fn axis_fraction(value: Percentage) -> f64 {
    let (min, max) = AXIS_DOMAIN;
    ((value.value() - min) / (max - min)).clamp(0.0, 1.0)
}

/// CSS length for a bar spanning `value` of the axis, e.g. `"64%"`.
pub fn css_extent(value: Percentage) -> String {
    format!("{:.1}%", axis_fraction(value) * 100.0)
}

/// Gridline labels for the value axis.
pub fn axis_ticks() -> [u8; 5] {
    [0, 25, 50, 75, 100]
}
