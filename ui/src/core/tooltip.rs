//! Hover tooltip content for every chart.
//!
//! One formatter covers all views. Each hoverable point type only says which
//! title it carries and which labelled percentages it exposes; the
//! `"<label>: <value>%"` rule lives in [`TooltipEntry`]'s `Display`.

use std::fmt::{self, Display, Formatter};

use super::fixture::{CategoryRecord, GenderRecord, Percentage};
use super::projection::{ColoredCategory, TrendPoint};

pub const RATE_LABEL: &str = "Graduation Rate";
pub const MALE_LABEL: &str = "Male";
pub const FEMALE_LABEL: &str = "Female";

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipEntry {
    pub label: &'static str,
    pub value: Percentage,
}

impl TooltipEntry {
    pub fn new(label: &'static str, value: Percentage) -> Self {
        Self { label, value }
    }
}

impl Display for TooltipEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}%", self.label, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub entries: Vec<TooltipEntry>,
}

impl Tooltip {
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

/// A hoverable data point.
pub trait TooltipSource {
    fn tooltip_title(&self) -> String;
    fn tooltip_entries(&self) -> Vec<TooltipEntry>;
}

/// Tooltip for the hovered point, or `None` when nothing is hovered or the
/// point carries no values.
pub fn tooltip_for<P>(hovered: Option<&P>) -> Option<Tooltip>
where
    P: TooltipSource + ?Sized,
{
    let point = hovered?;
    let entries = point.tooltip_entries();
    if entries.is_empty() {
        return None;
    }
    Some(Tooltip {
        title: point.tooltip_title(),
        entries,
    })
}

impl TooltipSource for TrendPoint {
    fn tooltip_title(&self) -> String {
        self.year.to_string()
    }

    fn tooltip_entries(&self) -> Vec<TooltipEntry> {
        vec![TooltipEntry::new(RATE_LABEL, self.rate)]
    }
}

impl TooltipSource for CategoryRecord {
    fn tooltip_title(&self) -> String {
        self.name.clone()
    }

    fn tooltip_entries(&self) -> Vec<TooltipEntry> {
        vec![TooltipEntry::new(RATE_LABEL, self.value)]
    }
}

impl TooltipSource for ColoredCategory {
    fn tooltip_title(&self) -> String {
        self.record.tooltip_title()
    }

    fn tooltip_entries(&self) -> Vec<TooltipEntry> {
        self.record.tooltip_entries()
    }
}

impl TooltipSource for GenderRecord {
    fn tooltip_title(&self) -> String {
        self.name.clone()
    }

    fn tooltip_entries(&self) -> Vec<TooltipEntry> {
        vec![
            TooltipEntry::new(MALE_LABEL, self.male),
            TooltipEntry::new(FEMALE_LABEL, self.female),
        ]
    }
}
