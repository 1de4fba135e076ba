use dioxus::prelude::*;

use crate::core::{
    format::{axis_fraction, axis_ticks, css_extent, format_percent},
    projection::{FEMALE_COLOR, MALE_COLOR, TREND_COLOR},
    tooltip_for, ColoredCategory, GenderRecord, Tooltip, TrendPoint, ViewProjection,
};
use crate::i18n::use_locale;
use crate::t;

/// Renders whichever chart matches the projection's view.
#[component]
pub fn ProjectionChart(projection: ViewProjection, hovered: Signal<Option<Tooltip>>) -> Element {
    let chart = match projection {
        ViewProjection::Trend { points, .. } => rsx! {
            TrendChart { points: points, hovered: hovered }
        },
        ViewProjection::Demographic { bars, .. } => rsx! {
            CategoryBars { bars: bars, hovered: hovered, modifier: "demographic" }
        },
        ViewProjection::Gender { groups, .. } => rsx! {
            GenderBars { groups: groups, hovered: hovered }
        },
        ViewProjection::State { bars, .. } => rsx! {
            CategoryBars { bars: bars, hovered: hovered, modifier: "state" }
        },
    };

    rsx! {
        div { class: "dashboard-chart",
            {chart}
            AxisTicks {}
        }
    }
}

#[component]
fn AxisTicks() -> Element {
    rsx! {
        div { class: "dashboard-chart__axis",
            for tick in axis_ticks() {
                span { key: "{tick}", class: "dashboard-chart__tick", "{tick}" }
            }
        }
    }
}

#[component]
fn TrendChart(points: Vec<TrendPoint>, hovered: Signal<Option<Tooltip>>) -> Element {
    use_locale();
    let mut hovered = hovered;
    let placed: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(index, point)| plot_position(index, points.len(), point))
        .collect();
    let polyline = placed
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ");
    let dots: Vec<(TrendPoint, String, Option<Tooltip>)> = points
        .iter()
        .zip(&placed)
        .map(|(point, (x, y))| {
            let style = format!("left:{x:.2}%;top:{y:.2}%;border-color:{TREND_COLOR}");
            (*point, style, tooltip_for(Some(point)))
        })
        .collect();

    rsx! {
        div { class: "dashboard-chart__legend",
            span {
                class: "dashboard-chart__legend-swatch",
                style: "background:{TREND_COLOR}",
            }
            {t!("legend-rate")}
        }
        div { class: "dashboard-chart__plot dashboard-chart__plot--trend",
            svg {
                class: "dashboard-chart__svg",
                view_box: "0 0 100 100",
                preserve_aspect_ratio: "none",
                polyline {
                    points: "{polyline}",
                    fill: "none",
                    stroke: TREND_COLOR,
                    stroke_width: "0.8",
                }
            }
            for (point, style, tip) in dots {
                button {
                    key: "{point.year}",
                    r#type: "button",
                    class: "dashboard-chart__dot",
                    style: "{style}",
                    onmouseenter: move |_| hovered.set(tip.clone()),
                    span { class: "dashboard-chart__dot-label", "{point.year}" }
                }
            }
        }
    }
}

/// Horizontal bars, one per category, colored by position.
#[component]
fn CategoryBars(
    bars: Vec<ColoredCategory>,
    hovered: Signal<Option<Tooltip>>,
    modifier: &'static str,
) -> Element {
    use_locale();
    let mut hovered = hovered;
    let rows: Vec<(ColoredCategory, Option<Tooltip>)> = bars
        .into_iter()
        .map(|bar| {
            let tip = tooltip_for(Some(&bar));
            (bar, tip)
        })
        .collect();

    rsx! {
        div { class: "dashboard-chart__legend",
            span { class: "dashboard-chart__legend-swatch dashboard-chart__legend-swatch--palette" }
            {t!("legend-rate")}
        }
        ul { class: "dashboard-bars dashboard-bars--{modifier}",
            for (bar, tip) in rows {
                li {
                    key: "{bar.record.name}",
                    class: "dashboard-bars__row",
                    onmouseenter: move |_| hovered.set(tip.clone()),
                    span { class: "dashboard-bars__label", "{bar.record.name}" }
                    span { class: "dashboard-bars__track",
                        span {
                            class: "dashboard-bars__fill",
                            style: "width:{css_extent(bar.record.value)};background:{bar.color}",
                        }
                    }
                    span { class: "dashboard-bars__value", "{format_percent(bar.record.value)}" }
                }
            }
        }
    }
}

/// Paired male/female columns per institution bucket.
#[component]
fn GenderBars(groups: Vec<GenderRecord>, hovered: Signal<Option<Tooltip>>) -> Element {
    use_locale();
    let mut hovered = hovered;
    let columns: Vec<(GenderRecord, Option<Tooltip>)> = groups
        .into_iter()
        .map(|group| {
            let tip = tooltip_for(Some(&group));
            (group, tip)
        })
        .collect();

    rsx! {
        div { class: "dashboard-chart__legend",
            span {
                class: "dashboard-chart__legend-swatch",
                style: "background:{MALE_COLOR}",
            }
            {t!("legend-male")}
            span {
                class: "dashboard-chart__legend-swatch",
                style: "background:{FEMALE_COLOR}",
            }
            {t!("legend-female")}
        }
        div { class: "dashboard-chart__plot dashboard-columns",
            for (group, tip) in columns {
                div {
                    key: "{group.name}",
                    class: "dashboard-columns__group",
                    onmouseenter: move |_| hovered.set(tip.clone()),
                    div { class: "dashboard-columns__pair",
                        span {
                            class: "dashboard-columns__bar",
                            style: "height:{css_extent(group.male)};background:{MALE_COLOR}",
                        }
                        span {
                            class: "dashboard-columns__bar",
                            style: "height:{css_extent(group.female)};background:{FEMALE_COLOR}",
                        }
                    }
                    span { class: "dashboard-columns__label", "{group.name}" }
                }
            }
        }
    }
}

/// Percent offsets of a trend point inside the plot. Points are spread evenly
/// with a small inset so the outermost dots stay inside the frame.
fn plot_position(index: usize, count: usize, point: &TrendPoint) -> (f64, f64) {
    const INSET: f64 = 5.0;
    let span = 100.0 - 2.0 * INSET;
    let x = if count > 1 {
        INSET + span * index as f64 / (count - 1) as f64
    } else {
        50.0
    };
    let y = 100.0 - axis_fraction(point.rate) * 100.0;
    (x, y)
}
