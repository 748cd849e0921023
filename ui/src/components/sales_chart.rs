use dioxus::prelude::*;

use slips_common::currency::{format_rand, format_rand_thousands};
use slips_common::daily_sales::{peak_amount, DailySalesPoint};
use slips_common::dates::format_short_date;

const CHART_WIDTH: u32 = 720;
const CHART_HEIGHT: u32 = 320;
/// Room for the y-axis labels on the left and date labels underneath.
const AXIS_LEFT: u32 = 56;
const AXIS_BOTTOM: u32 = 28;
const GRID_LINES: u64 = 4;

/// Geometry of one bar in SVG user units.
#[derive(Clone, Debug, PartialEq)]
struct Bar {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    center_x: u32,
    label: String,
    tooltip: String,
}

fn layout_bars(points: &[DailySalesPoint]) -> Vec<Bar> {
    if points.is_empty() {
        return Vec::new();
    }
    let plot_width = CHART_WIDTH - AXIS_LEFT;
    let plot_height = CHART_HEIGHT - AXIS_BOTTOM;
    let slot = plot_width / points.len() as u32;
    let width = (slot * 3 / 4).max(1);
    let peak = peak_amount(points).max(1);

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let height = (u128::from(point.amount) * u128::from(plot_height) / u128::from(peak)) as u32;
            let label = format_short_date(&point.date);
            let x = AXIS_LEFT + i as u32 * slot + slot.saturating_sub(width) / 2;
            Bar {
                x,
                y: plot_height - height,
                width,
                height,
                center_x: x + width / 2,
                tooltip: format!("Date: {label} | Sales: {}", format_rand(point.amount)),
                label,
            }
        })
        .collect()
}

/// Bar chart of daily takings.
#[component]
pub fn SalesChart(points: Vec<DailySalesPoint>) -> Element {
    let bars = layout_bars(&points);
    let peak = peak_amount(&points);
    let plot_height = CHART_HEIGHT - AXIS_BOTTOM;
    let label_y = CHART_HEIGHT - 8;
    let axis_label_x = AXIS_LEFT - 6;

    if bars.is_empty() {
        return rsx! { p { class: "empty-state", "No sales recorded yet." } };
    }

    rsx! {
        svg {
            class: "sales-chart",
            view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
            width: "100%",
            for step in 0..=GRID_LINES {
                {
                    let y = plot_height - (plot_height as u64 * step / GRID_LINES) as u32;
                    let value = format_rand_thousands(peak * step / GRID_LINES);
                    rsx! {
                        g { key: "grid-{step}",
                            line {
                                x1: "{AXIS_LEFT}",
                                x2: "{CHART_WIDTH}",
                                y1: "{y}",
                                y2: "{y}",
                                stroke: "#e5e7eb",
                                stroke_dasharray: "3 3",
                            }
                            text {
                                x: "{axis_label_x}",
                                y: "{y}",
                                text_anchor: "end",
                                font_size: "11",
                                "{value}"
                            }
                        }
                    }
                }
            }
            {bars.into_iter().map(|bar| rsx! {
                g { key: "{bar.label}",
                    rect {
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                        rx: "4",
                        fill: "#ea384c",
                        title { "{bar.tooltip}" }
                    }
                    text {
                        x: "{bar.center_x}",
                        y: "{label_y}",
                        text_anchor: "middle",
                        font_size: "11",
                        "{bar.label}"
                    }
                }
            })}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, amount: u64) -> DailySalesPoint {
        DailySalesPoint::new(NaiveDate::from_ymd_opt(2024, 5, day).unwrap(), amount)
    }

    #[test]
    fn tallest_bar_fills_plot() {
        let bars = layout_bars(&[point(1, 1_000_000), point(2, 4_000_000)]);
        let plot_height = CHART_HEIGHT - AXIS_BOTTOM;
        assert_eq!(bars[1].height, plot_height);
        assert_eq!(bars[1].y, 0);
        assert_eq!(bars[0].height, plot_height / 4);
        assert_eq!(bars[0].label, "1 May");
    }

    #[test]
    fn bars_stay_inside_plot() {
        let points: Vec<_> = (1..=14).map(|d| point(d, 1_500_000 + u64::from(d) * 1_000)).collect();
        let bars = layout_bars(&points);
        assert_eq!(bars.len(), 14);
        assert!(bars.windows(2).all(|w| w[0].x < w[1].x));
        assert!(bars.iter().all(|b| b.x + b.width <= CHART_WIDTH));
    }

    #[test]
    fn dense_series_packs_bars_without_panicking() {
        let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let points: Vec<_> = (0..700)
            .map(|d| DailySalesPoint::new(start + chrono::Duration::days(d), 2_000_000))
            .collect();
        let bars = layout_bars(&points);
        assert_eq!(bars.len(), 700);
        assert!(bars.iter().all(|b| b.width == 1 && b.x + b.width <= CHART_WIDTH));
    }

    #[test]
    fn no_points_no_bars() {
        assert!(layout_bars(&[]).is_empty());
    }
}
