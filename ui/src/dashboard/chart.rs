use std::error::Error;

use dioxus::prelude::*;
use plotters::coord::Shift;
use plotters::prelude::*;
use time::{macros::format_description, PrimitiveDateTime};

use crate::core::{
    format,
    gki::{DerivedReading, DisplayConfig},
    series::{clip_to_range, to_long, Parameter, SeriesPoint, TimeWindow},
};
use crate::t;

const WIDTH: u32 = 960;
const HEIGHT: u32 = 360;
const SECONDS_PER_HOUR: f64 = 3600.0;

const BACKGROUND: RGBColor = RGBColor(0xff, 0xff, 0xff);
const AXIS: RGBColor = RGBColor(0xd0, 0xd4, 0xda);
const AXIS_TEXT: RGBColor = RGBColor(0x5f, 0x6b, 0x7a);

#[component]
pub fn MetricsChart(readings: Vec<DerivedReading>, config: DisplayConfig) -> Element {
    let mut window = use_signal(TimeWindow::default);
    let mut range_from = use_signal(|| 0u8);
    let mut range_to = use_signal(|| 100u8);

    let in_window = window().apply(&readings);
    let visible = clip_to_range(&in_window, range_from(), range_to());
    let svg_markup = chart_svg(&visible);
    let legend_meta = format!(
        "{}, {}, GKI mode: {}",
        config.glucose_unit, config.ketone_unit, config.gki_mode
    );

    rsx! {
        section { class: "dashboard-card dashboard-chart",
            div { class: "dashboard-card__header",
                h2 { {t!("chart-title")} }
                div { class: "dashboard-chart__windows",
                    for preset in TimeWindow::ALL {
                        button {
                            r#type: "button",
                            class: format!(
                                "button {}",
                                if preset == window() { "button--primary" } else { "button--ghost" }
                            ),
                            onclick: move |_| {
                                window.set(preset);
                                range_from.set(0);
                                range_to.set(100);
                            },
                            {window_label(preset)}
                        }
                    }
                }
            }

            if in_window.is_empty() {
                p { class: "dashboard-card__placeholder", {t!("chart-empty")} }
            } else {
                div { class: "dashboard-chart__canvas", dangerous_inner_html: "{svg_markup}" }
                div { class: "dashboard-chart__range",
                    label { {t!("chart-range-from")}
                        input {
                            r#type: "range",
                            min: "0",
                            max: "100",
                            value: "{range_from}",
                            oninput: move |evt| range_from.set(evt.value().parse().unwrap_or(0)),
                        }
                    }
                    label { {t!("chart-range-to")}
                        input {
                            r#type: "range",
                            min: "0",
                            max: "100",
                            value: "{range_to}",
                            oninput: move |evt| range_to.set(evt.value().parse().unwrap_or(100)),
                        }
                    }
                }
                div { class: "dashboard-chart__legend",
                    for parameter in Parameter::ALL {
                        span { class: "dashboard-chart__legend-item",
                            span {
                                class: "dashboard-chart__legend-swatch",
                                style: "background:{parameter.color()}",
                            }
                            "{parameter.label()}"
                        }
                    }
                    span { class: "dashboard-card__meta", "({legend_meta})" }
                }
            }
        }
    }
}

fn window_label(window: TimeWindow) -> String {
    match window {
        TimeWindow::All => t!("window-all"),
        TimeWindow::Days30 => t!("window-30d"),
        TimeWindow::Days7 => t!("window-7d"),
        TimeWindow::Hours48 => t!("window-48h"),
        TimeWindow::Hours24 => t!("window-24h"),
    }
}

/// Render the three series as an SVG document. Points whose value is not finite are
/// left out of both the lines and the axis ranges.
pub fn chart_svg(readings: &[DerivedReading]) -> String {
    let points: Vec<SeriesPoint> = to_long(readings)
        .into_iter()
        .filter(|point| point.value.is_finite())
        .collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        if let Err(err) = draw_chart(&root, &points) {
            log::warn!("chart rendering failed: {err}");
        }
        if let Err(err) = root.present() {
            log::warn!("chart rendering failed: {err}");
        }
    }
    svg
}

fn draw_chart(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    points: &[SeriesPoint],
) -> Result<(), Box<dyn Error>> {
    root.fill(&BACKGROUND)?;

    let Some(bounds) = Bounds::fit(points) else {
        return Ok(());
    };
    let origin = bounds.origin;

    let mut chart = ChartBuilder::on(root)
        .margin(12)
        .x_label_area_size(28)
        .y_label_area_size(48)
        .build_cartesian_2d(0.0..bounds.hours, bounds.y_min..bounds.y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(6)
        .y_labels(6)
        .axis_style(AXIS)
        .label_style(("sans-serif", 11, &AXIS_TEXT))
        .x_label_formatter(&|hours| axis_time_label(origin, *hours))
        .y_label_formatter(&|value| format::format_number(*value, 1))
        .draw()?;

    for parameter in Parameter::ALL {
        let color = series_color(parameter);
        let series: Vec<(f64, f64)> = points
            .iter()
            .filter(|point| point.parameter == parameter)
            .map(|point| (hours_since(origin, point.timestamp), point.value))
            .collect();
        if series.is_empty() {
            continue;
        }

        chart.draw_series(LineSeries::new(series.iter().copied(), color.stroke_width(2)))?;
        chart.draw_series(
            series
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
        )?;
    }

    Ok(())
}

/// Axis ranges. The x axis counts hours from the earliest plotted reading.
struct Bounds {
    origin: PrimitiveDateTime,
    hours: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    fn fit(points: &[SeriesPoint]) -> Option<Self> {
        let origin = points.iter().map(|point| point.timestamp).min()?;
        let latest = points.iter().map(|point| point.timestamp).max()?;

        let mut hours = hours_since(origin, latest);
        if hours < 1.0 {
            hours = 1.0;
        }

        let y_min = points.iter().map(|point| point.value).fold(0.0_f64, f64::min);
        let top = points.iter().map(|point| point.value).fold(y_min, f64::max);
        let y_max = if top - y_min < f64::EPSILON {
            y_min + 1.0
        } else {
            top + (top - y_min) * 0.05
        };

        Some(Self {
            origin,
            hours,
            y_min,
            y_max,
        })
    }
}

fn hours_since(origin: PrimitiveDateTime, timestamp: PrimitiveDateTime) -> f64 {
    (timestamp - origin).as_seconds_f64() / SECONDS_PER_HOUR
}

fn axis_time_label(origin: PrimitiveDateTime, hours: f64) -> String {
    let seconds = (hours * SECONDS_PER_HOUR).round();
    if !seconds.is_finite() {
        return "—".to_string();
    }
    origin
        .checked_add(time::Duration::seconds(seconds as i64))
        .and_then(|ts| ts.format(format_description!("[day]/[month] [hour]:[minute]")).ok())
        .unwrap_or_else(|| "—".to_string())
}

fn series_color(parameter: Parameter) -> RGBColor {
    let hex = parameter.color().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .unwrap_or(0)
    };
    RGBColor(channel(0..2), channel(2..4), channel(4..6))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn derived(timestamp: PrimitiveDateTime, glucose: f64, ketone: f64, gki: f64) -> DerivedReading {
        DerivedReading {
            timestamp,
            glucose_display: glucose,
            ketone_display: ketone,
            gki,
        }
    }

    /// Polylines stroked in the parameter's colour.
    fn lines_for(svg: &str, parameter: Parameter) -> usize {
        let stroke = format!("stroke=\"{}\"", parameter.color());
        svg.to_lowercase()
            .split("<polyline")
            .skip(1)
            .filter(|tag| tag.split("/>").next().is_some_and(|attrs| attrs.contains(&stroke)))
            .count()
    }

    #[test]
    fn one_line_per_parameter() {
        let svg = chart_svg(&[
            derived(datetime!(2024-01-01 08:00), 5.0, 1.5, 3.3),
            derived(datetime!(2024-01-02 08:00), 6.0, 2.0, 3.0),
        ]);
        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        for parameter in Parameter::ALL {
            assert_eq!(lines_for(&svg, parameter), 1, "{}", parameter.label());
        }
        assert_eq!(svg.matches("<circle").count(), 6);
        assert!(svg.contains("01/01 "));
    }

    #[test]
    fn non_finite_points_are_skipped() {
        let svg = chart_svg(&[
            derived(datetime!(2024-01-01 08:00), 5.0, 0.0, f64::INFINITY),
            derived(datetime!(2024-01-02 08:00), 6.0, 2.0, 3.0),
        ]);
        assert_eq!(svg.matches("<circle").count(), 5);
        assert!(!svg.contains("inf"));
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn empty_chart_is_a_bare_svg() {
        let svg = chart_svg(&[]);
        assert!(!svg.contains("<circle"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn single_reading_still_scales() {
        let svg = chart_svg(&[derived(datetime!(2024-01-01 08:00), 5.0, 1.0, 5.0)]);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn time_labels_count_from_the_first_reading() {
        let origin = datetime!(2024-03-01 07:05);
        assert_eq!(axis_time_label(origin, 0.0), "01/03 07:05");
        assert_eq!(axis_time_label(origin, 25.5), "02/03 08:35");
        assert_eq!(axis_time_label(origin, f64::NAN), "—");
    }

    #[test]
    fn series_colours_parse_from_hex() {
        assert_eq!(series_color(Parameter::Glycemia), RGBColor(0xe7, 0x4c, 0x3c));
        assert_eq!(series_color(Parameter::Gki), RGBColor(0x27, 0xae, 0x60));
    }
}
