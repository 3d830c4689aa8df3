use chrono::{Datelike, NaiveDate};
use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::color::ColorMap;
use crate::data::model::{RegionalSeries, TemperatureSeries};

const DATE_AXIS_LABEL: &str = "날짜";
const VALUE_AXIS_LABEL: &str = "해수온 (℃)";

const PUBLIC_CHART_TITLE: &str = "공개 데이터 기반 월별 해수온 변화";
const REGIONAL_CHART_TITLE: &str = "사용자 입력 데이터 기반 월별 해수온 변화";

// ---------------------------------------------------------------------------
// Date axis helpers
// ---------------------------------------------------------------------------

fn date_to_x(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

fn x_to_label(x: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|d| d.format("%Y-%m").to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Public series chart (static)
// ---------------------------------------------------------------------------

/// Render the public series as a static line-plus-marker chart. Draws for
/// any row count, including the 12-point fallback and an empty series.
pub fn public_chart(ui: &mut Ui, series: &TemperatureSeries) {
    ui.strong(PUBLIC_CHART_TITLE);

    let coords: Vec<[f64; 2]> = series
        .points
        .iter()
        .map(|p| [date_to_x(p.date), p.value])
        .collect();

    Plot::new("public_sst_plot")
        .height(320.0)
        .x_axis_label(DATE_AXIS_LABEL)
        .y_axis_label(VALUE_AXIS_LABEL)
        .x_axis_formatter(|mark, _range| x_to_label(mark.value))
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(coords.clone()))
                    .color(Color32::LIGHT_BLUE)
                    .width(1.5),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(coords))
                    .color(Color32::LIGHT_BLUE)
                    .radius(3.0),
            );
        });
}

// ---------------------------------------------------------------------------
// Regional chart (interactive)
// ---------------------------------------------------------------------------

/// Render the filtered regional view as an interactive chart: one line per
/// region left in the view, coloured by region. An empty view renders an
/// empty plot, not an error.
pub fn regional_chart(
    ui: &mut Ui,
    series: &RegionalSeries,
    view: &[usize],
    colors: &ColorMap,
) {
    ui.strong(REGIONAL_CHART_TITLE);

    Plot::new("regional_sst_plot")
        .height(320.0)
        .legend(Legend::default())
        .x_axis_label(DATE_AXIS_LABEL)
        .y_axis_label(VALUE_AXIS_LABEL)
        .x_axis_formatter(|mark, _range| x_to_label(mark.value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for region in &series.regions {
                let coords: Vec<[f64; 2]> = view
                    .iter()
                    .map(|&idx| &series.readings[idx])
                    .filter(|r| r.region == *region)
                    .map(|r| [date_to_x(r.date), r.value])
                    .collect();

                if coords.is_empty() {
                    continue;
                }

                plot_ui.line(
                    Line::new(PlotPoints::from(coords))
                        .name(region)
                        .color(colors.color_for(region))
                        .width(1.5),
                );
            }
        });
}
