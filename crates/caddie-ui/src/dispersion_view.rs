//! Shot dispersion view: scatter of offline (x) against carry (y).
//!
//! Each club becomes its own dataset so the chart legend doubles as the
//! colour key. The x-axis is kept symmetric around zero so the target line
//! sits in the middle of the plot regardless of how one-sided the miss
//! pattern is.

use std::collections::BTreeMap;

use ratatui::{
    layout::Rect,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use caddie_core::formatting;
use caddie_core::models::DispersionPoint;

use crate::themes::Theme;

/// Lower bound for either axis extent so a handful of dead-straight wedge
/// shots still renders with visible scale.
const MIN_EXTENT_YD: f64 = 10.0;

/// Group points into per-club series, sorted by club name so colours are
/// stable for a given filter selection.
fn series_data(points: &[DispersionPoint]) -> Vec<(String, Vec<(f64, f64)>)> {
    let mut by_club: BTreeMap<String, Vec<(f64, f64)>> = BTreeMap::new();
    for p in points {
        by_club
            .entry(p.club.clone())
            .or_default()
            .push((p.offline, p.carry));
    }
    by_club.into_iter().collect()
}

/// Compute `([x_min, x_max], [y_min, y_max])`: x symmetric around zero,
/// y from zero, both padded past the data extents.
fn chart_bounds(points: &[DispersionPoint]) -> ([f64; 2], [f64; 2]) {
    let max_offline = points
        .iter()
        .map(|p| p.offline.abs())
        .fold(0.0_f64, f64::max)
        .max(MIN_EXTENT_YD);
    let max_carry = points
        .iter()
        .map(|p| p.carry)
        .fold(0.0_f64, f64::max)
        .max(MIN_EXTENT_YD);

    let x = max_offline * 1.1;
    ([-x, x], [0.0, max_carry * 1.1])
}

/// Render the dispersion scatter into `area`.
pub fn render_dispersion(frame: &mut Frame, area: Rect, points: &[DispersionPoint], theme: &Theme) {
    let series = series_data(points);
    let ([x_min, x_max], [y_min, y_max]) = chart_bounds(points);

    let datasets: Vec<Dataset> = series
        .iter()
        .enumerate()
        .map(|(i, (club, data))| {
            Dataset::default()
                .name(club.clone())
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(theme.series_style(i))
                .data(data.as_slice())
        })
        .collect();

    let x_labels = vec![
        format!("{} L", formatting::format_number(x_max, 0)),
        "0".to_string(),
        format!("{} R", formatting::format_number(x_max, 0)),
    ];
    let y_labels = vec![
        "0".to_string(),
        formatting::format_number(y_max / 2.0, 0),
        formatting::format_number(y_max, 0),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Shot Dispersion (Offline vs Carry) "),
        )
        .x_axis(
            Axis::default()
                .title("Offline (yd)")
                .style(theme.axis)
                .bounds([x_min, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Carry (yd)")
                .style(theme.axis)
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

// ── Tests ──────────────────────────────────────────────────────────────────────
