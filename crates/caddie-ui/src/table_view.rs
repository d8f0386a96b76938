//! Shot table view for the caddie TUI.
//!
//! Renders a bordered [`ratatui::widgets::Table`] with one row per shot plus
//! a highlighted mean row at the bottom, and the shared "no data"
//! placeholder shown whenever a filter matches nothing.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use caddie_core::formatting;
use caddie_core::models::ShotRecord;
use caddie_data::aggregator::OverallSummary;

use crate::themes::Theme;

/// Render the shot table into `area`.
///
/// The table has one data row per shot in source order, followed by a
/// highlighted mean row when `overall` is present, all within a bordered
/// block titled `title`.
pub fn render_shot_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    shots: &[&ShotRecord],
    overall: Option<&OverallSummary>,
    theme: &Theme,
) {
    let header_cells = [
        "Club",
        "Carry",
        "Offline",
        "Total",
        "Ball Speed",
        "Launch",
        "Spin",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let data_rows: Vec<Row> = shots
        .iter()
        .enumerate()
        .map(|(i, shot)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(shot.club.clone()),
                Cell::from(formatting::format_number(shot.carry, 1)),
                Cell::from(formatting::format_offline(shot.offline)),
                Cell::from(formatting::format_number(shot.total, 1)),
                Cell::from(formatting::format_number(shot.ball_speed, 1)),
                Cell::from(formatting::format_number(shot.launch_angle, 1)),
                Cell::from(formatting::format_number(shot.spin_rate, 0)),
            ])
            .style(style)
        })
        .collect();

    let mut all_rows = data_rows;

    // Mean row – styled separately to stand out.
    if let Some(overall) = overall {
        all_rows.push(
            Row::new(vec![
                Cell::from("MEAN").style(theme.table_total),
                Cell::from(formatting::format_number(overall.mean_carry, 1)),
                Cell::from(formatting::format_offline(overall.mean_offline)),
                Cell::from(""),
                Cell::from(""),
                Cell::from(""),
                Cell::from(format!("{} shots", overall.shot_count)),
            ])
            .style(theme.table_total),
        );
    }

    let widths = [
        Constraint::Length(16),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(10),
    ];

    let table = Table::new(all_rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Render a "no data" placeholder when the current filter matches nothing.
///
/// An empty filter result is a valid state, never an error; the user can
/// widen the club filter or load a different export.
pub fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No shots match the current club filter",
            theme.warning,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'f' to adjust the filter, 'a' to select all clubs.",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Shot Data "),
        ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
