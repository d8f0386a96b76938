//! Club gapping view: one horizontal bar per club, scaled to mean carry.
//!
//! Bars are drawn with filled/empty block characters rather than a chart
//! widget so each one can carry its own label and annotation, and so the
//! Aggregator's ordering (longest club first) maps directly onto rows.

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use caddie_core::formatting;
use caddie_core::models::ClubSummary;

use crate::themes::Theme;

/// Character used to fill the completed portion of a bar.
const FILLED_CHAR: char = '\u{2588}'; // █  FULL BLOCK
/// Character used to fill the empty portion of a bar.
const EMPTY_CHAR: char = '\u{2591}'; // ░  LIGHT SHADE

/// Columns reserved for the club-name label in front of each bar.
const LABEL_WIDTH: usize = 15;
/// Columns reserved for the annotation after each bar.
const VALUE_WIDTH: usize = 20;

/// Build one gapping bar line: club label, bar scaled against `max_carry`,
/// and a `"mean (count)"` annotation.
pub fn bar_line(summary: &ClubSummary, max_carry: f64, bar_width: usize, theme: &Theme) -> Line<'static> {
    let label = format!("{:<width$.width$} ", summary.club, width = LABEL_WIDTH - 1);

    let filled = if max_carry > 0.0 {
        (((summary.mean_carry / max_carry) * bar_width as f64).round() as usize).clamp(1, bar_width)
    } else {
        1
    };
    let empty = bar_width.saturating_sub(filled);

    let annotation = format!(
        " {} ({})",
        formatting::format_yards(summary.mean_carry),
        summary.shot_count,
    );

    Line::from(vec![
        Span::styled(label, theme.label),
        Span::styled(
            FILLED_CHAR.to_string().repeat(filled),
            theme.club_style(&summary.club),
        ),
        Span::styled(EMPTY_CHAR.to_string().repeat(empty), theme.bar_empty),
        Span::styled(annotation, theme.bar_label),
    ])
}

/// Render the gapping bars into `area`, one row per [`ClubSummary`] in the
/// order the Aggregator produced them (descending mean carry).
pub fn render_gapping(frame: &mut Frame, area: Rect, summaries: &[ClubSummary], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Club Gapping (Mean Carry) ");

    let inner_width = area.width.saturating_sub(2) as usize;
    let bar_width = inner_width
        .saturating_sub(LABEL_WIDTH + VALUE_WIDTH)
        .max(10);

    let max_carry = summaries
        .iter()
        .map(|s| s.mean_carry)
        .fold(0.0_f64, f64::max);

    let lines: Vec<Line> = summaries
        .iter()
        .map(|s| bar_line(s, max_carry, bar_width, theme))
        .collect();

    frame.render_widget(
        Paragraph::new(Text::from(lines)).block(block).style(theme.text),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
