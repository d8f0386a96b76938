use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Colours used to distinguish scatter series; one entry per club, cycling
/// when a session carries more clubs than the palette.
pub const SERIES_COLORS: usize = 6;

/// Complete theme definition carrying all UI styles used by caddie-ui
/// components.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_accent: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,

    // ── Gapping bars ─────────────────────────────────────────────────────────
    /// Unfilled (empty) portion of a gapping bar.
    pub bar_empty: Style,
    /// Numeric annotation after a gapping bar.
    pub bar_label: Style,

    // ── Chart ────────────────────────────────────────────────────────────────
    /// Axis lines and tick labels of the dispersion chart.
    pub axis: Style,

    // ── Club categories ──────────────────────────────────────────────────────
    pub club_driver: Style,
    pub club_wood: Style,
    pub club_iron: Style,
    pub club_wedge: Style,
    pub club_other: Style,

    // ── Scatter series ───────────────────────────────────────────────────────
    /// Cycled per-club colours for dispersion datasets and their legend.
    pub series: [Style; SERIES_COLORS],

    // ── Table ────────────────────────────────────────────────────────────────
    pub table_header: Style,
    pub table_border: Style,
    pub table_row: Style,
    pub table_row_alt: Style,
    pub table_total: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            bar_empty: Style::default().fg(Color::DarkGray),
            bar_label: Style::default().fg(Color::Gray),

            axis: Style::default().fg(Color::Gray),

            club_driver: Style::default().fg(Color::Magenta),
            club_wood: Style::default().fg(Color::Cyan),
            club_iron: Style::default().fg(Color::Green),
            club_wedge: Style::default().fg(Color::Yellow),
            club_other: Style::default().fg(Color::Gray),

            series: [
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Magenta),
                Style::default().fg(Color::Green),
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::Blue),
                Style::default().fg(Color::Red),
            ],

            table_header: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            table_total: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text and bright accent colours so that content
    /// remains legible against a white/light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Blue),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            bar_empty: Style::default().fg(Color::Gray),
            bar_label: Style::default().fg(Color::DarkGray),

            axis: Style::default().fg(Color::DarkGray),

            club_driver: Style::default().fg(Color::Magenta),
            club_wood: Style::default().fg(Color::Blue),
            club_iron: Style::default().fg(Color::Green),
            club_wedge: Style::default().fg(Color::Red),
            club_other: Style::default().fg(Color::DarkGray),

            series: [
                Style::default().fg(Color::Blue),
                Style::default().fg(Color::Magenta),
                Style::default().fg(Color::Green),
                Style::default().fg(Color::Red),
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Yellow),
            ],

            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::Gray),
            table_row: Style::default().fg(Color::Black),
            table_row_alt: Style::default().fg(Color::DarkGray),
            table_total: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Classic terminal theme using only the basic 8-colour ANSI palette.
    ///
    /// Avoids bold modifiers to maintain a retro aesthetic and maximise
    /// compatibility with minimal terminal emulators.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Green),
            header_accent: Style::default().fg(Color::White),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default().fg(Color::White),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            bar_empty: Style::default().fg(Color::DarkGray),
            bar_label: Style::default().fg(Color::White),

            axis: Style::default().fg(Color::White),

            club_driver: Style::default().fg(Color::Magenta),
            club_wood: Style::default().fg(Color::Cyan),
            club_iron: Style::default().fg(Color::Green),
            club_wedge: Style::default().fg(Color::Yellow),
            club_other: Style::default().fg(Color::White),

            series: [
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Magenta),
                Style::default().fg(Color::Green),
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::Blue),
                Style::default().fg(Color::Red),
            ],

            table_header: Style::default().fg(Color::Green),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            table_total: Style::default().fg(Color::Yellow),
        }
    }

    /// Choose a theme automatically based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Construct a theme by name.  Falls back to `auto_detect` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Return the scatter-series style for the `index`-th club, cycling
    /// through the palette when there are more clubs than colours.
    pub fn series_style(&self, index: usize) -> Style {
        self.series[index % SERIES_COLORS]
    }

    /// Return the club-category style that best matches a club name.
    pub fn club_style(&self, club: &str) -> Style {
        let lower = club.to_lowercase();
        if lower.contains("driver") {
            self.club_driver
        } else if lower.contains("wood") || lower.contains("hybrid") {
            self.club_wood
        } else if lower.contains("wedge")
            || matches!(lower.as_str(), "pw" | "gw" | "sw" | "lw" | "aw")
        {
            self.club_wedge
        } else if lower.contains("iron") {
            self.club_iron
        } else {
            self.club_other
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    // ── Theme construction ───────────────────────────────────────────────────

    #[test]
    fn test_dark_theme_creation() {
        let t = Theme::dark();
        assert_eq!(t.header.fg, Some(Color::Green));
        assert_eq!(t.success.fg, Some(Color::Green));
        assert_eq!(t.warning.fg, Some(Color::Yellow));
        assert_eq!(t.error.fg, Some(Color::Red));
        assert_eq!(t.club_driver.fg, Some(Color::Magenta));
        assert_eq!(t.club_iron.fg, Some(Color::Green));
    }

    #[test]
    fn test_light_theme_creation() {
        let t = Theme::light();
        assert_eq!(t.header.fg, Some(Color::Blue));
        assert_eq!(t.text.fg, Some(Color::Black));
        assert_eq!(t.table_row.fg, Some(Color::Black));
    }

    #[test]
    fn test_classic_theme_creation() {
        let t = Theme::classic();
        // Classic has no bold modifiers on primary text fields.
        assert!(!t.bold.add_modifier.contains(Modifier::BOLD));
        assert!(!t.header.add_modifier.contains(Modifier::BOLD));
        assert_eq!(t.table_total.fg, Some(Color::Yellow));
    }

    #[test]
    fn test_from_name_dark() {
        let t = Theme::from_name("dark");
        assert_eq!(t.header.fg, Some(Color::Green));
    }

    #[test]
    fn test_from_name_light() {
        let t = Theme::from_name("light");
        assert_eq!(t.header.fg, Some(Color::Blue));
    }

    #[test]
    fn test_from_name_unknown_falls_back() {
        // Unknown names must not panic and must return a valid theme.
        let t = Theme::from_name("does-not-exist");
        assert!(t.header.fg.is_some());
    }

    // ── series_style ─────────────────────────────────────────────────────────

    #[test]
    fn test_series_style_cycles() {
        let t = Theme::dark();
        assert_eq!(t.series_style(0).fg, t.series_style(SERIES_COLORS).fg);
        assert_eq!(t.series_style(1).fg, t.series_style(SERIES_COLORS + 1).fg);
    }

    #[test]
    fn test_series_style_distinct_within_palette() {
        let t = Theme::dark();
        let first = t.series_style(0).fg;
        let second = t.series_style(1).fg;
        assert_ne!(first, second);
    }

    // ── club_style ───────────────────────────────────────────────────────────

    #[test]
    fn test_club_style_driver() {
        let t = Theme::dark();
        assert_eq!(t.club_style("Driver").fg, Some(Color::Magenta));
    }

    #[test]
    fn test_club_style_woods_and_hybrids() {
        let t = Theme::dark();
        assert_eq!(t.club_style("3 Wood").fg, Some(Color::Cyan));
        assert_eq!(t.club_style("4 Hybrid").fg, Some(Color::Cyan));
    }

    #[test]
    fn test_club_style_irons() {
        let t = Theme::dark();
        assert_eq!(t.club_style("7 Iron").fg, Some(Color::Green));
    }

    #[test]
    fn test_club_style_wedges() {
        let t = Theme::dark();
        assert_eq!(t.club_style("Pitching Wedge").fg, Some(Color::Yellow));
        assert_eq!(t.club_style("SW").fg, Some(Color::Yellow));
        assert_eq!(t.club_style("lw").fg, Some(Color::Yellow));
    }

    #[test]
    fn test_club_style_unknown() {
        let t = Theme::dark();
        assert_eq!(t.club_style("Putter").fg, Some(Color::Gray));
        assert_eq!(t.club_style("").fg, Some(Color::Gray));
    }
}
