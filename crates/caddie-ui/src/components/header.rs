use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Decorative diamond string placed either side of the application title.
pub const DIAMONDS: &str = "◇ ◆ ◇";

/// Dashboard header rendering four lines:
///
/// 1. Application title with diamond decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. Source file, shot count and club count in
///    `[ file | N shots | M clubs ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    /// File name of the ingested export (e.g. "golfdata.csv").
    pub source: &'a str,
    /// Number of shots currently passing the club filter.
    pub shot_count: usize,
    /// Number of distinct clubs in the session.
    pub club_count: usize,
    /// Theme providing colour styles for each part of the header.
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Construct a new header.
    pub fn new(source: &'a str, shot_count: usize, club_count: usize, theme: &'a Theme) -> Self {
        Self {
            source,
            shot_count,
            club_count,
            theme,
        }
    }

    /// Render the header as a `Vec<Line>` containing exactly four lines.
    ///
    /// The returned lines are:
    ///
    /// 1. `"◇ ◆ ◇ LAUNCH MONITOR DASHBOARD ◇ ◆ ◇"`
    /// 2. `"============================================================"` (60 `=` chars)
    /// 3. `"[ golfdata.csv | 42 shots | 8 clubs ]"`
    /// 4. `""`
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        vec![
            // Title line.
            Line::from(vec![
                Span::styled(DIAMONDS, self.theme.header_accent),
                Span::styled(" LAUNCH MONITOR DASHBOARD ", self.theme.header),
                Span::styled(DIAMONDS, self.theme.header_accent),
            ]),
            // Separator line.
            Line::from(Span::styled(separator, self.theme.separator)),
            // Source / counts info line.
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(self.source, self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(format!("{} shots", self.shot_count), self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(format!("{} clubs", self.club_count), self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            // Empty line.
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::Theme;

    #[test]
    fn test_header_to_lines_count() {
        let theme = Theme::dark();
        let header = Header::new("golfdata.csv", 42, 8, &theme);
        let lines = header.to_lines();
        assert_eq!(lines.len(), 4, "header must produce exactly 4 lines");
    }

    #[test]
    fn test_header_title_line_content() {
        let theme = Theme::dark();
        let header = Header::new("golfdata.csv", 42, 8, &theme);
        let lines = header.to_lines();

        // Reconstruct the text of the first line.
        let title_text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(
            title_text.contains("LAUNCH MONITOR DASHBOARD"),
            "title line must contain 'LAUNCH MONITOR DASHBOARD', got: {title_text}"
        );
        assert!(
            title_text.contains(DIAMONDS),
            "title line must contain diamonds, got: {title_text}"
        );
    }

    #[test]
    fn test_header_info_line_counts() {
        let theme = Theme::dark();
        let header = Header::new("range-2024.csv", 3, 2, &theme);
        let lines = header.to_lines();

        let info_text: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(
            info_text.contains("range-2024.csv"),
            "file name must appear, got: {info_text}"
        );
        assert!(
            info_text.contains("3 shots") && info_text.contains("2 clubs"),
            "counts must appear, got: {info_text}"
        );
        assert!(
            info_text.contains("[ ") && info_text.contains(" | ") && info_text.contains(" ]"),
            "format must be '[ file | shots | clubs ]', got: {info_text}"
        );
    }

    #[test]
    fn test_header_separator_line() {
        let theme = Theme::dark();
        let header = Header::new("golfdata.csv", 0, 0, &theme);
        let lines = header.to_lines();

        let sep_text: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();

        assert_eq!(
            sep_text.chars().count(),
            60,
            "separator must be 60 chars wide"
        );
        assert!(
            sep_text.chars().all(|c| c == '='),
            "separator must consist of '=' characters, got: {sep_text}"
        );
    }

    #[test]
    fn test_header_empty_fourth_line() {
        let theme = Theme::dark();
        let header = Header::new("golfdata.csv", 42, 8, &theme);
        let lines = header.to_lines();

        let empty_text: String = lines[3].spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(
            empty_text.is_empty(),
            "fourth line must be empty, got: {empty_text:?}"
        );
    }
}
