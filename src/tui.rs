use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::models::ReportStatus;

pub const HEADER_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

pub const FOOTER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const DISABLED_STYLE: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::DIM);

pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::Rgb(40, 40, 60))
    .add_modifier(Modifier::BOLD);

pub const INPUT_STYLE: Style = Style::new().fg(Color::Cyan);

const PROCESSED_STYLE: Style = Style::new().fg(Color::Rgb(80, 220, 100));
const PENDING_STYLE: Style = Style::new().fg(Color::Rgb(255, 200, 90));
const FAILED_STYLE: Style = Style::new().fg(Color::Red);

/// Status tag colored by variant.
pub fn status_span(status: ReportStatus) -> Span<'static> {
    let style = match status {
        ReportStatus::Processed => PROCESSED_STYLE,
        ReportStatus::Pending => PENDING_STYLE,
        ReportStatus::Failed => FAILED_STYLE,
    };
    Span::styled(status.as_str(), style)
}

/// Tri-state checkbox glyph: `[x]` all, `[-]` some, `[ ]` none.
pub fn checkbox(all: bool, some: bool) -> &'static str {
    if all {
        "[x]"
    } else if some {
        "[-]"
    } else {
        "[ ]"
    }
}

/// Wrap text to a given width. Returns (wrapped_string, line_count).
pub fn wrap_text(text: &str, width: usize) -> (String, u16) {
    if width == 0 {
        return (text.to_string(), 1);
    }
    let wrapped = textwrap::fill(text, width);
    let lines = wrapped.lines().count().max(1) as u16;
    (wrapped, lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_states() {
        assert_eq!(checkbox(true, false), "[x]");
        assert_eq!(checkbox(false, true), "[-]");
        assert_eq!(checkbox(false, false), "[ ]");
    }

    #[test]
    fn test_wrap_text_counts_lines() {
        let (wrapped, lines) = wrap_text("Compliance audit results and recommendation findings.", 20);
        assert!(lines >= 3);
        assert!(wrapped.lines().all(|l| l.len() <= 20));
        assert_eq!(wrap_text("short", 0), ("short".to_string(), 1));
    }
}
