//! Helper functions and constants for UI rendering

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::{COLOR_DIM, COLOR_PROGRESS};

/// Spinner frames for the analysis screen
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick / 4) as usize % SPINNER_FRAMES.len()]
}

/// Text progress bar `width` cells wide.
pub fn progress_bar(value: u32, max: u32, width: usize) -> Line<'static> {
    let filled = if max == 0 {
        0
    } else {
        ((value.min(max) as usize) * width) / max as usize
    };
    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(COLOR_PROGRESS)),
        Span::styled("░".repeat(width - filled), Style::default().fg(COLOR_DIM)),
    ])
}

/// Truncate to `max_width` terminal columns, adding `...` when cut.
///
/// Emoji count as two columns.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut kept = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        kept.push(c);
    }
    format!("{}...", kept)
}

/// A `label: value` line with a dimmed label.
pub fn field_line(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(COLOR_DIM)),
        Span::raw(value.into()),
    ])
}

/// Bulleted lines.
pub fn bullets<'a>(items: impl IntoIterator<Item = &'a String>) -> Vec<Line<'static>> {
    items
        .into_iter()
        .map(|item| Line::from(format!("  • {}", item)))
        .collect()
}
