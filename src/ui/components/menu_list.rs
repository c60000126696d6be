//! The selectable list every screen ends with.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::MenuEntry;
use crate::ui::helpers::truncate_string;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Draw `entries` with the row at `cursor` highlighted.
pub fn render_menu(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    entries: &[MenuEntry],
    cursor: usize,
    focused: bool,
) {
    if entries.is_empty() || area.height == 0 {
        return;
    }

    // Borders plus the highlight symbol.
    let label_width = usize::from(area.width.saturating_sub(4));
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let style = if entry.enabled {
                Style::default()
            } else {
                Style::default().fg(COLOR_DIM)
            };
            ListItem::new(Line::from(Span::styled(
                truncate_string(&entry.label, label_width),
                style,
            )))
        })
        .collect();

    let highlight = if focused {
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(title.to_string()),
        )
        .highlight_style(highlight)
        .highlight_symbol("› ");

    let mut state = ListState::default().with_selected(Some(cursor.min(entries.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}
