//! Dialog Frame Component
//!
//! A centered popup with rounded borders. Clears what is behind it and
//! sizes itself to the terminal.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG};

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    pub border_color: Color,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            border_color: COLOR_BORDER,
            min_width: 30,
            max_width: 64,
        }
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }
}

/// Dialog width for the terminal size.
pub fn dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig, area_width: u16) -> u16 {
    let width = if ctx.is_extra_small() {
        area_width.saturating_sub(4).min(config.max_width)
    } else if ctx.is_narrow() {
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width)
    };
    width.min(area_width)
}

/// Render a dialog frame centered in `area` and return its inner area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let width = dialog_width(ctx, config, area.width);
    let height = (config.content_height + 2).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(config.border_color)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(config.border_color))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_width_bounds() {
        let config = DialogFrameConfig::new("Aviso", 4);
        assert_eq!(dialog_width(&LayoutContext::new(200, 50), &config, 200), 64);
        assert_eq!(dialog_width(&LayoutContext::new(100, 40), &config, 100), 50);
        assert_eq!(dialog_width(&LayoutContext::new(40, 12), &config, 40), 36);
    }
}
