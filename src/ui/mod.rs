//! UI rendering for Mamãe Fit.
//!
//! Every frame is drawn from scratch out of [`App`]:
//! - Header with the brand and the current screen
//! - Body: the screen view (information panel, optional text field, menu)
//! - Bottom navigation bar on the five main screens
//! - Keybind hints
//! - Notice popup on top when one is open
//!
//! Sizing decisions go through [`LayoutContext`].

pub mod chrome;
pub mod components;
pub mod helpers;
pub mod layout;
pub mod screens;
pub mod theme;

pub use layout::{breakpoints, LayoutContext};
pub use screens::{view_for, ScreenView};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, NoticeLevel};
use chrome::{render_footer, render_header, render_nav_bar};
use components::{render_dialog_frame, DialogFrameConfig};
use theme::{COLOR_ERROR, COLOR_INFO, COLOR_SUCCESS};

/// Render the whole frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let nav_height = if app.state.shows_bottom_nav() {
        ctx.nav_height()
    } else {
        0
    };
    let [header_area, body_area, nav_area, footer_area] = Layout::vertical([
        Constraint::Length(ctx.header_height()),
        Constraint::Min(1),
        Constraint::Length(nav_height),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area, app, &ctx);
    screens::render_screen(frame, body_area, app);
    if nav_height > 0 {
        render_nav_bar(frame, nav_area, app, &ctx);
    }
    render_footer(frame, footer_area, app, &ctx);

    render_notice(frame, area, app, &ctx);
}

fn render_notice(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let Some(notice) = &app.state.notice else {
        return;
    };
    let (title, color) = match notice.level {
        NoticeLevel::Info => ("Aviso", COLOR_INFO),
        NoticeLevel::Success => ("Pronto", COLOR_SUCCESS),
        NoticeLevel::Error => ("Ops", COLOR_ERROR),
    };

    let config = DialogFrameConfig::new(title, 0).border_color(color);
    let inner_width = components::dialog_frame::dialog_width(ctx, &config, area.width)
        .saturating_sub(2)
        .max(1);
    let text_lines = notice
        .text
        .chars()
        .count()
        .div_ceil(usize::from(inner_width))
        .max(1) as u16;
    let config = DialogFrameConfig {
        content_height: text_lines + 2,
        ..config
    };

    let inner = render_dialog_frame(frame, area, ctx, &config);
    let body = Paragraph::new(vec![
        Line::from(notice.text.clone()),
        Line::default(),
        Line::styled("Pressione qualquer tecla", Style::default().fg(theme::COLOR_DIM)),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}
