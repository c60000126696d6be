//! Header, bottom navigation and keybind hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Screen, NAV_BAR};
use crate::input::{InputContext, InputMode};
use crate::models::trimester_for_week;

use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let screen = app.state.rendered_screen();
    let mut spans = vec![
        Span::styled(
            "🤰 Mamãe Fit",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(COLOR_BORDER)),
        Span::styled(
            screen.title(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if app.state.logged_in && !ctx.is_extra_small() {
        spans.push(Span::styled(
            format!(
                "  semana {} · {}",
                app.state.pregnancy_week,
                trimester_for_week(app.state.pregnancy_week)
            ),
            Style::default().fg(COLOR_DIM),
        ));
    }

    let block = if ctx.is_short() {
        Block::default()
    } else {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BORDER))
    };
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// The five fixed destinations, numbered for the digit shortcuts.
pub fn render_nav_bar(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let current = app.state.rendered_screen();
    let mut spans = Vec::new();
    for (i, screen) in NAV_BAR.iter().enumerate() {
        let style = if *screen == current {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        let label = if ctx.is_narrow() {
            nav_short_label(*screen)
        } else {
            screen.menu_label()
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, label), style));
    }

    let block = if ctx.is_short() {
        Block::default()
    } else {
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(COLOR_BORDER))
    };
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(block).centered(),
        area,
    );
}

fn nav_short_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Dashboard => "🏠",
        Screen::Workout => "💪",
        Screen::Nutrition => "🥗",
        Screen::Agenda => "📅",
        Screen::Profile => "👤",
        other => other.menu_label(),
    }
}

fn hint(spans: &mut Vec<Span<'static>>, key: &'static str, label: &'static str) {
    if spans.len() > 1 {
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::styled(key, Style::default().fg(COLOR_ACCENT)));
    spans.push(Span::raw(format!(" {}", label)));
}

/// Keybind hints for the active input mode.
pub fn build_keybinds(app: &App, ctx: &LayoutContext) -> Line<'static> {
    let input = InputContext::from_app(app);
    let mut spans = vec![Span::raw(" ")];

    match input.mode {
        InputMode::Notice => hint(&mut spans, "[qualquer tecla]", "fechar"),
        InputMode::Login => {
            hint(&mut spans, "[Enter]", "entrar");
            hint(&mut spans, "[Tab]", "campo");
            hint(&mut spans, "[Ctrl+C]", "sair");
        }
        InputMode::Editing => {
            hint(&mut spans, "[Enter]", "enviar");
            hint(&mut spans, "[Esc]", "fechar");
        }
        InputMode::Browse => {
            hint(&mut spans, "[↑↓]", "mover");
            hint(&mut spans, "[Enter]", "abrir");
            if app.state.screen.back_target().is_some() || input.screen == Screen::AiAnalysis {
                hint(&mut spans, "[Esc]", "voltar");
            }
            if !ctx.is_extra_small() {
                match input.screen {
                    Screen::AiTrainer => {
                        hint(&mut spans, "[Tab]", "assistente");
                        hint(&mut spans, "[m]", "humor");
                    }
                    Screen::PregnancyTracker => hint(&mut spans, "[←→]", "semana"),
                    Screen::MusicPlayer => hint(&mut spans, "[p]", "tocar/pausar"),
                    _ => {}
                }
                if input.nav_visible && !ctx.is_narrow() {
                    hint(&mut spans, "[1-5]", "abas");
                }
            }
            hint(&mut spans, "[q]", "sair");
        }
    }
    Line::from(spans)
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let line = build_keybinds(app, ctx);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(COLOR_DIM)),
        area,
    );
}
