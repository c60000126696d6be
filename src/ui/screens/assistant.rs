//! Assistant chat and the analysis progress screen.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::Sender;
use crate::ui::helpers::spinner_frame;
use crate::ui::theme::{COLOR_ACCENT, COLOR_AI, COLOR_DIM};

use super::ScreenView;

pub fn ai_trainer_view(app: &App) -> ScreenView {
    let state = &app.state;
    let mut lines = vec![Line::from(Span::styled(
        format!("Conversando com: {}", state.chat_kind.label()),
        Style::default().fg(COLOR_DIM),
    ))];

    if state.chat.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from("Olá! Como posso ajudar você hoje?"));
    }
    for message in &state.chat {
        let (who, color) = match message.sender {
            Sender::User => ("Você", COLOR_ACCENT),
            Sender::Ai => ("IA", COLOR_AI),
        };
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", who),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                message.timestamp.format("%H:%M").to_string(),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
        lines.push(Line::from(message.text.clone()));
    }
    if !state.awaiting_replies.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("{} digitando...", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_AI),
        )));
    }
    ScreenView::new(lines, "Chat").stick_to_bottom()
}

pub fn render_ai_analysis(frame: &mut Frame, area: Rect, app: &App) {
    let label = app
        .state
        .pending
        .map(|p| p.kind.progress_label())
        .unwrap_or("Processando...");

    let [_, center, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} {}", spinner_frame(app.tick_count), label),
            Style::default().fg(COLOR_AI).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::default(),
        Line::from(Span::styled(
            "Esc para cancelar",
            Style::default().fg(COLOR_DIM),
        ))
        .centered(),
    ]);
    frame.render_widget(text, center);
}
