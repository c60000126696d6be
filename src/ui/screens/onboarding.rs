//! Login form and permissions request.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Capability, LoginField};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::widgets::InputBoxWidget;

use super::ScreenView;

const FORM_WIDTH: u16 = 44;

pub fn render_login(frame: &mut Frame, area: Rect, app: &App) {
    let width = FORM_WIDTH.min(area.width);
    let x = area.x + (area.width - width) / 2;
    let column = Rect::new(x, area.y, width, area.height);

    let [_, logo_area, email_area, password_area, hint_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(column);

    let logo = Paragraph::new(vec![
        Line::from(Span::styled(
            "🤰 MamãeFit",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "Seu bem-estar na gestação",
            Style::default().fg(COLOR_DIM),
        ))
        .centered(),
    ]);
    frame.render_widget(logo, logo_area);

    let form = &app.ui.login;
    frame.render_widget(
        InputBoxWidget::new(&form.email, "E-mail", form.focus == LoginField::Email),
        email_area,
    );
    frame.render_widget(
        InputBoxWidget::new(
            &form.password,
            "Senha",
            form.focus == LoginField::Password,
        )
        .masked(true),
        password_area,
    );

    let hint = Paragraph::new(Line::from(Span::styled(
        "Enter para entrar · Tab troca de campo",
        Style::default().fg(COLOR_DIM),
    )))
    .centered();
    frame.render_widget(hint, hint_area);
}

pub fn permissions_view() -> ScreenView {
    let mut lines = vec![
        Line::from("Para a melhor experiência, precisamos de algumas permissões."),
        Line::default(),
    ];
    for capability in Capability::ALL {
        lines.push(Line::from(Span::styled(
            capability.label(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", capability.description()),
            Style::default().fg(COLOR_DIM),
        )));
    }
    ScreenView::new(lines, "Permissões")
}
