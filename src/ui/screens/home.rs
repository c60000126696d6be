//! Dashboard and the personal screens reachable from it.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::{App, DAILY_WATER_TARGET};
use crate::models::{trimester_for_week, AgendaEventKind};
use crate::ui::helpers::{bullets, field_line, progress_bar};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_SUCCESS};

use super::ScreenView;

const BAR_WIDTH: usize = 20;

fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ))
}

fn bar_line(label: &str, value: u32, max: u32, suffix: String) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:<8}", label),
        Style::default().fg(COLOR_DIM),
    )];
    spans.extend(progress_bar(value, max, BAR_WIDTH).spans);
    spans.push(Span::raw(format!(" {}", suffix)));
    Line::from(spans)
}

fn agenda_icon(kind: AgendaEventKind) -> &'static str {
    match kind {
        AgendaEventKind::Appointment => "🩺",
        AgendaEventKind::Exam => "🧪",
        AgendaEventKind::Exercise => "🏃",
        AgendaEventKind::Personal => "💕",
    }
}

pub fn dashboard_view(app: &App) -> ScreenView {
    let state = &app.state;
    let profile = &app.catalog.profile;
    let first_name = profile.name.split_whitespace().next().unwrap_or("mamãe");

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Olá, {}! 💕", first_name),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Semana {} · {}",
            state.pregnancy_week,
            trimester_for_week(state.pregnancy_week)
        )),
        Line::default(),
        bar_line(
            "Calorias",
            state.calories_consumed,
            state.calorie_target,
            format!("{}/{} kcal", state.calories_consumed, state.calorie_target),
        ),
        bar_line(
            "Água",
            u32::from(state.water_glasses),
            u32::from(DAILY_WATER_TARGET),
            format!("{}/{} copos", state.water_glasses, DAILY_WATER_TARGET),
        ),
        field_line(
            "Treinos concluídos",
            state.completed_workouts.len().to_string(),
        ),
    ];

    if let Some(event) = app.catalog.agenda.first() {
        lines.push(Line::default());
        lines.push(field_line(
            "Próximo compromisso",
            format!("{} {} ({})", agenda_icon(event.kind), event.title, event.when),
        ));
    }
    ScreenView::new(lines, "Menu")
}

pub fn profile_view(app: &App) -> ScreenView {
    let profile = &app.catalog.profile;
    let mut lines = vec![
        heading(profile.name.clone()),
        field_line("Idade", format!("{} anos", profile.age)),
        field_line("Altura", format!("{} cm", profile.height)),
        field_line(
            "Peso antes da gestação",
            format!("{:.1} kg", profile.pre_pregnancy_weight),
        ),
        field_line("Peso atual", format!("{:.1} kg", profile.current_weight)),
        field_line("Ganho de peso", format!("{:+.1} kg", profile.weight_gain())),
        field_line("Data prevista", profile.due_date.clone()),
        field_line("Condicionamento", profile.fitness_level.as_str()),
        field_line("Semana atual", app.state.pregnancy_week.to_string()),
    ];
    if !profile.medical_conditions.is_empty() {
        lines.push(Line::default());
        lines.push(heading("Condições médicas"));
        lines.extend(bullets(&profile.medical_conditions));
    }
    if !profile.preferences.is_empty() {
        lines.push(Line::default());
        lines.push(heading("Preferências"));
        lines.extend(bullets(&profile.preferences));
    }
    ScreenView::new(lines, "Perfil")
}

pub fn agenda_view(app: &App) -> ScreenView {
    let mut lines = vec![heading("Próximos compromissos"), Line::default()];
    for event in &app.catalog.agenda {
        lines.push(Line::from(format!(
            "{} {}",
            agenda_icon(event.kind),
            event.title
        )));
        lines.push(Line::from(Span::styled(
            format!("   {}", event.when),
            Style::default().fg(COLOR_DIM),
        )));
    }
    ScreenView::new(lines, "Exames")
}

pub fn pregnancy_tracker_view(app: &App) -> ScreenView {
    let info = app.catalog.pregnancy_info(app.state.pregnancy_week);
    let mut lines = vec![
        heading(format!(
            "Semana {} · {}",
            info.week,
            trimester_for_week(info.week)
        )),
        bar_line(
            "Gestação",
            u32::from(info.progress_percent()),
            100,
            format!("{}%", info.progress_percent()),
        ),
        field_line(
            "Faltam",
            format!("{} semanas", info.weeks_remaining()),
        ),
        Line::default(),
        field_line("Bebê", info.baby_size.clone()),
        field_line("Peso estimado", info.baby_weight.clone()),
        Line::default(),
        Line::from(info.development.clone()),
        Line::default(),
        heading("Sintomas comuns"),
    ];
    lines.extend(bullets(&info.symptoms));
    lines.push(heading("Dicas da semana"));
    lines.extend(bullets(&info.tips));
    ScreenView::new(lines, "Semana")
}

pub fn reminders_view(app: &App) -> ScreenView {
    let active = app.state.reminders.iter().filter(|r| r.active).count();
    let mut lines = vec![
        heading("Lembretes"),
        field_line(
            "Ativos",
            format!("{} de {}", active, app.state.reminders.len()),
        ),
        Line::default(),
    ];
    for reminder in &app.state.reminders {
        let (status, color) = if reminder.active {
            ("ligado", COLOR_SUCCESS)
        } else {
            ("desligado", COLOR_DIM)
        };
        lines.push(Line::from(vec![
            Span::raw(format!(
                "{} {} às {} ",
                reminder.kind.icon(),
                reminder.title,
                reminder.time
            )),
            Span::styled(format!("({})", status), Style::default().fg(color)),
        ]));
    }
    ScreenView::new(lines, "Alternar")
}

pub fn content_view(app: &App) -> ScreenView {
    let mut lines = vec![heading("Conteúdo para você"), Line::default()];
    for article in &app.catalog.articles {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", article.category),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::raw(article.summary.clone()),
        ]));
    }
    ScreenView::new(lines, "Artigos")
}

pub fn content_detail_view(app: &App) -> ScreenView {
    let article = app
        .state
        .selected_article
        .and_then(|i| app.catalog.articles.get(i));
    let lines = match article {
        Some(article) => vec![
            heading(article.title.clone()),
            Line::from(Span::styled(
                format!("{} · {} min de leitura", article.category, article.read_minutes),
                Style::default().fg(COLOR_DIM),
            )),
            Line::default(),
            Line::from(article.body.clone()),
        ],
        None => vec![Line::from("Nenhum artigo selecionado.")],
    };
    ScreenView::new(lines, "")
}
