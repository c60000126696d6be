//! Workout lists, workout detail and the exercise library.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::App;
use crate::models::{trimester_for_week, Exercise};
use crate::ui::helpers::{bullets, field_line};
use crate::ui::theme::{COLOR_AI, COLOR_DIM, COLOR_HEADER, COLOR_SUCCESS};

use super::ScreenView;

fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ))
}

fn exercise_lines(exercise: &Exercise) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading(exercise.name.clone()),
        field_line("Duração", exercise.duration.clone()),
    ];
    if let Some(reps) = &exercise.reps {
        lines.push(field_line("Repetições", reps.clone()));
    }
    lines.push(field_line("Músculos", exercise.muscle_groups.join(", ")));
    lines.push(Line::default());
    lines.push(Line::from(exercise.description.clone()));
    if !exercise.safety_tips.is_empty() {
        lines.push(Line::default());
        lines.push(heading("Segurança"));
        lines.extend(bullets(&exercise.safety_tips));
    }
    if !exercise.modifications.is_empty() {
        lines.push(heading("Adaptações"));
        lines.extend(bullets(&exercise.modifications));
    }
    lines
}

pub fn workout_view(app: &App) -> ScreenView {
    let week = app.state.pregnancy_week;
    let mut lines = vec![
        heading("Treinos seguros para a gestação"),
        Line::from(Span::styled(
            format!("Semana {} · {}", week, trimester_for_week(week)),
            Style::default().fg(COLOR_DIM),
        )),
        field_line(
            "Concluídos",
            format!(
                "{} de {}",
                app.state.completed_workouts.len(),
                app.catalog.workouts.len() + app.state.ai_workouts.len()
            ),
        ),
    ];
    if !app.state.ai_workouts.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("✨ {} treino(s) criados pela IA", app.state.ai_workouts.len()),
            Style::default().fg(COLOR_AI),
        )));
    }
    ScreenView::new(lines, "Treinos")
}

pub fn workout_detail_view(app: &App) -> ScreenView {
    let Some(workout) = app.state.selected_workout(&app.catalog) else {
        return ScreenView::new(vec![Line::from("Nenhum treino selecionado.")], "");
    };

    let mut lines = vec![heading(workout.title.clone())];
    if workout.ai_generated {
        let who = workout.personalized_for.as_deref().unwrap_or("você");
        lines.push(Line::from(Span::styled(
            format!("✨ Personalizado para {}", who),
            Style::default().fg(COLOR_AI),
        )));
    }
    lines.extend([
        field_line("Trimestre", workout.trimester.clone()),
        field_line("Duração", workout.duration.clone()),
        field_line("Dificuldade", workout.difficulty.label()),
        field_line("Local", workout.workout_type.label()),
        field_line("Vídeo", workout.video_url.clone()),
        Line::default(),
        Line::from(workout.description.clone()),
    ]);
    if app.state.is_completed(workout.id) {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "✅ Você já concluiu este treino",
            Style::default().fg(COLOR_SUCCESS),
        )));
    }
    ScreenView::new(lines, "Exercícios")
}

pub fn ai_workout_generator_view(app: &App) -> ScreenView {
    let profile = &app.catalog.profile;
    let lines = vec![
        heading("Treino personalizado com IA"),
        Line::from("A IA usa seu perfil para montar um plano seguro para esta fase."),
        Line::default(),
        field_line("Semana", app.state.pregnancy_week.to_string()),
        field_line("Condicionamento", profile.fitness_level.as_str()),
        field_line(
            "Condições",
            if profile.medical_conditions.is_empty() {
                "nenhuma".to_string()
            } else {
                profile.medical_conditions.join(", ")
            },
        ),
    ];
    ScreenView::new(lines, "Gerar")
}

pub fn exercise_guide_view() -> ScreenView {
    let lines = vec![
        heading("Guia de exercícios"),
        Line::from("Escolha um exercício para ver a execução passo a passo."),
    ];
    ScreenView::new(lines, "Exercícios")
}

pub fn workout_3d_view(app: &App) -> ScreenView {
    let lines = match app.state.selected_exercise(&app.catalog) {
        Some(exercise) => {
            let mut lines = exercise_lines(exercise);
            if let Some(animation) = &exercise.animation_3d {
                lines.push(Line::default());
                lines.push(field_line("Animação", animation.clone()));
            }
            lines
        }
        None => vec![Line::from("Nenhum exercício selecionado.")],
    };
    ScreenView::new(lines, "")
}

pub fn muscle_guide_view(app: &App) -> ScreenView {
    let mut lines = vec![heading("Guia muscular"), Line::default()];
    for group in app.catalog.muscle_groups() {
        let names: Vec<&str> = app
            .catalog
            .exercises
            .iter()
            .filter(|e| e.muscle_groups.iter().any(|g| g == group))
            .map(|e| e.name.as_str())
            .collect();
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", group),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(names.join(", "), Style::default().fg(COLOR_DIM)),
        ]));
    }
    ScreenView::new(lines, "")
}
