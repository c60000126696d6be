//! Meal plan, recipe detail and the two meal capture screens.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::App;
use crate::models::Budget;
use crate::ui::helpers::{bullets, field_line, progress_bar};
use crate::ui::theme::{COLOR_AI, COLOR_DIM, COLOR_HEADER};

use super::ScreenView;

fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ))
}

fn budget_label(budget: Budget) -> &'static str {
    match budget {
        Budget::Low => "baixo",
        Budget::Medium => "médio",
        Budget::High => "alto",
    }
}

pub fn nutrition_view(app: &App) -> ScreenView {
    let state = &app.state;
    let remaining = state.calorie_target.saturating_sub(state.calories_consumed);
    let mut bar = vec![Span::styled("Hoje    ", Style::default().fg(COLOR_DIM))];
    bar.extend(progress_bar(state.calories_consumed, state.calorie_target, 20).spans);
    let lines = vec![
        heading("Plano alimentar"),
        Line::from(bar),
        field_line(
            "Consumido",
            format!(
                "{} de {} kcal (restam {})",
                state.calories_consumed, state.calorie_target, remaining
            ),
        ),
        field_line("Água", format!("{} copos", state.water_glasses)),
    ];
    ScreenView::new(lines, "Refeições")
}

pub fn nutrition_detail_view(app: &App) -> ScreenView {
    let Some(item) = app.state.selected_nutrition(&app.catalog) else {
        return ScreenView::new(vec![Line::from("Nenhuma refeição selecionada.")], "");
    };

    let mut lines = vec![
        heading(item.title.clone()),
        Line::from(Span::styled(item.meal.clone(), Style::default().fg(COLOR_DIM))),
    ];
    if let Some(recipe) = app.state.find_recipe(item.id) {
        lines.push(Line::from(Span::styled(
            "✨ Receita criada pela IA",
            Style::default().fg(COLOR_AI),
        )));
        lines.push(field_line("Custo", budget_label(recipe.budget)));
        lines.push(field_line("Preparo", recipe.prep_time.clone()));
    }
    lines.extend([
        field_line("Calorias", format!("{} kcal", item.calories)),
        field_line(
            "Macros",
            format!(
                "proteína {}g · carboidratos {}g · gorduras {}g",
                item.macros.protein, item.macros.carbs, item.macros.fat
            ),
        ),
        Line::default(),
        heading("Ingredientes"),
    ]);
    lines.extend(bullets(&item.ingredients));
    lines.push(heading("Modo de preparo"));
    lines.push(Line::from(item.instructions.clone()));
    ScreenView::new(lines, "")
}

pub fn photo_nutrition_view() -> ScreenView {
    let lines = vec![
        heading("Foto do prato"),
        Line::from("Fotografe sua refeição e a IA estima calorias e nutrientes."),
    ];
    ScreenView::new(lines, "Câmera")
}

pub fn barcode_scanner_view() -> ScreenView {
    let lines = vec![
        heading("Leitor de código de barras"),
        Line::from("Aponte a câmera para o código do produto."),
    ];
    ScreenView::new(lines, "Leitor")
}
