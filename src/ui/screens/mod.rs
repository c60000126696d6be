//! One view per screen.
//!
//! Most screens are an information panel followed by the screen menu, so
//! they only build a [`ScreenView`] and share [`render_view`]. The login
//! form and the analysis spinner draw themselves.

mod assistant;
mod home;
mod media;
mod nutrition;
mod onboarding;
mod training;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Screen};
use crate::widgets::InputBoxWidget;

use super::components::render_menu;
use super::theme::COLOR_BORDER;

/// Content of a standard screen.
#[derive(Debug, Clone, Default)]
pub struct ScreenView {
    pub lines: Vec<Line<'static>>,
    /// Title of the menu panel
    pub menu_title: &'static str,
    /// Keep the last lines visible when the panel overflows
    pub stick_to_bottom: bool,
}

impl ScreenView {
    pub fn new(lines: Vec<Line<'static>>, menu_title: &'static str) -> Self {
        Self {
            lines,
            menu_title,
            stick_to_bottom: false,
        }
    }

    pub fn stick_to_bottom(mut self) -> Self {
        self.stick_to_bottom = true;
        self
    }

    /// Plain text of the panel, for tests and logs.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Build the view of a standard screen.
///
/// Returns `None` for screens with a custom renderer.
pub fn view_for(app: &App) -> Option<ScreenView> {
    let view = match app.state.rendered_screen() {
        Screen::Login | Screen::AiAnalysis => return None,
        Screen::Permissions => onboarding::permissions_view(),
        Screen::Dashboard => home::dashboard_view(app),
        Screen::Profile => home::profile_view(app),
        Screen::Agenda => home::agenda_view(app),
        Screen::PregnancyTracker => home::pregnancy_tracker_view(app),
        Screen::Reminders => home::reminders_view(app),
        Screen::Content => home::content_view(app),
        Screen::ContentDetail => home::content_detail_view(app),
        Screen::Workout => training::workout_view(app),
        Screen::WorkoutDetail => training::workout_detail_view(app),
        Screen::AiWorkoutGenerator => training::ai_workout_generator_view(app),
        Screen::ExerciseGuide => training::exercise_guide_view(),
        Screen::Workout3d => training::workout_3d_view(app),
        Screen::MuscleGuide => training::muscle_guide_view(app),
        Screen::Nutrition => nutrition::nutrition_view(app),
        Screen::NutritionDetail => nutrition::nutrition_detail_view(app),
        Screen::PhotoNutrition => nutrition::photo_nutrition_view(),
        Screen::BarcodeScanner => nutrition::barcode_scanner_view(),
        Screen::MusicPlayer => media::music_player_view(app),
        Screen::ProgressPhotos => media::progress_photos_view(app),
        Screen::PhotoTimeline => media::photo_timeline_view(app),
        Screen::AiTrainer => assistant::ai_trainer_view(app),
    };
    Some(view)
}

/// Draw the body of the current screen into `area`.
pub fn render_screen(frame: &mut Frame, area: Rect, app: &App) {
    match app.state.rendered_screen() {
        Screen::Login => onboarding::render_login(frame, area, app),
        Screen::AiAnalysis => assistant::render_ai_analysis(frame, area, app),
        _ => {
            if let Some(view) = view_for(app) {
                render_view(frame, area, app, &view);
            }
        }
    }
}

/// Information panel, optional text field, then the menu.
fn render_view(frame: &mut Frame, area: Rect, app: &App, view: &ScreenView) {
    let entries = app.menu();
    let editing = app.ui.editing;

    let menu_height = if entries.is_empty() {
        0
    } else {
        (entries.len() as u16 + 2).min(area.height / 2).max(3)
    };
    let input_height = if editing.is_some() { 3 } else { 0 };

    let [info_area, input_area, menu_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(input_height),
        Constraint::Length(menu_height),
    ])
    .areas(area);

    let visible = info_area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = if view.stick_to_bottom && view.lines.len() > visible {
        view.lines[view.lines.len() - visible..].to_vec()
    } else {
        view.lines.clone()
    };
    let info = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(info, info_area);

    if let Some(purpose) = editing {
        frame.render_widget(
            InputBoxWidget::new(&app.ui.text, purpose.title(), true),
            input_area,
        );
    }

    render_menu(
        frame,
        menu_area,
        view.menu_title,
        &entries,
        app.ui.cursor,
        editing.is_none(),
    );
}
