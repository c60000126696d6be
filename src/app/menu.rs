//! Selectable entries of each screen.
//!
//! The renderer draws these in order and highlights the cursor row; the
//! input layer activates the entry under the cursor. Keeping one list for
//! both is what makes every button on screen a reachable transition.

use crate::catalog::Catalog;
use crate::models::{ChatKind, Mood, RecordId};

use super::action::Action;
use super::state::SessionState;
use super::types::{AnalysisKind, Capability, Screen, DASHBOARD_MENU};

/// Free-text fields reachable from a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPurpose {
    /// Chat message for the assistant
    Chat,
    /// Comma separated ingredient list for the recipe generator
    Ingredients,
}

impl TextPurpose {
    pub fn title(self) -> &'static str {
        match self {
            TextPurpose::Chat => "Mensagem",
            TextPurpose::Ingredients => "Ingredientes (separados por vírgula)",
        }
    }
}

/// What activating a menu entry does.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuTarget {
    Action(Action),
    /// Focus a text field; its submit produces the action
    EditText(TextPurpose),
    /// Simulated camera capture that saves a progress photo
    CapturePhoto,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub label: String,
    pub target: MenuTarget,
    /// Disabled entries are drawn dimmed and ignore activation
    pub enabled: bool,
}

impl MenuEntry {
    fn action(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            target: MenuTarget::Action(action),
            enabled: true,
        }
    }

    fn target(label: impl Into<String>, target: MenuTarget) -> Self {
        Self {
            label: label.into(),
            target,
            enabled: true,
        }
    }

    fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

fn permission_entry(state: &SessionState, capability: Capability) -> MenuEntry {
    let permissions = &state.permissions;
    let status = if permissions.is_granted(capability) {
        "✓ concedida"
    } else if permissions.is_requesting(capability) {
        "… solicitando"
    } else {
        "permitir"
    };
    MenuEntry::action(
        format!("{} [{}]", capability.label(), status),
        Action::RequestPermission(capability),
    )
    .enabled(!permissions.is_granted(capability) && !permissions.is_requesting(capability))
}

fn workout_entries(state: &SessionState, catalog: &Catalog) -> Vec<MenuEntry> {
    state
        .ai_workouts
        .iter()
        .chain(catalog.workouts.iter())
        .map(|w| {
            let done = if state.is_completed(w.id) { " ✅" } else { "" };
            MenuEntry::action(
                format!("{} · {} · {}{}", w.title, w.duration, w.difficulty.label(), done),
                Action::SelectWorkout(w.id),
            )
        })
        .collect()
}

fn exercise_entry(id: RecordId, name: &str, duration: &str) -> MenuEntry {
    MenuEntry::action(format!("{} ({})", name, duration), Action::SelectExercise(id))
}

/// Entries for the screen `state` renders.
pub fn menu_for(state: &SessionState, catalog: &Catalog) -> Vec<MenuEntry> {
    match state.rendered_screen() {
        Screen::Login | Screen::AiAnalysis => Vec::new(),
        Screen::Permissions => {
            let mut entries: Vec<MenuEntry> = Capability::ALL
                .into_iter()
                .map(|c| permission_entry(state, c))
                .collect();
            entries.push(
                MenuEntry::action("Continuar", Action::ContinueFromPermissions)
                    .enabled(state.permissions.all_granted()),
            );
            entries
        }
        Screen::Dashboard => {
            let mut entries: Vec<MenuEntry> = DASHBOARD_MENU
                .into_iter()
                .map(|s| MenuEntry::action(s.menu_label(), Action::Navigate(s)))
                .collect();
            entries.push(MenuEntry::action("💧 Beber um copo de água", Action::AddWater));
            entries
        }
        Screen::Workout => {
            let mut entries = vec![MenuEntry::action(
                "🤖 Gerar treino com IA",
                Action::Navigate(Screen::AiWorkoutGenerator),
            )];
            entries.extend(workout_entries(state, catalog));
            entries
        }
        Screen::WorkoutDetail => match state.selected_workout(catalog) {
            Some(workout) => {
                let mut entries: Vec<MenuEntry> = workout
                    .exercises
                    .iter()
                    .map(|e| exercise_entry(e.id, &e.name, &e.duration))
                    .collect();
                let label = if state.is_completed(workout.id) {
                    "✅ Treino concluído"
                } else {
                    "✅ Concluir treino"
                };
                entries.push(MenuEntry::action(label, Action::CompleteWorkout(workout.id)));
                entries
            }
            None => Vec::new(),
        },
        Screen::Nutrition => {
            let mut entries = vec![
                MenuEntry::target(
                    "🥕 Receita com meus ingredientes",
                    MenuTarget::EditText(TextPurpose::Ingredients),
                ),
                MenuEntry::action("📷 Foto do prato", Action::Navigate(Screen::PhotoNutrition)),
                MenuEntry::action(
                    "🔍 Escanear código de barras",
                    Action::Navigate(Screen::BarcodeScanner),
                ),
                MenuEntry::action("💧 Beber um copo de água", Action::AddWater),
            ];
            entries.extend(
                state
                    .ai_recipes
                    .iter()
                    .map(|r| &r.item)
                    .chain(catalog.nutrition.iter())
                    .map(|n| {
                        MenuEntry::action(
                            format!("{}: {} · {} kcal", n.meal, n.title, n.calories),
                            Action::SelectNutrition(n.id),
                        )
                    }),
            );
            entries
        }
        Screen::NutritionDetail => match state.selected_nutrition {
            Some(id) if state.find_nutrition(catalog, id).is_some() => {
                vec![MenuEntry::action("🍽 Registrar refeição", Action::LogMeal(id))]
            }
            _ => Vec::new(),
        },
        Screen::Content => catalog
            .articles
            .iter()
            .enumerate()
            .map(|(i, a)| {
                MenuEntry::action(
                    format!("{} · {} · {} min", a.title, a.category, a.read_minutes),
                    Action::SelectArticle(i),
                )
            })
            .collect(),
        Screen::Profile => vec![
            MenuEntry::action("🤰 Minha gestação", Action::Navigate(Screen::PregnancyTracker)),
            MenuEntry::action(
                "📄 Enviar exames para análise",
                Action::StartAnalysis(AnalysisKind::Exam),
            ),
            MenuEntry::action("🚪 Sair", Action::SignOut),
        ],
        Screen::Agenda => vec![MenuEntry::action(
            "📄 Analisar exames com IA",
            Action::StartAnalysis(AnalysisKind::Exam),
        )],
        Screen::PregnancyTracker => vec![
            MenuEntry::action("◀ Semana anterior", Action::ChangeWeek(-1)),
            MenuEntry::action("▶ Próxima semana", Action::ChangeWeek(1)),
        ],
        Screen::MusicPlayer => {
            let label = if state.music.playing {
                "⏸ Pausar"
            } else {
                "▶ Tocar"
            };
            vec![
                MenuEntry::action(label, Action::TogglePlayback),
                MenuEntry::action("⏭ Próxima faixa", Action::NextTrack),
                MenuEntry::action("⏮ Faixa anterior", Action::PreviousTrack),
            ]
        }
        Screen::Reminders => state
            .reminders
            .iter()
            .map(|r| {
                let mark = if r.active { "🔔" } else { "🔕" };
                MenuEntry::action(
                    format!("{} {} {} · {}", mark, r.kind.icon(), r.title, r.time),
                    Action::ToggleReminder(r.id),
                )
            })
            .collect(),
        Screen::PhotoNutrition => vec![MenuEntry::action(
            "📷 Tirar foto e analisar",
            Action::StartAnalysis(AnalysisKind::Photo),
        )],
        Screen::BarcodeScanner => vec![MenuEntry::action("🔍 Escanear", Action::ScanBarcode)],
        Screen::AiWorkoutGenerator => vec![
            MenuEntry::action(
                "🧠 Analisar meu perfil",
                Action::StartAnalysis(AnalysisKind::Workout),
            ),
            MenuEntry::action("🌐 Gerar plano personalizado", Action::RequestAiWorkout),
        ],
        Screen::ExerciseGuide => {
            let mut entries: Vec<MenuEntry> = catalog
                .exercises
                .iter()
                .map(|e| exercise_entry(e.id, &e.name, &e.duration))
                .collect();
            entries.push(MenuEntry::action(
                "💪 Guia muscular",
                Action::Navigate(Screen::MuscleGuide),
            ));
            entries
        }
        Screen::ProgressPhotos => vec![
            MenuEntry::target("📸 Tirar foto", MenuTarget::CapturePhoto),
            MenuEntry::action("🗂 Linha do tempo", Action::Navigate(Screen::PhotoTimeline)),
        ],
        Screen::AiTrainer => vec![
            MenuEntry::target("✍ Escrever mensagem", MenuTarget::EditText(TextPurpose::Chat)),
            MenuEntry::action(
                format!("Assistente: {}", state.chat_kind.label()),
                Action::SetChatKind(state.chat_kind.next()),
            ),
            MenuEntry::action(
                format!("Humor: {}", mood_label(state)),
                Action::SetMood(state.mood.next()),
            ),
        ],
        Screen::ContentDetail | Screen::PhotoTimeline | Screen::Workout3d | Screen::MuscleGuide => {
            Vec::new()
        }
    }
}

fn mood_label(state: &SessionState) -> &'static str {
    if state.chat_kind != ChatKind::Psychologist {
        return "-";
    }
    match state.mood {
        Mood::Happy => "😊 feliz",
        Mood::Sad => "😢 triste",
        Mood::Neutral => "😐 neutra",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in(screen: Screen) -> SessionState {
        let mut state = SessionState::new();
        state.logged_in = true;
        state.screen = screen;
        state
    }

    #[test]
    fn test_login_has_no_menu() {
        let catalog = Catalog::seed();
        let mut state = SessionState::new();
        state.screen = Screen::Dashboard;
        assert!(menu_for(&state, &catalog).is_empty());
    }

    #[test]
    fn test_continue_disabled_until_all_granted() {
        let catalog = Catalog::seed();
        let mut state = signed_in(Screen::Permissions);
        let entries = menu_for(&state, &catalog);
        assert_eq!(entries.len(), 5);
        assert!(!entries[4].enabled);

        for capability in Capability::ALL {
            state.permissions.grant(capability);
        }
        let entries = menu_for(&state, &catalog);
        assert!(entries[4].enabled);
        assert!(entries[..4].iter().all(|e| !e.enabled));
    }

    #[test]
    fn test_dashboard_lists_every_destination() {
        let catalog = Catalog::seed();
        let entries = menu_for(&signed_in(Screen::Dashboard), &catalog);
        for screen in DASHBOARD_MENU {
            assert!(entries
                .iter()
                .any(|e| e.target == MenuTarget::Action(Action::Navigate(screen))));
        }
    }

    #[test]
    fn test_workout_detail_offers_completion() {
        let catalog = Catalog::seed();
        let mut state = signed_in(Screen::WorkoutDetail);
        state.selected_workout = Some(1);
        let entries = menu_for(&state, &catalog);
        assert_eq!(
            entries.last().map(|e| &e.target),
            Some(&MenuTarget::Action(Action::CompleteWorkout(1)))
        );
    }

    #[test]
    fn test_text_entry_points() {
        let catalog = Catalog::seed();
        let nutrition = menu_for(&signed_in(Screen::Nutrition), &catalog);
        assert_eq!(
            nutrition[0].target,
            MenuTarget::EditText(TextPurpose::Ingredients)
        );
        let chat = menu_for(&signed_in(Screen::AiTrainer), &catalog);
        assert_eq!(chat[0].target, MenuTarget::EditText(TextPurpose::Chat));
    }
}
