//! The navigation state machine.
//!
//! [`transition`] is pure: it consumes the current state and an action and
//! returns the next state plus the effects the controller must run. The
//! clock and the catalog come in through [`TransitionContext`].

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::catalog::{track_list, Catalog};
use crate::generators::{local_personalized_workout, ChatRequest, RecipeRequest, WorkoutRequest};
use crate::models::{
    ChatMessage, Macros, ProgressPhoto, ScannedProduct, MAX_PREGNANCY_WEEK, MIN_PREGNANCY_WEEK,
};

use super::action::{Action, Effect};
use super::state::{Notice, PendingOperation, SessionState, Ticket};
use super::types::{AnalysisKind, PendingKind, Screen};

/// Shown after a meal photo analysis.
pub const PHOTO_ANALYSIS_NOTICE: &str =
    "IA detectou: Prato com ~450 calorias\n- Proteína: 25g\n- Carboidratos: 35g\n- Gordura: 18g";

/// Shown after an exam analysis.
pub const EXAM_ANALYSIS_NOTICE: &str = "IA analisou seus exames:\n- Todos os valores normais\n- Recomendação: Continue com exercícios leves\n- Próxima consulta em 2 semanas";

/// Read-only inputs of a transition.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    pub now: DateTime<Utc>,
    pub catalog: &'a Catalog,
}

impl<'a> TransitionContext<'a> {
    pub fn new(now: DateTime<Utc>, catalog: &'a Catalog) -> Self {
        Self { now, catalog }
    }
}

/// Result of applying one action.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: SessionState,
    pub effects: Vec<Effect>,
}

/// Product the simulated barcode scanner always finds.
pub fn scanned_product() -> ScannedProduct {
    ScannedProduct {
        name: "Biscoito Integral".to_string(),
        calories: 120,
        macros: Macros {
            protein: 3,
            carbs: 18,
            fat: 4,
        },
    }
}

/// Apply `action` to `state`.
pub fn transition(mut state: SessionState, action: Action, ctx: &TransitionContext<'_>) -> Transition {
    let mut effects = Vec::new();

    if !state.logged_in && !action.is_completion() && !matches!(action, Action::SubmitLogin { .. })
    {
        debug!(?action, "ignoring action while signed out");
        return Transition { state, effects };
    }

    match action {
        Action::SubmitLogin { email, .. } => {
            debug!(email = %email, "login accepted");
            state.logged_in = true;
            state.screen = Screen::Permissions;
        }
        Action::RequestPermission(capability) => {
            if state.permissions.is_granted(capability) || state.permissions.is_requesting(capability)
            {
                debug!(?capability, "permission already granted or requested");
            } else {
                state.permissions.requesting.push(capability);
                effects.push(Effect::GrantPermission(capability));
            }
        }
        Action::PermissionGranted(capability) => {
            state.permissions.grant(capability);
        }
        Action::ContinueFromPermissions => {
            if state.screen == Screen::Permissions && state.permissions.all_granted() {
                state.screen = Screen::Dashboard;
            } else {
                debug!("continue ignored: permissions missing");
            }
        }
        Action::Navigate(target) => navigate(&mut state, target),
        Action::Back => back(&mut state),
        Action::SelectWorkout(id) => {
            if state.find_workout(ctx.catalog, id).is_some() {
                state.selected_workout = Some(id);
                state.screen = Screen::WorkoutDetail;
            } else {
                debug!(id, "unknown workout");
            }
        }
        Action::SelectExercise(id) => {
            if state.find_exercise(ctx.catalog, id).is_some() {
                state.selected_exercise = Some(id);
                state.screen = Screen::Workout3d;
            } else {
                debug!(id, "unknown exercise");
            }
        }
        Action::SelectNutrition(id) => {
            if state.find_nutrition(ctx.catalog, id).is_some() {
                state.selected_nutrition = Some(id);
                state.screen = Screen::NutritionDetail;
            } else {
                debug!(id, "unknown nutrition item");
            }
        }
        Action::SelectArticle(index) => {
            if index < ctx.catalog.articles.len() {
                state.selected_article = Some(index);
                state.screen = Screen::ContentDetail;
            } else {
                debug!(index, "unknown article");
            }
        }
        Action::CompleteWorkout(id) => {
            if !state.is_completed(id) {
                state.completed_workouts.push(id);
            }
            state.screen = Screen::Workout;
        }
        Action::StartAnalysis(kind) => {
            let ticket = begin_pending(&mut state, PendingKind::Analysis(kind));
            effects.push(Effect::FinishAnalysis { ticket });
        }
        Action::AnalysisFinished { ticket } => finish_analysis(&mut state, ticket, ctx),
        Action::RequestAiWorkout => {
            let profile = &ctx.catalog.profile;
            let request = WorkoutRequest {
                user_profile: serde_json::to_value(profile).ok(),
                pregnancy_week: state.pregnancy_week,
                fitness_level: profile.fitness_level.as_str().to_string(),
            };
            let ticket = begin_pending(&mut state, PendingKind::RemoteWorkout);
            effects.push(Effect::FetchWorkout { ticket, request });
        }
        Action::AiWorkoutReady { ticket, workout } => {
            if take_pending(&mut state, ticket, PendingKind::RemoteWorkout) {
                state.selected_workout = Some(workout.id);
                state.ai_workouts.insert(0, workout);
                state.screen = Screen::WorkoutDetail;
            }
        }
        Action::SubmitIngredients(raw) => {
            let ingredients: Vec<String> = raw
                .into_iter()
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty())
                .collect();
            if ingredients.is_empty() {
                state.notice = Some(Notice::error("Informe ao menos um ingrediente."));
            } else {
                let request = RecipeRequest {
                    ingredients,
                    user_profile: serde_json::to_value(&ctx.catalog.profile).ok(),
                };
                let ticket = begin_pending(&mut state, PendingKind::RemoteRecipe);
                effects.push(Effect::FetchRecipe { ticket, request });
            }
        }
        Action::RecipeReady { ticket, recipe } => {
            if take_pending(&mut state, ticket, PendingKind::RemoteRecipe) {
                state.selected_nutrition = Some(recipe.item.id);
                state.ai_recipes.insert(0, recipe);
                state.screen = Screen::NutritionDetail;
            }
        }
        Action::SendChat(text) => {
            let text = text.trim();
            if !text.is_empty() {
                state
                    .chat
                    .push(ChatMessage::from_user(text, state.chat_kind, ctx.now));
                let ticket = state.issue_ticket();
                state.awaiting_replies.push(ticket);
                effects.push(Effect::FetchChatReply {
                    ticket,
                    request: ChatRequest::new(text, state.chat_kind, state.mood),
                });
            }
        }
        Action::ChatReplyReceived { ticket, message } => {
            if take_reply(&mut state, ticket) {
                state.chat.push(message);
            } else {
                debug!(ticket, "discarding stale chat reply");
            }
        }
        Action::GeneratorFailed { ticket, error } => {
            if let Some(pending) = state.pending.filter(|p| p.ticket == ticket) {
                state.pending = None;
                state.screen = pending.origin;
                state.notice = Some(Notice::error(error));
            } else if take_reply(&mut state, ticket) {
                state.notice = Some(Notice::error(error));
            } else {
                debug!(ticket, "discarding stale failure");
            }
        }
        Action::SetChatKind(kind) => state.chat_kind = kind,
        Action::SetMood(mood) => state.mood = mood,
        Action::ScanBarcode => {
            state.notice = Some(Notice::success(scanned_product().summary()));
            state.screen = Screen::Nutrition;
        }
        Action::SaveProgressPhoto { image } => {
            let week = state.pregnancy_week;
            let photo = ProgressPhoto {
                id: ctx.now.timestamp_millis(),
                date: ctx.now.format("%Y-%m-%d").to_string(),
                week,
                image,
                notes: Some(format!("Foto da semana {}", week)),
                weight: Some(ctx.catalog.profile.current_weight),
            };
            state.progress_photos.insert(0, photo);
            state.screen = Screen::PhotoTimeline;
        }
        Action::ChangeWeek(delta) => {
            let week = i16::from(state.pregnancy_week) + i16::from(delta);
            let clamped = week.clamp(i16::from(MIN_PREGNANCY_WEEK), i16::from(MAX_PREGNANCY_WEEK));
            state.pregnancy_week = u8::try_from(clamped).unwrap_or(MIN_PREGNANCY_WEEK);
        }
        Action::ToggleReminder(id) => match state.reminders.iter_mut().find(|r| r.id == id) {
            Some(reminder) => reminder.active = !reminder.active,
            None => debug!(id, "unknown reminder"),
        },
        Action::TogglePlayback => state.music.playing = !state.music.playing,
        Action::NextTrack => {
            let count = track_list(&ctx.catalog.playlists).len();
            if count > 0 {
                state.music.track = (state.music.track + 1) % count;
            }
        }
        Action::PreviousTrack => {
            let count = track_list(&ctx.catalog.playlists).len();
            if count > 0 {
                state.music.track = (state.music.track + count - 1) % count;
            }
        }
        Action::LogMeal(id) => match state.find_nutrition(ctx.catalog, id) {
            Some(item) => {
                let calories = item.calories;
                state.calories_consumed = state.calories_consumed.saturating_add(calories);
                state.notice = Some(Notice::success(format!(
                    "Refeição registrada: +{} kcal",
                    calories
                )));
            }
            None => debug!(id, "unknown meal"),
        },
        Action::AddWater => state.water_glasses = state.water_glasses.saturating_add(1),
        Action::DismissNotice => state.notice = None,
        Action::SignOut => {
            state.logged_in = false;
            state.screen = Screen::Login;
            state.pending = None;
            state.awaiting_replies.clear();
            state.notice = None;
        }
    }

    // Pending work only lives while the analysis screen is showing.
    if state.screen != Screen::AiAnalysis {
        cancel_pending(&mut state);
    }

    Transition { state, effects }
}

fn navigate(state: &mut SessionState, target: Screen) {
    match target {
        Screen::AiAnalysis => debug!("analysis screen is only reached by starting an analysis"),
        Screen::Login => debug!("login is only reached by signing out"),
        Screen::Permissions => debug!("permissions are only shown after login"),
        _ => {
            if state.screen == Screen::AiAnalysis {
                cancel_pending(state);
            }
            state.screen = target;
        }
    }
}

fn back(state: &mut SessionState) {
    if state.screen == Screen::AiAnalysis {
        let origin = state.pending.map(|p| p.origin).unwrap_or(Screen::Dashboard);
        cancel_pending(state);
        state.screen = origin;
        return;
    }
    match state.screen.back_target() {
        Some(target) => state.screen = target,
        None => debug!(screen = state.screen.as_str(), "no back target"),
    }
}

fn cancel_pending(state: &mut SessionState) {
    if let Some(pending) = state.pending.take() {
        debug!(ticket = pending.ticket, "pending operation cancelled");
    }
}

/// Register a new pending operation and show the analysis screen.
///
/// Any older pending operation is replaced, so its completion goes stale.
fn begin_pending(state: &mut SessionState, kind: PendingKind) -> Ticket {
    let ticket = state.issue_ticket();
    let origin = match state.pending {
        Some(previous) if state.screen == Screen::AiAnalysis => previous.origin,
        _ => state.screen,
    };
    state.pending = Some(PendingOperation {
        ticket,
        kind,
        origin,
    });
    state.screen = Screen::AiAnalysis;
    ticket
}

/// Clear the pending operation if `ticket` and `kind` match it.
fn take_pending(state: &mut SessionState, ticket: Ticket, kind: PendingKind) -> bool {
    match state.pending {
        Some(pending) if pending.ticket == ticket && pending.kind == kind => {
            state.pending = None;
            true
        }
        _ => {
            debug!(ticket, "discarding stale completion");
            false
        }
    }
}

fn take_reply(state: &mut SessionState, ticket: Ticket) -> bool {
    let before = state.awaiting_replies.len();
    state.awaiting_replies.retain(|t| *t != ticket);
    state.awaiting_replies.len() != before
}

fn finish_analysis(state: &mut SessionState, ticket: Ticket, ctx: &TransitionContext<'_>) {
    let kind = match state.pending {
        Some(PendingOperation {
            ticket: pending_ticket,
            kind: PendingKind::Analysis(kind),
            ..
        }) if pending_ticket == ticket => kind,
        _ => {
            debug!(ticket, "discarding stale analysis");
            return;
        }
    };
    state.pending = None;

    match kind {
        AnalysisKind::Photo => {
            state.notice = Some(Notice::info(PHOTO_ANALYSIS_NOTICE));
            state.screen = Screen::Nutrition;
        }
        AnalysisKind::Exam => {
            state.notice = Some(Notice::info(EXAM_ANALYSIS_NOTICE));
            state.screen = Screen::Agenda;
        }
        AnalysisKind::Workout => {
            let workout = local_personalized_workout(
                &ctx.catalog.exercises,
                state.pregnancy_week,
                &ctx.catalog.profile,
                ctx.now,
            );
            state.selected_workout = Some(workout.id);
            state.ai_workouts.insert(0, workout);
            state.screen = Screen::WorkoutDetail;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::types::Capability;
    use crate::models::{ChatKind, ImageHandle, Mood, Sender};

    fn apply(state: SessionState, action: Action, catalog: &Catalog) -> Transition {
        transition(state, action, &TransitionContext::new(Utc::now(), catalog))
    }

    fn run(state: SessionState, actions: Vec<Action>, catalog: &Catalog) -> SessionState {
        actions
            .into_iter()
            .fold(state, |state, action| apply(state, action, catalog).state)
    }

    fn logged_in(catalog: &Catalog) -> SessionState {
        let mut state = run(
            SessionState::new(),
            vec![Action::SubmitLogin {
                email: String::new(),
                password: String::new(),
            }],
            catalog,
        );
        for capability in Capability::ALL {
            state = apply(state, Action::PermissionGranted(capability), catalog).state;
        }
        apply(state, Action::ContinueFromPermissions, catalog).state
    }

    fn pending_ticket(state: &SessionState) -> u64 {
        state.pending.expect("pending operation").ticket
    }

    #[test]
    fn test_login_accepts_any_credentials() {
        let catalog = Catalog::seed();
        for (email, password) in [("", ""), ("maria@example.com", "x"), ("???", "   ")] {
            let out = apply(
                SessionState::new(),
                Action::SubmitLogin {
                    email: email.to_string(),
                    password: password.to_string(),
                },
                &catalog,
            );
            assert!(out.state.logged_in);
            assert_eq!(out.state.screen, Screen::Permissions);
            assert!(out.effects.is_empty());
        }
    }

    #[test]
    fn test_actions_are_ignored_while_signed_out() {
        let catalog = Catalog::seed();
        let out = apply(SessionState::new(), Action::Navigate(Screen::Workout), &catalog);
        assert_eq!(out.state.screen, Screen::Login);
        assert!(!out.state.logged_in);
    }

    #[test]
    fn test_continue_requires_all_permissions() {
        let catalog = Catalog::seed();
        let mut state = apply(
            SessionState::new(),
            Action::SubmitLogin {
                email: "a".to_string(),
                password: "b".to_string(),
            },
            &catalog,
        )
        .state;

        for capability in Capability::ALL {
            let attempt = apply(state.clone(), Action::ContinueFromPermissions, &catalog).state;
            assert_eq!(attempt.screen, Screen::Permissions);
            state = apply(state, Action::PermissionGranted(capability), &catalog).state;
        }

        let state = apply(state, Action::ContinueFromPermissions, &catalog).state;
        assert_eq!(state.screen, Screen::Dashboard);
    }

    #[test]
    fn test_request_permission_emits_one_grant() {
        let catalog = Catalog::seed();
        let state = run(
            SessionState::new(),
            vec![Action::SubmitLogin {
                email: String::new(),
                password: String::new(),
            }],
            &catalog,
        );
        let first = apply(state, Action::RequestPermission(Capability::Camera), &catalog);
        assert_eq!(first.effects, vec![Effect::GrantPermission(Capability::Camera)]);
        assert!(first.state.permissions.is_requesting(Capability::Camera));

        let second = apply(first.state, Action::RequestPermission(Capability::Camera), &catalog);
        assert!(second.effects.is_empty());
    }

    #[test]
    fn test_complete_workout_is_idempotent() {
        let catalog = Catalog::seed();
        let mut state = logged_in(&catalog);
        for _ in 0..3 {
            state = apply(state, Action::SelectWorkout(2), &catalog).state;
            state = apply(state, Action::CompleteWorkout(2), &catalog).state;
            assert_eq!(state.screen, Screen::Workout);
        }
        assert_eq!(state.completed_workouts, vec![2]);
    }

    #[test]
    fn test_save_progress_photo_prepends_current_week() {
        let catalog = Catalog::seed();
        let state = run(
            logged_in(&catalog),
            vec![Action::ChangeWeek(2), Action::Navigate(Screen::ProgressPhotos)],
            &catalog,
        );
        let before = state.progress_photos.len();
        let now = Utc::now();
        let out = transition(
            state,
            Action::SaveProgressPhoto {
                image: ImageHandle::new("capture://test"),
            },
            &TransitionContext::new(now, &catalog),
        );
        let photos = &out.state.progress_photos;
        assert_eq!(photos.len(), before + 1);
        assert_eq!(photos[0].week, 26);
        assert_eq!(photos[0].id, now.timestamp_millis());
        assert_eq!(photos[0].date, now.format("%Y-%m-%d").to_string());
        assert_eq!(photos[0].notes.as_deref(), Some("Foto da semana 26"));
        assert_eq!(photos[0].weight, Some(68.5));
        assert_eq!(out.state.screen, Screen::PhotoTimeline);
    }

    #[test]
    fn test_back_uses_explicit_parents() {
        let catalog = Catalog::seed();
        let state = run(
            logged_in(&catalog),
            vec![Action::SelectNutrition(1), Action::Back],
            &catalog,
        );
        assert_eq!(state.screen, Screen::Nutrition);
        let state = apply(state, Action::Back, &catalog).state;
        assert_eq!(state.screen, Screen::Dashboard);
        let state = apply(state, Action::Back, &catalog).state;
        assert_eq!(state.screen, Screen::Dashboard);
    }

    #[test]
    fn test_select_unknown_ids_is_a_no_op() {
        let catalog = Catalog::seed();
        let state = logged_in(&catalog);
        let state = apply(state, Action::SelectWorkout(4242), &catalog).state;
        assert_eq!(state.screen, Screen::Dashboard);
        assert!(state.selected_workout.is_none());
        let state = apply(state, Action::SelectArticle(99), &catalog).state;
        assert_eq!(state.screen, Screen::Dashboard);
    }

    #[test]
    fn test_direct_navigation_to_analysis_is_ignored() {
        let catalog = Catalog::seed();
        let state = apply(logged_in(&catalog), Action::Navigate(Screen::AiAnalysis), &catalog).state;
        assert_eq!(state.screen, Screen::Dashboard);
    }

    #[test]
    fn test_workout_analysis_inserts_and_selects() {
        let catalog = Catalog::seed();
        let state = apply(logged_in(&catalog), Action::Navigate(Screen::AiWorkoutGenerator), &catalog).state;
        let started = apply(state, Action::StartAnalysis(AnalysisKind::Workout), &catalog);
        assert_eq!(started.state.screen, Screen::AiAnalysis);
        let ticket = pending_ticket(&started.state);
        assert_eq!(started.effects, vec![Effect::FinishAnalysis { ticket }]);

        let done = apply(started.state, Action::AnalysisFinished { ticket }, &catalog).state;
        assert_eq!(done.screen, Screen::WorkoutDetail);
        assert_eq!(done.ai_workouts.len(), 1);
        assert_eq!(done.selected_workout, Some(done.ai_workouts[0].id));
        assert!(done.pending.is_none());
        assert_eq!(
            done.selected_workout(&catalog).unwrap().title,
            "Treino IA Personalizado"
        );
    }

    #[test]
    fn test_photo_and_exam_analysis_targets() {
        let catalog = Catalog::seed();
        let state = apply(logged_in(&catalog), Action::StartAnalysis(AnalysisKind::Photo), &catalog).state;
        let ticket = pending_ticket(&state);
        let state = apply(state, Action::AnalysisFinished { ticket }, &catalog).state;
        assert_eq!(state.screen, Screen::Nutrition);
        assert_eq!(state.notice.as_ref().unwrap().text, PHOTO_ANALYSIS_NOTICE);

        let state = apply(state, Action::StartAnalysis(AnalysisKind::Exam), &catalog).state;
        let ticket = pending_ticket(&state);
        let state = apply(state, Action::AnalysisFinished { ticket }, &catalog).state;
        assert_eq!(state.screen, Screen::Agenda);
        assert_eq!(state.notice.as_ref().unwrap().text, EXAM_ANALYSIS_NOTICE);
    }

    #[test]
    fn test_stale_analysis_after_navigating_away_is_discarded() {
        let catalog = Catalog::seed();
        let state = apply(logged_in(&catalog), Action::StartAnalysis(AnalysisKind::Workout), &catalog).state;
        let ticket = pending_ticket(&state);
        let state = apply(state, Action::Navigate(Screen::Profile), &catalog).state;
        assert!(state.pending.is_none());

        let state = apply(state, Action::AnalysisFinished { ticket }, &catalog).state;
        assert_eq!(state.screen, Screen::Profile);
        assert!(state.ai_workouts.is_empty());
    }

    #[test]
    fn test_stale_analysis_after_leaving_by_any_screen_change_is_discarded() {
        let catalog = Catalog::seed();
        let leaving = vec![
            (Action::ScanBarcode, Screen::Nutrition),
            (Action::SelectWorkout(1), Screen::WorkoutDetail),
            (Action::SelectArticle(0), Screen::ContentDetail),
            (Action::CompleteWorkout(1), Screen::Workout),
            (
                Action::SaveProgressPhoto {
                    image: ImageHandle::new("foto"),
                },
                Screen::PhotoTimeline,
            ),
        ];
        for (action, landed) in leaving {
            let state = apply(logged_in(&catalog), Action::StartAnalysis(AnalysisKind::Photo), &catalog).state;
            let ticket = pending_ticket(&state);
            let state = apply(state, action, &catalog).state;
            assert_eq!(state.screen, landed);
            assert!(state.pending.is_none());

            let state = apply(state, Action::AnalysisFinished { ticket }, &catalog).state;
            assert_eq!(state.screen, landed);
        }
    }

    #[test]
    fn test_stale_analysis_after_sign_out_is_discarded() {
        let catalog = Catalog::seed();
        let state = apply(logged_in(&catalog), Action::StartAnalysis(AnalysisKind::Exam), &catalog).state;
        let ticket = pending_ticket(&state);
        let state = apply(state, Action::Back, &catalog).state;
        let state = apply(state, Action::SignOut, &catalog).state;
        let state = apply(state, Action::AnalysisFinished { ticket }, &catalog).state;
        assert_eq!(state.screen, Screen::Login);
        assert!(!state.logged_in);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_newer_operation_supersedes_older() {
        let catalog = Catalog::seed();
        let state = apply(logged_in(&catalog), Action::StartAnalysis(AnalysisKind::Photo), &catalog).state;
        let old = pending_ticket(&state);
        let state = apply(state, Action::StartAnalysis(AnalysisKind::Exam), &catalog).state;
        let new = pending_ticket(&state);
        assert_ne!(old, new);

        let state = apply(state, Action::AnalysisFinished { ticket: old }, &catalog).state;
        assert_eq!(state.screen, Screen::AiAnalysis);
        let state = apply(state, Action::AnalysisFinished { ticket: new }, &catalog).state;
        assert_eq!(state.screen, Screen::Agenda);
    }

    #[test]
    fn test_back_from_analysis_returns_to_origin() {
        let catalog = Catalog::seed();
        let state = run(
            logged_in(&catalog),
            vec![
                Action::Navigate(Screen::Agenda),
                Action::StartAnalysis(AnalysisKind::Exam),
                Action::Back,
            ],
            &catalog,
        );
        assert_eq!(state.screen, Screen::Agenda);
        assert!(state.pending.is_none());
    }

    #[test]
    fn test_remote_workout_flow() {
        let catalog = Catalog::seed();
        let state = apply(logged_in(&catalog), Action::Navigate(Screen::AiWorkoutGenerator), &catalog).state;
        let out = apply(state, Action::RequestAiWorkout, &catalog);
        let ticket = pending_ticket(&out.state);
        match &out.effects[..] {
            [Effect::FetchWorkout { ticket: t, request }] => {
                assert_eq!(*t, ticket);
                assert_eq!(request.pregnancy_week, 24);
                assert_eq!(request.fitness_level, "intermediário");
            }
            other => panic!("unexpected effects {:?}", other),
        }

        let workout = crate::generators::generate_workout(
            &WorkoutRequest {
                user_profile: None,
                pregnancy_week: 24,
                fitness_level: "intermediário".to_string(),
            },
            Utc::now(),
        )
        .into();
        let state = apply(out.state, Action::AiWorkoutReady { ticket, workout }, &catalog).state;
        assert_eq!(state.screen, Screen::WorkoutDetail);
        assert_eq!(state.ai_workouts.len(), 1);
        assert_eq!(state.selected_workout, Some(state.ai_workouts[0].id));
    }

    #[test]
    fn test_generator_failure_returns_to_origin_with_notice() {
        let catalog = Catalog::seed();
        let state = run(
            logged_in(&catalog),
            vec![
                Action::Navigate(Screen::Nutrition),
                Action::SubmitIngredients(vec!["tomate".to_string(), " arroz ".to_string()]),
            ],
            &catalog,
        );
        let ticket = pending_ticket(&state);
        let state = apply(
            state,
            Action::GeneratorFailed {
                ticket,
                error: "sem conexão".to_string(),
            },
            &catalog,
        )
        .state;
        assert_eq!(state.screen, Screen::Nutrition);
        assert!(state.pending.is_none());
        assert_eq!(state.notice, Some(Notice::error("sem conexão")));
    }

    #[test]
    fn test_ingredients_are_trimmed_and_required() {
        let catalog = Catalog::seed();
        let state = apply(logged_in(&catalog), Action::Navigate(Screen::Nutrition), &catalog).state;
        let empty = apply(state.clone(), Action::SubmitIngredients(vec!["  ".to_string()]), &catalog);
        assert!(empty.effects.is_empty());
        assert_eq!(empty.state.screen, Screen::Nutrition);
        assert!(empty.state.notice.is_some());

        let out = apply(
            state,
            Action::SubmitIngredients(vec![" tomate".to_string(), "arroz ".to_string()]),
            &catalog,
        );
        match &out.effects[..] {
            [Effect::FetchRecipe { request, .. }] => {
                assert_eq!(request.ingredients, vec!["tomate", "arroz"]);
            }
            other => panic!("unexpected effects {:?}", other),
        }
    }

    #[test]
    fn test_chat_round_trip_and_stale_reply() {
        let catalog = Catalog::seed();
        let state = run(
            logged_in(&catalog),
            vec![
                Action::Navigate(Screen::AiTrainer),
                Action::SetChatKind(ChatKind::Psychologist),
                Action::SetMood(Mood::Sad),
            ],
            &catalog,
        );
        let out = apply(state, Action::SendChat("Estou cansada".to_string()), &catalog);
        assert_eq!(out.state.chat.len(), 1);
        assert_eq!(out.state.chat[0].sender, Sender::User);
        let (ticket, request) = match &out.effects[..] {
            [Effect::FetchChatReply { ticket, request }] => (*ticket, request.clone()),
            other => panic!("unexpected effects {:?}", other),
        };
        assert_eq!(request.mood.as_deref(), Some("sad"));
        assert_eq!(request.kind, "psychologist");

        let reply = ChatMessage {
            id: 2,
            text: "Estou aqui".to_string(),
            sender: Sender::Ai,
            timestamp: Utc::now(),
            kind: "psychologist".to_string(),
        };
        let state = apply(
            out.state,
            Action::ChatReplyReceived {
                ticket,
                message: reply.clone(),
            },
            &catalog,
        )
        .state;
        assert_eq!(state.chat.len(), 2);
        assert_eq!(state.screen, Screen::AiTrainer);

        let state = apply(
            state,
            Action::ChatReplyReceived {
                ticket,
                message: reply,
            },
            &catalog,
        )
        .state;
        assert_eq!(state.chat.len(), 2);
    }

    #[test]
    fn test_week_is_clamped() {
        let catalog = Catalog::seed();
        let mut state = logged_in(&catalog);
        for _ in 0..30 {
            state = apply(state, Action::ChangeWeek(1), &catalog).state;
        }
        assert_eq!(state.pregnancy_week, 40);
        state = apply(state, Action::ChangeWeek(-100), &catalog).state;
        assert_eq!(state.pregnancy_week, 1);
    }

    #[test]
    fn test_counters_and_toggles() {
        let catalog = Catalog::seed();
        let state = run(
            logged_in(&catalog),
            vec![
                Action::AddWater,
                Action::LogMeal(3),
                Action::ToggleReminder(4),
                Action::TogglePlayback,
                Action::PreviousTrack,
            ],
            &catalog,
        );
        assert_eq!(state.water_glasses, 7);
        assert_eq!(state.calories_consumed, 1240 + 180);
        assert!(state.reminders.iter().find(|r| r.id == 4).unwrap().active);
        assert!(state.music.playing);
        assert_eq!(state.music.track, track_list(&catalog.playlists).len() - 1);
    }

    #[test]
    fn test_barcode_scan_lands_on_nutrition() {
        let catalog = Catalog::seed();
        let state = run(
            logged_in(&catalog),
            vec![Action::Navigate(Screen::BarcodeScanner), Action::ScanBarcode],
            &catalog,
        );
        assert_eq!(state.screen, Screen::Nutrition);
        assert!(state.notice.unwrap().text.contains("Biscoito Integral"));
    }

    #[test]
    fn test_sign_out_returns_to_login() {
        let catalog = Catalog::seed();
        let state = run(
            logged_in(&catalog),
            vec![Action::Navigate(Screen::Profile), Action::SignOut],
            &catalog,
        );
        assert!(!state.logged_in);
        assert_eq!(state.screen, Screen::Login);
        assert_eq!(state.rendered_screen(), Screen::Login);
    }
}
