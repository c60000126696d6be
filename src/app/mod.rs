//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] controller and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`SessionState`] - Everything a transition may change
//! - [`Action`] / [`Effect`] - Inputs and outputs of [`transition`]
//! - [`AppMessage`] - Results of deferred work, sent over the channel

mod action;
mod effects;
pub mod menu;
mod messages;
pub mod state;
pub mod transition;
pub mod types;
mod ui_state;

pub use action::{Action, Effect};
pub use menu::{menu_for, MenuEntry, MenuTarget, TextPurpose};
pub use messages::AppMessage;
pub use state::{
    MusicState, Notice, NoticeLevel, PendingOperation, Permissions, SessionState, Ticket,
    DAILY_CALORIE_TARGET, DAILY_WATER_TARGET,
};
pub use transition::{transition, Transition, TransitionContext};
pub use types::{AnalysisKind, Capability, PendingKind, Screen, DASHBOARD_MENU, NAV_BAR};
pub use ui_state::{LoginField, LoginForm, UiState};

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::debug;

use crate::catalog::Catalog;
use crate::models::ImageHandle;
use crate::startup::AppConfig;
use crate::traits::GeneratorApi;

/// Main application controller.
///
/// Owns the session state and the channel spawned tasks report on. All
/// state changes go through [`App::dispatch`].
pub struct App {
    pub state: SessionState,
    /// Seed data; shared read-only
    pub catalog: Arc<Catalog>,
    pub ui: UiState,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Tick counter for animations (analysis spinner)
    pub tick_count: u64,
    /// Set on state changes, cleared after each draw
    pub needs_redraw: bool,
    /// Receiver for async messages; the run loop takes it
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    api: Arc<dyn GeneratorApi>,
    analysis_delay: Duration,
    permission_delay: Duration,
}

impl App {
    pub fn new(api: Arc<dyn GeneratorApi>, config: &AppConfig) -> Self {
        Self::with_catalog(api, config, Arc::new(Catalog::seed()))
    }

    pub fn with_catalog(
        api: Arc<dyn GeneratorApi>,
        config: &AppConfig,
        catalog: Arc<Catalog>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            state: SessionState::new(),
            catalog,
            ui: UiState::default(),
            should_quit: false,
            tick_count: 0,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            api,
            analysis_delay: config.analysis_delay,
            permission_delay: config.permission_delay,
        }
    }

    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Apply an action and start the work it asks for.
    pub fn dispatch(&mut self, action: Action) {
        let before = self.state.rendered_screen();
        debug!(screen = before.as_str(), ?action, "dispatch");

        let state = std::mem::take(&mut self.state);
        let ctx = TransitionContext::new(Utc::now(), &self.catalog);
        let Transition { state, effects } = transition(state, action, &ctx);
        self.state = state;

        let after = self.state.rendered_screen();
        if after != before {
            debug!(from = before.as_str(), to = after.as_str(), "screen changed");
            self.ui.reset_for_screen();
        }
        for effect in effects {
            self.run_effect(effect);
        }
        self.needs_redraw = true;
    }

    /// Handle a message from a spawned task.
    pub fn handle_message(&mut self, message: AppMessage) {
        self.dispatch(message.into());
    }

    /// Increment the tick counter for animations.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        let animating = match self.state.rendered_screen() {
            Screen::AiAnalysis => true,
            Screen::AiTrainer => !self.state.awaiting_replies.is_empty(),
            _ => false,
        };
        if animating {
            self.needs_redraw = true;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Entries of the current screen.
    pub fn menu(&self) -> Vec<MenuEntry> {
        menu_for(&self.state, &self.catalog)
    }

    pub fn move_up(&mut self) {
        let len = self.menu().len();
        self.ui.move_up(len);
        self.needs_redraw = true;
    }

    pub fn move_down(&mut self) {
        let len = self.menu().len();
        self.ui.move_down(len);
        self.needs_redraw = true;
    }

    /// Activate the highlighted entry.
    pub fn activate_selected(&mut self) {
        let Some(entry) = self.menu().into_iter().nth(self.ui.cursor) else {
            return;
        };
        if !entry.enabled {
            debug!(label = %entry.label, "entry disabled");
            return;
        }
        match entry.target {
            MenuTarget::Action(action) => self.dispatch(action),
            MenuTarget::EditText(purpose) => {
                self.ui.start_editing(purpose);
                self.needs_redraw = true;
            }
            MenuTarget::CapturePhoto => self.dispatch(Action::SaveProgressPhoto {
                image: ImageHandle::capture(),
            }),
        }
    }

    /// Jump to the `index`-th bottom nav destination.
    pub fn select_nav(&mut self, index: usize) {
        if !self.state.shows_bottom_nav() {
            return;
        }
        if let Some(screen) = NAV_BAR.get(index) {
            self.dispatch(Action::Navigate(*screen));
        }
    }

    /// Submit the focused text field.
    pub fn submit_text(&mut self) {
        let Some(purpose) = self.ui.editing else {
            return;
        };
        let text = self.ui.text.take();
        match purpose {
            TextPurpose::Chat => {
                // The field stays open for the next message.
                self.dispatch(Action::SendChat(text));
            }
            TextPurpose::Ingredients => {
                self.ui.stop_editing();
                let ingredients = text.split(',').map(str::to_string).collect();
                self.dispatch(Action::SubmitIngredients(ingredients));
            }
        }
    }

    pub fn submit_login(&mut self) {
        let email = self.ui.login.email.content().to_string();
        let password = self.ui.login.password.take();
        self.dispatch(Action::SubmitLogin { email, password });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use crate::generators::{
        generate_chat_reply, generate_recipe, generate_workout, ChatRequest, RecipeRequest,
        WorkoutRequest,
    };
    use crate::models::{ChatMessage, GeneratedWorkout, Recipe, Sender};
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Mutex;

    struct FakeApi {
        rng: Mutex<StdRng>,
        fail: bool,
    }

    impl FakeApi {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                rng: Mutex::new(StdRng::seed_from_u64(7)),
                fail,
            })
        }

        fn check(&self) -> Result<(), NetworkError> {
            if self.fail {
                Err(NetworkError::ConnectionFailed {
                    url: "http://127.0.0.1:9".to_string(),
                    message: "refused".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl GeneratorApi for FakeApi {
        async fn chat(&self, request: &ChatRequest) -> Result<ChatMessage, NetworkError> {
            self.check()?;
            let mut rng = self.rng.lock().unwrap();
            Ok(generate_chat_reply(&mut *rng, request, Utc::now()))
        }

        async fn recipe(&self, request: &RecipeRequest) -> Result<Recipe, NetworkError> {
            self.check()?;
            let mut rng = self.rng.lock().unwrap();
            Ok(generate_recipe(&mut *rng, request, Utc::now()))
        }

        async fn workout(
            &self,
            request: &WorkoutRequest,
        ) -> Result<GeneratedWorkout, NetworkError> {
            self.check()?;
            Ok(generate_workout(request, Utc::now()))
        }
    }

    fn app(fail: bool) -> (App, mpsc::UnboundedReceiver<AppMessage>) {
        let config = AppConfig::default()
            .with_analysis_delay(Duration::ZERO)
            .with_permission_delay(Duration::ZERO);
        let mut app = App::new(FakeApi::new(fail), &config);
        let rx = app.message_rx.take().unwrap();
        (app, rx)
    }

    async fn pump(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppMessage>) {
        let message = rx.recv().await.expect("message");
        app.handle_message(message);
    }

    async fn signed_in(fail: bool) -> (App, mpsc::UnboundedReceiver<AppMessage>) {
        let (mut app, mut rx) = app(fail);
        app.submit_login();
        for capability in Capability::ALL {
            app.dispatch(Action::RequestPermission(capability));
        }
        for _ in Capability::ALL {
            pump(&mut app, &mut rx).await;
        }
        app.dispatch(Action::ContinueFromPermissions);
        assert_eq!(app.state.screen, Screen::Dashboard);
        (app, rx)
    }

    #[tokio::test]
    async fn test_permission_flow_reaches_dashboard() {
        let (app, _rx) = signed_in(false).await;
        assert!(app.state.permissions.all_granted());
        assert!(app.state.shows_bottom_nav());
    }

    #[tokio::test]
    async fn test_photo_analysis_completes_after_delay() {
        let (mut app, mut rx) = signed_in(false).await;
        app.dispatch(Action::Navigate(Screen::PhotoNutrition));
        app.activate_selected();
        assert_eq!(app.state.screen, Screen::AiAnalysis);

        pump(&mut app, &mut rx).await;
        assert_eq!(app.state.screen, Screen::Nutrition);
        assert!(app.state.notice.is_some());
    }

    #[tokio::test]
    async fn test_recipe_from_ingredients() {
        let (mut app, mut rx) = signed_in(false).await;
        app.dispatch(Action::Navigate(Screen::Nutrition));
        app.activate_selected();
        assert_eq!(app.ui.editing, Some(TextPurpose::Ingredients));
        app.ui.text.insert_str("tomate, arroz");
        app.submit_text();
        assert_eq!(app.state.screen, Screen::AiAnalysis);

        pump(&mut app, &mut rx).await;
        assert_eq!(app.state.screen, Screen::NutritionDetail);
        let recipe = &app.state.ai_recipes[0];
        assert_eq!(recipe.item.ingredients, vec!["tomate", "arroz"]);
        assert_eq!(app.state.selected_nutrition, Some(recipe.item.id));
    }

    #[tokio::test]
    async fn test_chat_reply_is_appended() {
        let (mut app, mut rx) = signed_in(false).await;
        app.dispatch(Action::Navigate(Screen::AiTrainer));
        app.activate_selected();
        app.ui.text.insert_str("Como posso dormir melhor?");
        app.submit_text();
        assert_eq!(app.ui.editing, Some(TextPurpose::Chat));

        pump(&mut app, &mut rx).await;
        assert_eq!(app.state.chat.len(), 2);
        assert_eq!(app.state.chat[1].sender, Sender::Ai);
        assert!(app.state.awaiting_replies.is_empty());
    }

    #[tokio::test]
    async fn test_failed_call_returns_to_origin() {
        let (mut app, mut rx) = signed_in(true).await;
        app.dispatch(Action::Navigate(Screen::AiWorkoutGenerator));
        app.dispatch(Action::RequestAiWorkout);
        pump(&mut app, &mut rx).await;
        assert_eq!(app.state.screen, Screen::AiWorkoutGenerator);
        assert_eq!(
            app.state.notice.as_ref().map(|n| n.level),
            Some(NoticeLevel::Error)
        );
    }

    #[tokio::test]
    async fn test_completion_after_sign_out_is_dropped() {
        let (mut app, mut rx) = signed_in(false).await;
        app.dispatch(Action::StartAnalysis(AnalysisKind::Workout));
        app.dispatch(Action::SignOut);
        pump(&mut app, &mut rx).await;
        assert_eq!(app.state.rendered_screen(), Screen::Login);
        assert!(app.state.ai_workouts.is_empty());
    }

    #[tokio::test]
    async fn test_capture_saves_photo() {
        let (mut app, _rx) = signed_in(false).await;
        app.dispatch(Action::Navigate(Screen::ProgressPhotos));
        let before = app.state.progress_photos.len();
        app.activate_selected();
        assert_eq!(app.state.screen, Screen::PhotoTimeline);
        assert_eq!(app.state.progress_photos.len(), before + 1);
        assert!(app.state.progress_photos[0]
            .image
            .as_str()
            .starts_with("capture://"));
    }

    #[tokio::test]
    async fn test_nav_bar_hidden_on_detail_screens() {
        let (mut app, _rx) = signed_in(false).await;
        app.dispatch(Action::SelectWorkout(1));
        app.select_nav(1);
        assert_eq!(app.state.screen, Screen::WorkoutDetail);
        app.dispatch(Action::Back);
        app.select_nav(4);
        assert_eq!(app.state.screen, Screen::Profile);
    }

    #[tokio::test]
    async fn test_screen_change_resets_cursor() {
        let (mut app, _rx) = signed_in(false).await;
        app.move_down();
        app.move_down();
        assert_eq!(app.ui.cursor, 2);
        app.activate_selected();
        assert_eq!(app.state.screen, DASHBOARD_MENU[2]);
        assert_eq!(app.ui.cursor, 0);
    }
}
