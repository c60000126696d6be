//! Shared fixtures for the integration tests.
//!
//! [`Harness`] wraps an [`App`] wired to a seeded in-process generator, with
//! zero simulated delays, and feeds it key events through the same
//! registry the binary uses.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;

use mamae_fit::app::{App, AppMessage, Screen};
use mamae_fit::error::NetworkError;
use mamae_fit::generators::{
    generate_chat_reply, generate_recipe, generate_workout, ChatRequest, RecipeRequest,
    WorkoutRequest,
};
use mamae_fit::input::{handle_event, CommandRegistry};
use mamae_fit::models::{ChatMessage, GeneratedWorkout, Recipe};
use mamae_fit::startup::AppConfig;
use mamae_fit::traits::GeneratorApi;

/// Generator that answers in-process from a fixed seed.
pub struct SeededApi {
    rng: Mutex<StdRng>,
    fail: bool,
}

impl SeededApi {
    pub fn new(seed: u64) -> Arc<Self> {
        Arc::new(Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            fail: false,
        })
    }

    /// Every call fails as if the server were down.
    pub fn offline() -> Arc<Self> {
        Arc::new(Self {
            rng: Mutex::new(StdRng::seed_from_u64(0)),
            fail: true,
        })
    }

    fn check(&self) -> Result<(), NetworkError> {
        if self.fail {
            return Err(NetworkError::ConnectionFailed {
                url: "http://127.0.0.1:9".to_string(),
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl GeneratorApi for SeededApi {
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

    async fn workout(&self, request: &WorkoutRequest) -> Result<GeneratedWorkout, NetworkError> {
        self.check()?;
        Ok(generate_workout(request, Utc::now()))
    }
}

/// Configuration with every simulated delay set to zero.
pub fn instant_config() -> AppConfig {
    AppConfig::default()
        .with_analysis_delay(Duration::ZERO)
        .with_permission_delay(Duration::ZERO)
}

pub struct Harness {
    pub app: App,
    pub rx: mpsc::UnboundedReceiver<AppMessage>,
    registry: CommandRegistry,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_api(SeededApi::new(7))
    }

    pub fn with_api(api: Arc<dyn GeneratorApi>) -> Self {
        let mut app = App::new(api, &instant_config());
        let rx = app.message_rx.take().unwrap();
        Self {
            app,
            rx,
            registry: CommandRegistry::new(),
        }
    }

    /// Harness already past login and permissions, on the dashboard.
    pub fn signed_in() -> Self {
        let mut harness = Self::new();
        harness.app.state.logged_in = true;
        harness.app.state.screen = Screen::Dashboard;
        harness
    }

    pub fn screen(&self) -> Screen {
        self.app.state.rendered_screen()
    }

    pub fn key(&mut self, code: KeyCode) {
        self.key_with(code, KeyModifiers::NONE);
    }

    pub fn key_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let event = Event::Key(KeyEvent::new(code, modifiers));
        handle_event(&mut self.app, &self.registry, event);
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key(KeyCode::Char(c));
        }
    }

    pub fn paste(&mut self, text: &str) {
        handle_event(&mut self.app, &self.registry, Event::Paste(text.to_string()));
    }

    /// Move the cursor to the entry whose label contains `needle` and
    /// activate it.
    pub fn activate(&mut self, needle: &str) {
        let index = self
            .app
            .menu()
            .iter()
            .position(|e| e.label.contains(needle))
            .unwrap_or_else(|| panic!("no menu entry containing {:?}", needle));
        while self.app.ui.cursor != index {
            self.key(KeyCode::Down);
        }
        self.key(KeyCode::Enter);
    }

    /// Wait for the next message from a spawned task and apply it.
    pub async fn pump(&mut self) {
        let message = tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
            .await
            .expect("timed out waiting for a background message")
            .expect("message channel closed");
        self.app.handle_message(message);
    }
}
