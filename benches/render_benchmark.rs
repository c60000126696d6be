//! Frame rendering benchmarks.
//!
//! Run with: cargo bench

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::{backend::TestBackend, Terminal};

use mamae_fit::app::{App, Screen};
use mamae_fit::error::NetworkError;
use mamae_fit::generators::{ChatRequest, RecipeRequest, WorkoutRequest};
use mamae_fit::models::{ChatKind, ChatMessage, GeneratedWorkout, Recipe};
use mamae_fit::startup::AppConfig;
use mamae_fit::traits::GeneratorApi;
use mamae_fit::ui;

struct Offline;

fn offline() -> NetworkError {
    NetworkError::Other {
        message: "offline".to_string(),
    }
}

#[async_trait]
impl GeneratorApi for Offline {
    async fn chat(&self, _request: &ChatRequest) -> Result<ChatMessage, NetworkError> {
        Err(offline())
    }

    async fn recipe(&self, _request: &RecipeRequest) -> Result<Recipe, NetworkError> {
        Err(offline())
    }

    async fn workout(&self, _request: &WorkoutRequest) -> Result<GeneratedWorkout, NetworkError> {
        Err(offline())
    }
}

fn app_on(screen: Screen) -> App {
    let mut app = App::new(Arc::new(Offline), &AppConfig::default());
    app.state.logged_in = true;
    app.state.screen = screen;
    app
}

/// One frame of each main screen at a typical terminal size.
fn bench_screens(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_screen");
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

    for screen in [
        Screen::Login,
        Screen::Dashboard,
        Screen::Workout,
        Screen::Nutrition,
        Screen::PregnancyTracker,
        Screen::MuscleGuide,
    ] {
        let app = app_on(screen);
        group.bench_with_input(
            BenchmarkId::from_parameter(screen.as_str()),
            &app,
            |b, app| {
                b.iter(|| {
                    terminal.draw(|f| ui::render(f, black_box(app))).unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Chat transcript rendering as the history grows.
fn bench_chat_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_chat");
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

    for count in [10, 100, 500] {
        let mut app = app_on(Screen::AiTrainer);
        for i in 0..count {
            app.state.chat.push(ChatMessage::from_user(
                format!("Mensagem número {} sobre alimentação na gestação", i),
                ChatKind::Recipe,
                Utc::now(),
            ));
        }
        group.bench_with_input(BenchmarkId::from_parameter(count), &app, |b, app| {
            b.iter(|| {
                terminal.draw(|f| ui::render(f, black_box(app))).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_screens, bench_chat_history);
criterion_main!(benches);
