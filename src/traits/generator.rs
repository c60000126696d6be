//! Generator endpoint abstraction.
//!
//! The controller only talks to the generators through this trait, so tests
//! can swap the HTTP client for an in-process fake.

use async_trait::async_trait;

use crate::error::NetworkError;
use crate::generators::{ChatRequest, RecipeRequest, WorkoutRequest};
use crate::models::{ChatMessage, GeneratedWorkout, Recipe};

/// Operations offered by the AI generator server.
///
/// # Example
///
/// ```ignore
/// use mamae_fit::traits::GeneratorApi;
///
/// async fn ask<G: GeneratorApi>(api: &G) -> Result<String, NetworkError> {
///     let reply = api.chat(&ChatRequest::new("Oi", ChatKind::Medical, Mood::Neutral)).await?;
///     Ok(reply.text)
/// }
/// ```
#[async_trait]
pub trait GeneratorApi: Send + Sync {
    /// `POST /api/ai-chat`
    async fn chat(&self, request: &ChatRequest) -> Result<ChatMessage, NetworkError>;

    /// `POST /api/ai-recipe`
    async fn recipe(&self, request: &RecipeRequest) -> Result<Recipe, NetworkError>;

    /// `POST /api/ai-workout`
    async fn workout(&self, request: &WorkoutRequest) -> Result<GeneratedWorkout, NetworkError>;
}
