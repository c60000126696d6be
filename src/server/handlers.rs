use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use super::GeneratorState;
use crate::error::GeneratorError;
use crate::generators::{
    generate_chat_reply, generate_recipe, generate_workout, ChatRequest, ChatResponse,
    RecipeRequest, RecipeResponse, WorkoutRequest, WorkoutResponse,
};

fn decode<T: DeserializeOwned>(endpoint: &'static str, body: &[u8]) -> Result<T, GeneratorError> {
    serde_json::from_slice(body).map_err(|source| GeneratorError::MalformedPayload { endpoint, source })
}

fn encode<T: Serialize>(endpoint: &'static str, value: &T) -> Result<Json<Value>, GeneratorError> {
    serde_json::to_value(value)
        .map(Json)
        .map_err(|source| GeneratorError::Serialization { endpoint, source })
}

pub(super) async fn chat_handler(
    State(state): State<GeneratorState>,
    body: Bytes,
) -> Result<Json<Value>, GeneratorError> {
    let request: ChatRequest = decode("ai-chat", &body)?;
    let message = state.with_rng(|rng| generate_chat_reply(rng, &request, Utc::now()));
    tracing::debug!(kind = %request.kind, "chat reply generated");
    encode("ai-chat", &ChatResponse { message })
}

pub(super) async fn recipe_handler(
    State(state): State<GeneratorState>,
    body: Bytes,
) -> Result<Json<Value>, GeneratorError> {
    let request: RecipeRequest = decode("ai-recipe", &body)?;
    let recipe = state.with_rng(|rng| generate_recipe(rng, &request, Utc::now()));
    tracing::debug!(title = %recipe.item.title, "recipe generated");
    encode("ai-recipe", &RecipeResponse { recipe })
}

pub(super) async fn workout_handler(body: Bytes) -> Result<Json<Value>, GeneratorError> {
    let request: WorkoutRequest = decode("ai-workout", &body)?;
    let workout = generate_workout(&request, Utc::now());
    tracing::debug!(
        level = %request.fitness_level,
        week = request.pregnancy_week,
        template = %workout.personalized_type,
        "workout generated"
    );
    encode("ai-workout", &WorkoutResponse { workout })
}

pub(super) async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
