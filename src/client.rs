//! HTTP client for the generator server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{classify_reqwest_error, NetworkError};
use crate::generators::{
    ChatRequest, ChatResponse, RecipeRequest, RecipeResponse, WorkoutRequest, WorkoutResponse,
};
use crate::models::{ChatMessage, GeneratedWorkout, Recipe};
use crate::server::{CHAT_PATH, RECIPE_PATH, WORKOUT_PATH};
use crate::traits::GeneratorApi;

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the generator endpoints.
#[derive(Debug, Clone)]
pub struct GeneratorClient {
    /// Base URL, without a trailing slash
    pub base_url: String,
    client: Client,
}

impl GeneratorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self::with_client(base_url, client)
    }

    /// Use a preconfigured reqwest client.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, NetworkError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e, &url))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NetworkError::HttpStatus { status, message });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| classify_reqwest_error(&e, &url))
    }
}

#[async_trait]
impl GeneratorApi for GeneratorClient {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatMessage, NetworkError> {
        let response: ChatResponse = self.post(CHAT_PATH, request).await?;
        Ok(response.message)
    }

    async fn recipe(&self, request: &RecipeRequest) -> Result<Recipe, NetworkError> {
        let response: RecipeResponse = self.post(RECIPE_PATH, request).await?;
        Ok(response.recipe)
    }

    async fn workout(&self, request: &WorkoutRequest) -> Result<GeneratedWorkout, NetworkError> {
        let response: WorkoutResponse = self.post(WORKOUT_PATH, request).await?;
        Ok(response.workout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = GeneratorClient::new("http://127.0.0.1:3040/");
        assert_eq!(client.base_url, "http://127.0.0.1:3040");
    }
}
