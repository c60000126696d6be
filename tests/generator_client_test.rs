//! `GeneratorClient` against a mock server.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mamae_fit::client::GeneratorClient;
use mamae_fit::error::NetworkError;
use mamae_fit::generators::{ChatRequest, RecipeRequest, WorkoutRequest};
use mamae_fit::models::{ChatKind, Mood, Sender};
use mamae_fit::traits::GeneratorApi;

#[tokio::test]
async fn test_chat_sends_type_and_mood() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai-chat"))
        .and(body_partial_json(json!({ "type": "psychologist", "mood": "happy" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": {
                "id": 1714564800000i64,
                "text": "Que bom!",
                "sender": "ai",
                "timestamp": "2024-05-01T12:00:00Z",
                "type": "psychologist"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeneratorClient::new(server.uri());
    let reply = client
        .chat(&ChatRequest::new("oi", ChatKind::Psychologist, Mood::Happy))
        .await
        .unwrap();
    assert_eq!(reply.sender, Sender::Ai);
    assert_eq!(reply.text, "Que bom!");
}

#[tokio::test]
async fn test_recipe_decodes_flattened_item() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai-recipe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recipe": {
                "id": 1714564800000i64,
                "meal": "Refeição IA",
                "title": "Salada Completa com tomate e arroz",
                "ingredients": ["tomate", "arroz"],
                "instructions": "Misture tudo.",
                "calories": 220,
                "macros": { "protein": 12, "carbs": 25, "fat": 10 },
                "budget": "baixo",
                "prepTime": "10 min",
                "aiGenerated": true
            }
        })))
        .mount(&server)
        .await;

    let client = GeneratorClient::new(server.uri());
    let recipe = client
        .recipe(&RecipeRequest {
            ingredients: vec!["tomate".into(), "arroz".into()],
            user_profile: None,
        })
        .await
        .unwrap();
    assert_eq!(recipe.item.calories, 220);
    assert_eq!(recipe.prep_time, "10 min");
}

#[tokio::test]
async fn test_server_error_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai-workout"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "Erro interno do servidor" })),
        )
        .mount(&server)
        .await;

    let client = GeneratorClient::new(server.uri());
    let err = client
        .workout(&WorkoutRequest {
            user_profile: None,
            pregnancy_week: 20,
            fitness_level: "iniciante".into(),
        })
        .await
        .unwrap_err();
    match err {
        NetworkError::HttpStatus { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("Erro interno do servidor"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_unexpected_shape_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai-chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "oi" })))
        .mount(&server)
        .await;

    let client = GeneratorClient::new(server.uri());
    let err = client
        .chat(&ChatRequest::new("oi", ChatKind::Medical, Mood::Neutral))
        .await
        .unwrap_err();
    assert!(matches!(err, NetworkError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_connection_failure() {
    let client = GeneratorClient::new("http://127.0.0.1:9");
    let err = client
        .chat(&ChatRequest::new("oi", ChatKind::Recipe, Mood::Neutral))
        .await
        .unwrap_err();
    assert!(matches!(err, NetworkError::ConnectionFailed { .. }));
}
