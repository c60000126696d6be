//! The generator endpoints over real HTTP.

use std::net::SocketAddr;
use std::time::Duration;

use serde_json::{json, Value};

use mamae_fit::error::INTERNAL_ERROR_MESSAGE;
use mamae_fit::generators::chat::{MEDICAL_REPLY, SAD_REPLIES};
use mamae_fit::server::{shutdown_on, start_server_on};

async fn spawn_server() -> String {
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let (_handle, actual) = start_server_on(addr, Some(42)).await.unwrap();
    format!("http://{}", actual)
}

async fn post(base: &str, path: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}{}", base, path))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_health() {
    let base = spawn_server().await;
    let body: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_recipe_uses_first_two_ingredients() {
    let base = spawn_server().await;
    let (status, body) = post(
        &base,
        "/api/ai-recipe",
        json!({ "ingredients": ["tomate", "arroz", "cebola"] }),
    )
    .await;

    assert_eq!(status, 200);
    let recipe = &body["recipe"];
    assert!(recipe["title"]
        .as_str()
        .unwrap()
        .ends_with("com tomate e arroz"));
    assert_eq!(recipe["ingredients"], json!(["tomate", "arroz", "cebola"]));
    assert_eq!(recipe["budget"], "baixo");
    assert_eq!(recipe["aiGenerated"], true);
    assert!(recipe["prepTime"].is_string());
}

#[tokio::test]
async fn test_sad_psychologist_chat() {
    let base = spawn_server().await;
    let (status, body) = post(
        &base,
        "/api/ai-chat",
        json!({ "message": "estou triste", "type": "psychologist", "mood": "sad" }),
    )
    .await;

    assert_eq!(status, 200);
    let message = &body["message"];
    assert_eq!(message["sender"], "ai");
    assert_eq!(message["type"], "psychologist");
    assert!(SAD_REPLIES.contains(&message["text"].as_str().unwrap()));
}

#[tokio::test]
async fn test_medical_chat_is_fixed() {
    let base = spawn_server().await;
    let (_, body) = post(
        &base,
        "/api/ai-chat",
        json!({ "message": "dor nas costas", "type": "medical" }),
    )
    .await;
    assert_eq!(body["message"]["text"], MEDICAL_REPLY);
}

#[tokio::test]
async fn test_workout_follows_fitness_level() {
    let base = spawn_server().await;

    let (_, beginner) = post(
        &base,
        "/api/ai-workout",
        json!({ "pregnancyWeek": 10, "fitnessLevel": "iniciante" }),
    )
    .await;
    assert_eq!(beginner["workout"]["personalizedType"], "gestante-iniciante");
    assert_eq!(beginner["workout"]["trimester"], "1º Trimestre");

    let (_, other) = post(
        &base,
        "/api/ai-workout",
        json!({ "pregnancyWeek": 30, "fitnessLevel": "avançado" }),
    )
    .await;
    assert_eq!(other["workout"]["personalizedType"], "gestante-intermediaria");
    assert_eq!(other["workout"]["personalizedFor"], "avançado - Semana 30");
}

#[tokio::test]
async fn test_malformed_body_is_internal_error() {
    let base = spawn_server().await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/ai-recipe", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": INTERNAL_ERROR_MESSAGE }));
}

#[tokio::test]
async fn test_shutdown_on_resolves_when_signal_fires() {
    let done = tokio::time::timeout(Duration::from_secs(1), shutdown_on(async { Ok(()) })).await;
    assert!(done.is_ok());
}

#[tokio::test]
async fn test_shutdown_on_keeps_serving_when_signal_cannot_be_installed() {
    let failed = async { Err(std::io::Error::new(std::io::ErrorKind::Other, "no signal handler")) };
    let done = tokio::time::timeout(Duration::from_millis(100), shutdown_on(failed)).await;
    assert!(done.is_err());
}
