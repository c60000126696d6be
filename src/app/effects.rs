//! Execution of the effects a transition asks for.
//!
//! Every effect runs on a spawned task and reports back only through the
//! message channel, so the state is never touched off the UI task.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::NetworkError;

use super::action::Effect;
use super::state::Ticket;
use super::{App, AppMessage};

fn failed(endpoint: &str, ticket: Ticket, error: &NetworkError) -> AppMessage {
    warn!(
        endpoint,
        ticket,
        code = error.error_code(),
        error = %error,
        "generator call failed"
    );
    AppMessage::GeneratorFailed {
        ticket,
        error: error.user_message(),
    }
}

fn send(tx: &mpsc::UnboundedSender<AppMessage>, message: AppMessage) {
    if tx.send(message).is_err() {
        debug!("message channel closed; dropping result");
    }
}

impl App {
    pub(super) fn run_effect(&self, effect: Effect) {
        let tx = self.message_tx.clone();
        match effect {
            Effect::GrantPermission(capability) => {
                let delay = self.permission_delay;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    send(&tx, AppMessage::PermissionGranted(capability));
                });
            }
            Effect::FinishAnalysis { ticket } => {
                let delay = self.analysis_delay;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    send(&tx, AppMessage::AnalysisElapsed { ticket });
                });
            }
            Effect::FetchWorkout { ticket, request } => {
                let api = Arc::clone(&self.api);
                tokio::spawn(async move {
                    let message = match api.workout(&request).await {
                        Ok(generated) => AppMessage::WorkoutGenerated {
                            ticket,
                            workout: generated.into(),
                        },
                        Err(e) => failed("ai-workout", ticket, &e),
                    };
                    send(&tx, message);
                });
            }
            Effect::FetchRecipe { ticket, request } => {
                let api = Arc::clone(&self.api);
                tokio::spawn(async move {
                    let message = match api.recipe(&request).await {
                        Ok(recipe) => AppMessage::RecipeGenerated { ticket, recipe },
                        Err(e) => failed("ai-recipe", ticket, &e),
                    };
                    send(&tx, message);
                });
            }
            Effect::FetchChatReply { ticket, request } => {
                let api = Arc::clone(&self.api);
                tokio::spawn(async move {
                    let message = match api.chat(&request).await {
                        Ok(message) => AppMessage::ChatReplied { ticket, message },
                        Err(e) => failed("ai-chat", ticket, &e),
                    };
                    send(&tx, message);
                });
            }
        }
    }
}
