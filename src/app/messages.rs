//! AppMessage enum for async communication within the application.

use crate::models::{ChatMessage, Recipe, Workout};

use super::action::Action;
use super::state::Ticket;
use super::types::Capability;

/// Messages sent back by spawned tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// Permission prompt delay elapsed
    PermissionGranted(Capability),
    /// Analysis delay elapsed
    AnalysisElapsed { ticket: Ticket },
    WorkoutGenerated { ticket: Ticket, workout: Workout },
    RecipeGenerated { ticket: Ticket, recipe: Recipe },
    ChatReplied { ticket: Ticket, message: ChatMessage },
    /// A generator call failed; `error` is user-facing
    GeneratorFailed { ticket: Ticket, error: String },
}

impl From<AppMessage> for Action {
    fn from(message: AppMessage) -> Self {
        match message {
            AppMessage::PermissionGranted(capability) => Action::PermissionGranted(capability),
            AppMessage::AnalysisElapsed { ticket } => Action::AnalysisFinished { ticket },
            AppMessage::WorkoutGenerated { ticket, workout } => {
                Action::AiWorkoutReady { ticket, workout }
            }
            AppMessage::RecipeGenerated { ticket, recipe } => Action::RecipeReady { ticket, recipe },
            AppMessage::ChatReplied { ticket, message } => {
                Action::ChatReplyReceived { ticket, message }
            }
            AppMessage::GeneratorFailed { ticket, error } => {
                Action::GeneratorFailed { ticket, error }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_become_completions() {
        let messages = vec![
            AppMessage::PermissionGranted(Capability::Camera),
            AppMessage::AnalysisElapsed { ticket: 1 },
            AppMessage::GeneratorFailed {
                ticket: 2,
                error: "x".to_string(),
            },
        ];
        for message in messages {
            assert!(Action::from(message).is_completion());
        }
    }
}
