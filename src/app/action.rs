//! Actions fed into the state machine and the effects it asks for.

use crate::generators::{ChatRequest, RecipeRequest, WorkoutRequest};
use crate::models::{ChatKind, ChatMessage, ImageHandle, Mood, Recipe, RecordId, Workout};

use super::state::Ticket;
use super::types::{AnalysisKind, Capability, Screen};

/// User intents plus the completions of deferred work.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Credentials are accepted as typed
    SubmitLogin { email: String, password: String },
    RequestPermission(Capability),
    ContinueFromPermissions,
    Navigate(Screen),
    Back,
    SelectWorkout(RecordId),
    SelectExercise(RecordId),
    SelectNutrition(RecordId),
    SelectArticle(usize),
    CompleteWorkout(RecordId),
    StartAnalysis(AnalysisKind),
    /// Ask the workout endpoint for a personalised plan
    RequestAiWorkout,
    /// Ask the recipe endpoint for a recipe using these ingredients
    SubmitIngredients(Vec<String>),
    SendChat(String),
    SetChatKind(ChatKind),
    SetMood(Mood),
    ScanBarcode,
    SaveProgressPhoto { image: ImageHandle },
    ChangeWeek(i8),
    ToggleReminder(RecordId),
    TogglePlayback,
    NextTrack,
    PreviousTrack,
    LogMeal(RecordId),
    AddWater,
    DismissNotice,
    SignOut,

    // Deferred completions
    PermissionGranted(Capability),
    AnalysisFinished { ticket: Ticket },
    AiWorkoutReady { ticket: Ticket, workout: Workout },
    RecipeReady { ticket: Ticket, recipe: Recipe },
    ChatReplyReceived { ticket: Ticket, message: ChatMessage },
    GeneratorFailed { ticket: Ticket, error: String },
}

impl Action {
    /// Completions arrive from spawned tasks rather than from the user.
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            Action::PermissionGranted(_)
                | Action::AnalysisFinished { .. }
                | Action::AiWorkoutReady { .. }
                | Action::RecipeReady { .. }
                | Action::ChatReplyReceived { .. }
                | Action::GeneratorFailed { .. }
        )
    }
}

/// Deferred work requested by a transition; executed by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Grant after the permission prompt delay
    GrantPermission(Capability),
    /// Finish the analysis after the analysis delay
    FinishAnalysis { ticket: Ticket },
    FetchWorkout { ticket: Ticket, request: WorkoutRequest },
    FetchRecipe { ticket: Ticket, request: RecipeRequest },
    FetchChatReply { ticket: Ticket, request: ChatRequest },
}
