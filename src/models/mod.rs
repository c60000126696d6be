//! Domain records shared by the state machine, the renderers and the
//! generator endpoints.
//!
//! Wire names follow the JSON the generator endpoints speak (camelCase),
//! while Rust field names stay snake_case.

mod agenda;
mod chat;
mod content;
mod music;
mod nutrition;
mod photo;
mod pregnancy;
mod profile;
mod reminder;
mod workout;

pub use agenda::{AgendaEvent, AgendaEventKind};
pub use chat::{ChatKind, ChatMessage, Mood, Sender};
pub use content::Article;
pub use music::Playlist;
pub use nutrition::{Budget, Macros, NutritionItem, Recipe, ScannedProduct};
pub use photo::{ImageHandle, ProgressPhoto};
pub use pregnancy::{trimester_for_week, PregnancyInfo, MAX_PREGNANCY_WEEK, MIN_PREGNANCY_WEEK};
pub use profile::{FitnessLevel, UserProfile};
pub use reminder::{Reminder, ReminderKind};
pub use workout::{Difficulty, Exercise, GeneratedWorkout, Intensity, Workout, WorkoutType};

/// Identifier used by every in-memory record.
///
/// Generated records use the millisecond timestamp of their creation, seed
/// records use small integers, so the two ranges never collide.
pub type RecordId = i64;
