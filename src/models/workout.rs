use serde::{Deserialize, Serialize};

use super::RecordId;

/// Perceived effort of a workout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    #[serde(rename = "fácil")]
    Easy,
    #[serde(rename = "moderado")]
    Moderate,
    #[serde(rename = "avançado")]
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "fácil",
            Difficulty::Moderate => "moderado",
            Difficulty::Advanced => "avançado",
        }
    }
}

/// Where a workout is meant to happen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WorkoutType {
    #[default]
    #[serde(rename = "casa")]
    Home,
    #[serde(rename = "ar-livre")]
    Outdoor,
    #[serde(rename = "academia")]
    Gym,
}

impl WorkoutType {
    pub fn label(self) -> &'static str {
        match self {
            WorkoutType::Home => "casa",
            WorkoutType::Outdoor => "ar-livre",
            WorkoutType::Gym => "academia",
        }
    }
}

/// Intensity tag attached to generated exercises.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Intensity {
    #[serde(rename = "baixa")]
    Low,
    #[serde(rename = "moderada")]
    Moderate,
}

/// A single exercise inside a workout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: RecordId,
    pub name: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    pub description: String,
    pub muscle_groups: Vec<String>,
    pub safety_tips: Vec<String>,
    pub modifications: Vec<String>,
    #[serde(
        default,
        rename = "animation3D",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_3d: Option<String>,
    /// Total time in seconds (generated exercises only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_muscles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
}

/// A workout as listed in the catalog or produced by a generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: RecordId,
    pub title: String,
    pub trimester: String,
    pub duration: String,
    pub description: String,
    pub video_url: String,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub difficulty: Difficulty,
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub ai_generated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalized_for: Option<String>,
}

impl Workout {
    /// Look up an exercise of this workout by id.
    pub fn exercise(&self, id: RecordId) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }
}

/// Workout returned by the workout generator endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedWorkout {
    #[serde(flatten)]
    pub workout: Workout,
    pub mode: String,
    pub personalized_type: String,
}

impl From<GeneratedWorkout> for Workout {
    fn from(generated: GeneratedWorkout) -> Self {
        generated.workout
    }
}
