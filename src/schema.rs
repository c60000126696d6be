//! Persisted-state rows for server-side storage.
//!
//! These are declarative only: column names and enumerations match the
//! storage tables, but nothing in the state machine reads or writes them.
//! A storage collaborator is expected to provide the CRUD side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{AgendaEventKind, Budget, ChatKind, Difficulty, FitnessLevel, Sender, WorkoutType};

/// A storage table and its row type.
pub trait Table {
    /// Table name in storage.
    const NAME: &'static str;
}

/// Where the user is in the pregnancy journey.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PregnancyStage {
    TentandoEngravidar,
    PrimeiroTrimestre,
    SegundoTrimestre,
    TerceiroTrimestre,
    PosParto,
}

impl PregnancyStage {
    /// Stage for a week of an ongoing pregnancy.
    pub fn for_week(week: u8) -> Self {
        match week {
            0..=12 => PregnancyStage::PrimeiroTrimestre,
            13..=28 => PregnancyStage::SegundoTrimestre,
            _ => PregnancyStage::TerceiroTrimestre,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub age: u8,
    pub height: u16,
    pub pre_pregnancy_weight: f32,
    pub current_weight: f32,
    pub due_date: String,
    pub fitness_level: FitnessLevel,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    pub pregnancy_stage: PregnancyStage,
    pub pregnancy_week: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Table for ProfileRow {
    const NAME: &'static str = "profiles";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub trimester: String,
    /// Free-form exercise documents
    pub exercises: Vec<serde_json::Value>,
    #[serde(default)]
    pub ai_generated: bool,
    pub personalized_for: Option<String>,
    #[serde(default)]
    pub target_muscles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Table for WorkoutRow {
    const NAME: &'static str = "workouts";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub meal: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub calories: u32,
    pub macros: serde_json::Value,
    #[serde(default)]
    pub budget: Budget,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub ai_generated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Table for NutritionRow {
    const NAME: &'static str = "nutrition";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgendaEventRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: AgendaEventKind,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub reminder: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Table for AgendaEventRow {
    const NAME: &'static str = "agenda_events";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessageRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub sender: Sender,
    #[serde(rename = "type")]
    pub kind: ChatKind,
    pub timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Table for ChatMessageRow {
    const NAME: &'static str = "chat_messages";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSessionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub workout_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Seconds
    pub duration: Option<u32>,
    #[serde(default)]
    pub exercises_completed: u32,
    pub total_exercises: u32,
    pub created_at: DateTime<Utc>,
}

impl Table for WorkoutSessionRow {
    const NAME: &'static str = "workout_sessions";
}

impl WorkoutSessionRow {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Every table name, in declaration order.
pub const TABLES: [&str; 6] = [
    ProfileRow::NAME,
    WorkoutRow::NAME,
    NutritionRow::NAME,
    AgendaEventRow::NAME,
    ChatMessageRow::NAME,
    WorkoutSessionRow::NAME,
];
