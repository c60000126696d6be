//! Workouts tailored to the fitness level and pregnancy week.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    trimester_for_week, Difficulty, Exercise, FitnessLevel, GeneratedWorkout, Intensity,
    UserProfile, Workout, WorkoutType,
};

/// Cover image shared by generated workouts.
pub const GENERATED_VIDEO_URL: &str =
    "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=300&fit=crop";

pub const BEGINNER_TYPE: &str = "gestante-iniciante";
pub const INTERMEDIATE_TYPE: &str = "gestante-intermediaria";

/// Body of `POST /api/ai-workout`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<serde_json::Value>,
    pub pregnancy_week: u8,
    #[serde(default)]
    pub fitness_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutResponse {
    pub workout: GeneratedWorkout,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn generated_exercise(
    id: i64,
    name: &str,
    duration: &str,
    reps: &str,
    description: &str,
    muscle_groups: &[&str],
    safety_tips: &[&str],
    modifications: &[&str],
    total_time: u32,
    target_muscles: &[&str],
    intensity: Intensity,
) -> Exercise {
    Exercise {
        id,
        name: name.to_string(),
        duration: duration.to_string(),
        reps: Some(reps.to_string()),
        description: description.to_string(),
        muscle_groups: strings(muscle_groups),
        safety_tips: strings(safety_tips),
        modifications: strings(modifications),
        animation_3d: None,
        total_time: Some(total_time),
        is_active: Some(false),
        target_muscles: Some(strings(target_muscles)),
        intensity: Some(intensity),
    }
}

fn beginner_exercises(base: i64) -> Vec<Exercise> {
    vec![
        generated_exercise(
            base + 1,
            "Caminhada no Local",
            "5 minutos",
            "Ritmo leve",
            "Aquecimento cardiovascular suave",
            &["Cardiovascular", "Pernas"],
            &["Mantenha ritmo confortável", "Pare se sentir cansaço"],
            &["Reduza o tempo se necessário"],
            300,
            &["cardiovascular"],
            Intensity::Low,
        ),
        generated_exercise(
            base + 2,
            "Alongamento de Braços",
            "3 séries",
            "10 repetições",
            "Alongamento suave para ombros e braços",
            &["Ombros", "Braços"],
            &["Movimento lento e controlado", "Não force"],
            &["Faça sentada se preferir"],
            180,
            &["ombros"],
            Intensity::Low,
        ),
    ]
}

fn intermediate_exercises(base: i64) -> Vec<Exercise> {
    vec![
        generated_exercise(
            base + 3,
            "Agachamento com Apoio",
            "3 séries",
            "12 repetições",
            "Fortalecimento de glúteos e pernas com segurança",
            &["Glúteos", "Quadríceps"],
            &["Use cadeira para apoio", "Não desça muito"],
            &["Reduza amplitude se necessário"],
            240,
            &["glúteos", "quadríceps"],
            Intensity::Moderate,
        ),
        generated_exercise(
            base + 4,
            "Prancha Modificada",
            "3 séries",
            "20 segundos",
            "Fortalecimento do core adaptado para gestantes",
            &["Core", "Ombros"],
            &["Apoie joelhos se necessário", "Respire normalmente"],
            &["Faça contra parede se preferir"],
            180,
            &["core"],
            Intensity::Moderate,
        ),
    ]
}

/// Build the workout answered by the workout endpoint.
///
/// Template choice is a plain conditional: `iniciante` gets the gentle plan,
/// every other level (including missing ones) the balanced one.
pub fn generate_workout(request: &WorkoutRequest, now: DateTime<Utc>) -> GeneratedWorkout {
    let id = now.timestamp_millis();
    let level = request.fitness_level.as_str();
    let week = request.pregnancy_week;

    let (personalized_type, title, description, difficulty, duration, exercises) =
        if level == FitnessLevel::Beginner.as_str() {
            (
                BEGINNER_TYPE,
                "Treino Suave para Iniciantes",
                "Exercícios básicos e seguros para gestantes que estão começando",
                Difficulty::Easy,
                "15 min",
                beginner_exercises(id),
            )
        } else {
            (
                INTERMEDIATE_TYPE,
                "Treino Equilibrado para Gestantes",
                "Combinação de fortalecimento e flexibilidade para gestantes ativas",
                Difficulty::Moderate,
                "25 min",
                intermediate_exercises(id),
            )
        };

    GeneratedWorkout {
        workout: Workout {
            id,
            title: title.to_string(),
            trimester: trimester_for_week(week).to_string(),
            duration: duration.to_string(),
            description: format!(
                "{} Gerado especificamente para seu perfil: {}, semana {}.",
                description, level, week
            ),
            video_url: GENERATED_VIDEO_URL.to_string(),
            workout_type: WorkoutType::Home,
            difficulty,
            exercises,
            ai_generated: true,
            personalized_for: Some(format!("{} - Semana {}", level, week)),
        },
        mode: "normal".to_string(),
        personalized_type: personalized_type.to_string(),
    }
}

/// Workout produced on-device when the analysis screen finishes a
/// workout analysis. Uses the first two exercises of the library.
pub fn local_personalized_workout(
    library: &[Exercise],
    week: u8,
    profile: &UserProfile,
    now: DateTime<Utc>,
) -> Workout {
    let level = profile.fitness_level;
    Workout {
        id: now.timestamp_millis(),
        title: "Treino IA Personalizado".to_string(),
        trimester: trimester_for_week(week).to_string(),
        duration: "18 min".to_string(),
        description: format!(
            "Treino gerado pela IA especificamente para você na semana {}, considerando seu nível {} e preferências.",
            week,
            level.as_str()
        ),
        video_url: GENERATED_VIDEO_URL.to_string(),
        workout_type: WorkoutType::Home,
        difficulty: level.difficulty(),
        exercises: library.iter().take(2).cloned().collect(),
        ai_generated: true,
        personalized_for: Some(format!("Semana {} - {}", week, level.as_str())),
    }
}
