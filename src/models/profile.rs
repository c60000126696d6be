use serde::{Deserialize, Serialize};

/// Self-assessed fitness level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FitnessLevel {
    #[serde(rename = "iniciante")]
    Beginner,
    #[default]
    #[serde(rename = "intermediário")]
    Intermediate,
    #[serde(rename = "avançado")]
    Advanced,
}

impl FitnessLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "iniciante",
            FitnessLevel::Intermediate => "intermediário",
            FitnessLevel::Advanced => "avançado",
        }
    }

    /// Difficulty a workout tailored to this level should carry.
    pub fn difficulty(self) -> super::Difficulty {
        match self {
            FitnessLevel::Beginner => super::Difficulty::Easy,
            FitnessLevel::Intermediate => super::Difficulty::Moderate,
            FitnessLevel::Advanced => super::Difficulty::Advanced,
        }
    }
}

/// The signed-in user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    /// Height in centimetres
    pub height: u16,
    pub pre_pregnancy_weight: f32,
    pub current_weight: f32,
    pub due_date: String,
    pub fitness_level: FitnessLevel,
    pub medical_conditions: Vec<String>,
    pub preferences: Vec<String>,
}

impl UserProfile {
    /// Weight gained since before the pregnancy, in kg.
    pub fn weight_gain(&self) -> f32 {
        self.current_weight - self.pre_pregnancy_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    #[test]
    fn test_level_to_difficulty() {
        assert_eq!(FitnessLevel::Beginner.difficulty(), Difficulty::Easy);
        assert_eq!(FitnessLevel::Intermediate.difficulty(), Difficulty::Moderate);
        assert_eq!(FitnessLevel::Advanced.difficulty(), Difficulty::Advanced);
    }

    #[test]
    fn test_level_wire_name() {
        let json = serde_json::to_string(&FitnessLevel::Intermediate).unwrap();
        assert_eq!(json, "\"intermediário\"");
    }
}
