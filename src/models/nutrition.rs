use serde::{Deserialize, Serialize};

use super::RecordId;

/// Macronutrients in grams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Macros {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// A meal suggestion shown on the nutrition screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionItem {
    pub id: RecordId,
    pub meal: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub calories: u32,
    pub macros: Macros,
}

/// Cost bracket of a recipe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Budget {
    #[default]
    #[serde(rename = "baixo")]
    Low,
    #[serde(rename = "médio")]
    Medium,
    #[serde(rename = "alto")]
    High,
}

/// Recipe produced by the recipe generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(flatten)]
    pub item: NutritionItem,
    pub budget: Budget,
    pub prep_time: String,
    pub ai_generated: bool,
}

/// Product returned by the (simulated) barcode scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedProduct {
    pub name: String,
    pub calories: u32,
    pub macros: Macros,
}

impl ScannedProduct {
    /// Text shown to the user after a scan.
    pub fn summary(&self) -> String {
        format!(
            "Produto encontrado! {} - {} kcal por porção (P {}g, C {}g, G {}g)",
            self.name, self.calories, self.macros.protein, self.macros.carbs, self.macros.fat
        )
    }
}
