//! Recipes built from a list of ingredients.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pick_index;
use crate::models::{Budget, Macros, NutritionItem, Recipe};

/// Meal label attached to every generated recipe.
pub const GENERATED_MEAL: &str = "Refeição IA";

/// Body of `POST /api/ai-recipe`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub ingredients: Vec<String>,
    /// Accepted but not used when picking a template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeResponse {
    pub recipe: Recipe,
}

struct RecipeTemplate {
    title_prefix: &'static str,
    calories: u32,
    macros: Macros,
    prep_time: &'static str,
}

const TEMPLATES: [RecipeTemplate; 3] = [
    RecipeTemplate {
        title_prefix: "Refogado Nutritivo",
        calories: 280,
        macros: Macros {
            protein: 15,
            carbs: 35,
            fat: 8,
        },
        prep_time: "15 min",
    },
    RecipeTemplate {
        title_prefix: "Salada Completa",
        calories: 220,
        macros: Macros {
            protein: 12,
            carbs: 25,
            fat: 10,
        },
        prep_time: "10 min",
    },
    RecipeTemplate {
        title_prefix: "Sopa Reconfortante",
        calories: 180,
        macros: Macros {
            protein: 8,
            carbs: 28,
            fat: 5,
        },
        prep_time: "20 min",
    },
];

fn instructions(template_index: usize, all: &str) -> String {
    match template_index {
        0 => format!(
            "Receita econômica e saudável criada pela IA usando os ingredientes disponíveis: {}. \
             Prepare refogando os vegetais, tempere com ervas naturais e sirva quente. \
             Rica em nutrientes essenciais para gestantes.",
            all
        ),
        1 => format!(
            "Combine todos os ingredientes frescos: {}. Tempere com azeite, limão e ervas. \
             Uma refeição leve e nutritiva, perfeita para gestantes que buscam uma alimentação saudável.",
            all
        ),
        _ => format!(
            "Cozinhe os ingredientes em água ou caldo: {}. Tempere a gosto e deixe cozinhar até ficar macio. \
             Uma opção quente e nutritiva, ideal para o bem-estar durante a gestação.",
            all
        ),
    }
}

/// Build a recipe around the requested ingredients.
pub fn generate_recipe<R: Rng + ?Sized>(
    rng: &mut R,
    request: &RecipeRequest,
    now: DateTime<Utc>,
) -> Recipe {
    let index = pick_index(rng, TEMPLATES.len()).unwrap_or(0);
    let template = &TEMPLATES[index];

    let headline = request
        .ingredients
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" e ");
    let all = request.ingredients.join(", ");

    Recipe {
        item: NutritionItem {
            id: now.timestamp_millis(),
            meal: GENERATED_MEAL.to_string(),
            title: format!("{} com {}", template.title_prefix, headline),
            ingredients: request.ingredients.clone(),
            instructions: instructions(index, &all),
            calories: template.calories,
            macros: template.macros,
        },
        budget: Budget::Low,
        prep_time: template.prep_time.to_string(),
        ai_generated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tomate_arroz() -> RecipeRequest {
        RecipeRequest {
            ingredients: vec!["tomate".to_string(), "arroz".to_string()],
            user_profile: None,
        }
    }

    #[test]
    fn test_recipe_mentions_first_two_ingredients() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            let recipe = generate_recipe(&mut rng, &tomate_arroz(), Utc::now());
            assert!(recipe.item.title.ends_with("com tomate e arroz"));
            assert_eq!(recipe.item.ingredients, vec!["tomate", "arroz"]);
            assert!(recipe.item.instructions.contains("tomate, arroz"));
            assert_eq!(recipe.budget, Budget::Low);
            assert_eq!(recipe.item.meal, GENERATED_MEAL);
            assert!(recipe.ai_generated);
        }
    }

    #[test]
    fn test_calories_match_template() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..10 {
            let recipe = generate_recipe(&mut rng, &tomate_arroz(), Utc::now());
            let expected = match recipe.item.title.split(" com ").next() {
                Some("Refogado Nutritivo") => (280, "15 min"),
                Some("Salada Completa") => (220, "10 min"),
                Some("Sopa Reconfortante") => (180, "20 min"),
                other => panic!("unexpected title prefix {:?}", other),
            };
            assert_eq!((recipe.item.calories, recipe.prep_time.as_str()), expected);
        }
    }

    #[test]
    fn test_single_ingredient_title() {
        let mut rng = StdRng::seed_from_u64(1);
        let request = RecipeRequest {
            ingredients: vec!["abóbora".to_string()],
            user_profile: None,
        };
        let recipe = generate_recipe(&mut rng, &request, Utc::now());
        assert!(recipe.item.title.ends_with("com abóbora"));
    }
}
