use log::debug;

use crate::extract::extract_json_object;
use crate::model::{Nutrition, Recipe, RecipeCandidate, UNKNOWN};

/// Turn raw model output into a renderable recipe.
///
/// Extraction and shape failures are absorbed here: any text that does not
/// yield a parseable candidate with a usable title resolves to the generic
/// fallback recipe. This function never fails.
pub fn resolve_model_text(raw: &str) -> Recipe {
    if let Some(json) = extract_json_object(raw) {
        match serde_json::from_str::<RecipeCandidate>(&json) {
            Ok(candidate) if has_usable_title(&candidate) => return map_candidate(candidate),
            Ok(_) => debug!("candidate JSON carries no usable title, using fallback"),
            Err(e) => debug!("candidate JSON failed to parse: {}", e),
        }
    } else {
        debug!("no balanced JSON object in model output, using fallback");
    }

    fallback_recipe()
}

fn has_usable_title(candidate: &RecipeCandidate) -> bool {
    candidate
        .title
        .as_deref()
        .map_or(false, |t| !t.trim().is_empty())
}

/// Map a parsed candidate onto a fully defaulted recipe.
///
/// Total: every missing or blank field gets a fixed placeholder, every
/// missing list an empty one. The caller is responsible for checking the
/// title first; a blank title still maps, it just keeps the placeholder.
pub fn map_candidate(candidate: RecipeCandidate) -> Recipe {
    let nutrition = candidate.nutrition.unwrap_or_default();

    Recipe {
        title: text_or(candidate.title, "Recipe"),
        servings: text_or(candidate.servings, "2"),
        prep_time: text_or(candidate.prep_time, UNKNOWN),
        cook_time: text_or(candidate.cook_time, UNKNOWN),
        total_time: text_or(candidate.total_time, UNKNOWN),
        difficulty: text_or(candidate.difficulty, "Easy"),
        cuisine: text_or(candidate.cuisine, "General"),
        diet_tags: candidate
            .diet_tags
            .map(|tags| tags.joined())
            .unwrap_or_default(),
        ingredients: candidate.ingredients.unwrap_or_default(),
        steps: candidate.steps.unwrap_or_default(),
        tips: candidate.tips.unwrap_or_default(),
        nutrition: Nutrition {
            calories: text_or(nutrition.calories, UNKNOWN),
            protein: text_or(nutrition.protein, UNKNOWN),
            carbs: text_or(nutrition.carbs, UNKNOWN),
            fat: text_or(nutrition.fat, UNKNOWN),
        },
    }
}

fn text_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

/// The fixed stand-in served when the model output carries no usable JSON.
/// Deterministic and always complete.
pub fn fallback_recipe() -> Recipe {
    Recipe {
        title: "Quick Skillet Saute".to_string(),
        servings: "2".to_string(),
        prep_time: "10 min".to_string(),
        cook_time: "15 min".to_string(),
        total_time: "25 min".to_string(),
        difficulty: "Easy".to_string(),
        cuisine: "General".to_string(),
        diet_tags: String::new(),
        ingredients: vec![
            "2 tablespoons olive oil".to_string(),
            "Salt and black pepper".to_string(),
            "Vegetables of your choice".to_string(),
        ],
        steps: vec![
            "Heat a pan and add the oil.".to_string(),
            "Add the vegetables and saute until tender.".to_string(),
            "Season with salt and pepper and serve.".to_string(),
        ],
        tips: vec!["Scale the seasoning up or down to taste.".to_string()],
        nutrition: Nutrition::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_is_total_with_title_only() {
        let candidate: RecipeCandidate = serde_json::from_str(r#"{"title":"Omelette"}"#).unwrap();
        let recipe = map_candidate(candidate);

        assert_eq!(recipe.title, "Omelette");
        assert_eq!(recipe.servings, "2");
        assert_eq!(recipe.prep_time, UNKNOWN);
        assert_eq!(recipe.cook_time, UNKNOWN);
        assert_eq!(recipe.total_time, UNKNOWN);
        assert_eq!(recipe.difficulty, "Easy");
        assert_eq!(recipe.cuisine, "General");
        assert_eq!(recipe.diet_tags, "");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
        assert!(recipe.tips.is_empty());
        assert_eq!(recipe.nutrition.calories, UNKNOWN);
    }

    #[test]
    fn test_map_treats_blank_scalars_as_missing() {
        let candidate: RecipeCandidate =
            serde_json::from_str(r#"{"title":"Omelette","cuisine":"  ","difficulty":""}"#).unwrap();
        let recipe = map_candidate(candidate);

        assert_eq!(recipe.cuisine, "General");
        assert_eq!(recipe.difficulty, "Easy");
    }

    #[test]
    fn test_map_passes_through_supplied_fields() {
        let candidate: RecipeCandidate = serde_json::from_str(
            r#"{
                "title": "Lentil Soup",
                "servings": "serves 4",
                "prepTime": "15 min",
                "dietTags": "vegan, gluten-free",
                "ingredients": ["1 cup red lentils", "1 onion"],
                "steps": ["Soften the onion.", "Simmer the lentils."],
                "nutrition": {"calories": "320 kcal", "protein": "18 g"}
            }"#,
        )
        .unwrap();
        let recipe = map_candidate(candidate);

        assert_eq!(recipe.title, "Lentil Soup");
        assert_eq!(recipe.servings, "serves 4");
        assert_eq!(recipe.prep_time, "15 min");
        assert_eq!(recipe.diet_tags, "vegan, gluten-free");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.steps.len(), 2);
        assert_eq!(recipe.nutrition.calories, "320 kcal");
        assert_eq!(recipe.nutrition.protein, "18 g");
        // Missing nutrition fields still default independently
        assert_eq!(recipe.nutrition.carbs, UNKNOWN);
        assert_eq!(recipe.nutrition.fat, UNKNOWN);
    }

    #[test]
    fn test_resolve_fenced_json() {
        let raw = "```json\n{\"title\":\"Simple Stir-fry\",\"servings\":\"2\",\"ingredients\":[\"rice\",\"egg\"],\"steps\":[\"cook rice\",\"fry egg\"]}\n```";
        let recipe = resolve_model_text(raw);

        assert_eq!(recipe.title, "Simple Stir-fry");
        assert_eq!(recipe.ingredients, vec!["rice", "egg"]);
        assert_eq!(recipe.steps, vec!["cook rice", "fry egg"]);
        assert_eq!(recipe.difficulty, "Easy");
    }

    #[test]
    fn test_resolve_prose_only_falls_back() {
        let recipe = resolve_model_text("Sorry, I cannot help with that.");
        assert_eq!(recipe, fallback_recipe());
    }

    #[test]
    fn test_resolve_blank_title_falls_back() {
        let recipe = resolve_model_text(r#"{"title":"","ingredients":[]}"#);
        assert_eq!(recipe, fallback_recipe());
    }

    #[test]
    fn test_resolve_unparseable_json_falls_back() {
        // Balanced braces but not valid JSON
        let recipe = resolve_model_text("{not json at all}");
        assert_eq!(recipe, fallback_recipe());
    }

    #[test]
    fn test_fallback_recipe_is_complete() {
        let recipe = fallback_recipe();
        assert!(!recipe.title.is_empty());
        assert!(!recipe.ingredients.is_empty());
        assert!(!recipe.steps.is_empty());
        assert!(!recipe.tips.is_empty());
        assert_eq!(recipe.nutrition.calories, UNKNOWN);
    }
}
