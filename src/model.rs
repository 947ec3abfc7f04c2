use serde::{Deserialize, Serialize};

/// Placeholder for scalar fields the model did not supply
pub const UNKNOWN: &str = "—";

/// A fully normalized recipe, ready to render.
///
/// Every scalar field is non-empty (placeholder when unknown) and every list
/// is present, possibly empty. `diet_tags` is the comma-joined boundary form
/// of the logical tag set, e.g. "vegan, gluten-free"; empty when untagged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub servings: String,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub difficulty: String,
    pub cuisine: String,
    pub diet_tags: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub tips: Vec<String>,
    pub nutrition: Nutrition,
}

/// Estimated per-serving nutrition, free-form strings as the model writes them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nutrition {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

impl Default for Nutrition {
    fn default() -> Self {
        Nutrition {
            calories: UNKNOWN.to_string(),
            protein: UNKNOWN.to_string(),
            carbs: UNKNOWN.to_string(),
            fat: UNKNOWN.to_string(),
        }
    }
}

/// Untrusted recipe shape as the model emits it.
///
/// Every field is optional; the mapper supplies defaults. Wire names are
/// camelCase with snake_case accepted as an alias, since models drift
/// between the two.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeCandidate {
    pub title: Option<String>,
    pub servings: Option<String>,
    #[serde(alias = "prep_time")]
    pub prep_time: Option<String>,
    #[serde(alias = "cook_time")]
    pub cook_time: Option<String>,
    #[serde(alias = "total_time")]
    pub total_time: Option<String>,
    pub difficulty: Option<String>,
    pub cuisine: Option<String>,
    #[serde(alias = "diet_tags")]
    pub diet_tags: Option<DietTagsType>,
    pub ingredients: Option<Vec<String>>,
    pub steps: Option<Vec<String>>,
    pub tips: Option<Vec<String>>,
    pub nutrition: Option<NutritionCandidate>,
}

/// The schema asks for a comma-joined string, but models sometimes answer
/// with an array anyway
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DietTagsType {
    String(String),
    Multiple(Vec<String>),
}

impl DietTagsType {
    /// Collapse to the comma-joined boundary form
    pub fn joined(&self) -> String {
        match self {
            DietTagsType::String(tags) => tags.trim().to_string(),
            DietTagsType::Multiple(tags) => tags
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NutritionCandidate {
    pub calories: Option<String>,
    pub protein: Option<String>,
    pub carbs: Option<String>,
    pub fat: Option<String>,
}
