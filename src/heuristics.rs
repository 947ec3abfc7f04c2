use crate::model::Recipe;

/// Oil and fat keywords checked against the pantry text and ingredient lines
const OIL_KEYWORDS: [&str; 5] = ["oil", "butter", "ghee", "margarine", "lard"];

pub const TIP_VEGAN_DAIRY: &str =
    "For vegan compliance, swap dairy for plant-based alternatives (almond milk, coconut milk, etc.).";
pub const TIP_VEGAN_HONEY: &str = "Use maple syrup or date syrup in place of honey.";
pub const TIP_GLUTEN_FREE_STAPLES: &str =
    "Choose gluten-free pasta or bread, or grains like rice and buckwheat.";
pub const TIP_GLUTEN_FREE_STARCH: &str =
    "Thicken sauces with cornstarch or potato starch instead of flour.";
pub const TIP_HALAL_CERTIFIED: &str =
    "Check that meat and processed products carry halal certification.";
pub const TIP_WATER_SAUTE: &str =
    "No oil on hand? Saute in a splash of water and stir in 1-2 tablespoons of oil at the end.";

/// Derive diet tags and advisory tips from the user's original request text.
///
/// Matching is case-insensitive substring containment over the raw text, not
/// word-boundary matching; "veganish" counts as vegan and that is accepted.
/// Tags are deduplicated case-insensitively, tips by exact text with first
/// occurrence winning. Only `diet_tags` and `tips` change; deterministic in
/// its three inputs.
pub fn apply_pantry_heuristics(ingredients: &str, preferences: &str, mut recipe: Recipe) -> Recipe {
    let pantry = ingredients.to_lowercase();
    let prefs = preferences.to_lowercase();

    let vegan = prefs.contains("vegan");
    let vegetarian = prefs.contains("vegetarian") || prefs.contains("veggie");
    let halal = prefs.contains("halal");
    let gluten_free = prefs.contains("gluten-free") || prefs.contains("gluten free");

    // Widen the tag list with any preference the model did not label
    let mut tags: Vec<String> = recipe
        .diet_tags
        .split([',', ';'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    for (flagged, tag) in [
        (vegan, "vegan"),
        (vegetarian, "vegetarian"),
        (halal, "halal"),
        (gluten_free, "gluten-free"),
    ] {
        if flagged && !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            tags.push(tag.to_string());
        }
    }

    // Substitution advisories; duplicates are swept up below
    let mut tips = std::mem::take(&mut recipe.tips);
    if vegan {
        tips.push(TIP_VEGAN_DAIRY.to_string());
        tips.push(TIP_VEGAN_HONEY.to_string());
    }
    if gluten_free {
        tips.push(TIP_GLUTEN_FREE_STAPLES.to_string());
        tips.push(TIP_GLUTEN_FREE_STARCH.to_string());
    }
    if halal {
        tips.push(TIP_HALAL_CERTIFIED.to_string());
    }

    // Nothing to fry with, neither on hand nor in the recipe
    let has_oil = OIL_KEYWORDS.iter().any(|kw| pantry.contains(kw))
        || recipe.ingredients.iter().any(|line| {
            let line = line.to_lowercase();
            OIL_KEYWORDS.iter().any(|kw| line.contains(kw))
        });
    if !has_oil {
        tips.push(TIP_WATER_SAUTE.to_string());
    }

    let mut deduped: Vec<String> = Vec::with_capacity(tips.len());
    for tip in tips {
        if !deduped.contains(&tip) {
            deduped.push(tip);
        }
    }

    recipe.diet_tags = tags.join(", ");
    recipe.tips = deduped;
    recipe
}
