/// The prompt used to request a structured recipe from the model.
///
/// It pins the exact JSON schema the response-normalization pipeline
/// expects and forbids commentary around it. The prompt is loaded from
/// `prompt.txt` at compile time using the `include_str!` macro, making it
/// easy to edit without dealing with Rust string syntax.
pub const RECIPE_PROMPT: &str = include_str!("prompt.txt");

/// Build the full request text: schema prompt followed by the user's pantry
/// contents and dietary preferences.
pub fn build_recipe_prompt(ingredients: &str, preferences: &str) -> String {
    let preferences = preferences.trim();
    let preferences = if preferences.is_empty() {
        "(none)"
    } else {
        preferences
    };

    format!(
        "{}\n\nIngredients:\n{}\n\nDietary preferences or restrictions:\n{}",
        RECIPE_PROMPT,
        ingredients.trim(),
        preferences
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_embedded() {
        // Verify the prompt is not empty
        assert!(!RECIPE_PROMPT.is_empty());

        // Verify it pins the schema fields the pipeline expects
        assert!(RECIPE_PROMPT.contains("\"title\""));
        assert!(RECIPE_PROMPT.contains("\"dietTags\""));
        assert!(RECIPE_PROMPT.contains("\"nutrition\""));
        assert!(RECIPE_PROMPT.contains("Output JSON only"));
    }

    #[test]
    fn test_build_recipe_prompt_includes_inputs() {
        let prompt = build_recipe_prompt("rice, egg", "vegetarian");
        assert!(prompt.contains("rice, egg"));
        assert!(prompt.contains("vegetarian"));
    }

    #[test]
    fn test_build_recipe_prompt_handles_blank_preferences() {
        let prompt = build_recipe_prompt("rice", "   ");
        assert!(prompt.contains("(none)"));
    }
}
