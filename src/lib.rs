pub mod config;
pub mod error;
pub mod extract;
pub mod heuristics;
pub mod model;
pub mod providers;
pub mod render;
pub mod resolve;

use log::debug;

pub use config::{AppConfig, ProviderConfig};
pub use error::SuggestError;
pub use heuristics::apply_pantry_heuristics;
pub use model::{Nutrition, Recipe, RecipeCandidate};
pub use providers::{GoogleProvider, LlmProvider};
pub use resolve::{fallback_recipe, map_candidate, resolve_model_text};

/// Ask the configured model for a recipe and normalize the answer.
///
/// Provider errors (transport failures, malformed response bodies) surface
/// as [`SuggestError`]; a response that arrives but carries no usable JSON
/// still yields a valid recipe via the fallback path.
pub async fn suggest_recipe(
    ingredients: &str,
    preferences: &str,
) -> Result<Recipe, SuggestError> {
    let config = AppConfig::load()?;
    let provider = GoogleProvider::new(&config.provider)?;

    suggest_recipe_with_provider(&provider, ingredients, preferences).await
}

/// Same as [`suggest_recipe`] but with an injected provider.
pub async fn suggest_recipe_with_provider(
    provider: &dyn LlmProvider,
    ingredients: &str,
    preferences: &str,
) -> Result<Recipe, SuggestError> {
    let raw = provider.generate(ingredients, preferences).await?;
    debug!("model returned {} bytes of text", raw.len());

    let recipe = resolve_model_text(&raw);
    Ok(apply_pantry_heuristics(ingredients, preferences, recipe))
}
