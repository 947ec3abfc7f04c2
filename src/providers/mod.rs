mod google;
mod prompt;

pub use google::GoogleProvider;
pub use prompt::{build_recipe_prompt, RECIPE_PROMPT};

use async_trait::async_trait;

use crate::error::SuggestError;

/// Unified trait for model providers that can answer a recipe request
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Ask the model for a recipe suggestion; returns the raw response text
    /// exactly as the model wrote it
    async fn generate(
        &self,
        ingredients: &str,
        preferences: &str,
    ) -> Result<String, SuggestError>;
}
