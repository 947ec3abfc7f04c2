use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::ProviderConfig;
use crate::error::SuggestError;
use crate::providers::{build_recipe_prompt, LlmProvider};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GoogleProvider {
    /// Create a new Google Gemini provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, SuggestError> {
        // Try config first, then fall back to environment variables
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .ok_or(SuggestError::MissingApiKey)?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(GoogleProvider {
            client,
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl LlmProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(
        &self,
        ingredients: &str,
        preferences: &str,
    ) -> Result<String, SuggestError> {
        // Google Gemini API endpoint
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "contents": [{
                    "parts": [{
                        "text": build_recipe_prompt(ingredients, preferences)
                    }]
                }],
                "generationConfig": {
                    "response_mime_type": "application/json",
                    "temperature": self.temperature,
                    "topP": 0.1,
                    "candidateCount": 1,
                    "maxOutputTokens": self.max_tokens
                }
            }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SuggestError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response_body: Value = serde_json::from_str(&body).map_err(|e| {
            SuggestError::MalformedResponse(format!("response body is not JSON: {}", e))
        })?;
        debug!("{:?}", response_body);

        let text = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                SuggestError::MalformedResponse("response carries no candidate text".to_string())
            })?
            .to_string();

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ProviderConfig {
        ProviderConfig {
            api_key: Some("test-key".to_string()),
            model: "gemini-2.0-flash".to_string(),
            temperature: 0.1,
            max_tokens: 1024,
            base_url: None,
            timeout: 30,
        }
    }

    #[tokio::test]
    async fn test_provider_name() {
        let provider = GoogleProvider::new(&test_config()).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("GOOGLE_API_KEY");

        let mut config = test_config();
        config.api_key = None;

        let result = GoogleProvider::new(&config);
        assert!(matches!(result, Err(SuggestError::MissingApiKey)));
    }
}
