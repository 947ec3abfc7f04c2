use thiserror::Error;

/// Errors that can occur while requesting a recipe suggestion
#[derive(Error, Debug)]
pub enum SuggestError {
    /// Network-level failure talking to the model API
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The model API answered with a non-success status
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Response body as returned, useful for diagnosing quota or auth issues
        body: String,
    },

    /// Success status but no usable candidate text in the response body
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    /// No API key found in configuration or environment
    #[error("API key not found in config or GEMINI_API_KEY/GOOGLE_API_KEY environment")]
    MissingApiKey,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
