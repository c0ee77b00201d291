use lexifind_types::{CategorizedResults, Query, QueryError};

pub mod prompt;
pub mod schema;

/// Message shown for every failure past local validation
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch words. Please try again.";

/// Word discovery provider interface
#[async_trait::async_trait]
pub trait WordGenerator: Send + Sync {
    /// Ask the provider for words matching the query, grouped by pattern position.
    /// Exactly one outbound request per call.
    async fn generate(&self, query: &Query) -> Result<CategorizedResults, GenerateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    InvalidQuery(#[from] QueryError),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("No data returned from the generator")]
    EmptyResponse,

    #[error("Response does not match the schema: {0}")]
    SchemaMismatch(#[from] serde_json::Error),
}

impl GenerateError {
    /// What the user sees. Everything except local validation collapses
    /// into one generic message.
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::InvalidQuery(e) => e.to_string(),
            _ => FETCH_FAILED_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_kept() {
        let err = GenerateError::from(QueryError::EmptyPattern);
        assert_eq!(err.user_message(), "Please enter a letter combination.");
    }

    #[test]
    fn fetch_failures_share_one_message() {
        let parse_err = serde_json::from_str::<CategorizedResults>("not json").unwrap_err();
        let errors = [
            GenerateError::ApiError("HTTP 500".to_string()),
            GenerateError::RateLimitExceeded,
            GenerateError::AuthenticationError,
            GenerateError::EmptyResponse,
            GenerateError::SchemaMismatch(parse_err),
        ];

        for err in errors {
            assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
        }
    }
}
