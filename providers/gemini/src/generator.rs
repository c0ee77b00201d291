use async_trait::async_trait;
use lexifind_generator::{GenerateError, ProviderMetadata, WordGenerator, prompt, schema};
use lexifind_types::{CategorizedResults, Query};

use crate::wire::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};

#[derive(Clone)]
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            model,
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Instruction, prompt and output schema for one query
    pub fn build_request(query: &Query) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: Content::text(None, prompt::system_instruction(query.difficulty())),
            contents: vec![Content::text(Some("user"), prompt::user_prompt(query))],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema::response_schema(),
            },
        }
    }
}

#[async_trait]
impl WordGenerator for GeminiGenerator {
    async fn generate(&self, query: &Query) -> Result<CategorizedResults, GenerateError> {
        if self.api_key.trim().is_empty() {
            return Err(GenerateError::AuthenticationError);
        }

        let body = Self::build_request(query);
        tracing::debug!(
            pattern = query.pattern(),
            difficulty = ?query.difficulty(),
            model = %self.model,
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(GenerateError::RateLimitExceeded);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(GenerateError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(GenerateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let reply: GenerateContentResponse = response.json().await.map_err(|e| {
            GenerateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let text = reply.text().ok_or_else(|| {
            tracing::warn!(
                finish_reason = reply.finish_reason().unwrap_or("none"),
                "generateContent returned no text"
            );
            GenerateError::EmptyResponse
        })?;

        schema::parse_results(&text)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Gemini".to_string(),
            model: self.model.clone(),
            requires_api_key: true,
        }
    }
}
