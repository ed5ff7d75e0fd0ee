//! HTTP client for the Gemini `generateContent` API.

use coach_core::{async_trait, GatewayError, GenerativeClient, ModelRequest, ResponseFormat};
use reqwest::Client;
use tracing::{debug, info};

use crate::api_types::{
    ApiError, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use crate::config::GeminiConfig;

/// A [`GenerativeClient`] backed by Google's Gemini REST API.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let client = Client::builder().build().map_err(|e| {
            GatewayError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!("GeminiClient initialized with model: {}", config.model);

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for the variables involved.
    pub fn from_env() -> Result<Self, GatewayError> {
        let config = GeminiConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn generation_config(&self, format: ResponseFormat) -> Option<GenerationConfig> {
        let response_mime_type = match format {
            ResponseFormat::Json => Some("application/json".to_string()),
            ResponseFormat::Text => None,
        };
        if response_mime_type.is_none()
            && self.config.temperature.is_none()
            && self.config.max_output_tokens.is_none()
        {
            return None;
        }
        Some(GenerationConfig {
            response_mime_type,
            temperature: self.config.temperature,
            max_output_tokens: self.config.max_output_tokens,
        })
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, request: &ModelRequest) -> Result<String, GatewayError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url, self.config.model
        );

        let body = GenerateContentRequest {
            contents: vec![Content::user(request.prompt.clone())],
            system_instruction: request
                .system_instruction
                .as_ref()
                .map(|instruction| Content::system(instruction.clone())),
            generation_config: self.generation_config(request.response_format),
        };

        debug!("Sending request to Gemini API: {:?}", body);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(GatewayError::Network(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(GatewayError::Network(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Malformed(format!("Failed to parse response: {}", e)))?;

        if let Some(usage) = &completion.usage_metadata {
            debug!(
                "Token usage - prompt: {}, candidates: {}, total: {}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        completion
            .text()
            .ok_or_else(|| GatewayError::EmptyResponse("no candidate text in response".to_string()))
    }

    fn name(&self) -> &str {
        "GeminiClient"
    }
}
