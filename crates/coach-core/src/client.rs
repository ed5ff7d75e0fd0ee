//! The injectable external-model client seam.

use async_trait::async_trait;

use crate::error::GatewayError;

/// Output format requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Free text.
    Text,
    /// A single JSON value, to be parsed into a typed payload.
    Json,
}

/// A single one-shot request to the external generative model.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    /// The user-level prompt text.
    pub prompt: String,
    /// Optional system-level instruction string.
    pub system_instruction: Option<String>,
    /// Requested response format.
    pub response_format: ResponseFormat,
}

impl ModelRequest {
    /// Create a free-text request.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: None,
            response_format: ResponseFormat::Text,
        }
    }

    /// Create a request that asks the model to respond with JSON only.
    pub fn json(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: None,
            response_format: ResponseFormat::Json,
        }
    }

    /// Attach a system instruction.
    pub fn with_system(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }
}

/// A client for a one-shot generative-model API.
///
/// The gateway holds an `Option<Arc<dyn GenerativeClient>>`: an absent client
/// represents the "no credential configured" state and is checked explicitly
/// by the driver rather than surfacing as an error from deep inside a call.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Issue one request and return the raw response text.
    async fn generate(&self, request: &ModelRequest) -> Result<String, GatewayError>;

    /// Human-readable client name, for logs.
    fn name(&self) -> &str;
}
