//! The gateway: construction and the attempt-then-fallback driver.

use std::sync::Arc;

use coach_core::{GenerativeClient, ModelRequest, Result};
use tracing::{debug, warn};

use crate::client::GeminiClient;
use crate::config::GeminiConfig;

/// Typed AI gateway for GrowthPath.
///
/// Holds an optional injectable model client; an absent client represents
/// the "no credential configured" state, and every operation then serves
/// its fallback. Operations live in the `ops` modules, all expressed as a
/// (build prompt, parse response, build fallback) triple run through
/// [`Gateway::attempt`].
pub struct Gateway {
    client: Option<Arc<dyn GenerativeClient>>,
}

impl Gateway {
    /// Create a gateway around an explicit client.
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Create a gateway with no model client: every operation serves its
    /// fallback.
    pub fn without_client() -> Self {
        Self { client: None }
    }

    /// Create a gateway from environment variables.
    ///
    /// When `GEMINI_API_KEY` is unset (or the client cannot be built), this
    /// logs one warning and returns a clientless gateway rather than
    /// failing: the app keeps working in degraded mode.
    pub fn from_env() -> Self {
        match GeminiConfig::from_env().and_then(GeminiClient::new) {
            Ok(client) => Self::new(Arc::new(client)),
            Err(err) => {
                warn!(
                    "No usable model credential ({}); all gateway operations will use fallback \
                     responses",
                    err
                );
                Self::without_client()
            }
        }
    }

    /// Whether a model client is configured.
    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// Run one operation: issue the request and parse it, or serve the
    /// fallback on an absent client or any failure.
    pub(crate) async fn attempt<T, P, F>(
        &self,
        operation: &'static str,
        request: ModelRequest,
        parse: P,
        fallback: F,
    ) -> T
    where
        P: FnOnce(String) -> Result<T>,
        F: FnOnce() -> T,
    {
        let Some(client) = &self.client else {
            debug!("{}: no model client configured, serving fallback", operation);
            return fallback();
        };

        match client.generate(&request).await.and_then(parse) {
            Ok(value) => value,
            Err(err) => {
                warn!("{} failed, serving fallback: {}", operation, err);
                fallback()
            }
        }
    }
}

impl Default for Gateway {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use coach_core::{async_trait, GatewayError, GenerativeClient, ModelRequest};
    use tokio::sync::Mutex;

    /// A scripted client for driver tests: pops one canned outcome per call.
    pub struct StubClient {
        responses: Mutex<Vec<Result<String, GatewayError>>>,
    }

    impl StubClient {
        /// A client that answers every call with the same text.
        pub fn with_text(text: &str) -> Self {
            Self {
                responses: Mutex::new(vec![Ok(text.to_string())]),
            }
        }

        /// A client that fails every call with a network error.
        pub fn failing() -> Self {
            Self {
                responses: Mutex::new(Vec::new()),
            }
        }

        /// A client that answers calls in order from a script.
        pub fn scripted(responses: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
            }
        }
    }

    #[async_trait]
    impl GenerativeClient for StubClient {
        async fn generate(&self, _request: &ModelRequest) -> Result<String, GatewayError> {
            let mut responses = self.responses.lock().await;
            if responses.is_empty() {
                return Err(GatewayError::Network("stub: no scripted response".to_string()));
            }
            // Reuse the last response once the script runs out.
            if responses.len() == 1 {
                return responses[0]
                    .as_ref()
                    .map(|text| text.clone())
                    .map_err(|err| GatewayError::Network(format!("stub: {err}")));
            }
            responses.remove(0)
        }

        fn name(&self) -> &str {
            "StubClient"
        }
    }
}
