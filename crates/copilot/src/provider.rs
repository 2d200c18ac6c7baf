//! Narration providers for Enhanced mode.
//!
//! `HttpInsightProvider` works against any server implementing the OpenAI
//! `/v1/chat/completions` contract; tests inject their own `InsightProvider`
//! implementations instead.

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::env::CopilotEnvironment;
use crate::error::CopilotError;

// ============================================================================
// Insight Provider Trait
// ============================================================================

/// Trait for turning a composed briefing prompt into a narrative.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Generate a narrative for the given prompt.
    ///
    /// Failures surface to the caller; the service never downgrades a
    /// briefing to template text behind the caller's back.
    async fn narrate(&self, prompt: &str) -> Result<String, CopilotError>;
}

// ============================================================================
// HTTP Insight Provider
// ============================================================================

/// Completion-endpoint provider.
///
/// The API key is optional at this level so self-hosted endpoints without
/// authentication keep working; mode selection in the service is what gates
/// Enhanced narration on a configured key.
#[derive(Debug)]
pub struct HttpInsightProvider {
    http_client: HttpClient,
    base_url: String,
    model_id: String,
    api_key: Option<String>,
}

impl HttpInsightProvider {
    /// Create a provider against an OpenAI-compatible endpoint.
    pub fn new(base_url: &str, model_id: &str, api_key: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model_id: model_id.to_string(),
            api_key,
        }
    }

    /// Build a provider from environment configuration.
    ///
    /// Requires an API key and a model id, since this constructor exists to
    /// wire up Enhanced mode.
    pub fn from_environment(env: &dyn CopilotEnvironment) -> Result<Self, CopilotError> {
        let api_key = env
            .api_key()
            .ok_or_else(|| CopilotError::MissingApiKey("completion endpoint".to_string()))?;
        let model_id = env.model_id();
        if model_id.trim().is_empty() {
            return Err(CopilotError::invalid_input("model id is empty"));
        }
        Ok(Self::new(&env.api_base_url(), &model_id, Some(api_key)))
    }

    /// The model id requests are issued with.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// The endpoint base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl InsightProvider for HttpInsightProvider {
    async fn narrate(&self, prompt: &str) -> Result<String, CopilotError> {
        let request = ChatCompletionRequest {
            model: self.model_id.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: Some(0.4),
            max_tokens: Some(600),
            stream: false,
        };

        debug!(
            "Requesting narration from {} with model {}",
            self.base_url, self.model_id
        );

        let mut builder = self
            .http_client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .json(&request);
        if let Some(ref key) = self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", key));
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CopilotError::provider(format!(
                "completion endpoint returned {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let narrative = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if narrative.trim().is_empty() {
            return Err(CopilotError::provider(
                "completion endpoint returned no content",
            ));
        }

        Ok(narrative.trim().to_string())
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Chat completion request body.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat completion response body. Fields the co-pilot does not read are
/// left undeclared and ignored during deserialization.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::test_env::MockEnvironment;

    #[test]
    fn test_new_trims_trailing_slash() {
        let provider = HttpInsightProvider::new("http://localhost:8080/", "gpt-4o-mini", None);
        assert_eq!(provider.base_url(), "http://localhost:8080");
        assert_eq!(provider.model_id(), "gpt-4o-mini");
    }

    #[test]
    fn test_from_environment_requires_api_key() {
        let err = HttpInsightProvider::from_environment(&MockEnvironment::new()).unwrap_err();
        assert!(matches!(err, CopilotError::MissingApiKey(_)));
        assert_eq!(err.code(), "MISSING_API_KEY");
    }

    #[test]
    fn test_from_environment_rejects_blank_model() {
        let env = MockEnvironment::new()
            .with_api_key("sk-test")
            .with_model_id("  ");
        let err = HttpInsightProvider::from_environment(&env).unwrap_err();
        assert!(matches!(err, CopilotError::InvalidInput(_)));
    }

    #[test]
    fn test_from_environment_builds_provider() {
        let env = MockEnvironment::new().with_api_key("sk-test");
        let provider = HttpInsightProvider::from_environment(&env).unwrap();
        assert_eq!(provider.base_url(), "http://localhost:8080");
        assert_eq!(provider.model_id(), "gpt-4o-mini");
        assert_eq!(provider.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "Hello".to_string(),
            }],
            temperature: Some(0.4),
            max_tokens: None,
            stream: false,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Hello");
        assert_eq!(json["stream"], false);
        // max_tokens is omitted when None
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn test_response_deserialization_ignores_extra_fields() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "Steady as she goes." },
                "finish_reason": "stop"
            }]
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content, "Steady as she goes.");
    }

    #[tokio::test]
    async fn test_narrate_unreachable_endpoint_errors() {
        // Port 99999 is out of range, so the request fails before any I/O.
        let provider = HttpInsightProvider::new("http://localhost:99999", "gpt-4o-mini", None);
        let result = provider.narrate("prompt").await;
        assert!(result.is_err());
    }
}
