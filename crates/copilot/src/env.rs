//! Environment abstraction for the briefing co-pilot.
//!
//! This module provides the `CopilotEnvironment` trait that abstracts how the
//! embedding application supplies runtime configuration (API key, model id,
//! endpoint, locale). The service is constructed against this trait; there is
//! no process-wide state and no reading of globals inside the crate.

/// Environment abstraction for the co-pilot.
///
/// Implementations provide:
/// - The completion-endpoint API key, when the user has configured one
/// - The model id and base URL for the endpoint
/// - The user's locale for narration
pub trait CopilotEnvironment: Send + Sync {
    /// API key for the completion endpoint. `None` means the user has not
    /// configured one and narration stays in template mode.
    fn api_key(&self) -> Option<String>;

    /// Model identifier passed to the completion endpoint.
    fn model_id(&self) -> String;

    /// Base URL of the OpenAI-compatible completion endpoint.
    fn api_base_url(&self) -> String;

    /// BCP 47 locale tag for narration (e.g., "fr-FR"), when configured.
    fn locale(&self) -> Option<String>;
}

#[cfg(test)]
pub mod test_env {
    use super::*;

    /// Mock environment for testing.
    pub struct MockEnvironment {
        pub api_key: Option<String>,
        pub model_id: String,
        pub api_base_url: String,
        pub locale: Option<String>,
    }

    impl Default for MockEnvironment {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockEnvironment {
        pub fn new() -> Self {
            Self {
                api_key: None,
                model_id: "gpt-4o-mini".to_string(),
                api_base_url: "http://localhost:8080".to_string(),
                locale: None,
            }
        }

        pub fn with_api_key(mut self, key: &str) -> Self {
            self.api_key = Some(key.to_string());
            self
        }

        pub fn with_model_id(mut self, model_id: &str) -> Self {
            self.model_id = model_id.to_string();
            self
        }

        pub fn with_locale(mut self, locale: &str) -> Self {
            self.locale = Some(locale.to_string());
            self
        }
    }

    impl CopilotEnvironment for MockEnvironment {
        fn api_key(&self) -> Option<String> {
            self.api_key.clone()
        }

        fn model_id(&self) -> String {
            self.model_id.clone()
        }

        fn api_base_url(&self) -> String {
            self.api_base_url.clone()
        }

        fn locale(&self) -> Option<String> {
            self.locale.clone()
        }
    }
}
