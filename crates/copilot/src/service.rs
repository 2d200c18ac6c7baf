//! Briefing co-pilot service.
//!
//! One configurable component with an explicit mode, owned by the caller.
//! The mode is decided once at initialization from the environment's
//! capabilities and never changes afterwards; there is no runtime fallback
//! between modes and no process-wide instance.

use chrono::Utc;
use log::debug;
use std::sync::Arc;

use crate::env::CopilotEnvironment;
use crate::error::CopilotError;
use crate::provider::InsightProvider;
use crate::templates;
use crate::types::{BriefingContext, CopilotBriefing, CopilotMode};

/// Briefing co-pilot with a mode fixed at initialization.
pub struct CopilotService {
    env: Arc<dyn CopilotEnvironment>,
    provider: Arc<dyn InsightProvider>,
    mode: CopilotMode,
}

impl std::fmt::Debug for CopilotService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopilotService")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl CopilotService {
    /// Initialize the service, selecting the narration mode once.
    ///
    /// An API key in the environment selects `Enhanced`, otherwise
    /// `Template`. The provider is only consulted in Enhanced mode; Template
    /// mode never touches it. Initialization fails when Enhanced mode is
    /// selected without a usable model id.
    pub fn initialize(
        env: Arc<dyn CopilotEnvironment>,
        provider: Arc<dyn InsightProvider>,
    ) -> Result<Self, CopilotError> {
        let mode = if env.api_key().is_some() {
            CopilotMode::Enhanced
        } else {
            CopilotMode::Template
        };
        if mode == CopilotMode::Enhanced && env.model_id().trim().is_empty() {
            return Err(CopilotError::invalid_input(
                "model id is empty, cannot initialize enhanced narration",
            ));
        }

        debug!("Initializing co-pilot in {} mode", mode);
        Ok(Self {
            env,
            provider,
            mode,
        })
    }

    /// The narration mode selected at initialization.
    pub fn mode(&self) -> CopilotMode {
        self.mode
    }

    /// Compose a briefing over the supplied engine results.
    ///
    /// Template mode is pure interpolation with no I/O. Enhanced mode sends
    /// the same section text to the provider as a prompt and carries its
    /// narrative alongside the sections; provider failures surface to the
    /// caller instead of silently downgrading the briefing.
    pub async fn generate_briefing(
        &self,
        ctx: &BriefingContext,
    ) -> Result<CopilotBriefing, CopilotError> {
        debug!("Generating briefing in {} mode", self.mode);

        let sections = templates::build_briefing_sections(ctx);
        let headline = templates::compose_headline(ctx);

        let narrative = match self.mode {
            CopilotMode::Template => None,
            CopilotMode::Enhanced => {
                let locale = self.env.locale();
                let prompt = templates::compose_briefing_prompt(&sections, locale.as_deref());
                Some(self.provider.narrate(&prompt).await?)
            }
        };

        Ok(CopilotBriefing {
            mode: self.mode,
            headline,
            sections,
            narrative,
            generated_at: Utc::now(),
        })
    }

    /// Release the service.
    ///
    /// Consuming the value is the disposal; nothing the service holds
    /// outlives this call.
    pub fn dispose(self) {
        debug!("Disposing co-pilot service ({} mode)", self.mode);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::test_env::MockEnvironment;
    use async_trait::async_trait;
    use greenfield_core::cognitive::{
        CognitiveDebtResponse, CognitiveDebtService, CognitiveDebtServiceTrait,
    };
    use greenfield_core::expenses::{default_categories, update_category_amount};
    use greenfield_core::runway::{RunwayService, RunwayServiceTrait};
    use greenfield_core::wage::{WageService, WageServiceTrait};
    use greenfield_core::work::{WorkCosts, WorkHours};
    use rust_decimal_macros::dec;

    /// Provider returning a fixed narrative, or an error when none is set.
    struct MockProvider {
        reply: Option<String>,
    }

    impl MockProvider {
        fn with_reply(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply.to_string()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self { reply: None })
        }
    }

    #[async_trait]
    impl InsightProvider for MockProvider {
        async fn narrate(&self, _prompt: &str) -> Result<String, CopilotError> {
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => Err(CopilotError::provider("mock provider failure")),
            }
        }
    }

    fn sample_context() -> BriefingContext {
        let categories = default_categories();
        let categories = update_category_amount(&categories, "housing", dec!(1500));
        let categories = update_category_amount(&categories, "groceries", dec!(500));
        let categories = update_category_amount(&categories, "dining-out", dec!(300));
        let runway = RunwayService::new().calculate_runway(&categories, dec!(24000));

        let wage = WageService::new().calculate_real_hourly_wage(
            dec!(62400),
            &WorkHours {
                weekly_hours: dec!(40),
                commute_daily_minutes: dec!(30),
                work_days_per_week: dec!(5),
            },
            &WorkCosts::default(),
        );

        let responses: Vec<CognitiveDebtResponse> =
            greenfield_core::cognitive::create_assessment_questions()
                .iter()
                .map(|q| CognitiveDebtResponse {
                    question_id: q.id.clone(),
                    score: 1,
                })
                .collect();
        let cognitive = CognitiveDebtService::new().calculate_cognitive_debt(&responses);

        BriefingContext {
            runway: Some(runway),
            wage: Some(wage),
            cognitive: Some(cognitive),
            bets: None,
        }
    }

    #[tokio::test]
    async fn test_template_mode_without_api_key() {
        let env = Arc::new(MockEnvironment::new());
        let service = CopilotService::initialize(env, MockProvider::failing()).unwrap();
        assert_eq!(service.mode(), CopilotMode::Template);

        // The failing provider is never consulted in template mode.
        let briefing = service.generate_briefing(&sample_context()).await.unwrap();
        assert_eq!(briefing.mode, CopilotMode::Template);
        assert!(briefing.narrative.is_none());
        assert_eq!(briefing.sections.len(), 3);
        assert!(!briefing.headline.is_empty());
    }

    #[tokio::test]
    async fn test_enhanced_mode_with_api_key() {
        let env = Arc::new(MockEnvironment::new().with_api_key("sk-test"));
        let provider = MockProvider::with_reply("Your numbers look steady this month.");
        let service = CopilotService::initialize(env, provider).unwrap();
        assert_eq!(service.mode(), CopilotMode::Enhanced);

        let briefing = service.generate_briefing(&sample_context()).await.unwrap();
        assert_eq!(briefing.mode, CopilotMode::Enhanced);
        assert_eq!(
            briefing.narrative.as_deref(),
            Some("Your numbers look steady this month.")
        );
        // The deterministic sections ride along with the narrative.
        assert_eq!(briefing.sections.len(), 3);
    }

    #[tokio::test]
    async fn test_enhanced_provider_failure_surfaces() {
        let env = Arc::new(MockEnvironment::new().with_api_key("sk-test"));
        let service = CopilotService::initialize(env, MockProvider::failing()).unwrap();

        let err = service
            .generate_briefing(&sample_context())
            .await
            .unwrap_err();
        assert!(matches!(err, CopilotError::Provider(_)));
        assert_eq!(err.code(), "PROVIDER_ERROR");
    }

    #[tokio::test]
    async fn test_template_briefing_deterministic() {
        let env = Arc::new(MockEnvironment::new());
        let service = CopilotService::initialize(env, MockProvider::failing()).unwrap();

        let ctx = sample_context();
        let first = service.generate_briefing(&ctx).await.unwrap();
        let second = service.generate_briefing(&ctx).await.unwrap();
        assert_eq!(first.headline, second.headline);
        assert_eq!(first.sections, second.sections);
    }

    #[tokio::test]
    async fn test_empty_context_briefing() {
        let env = Arc::new(MockEnvironment::new());
        let service = CopilotService::initialize(env, MockProvider::failing()).unwrap();

        let briefing = service
            .generate_briefing(&BriefingContext::default())
            .await
            .unwrap();
        assert_eq!(briefing.headline, "Your briefing is waiting on its first numbers.");
        assert_eq!(briefing.sections.len(), 1);
        assert_eq!(briefing.sections[0].title, "Getting Started");
    }

    #[test]
    fn test_initialize_rejects_blank_model_in_enhanced_mode() {
        let env = Arc::new(
            MockEnvironment::new()
                .with_api_key("sk-test")
                .with_model_id(""),
        );
        let err = CopilotService::initialize(env, MockProvider::failing()).unwrap_err();
        assert!(matches!(err, CopilotError::InvalidInput(_)));
    }

    #[test]
    fn test_blank_model_is_fine_in_template_mode() {
        let env = Arc::new(MockEnvironment::new().with_model_id(""));
        let service = CopilotService::initialize(env, MockProvider::failing()).unwrap();
        assert_eq!(service.mode(), CopilotMode::Template);
        service.dispose();
    }

    #[tokio::test]
    async fn test_enhanced_prompt_carries_locale() {
        /// Provider that records the prompt it was given.
        struct RecordingProvider {
            prompts: std::sync::Mutex<Vec<String>>,
        }

        #[async_trait]
        impl InsightProvider for RecordingProvider {
            async fn narrate(&self, prompt: &str) -> Result<String, CopilotError> {
                self.prompts.lock().unwrap().push(prompt.to_string());
                Ok("ok".to_string())
            }
        }

        let env = Arc::new(
            MockEnvironment::new()
                .with_api_key("sk-test")
                .with_locale("fr-FR"),
        );
        let provider = Arc::new(RecordingProvider {
            prompts: std::sync::Mutex::new(Vec::new()),
        });
        let service = CopilotService::initialize(env, provider.clone()).unwrap();

        service.generate_briefing(&sample_context()).await.unwrap();

        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].starts_with("You are the briefing co-pilot"));
        assert!(prompts[0].contains("Runway:"));
        assert!(prompts[0].ends_with("fr-FR"));
    }
}
