//! Greenfield Co-pilot - briefing narration over calculator results.
//!
//! This crate composes a short briefing from whatever engine results the
//! caller supplies. One configurable component covers both narration
//! strategies: deterministic canned templates, or an OpenAI-compatible
//! completion endpoint when the user has configured an API key. The
//! strategy is selected once at initialization and never changes at
//! runtime.
//!
//! # Architecture
//!
//! - `service`: Briefing service with the mode fixed at initialization
//! - `templates`: Canned section templates, headline ladder, prompt scaffold
//! - `provider`: `InsightProvider` trait and the HTTP completion provider
//! - `env`: Environment abstraction for API key/model/locale configuration
//! - `types`: Briefing DTOs shared with the UI layer
//! - `error`: Error types
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use greenfield_copilot::{BriefingContext, CopilotService, HttpInsightProvider};
//!
//! // The embedding application implements CopilotEnvironment.
//! let env = Arc::new(app_environment());
//!
//! // Any InsightProvider works; the HTTP one targets /v1/chat/completions.
//! let provider = Arc::new(HttpInsightProvider::new(
//!     "http://localhost:8080",
//!     "gpt-4o-mini",
//!     None,
//! ));
//!
//! let copilot = CopilotService::initialize(env, provider)?;
//! let briefing = copilot.generate_briefing(&BriefingContext {
//!     runway: Some(runway_result),
//!     ..Default::default()
//! }).await?;
//!
//! println!("{}", briefing.headline);
//! copilot.dispose();
//! ```

pub mod env;
pub mod error;
pub mod provider;
pub mod service;
pub mod templates;
pub mod types;

// Re-export the main types for convenience
pub use env::CopilotEnvironment;
pub use error::CopilotError;
pub use provider::{HttpInsightProvider, InsightProvider};
pub use service::CopilotService;
pub use templates::{build_briefing_sections, compose_briefing_prompt, compose_headline};
pub use types::{BriefingContext, BriefingSection, CopilotBriefing, CopilotMode};
