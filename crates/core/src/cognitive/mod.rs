//! Cognitive module - the burnout ("cognitive debt") assessment.
//!
//! A fixed, weighted questionnaire scored into six category percentages,
//! an overall risk level, primary concerns and recommendations. The
//! catalog is immutable at runtime; answering state belongs to the caller
//! and only the final response list crosses into the scorer.

mod cognitive_model;
mod cognitive_service;
mod cognitive_traits;
mod question_bank;

// Re-export the public interface
pub use cognitive_model::{
    CategoryScore, CognitiveCategory, CognitiveDebtQuestion, CognitiveDebtResponse,
    CognitiveDebtResult, RiskLevel, MAX_RESPONSE_SCORE,
};
pub use cognitive_service::CognitiveDebtService;
pub use cognitive_traits::CognitiveDebtServiceTrait;
pub use question_bank::create_assessment_questions;
