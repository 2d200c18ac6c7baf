use super::cognitive_model::{CognitiveDebtResponse, CognitiveDebtResult};

/// Contract for the burnout assessment scorer.
pub trait CognitiveDebtServiceTrait: Send + Sync {
    /// Scores a set of responses against the fixed catalog. Missing
    /// answers count as zero, later duplicates win, and out-of-range
    /// scores are clamped, so the operation never fails.
    fn calculate_cognitive_debt(&self, responses: &[CognitiveDebtResponse]) -> CognitiveDebtResult;
}
