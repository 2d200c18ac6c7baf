//! Cognitive debt domain models.
//!
//! This module contains the core data structures for the burnout
//! assessment:
//! - The six scored categories and four risk levels
//! - Questions, responses and per-category scores
//! - The aggregated assessment result

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Highest score a single response can carry.
pub const MAX_RESPONSE_SCORE: u8 = 4;

// =============================================================================
// Categories
// =============================================================================

/// The six dimensions the assessment scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveCategory {
    MentalFog,
    EmotionalExhaustion,
    CreativeShutdown,
    RelationshipDecay,
    PhysicalSymptoms,
    IdentityErosion,
}

impl CognitiveCategory {
    /// Every category, in catalog order. Scoring, concern ordering and
    /// recommendation output all iterate in this order.
    pub const ALL: [CognitiveCategory; 6] = [
        CognitiveCategory::MentalFog,
        CognitiveCategory::EmotionalExhaustion,
        CognitiveCategory::CreativeShutdown,
        CognitiveCategory::RelationshipDecay,
        CognitiveCategory::PhysicalSymptoms,
        CognitiveCategory::IdentityErosion,
    ];

    /// Returns the string representation of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            CognitiveCategory::MentalFog => "mental_fog",
            CognitiveCategory::EmotionalExhaustion => "emotional_exhaustion",
            CognitiveCategory::CreativeShutdown => "creative_shutdown",
            CognitiveCategory::RelationshipDecay => "relationship_decay",
            CognitiveCategory::PhysicalSymptoms => "physical_symptoms",
            CognitiveCategory::IdentityErosion => "identity_erosion",
        }
    }

    /// Returns a human-friendly label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            CognitiveCategory::MentalFog => "Mental Fog",
            CognitiveCategory::EmotionalExhaustion => "Emotional Exhaustion",
            CognitiveCategory::CreativeShutdown => "Creative Shutdown",
            CognitiveCategory::RelationshipDecay => "Relationship Decay",
            CognitiveCategory::PhysicalSymptoms => "Physical Symptoms",
            CognitiveCategory::IdentityErosion => "Identity Erosion",
        }
    }
}

impl std::fmt::Display for CognitiveCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Risk level
// =============================================================================

/// Overall risk classification.
///
/// Ordered from lowest to highest: Low < Moderate < High < Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// Returns the string representation of this risk level.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Questions and responses
// =============================================================================

/// One item from the fixed assessment catalog. Immutable at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveDebtQuestion {
    pub id: String,
    pub category: CognitiveCategory,
    pub question: String,
    pub description: String,
    /// Positive multiplier in the 1.0 to 1.5 range; heavier questions
    /// move the category score more.
    pub weight: Decimal,
}

/// A single answer on the 0 (never) to 4 (constantly) scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveDebtResponse {
    pub question_id: String,
    pub score: u8,
}

// =============================================================================
// Results
// =============================================================================

/// Weighted score for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: CognitiveCategory,
    pub score: Decimal,
    pub max_score: Decimal,
    pub percentage: Decimal,
}

/// The full output of a scored assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveDebtResult {
    /// One entry per category, in catalog order.
    pub category_scores: Vec<CategoryScore>,
    pub total_score: Decimal,
    pub max_possible_score: Decimal,
    pub percentage_score: Decimal,
    pub risk_level: RiskLevel,
    /// Categories scoring above 60%, highest first.
    pub primary_concerns: Vec<CognitiveCategory>,
    pub recommendations: Vec<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_serialize_snake_case_and_risk_lowercase() {
        let category = serde_json::to_value(CognitiveCategory::MentalFog).unwrap();
        assert_eq!(category, "mental_fog");

        let risk = serde_json::to_value(RiskLevel::Moderate).unwrap();
        assert_eq!(risk, "moderate");
    }

    #[test]
    fn test_risk_levels_order_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }
}
