//! Savings runway domain models.
//!
//! This module contains the data structures for the runway calculator:
//! - Viability tiers for transition scenarios
//! - Comparative scenarios and stress tests
//! - The aggregated runway result

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Viability
// =============================================================================

/// How survivable a transition scenario looks at its runway length.
///
/// Ordered from worst to best: Risky < Challenging < Good < Excellent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViabilityTier {
    Risky,
    Challenging,
    Good,
    Excellent,
}

impl ViabilityTier {
    /// Returns the string representation of this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViabilityTier::Risky => "risky",
            ViabilityTier::Challenging => "challenging",
            ViabilityTier::Good => "good",
            ViabilityTier::Excellent => "excellent",
        }
    }

    /// Returns a human-friendly label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            ViabilityTier::Risky => "Risky",
            ViabilityTier::Challenging => "Challenging",
            ViabilityTier::Good => "Good",
            ViabilityTier::Excellent => "Excellent",
        }
    }
}

impl std::fmt::Display for ViabilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Scenarios
// =============================================================================

/// One comparative spending scenario derived from the same savings balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunwayScenario {
    pub name: String,
    pub description: String,
    pub monthly_expenses: Decimal,
    pub runway_months: Decimal,
    pub runway_display: String,
    pub viability: ViabilityTier,
    pub insights: Vec<String>,
}

/// A shock applied to the essential-only baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressTestScenario {
    pub name: String,
    pub description: String,
    pub adjusted_monthly_expenses: Decimal,
    pub runway_months: Decimal,
    pub runway_display: String,
    /// Narrative of the reduction versus the unstressed baseline.
    pub impact: String,
}

// =============================================================================
// Result
// =============================================================================

/// The full output of a runway calculation. Recomputed from scratch on
/// every input change and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunwayResult {
    pub total_monthly_expenses: Decimal,
    pub essential_monthly_expenses: Decimal,
    pub current_savings: Decimal,
    /// Months of essential spending the savings cover. Zero when there are
    /// no essential expenses.
    pub runway_months: Decimal,
    pub runway_display: String,
    pub scenarios: Vec<RunwayScenario>,
    pub stress_tests: Vec<StressTestScenario>,
    pub insights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_scenario_serializes_camel_case_with_lowercase_tier() {
        let scenario = RunwayScenario {
            name: "Bare Minimum".to_string(),
            description: "Essential expenses only".to_string(),
            monthly_expenses: dec!(2000),
            runway_months: dec!(6),
            runway_display: "6 months".to_string(),
            viability: ViabilityTier::Good,
            insights: vec![],
        };

        let json = serde_json::to_value(&scenario).unwrap();
        assert_eq!(json["monthlyExpenses"], serde_json::json!(2000.0));
        assert_eq!(json["viability"], "good");
    }

    #[test]
    fn test_tiers_order_from_worst_to_best() {
        assert!(ViabilityTier::Risky < ViabilityTier::Challenging);
        assert!(ViabilityTier::Challenging < ViabilityTier::Good);
        assert!(ViabilityTier::Good < ViabilityTier::Excellent);
    }
}
