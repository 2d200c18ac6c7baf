//! Shared DTOs for the briefing co-pilot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use greenfield_core::bets::BetsSummary;
use greenfield_core::cognitive::CognitiveDebtResult;
use greenfield_core::runway::RunwayResult;
use greenfield_core::wage::RealWageCalculation;

// ============================================================================
// Mode
// ============================================================================

/// Narration strategy, selected once at service initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopilotMode {
    /// Narrative written by an external completion endpoint.
    Enhanced,
    /// Deterministic canned-template narration, no network access.
    Template,
}

impl CopilotMode {
    /// Returns the string representation of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            CopilotMode::Enhanced => "enhanced",
            CopilotMode::Template => "template",
        }
    }
}

impl std::fmt::Display for CopilotMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Briefing Context
// ============================================================================

/// Snapshot of engine results the caller wants narrated.
///
/// Every field is optional; the caller passes whatever the user has filled
/// in so far. The co-pilot never runs the engines itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runway: Option<RunwayResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wage: Option<RealWageCalculation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cognitive: Option<CognitiveDebtResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bets: Option<BetsSummary>,
}

impl BriefingContext {
    /// True when no engine result has been supplied at all.
    pub fn is_empty(&self) -> bool {
        self.runway.is_none()
            && self.wage.is_none()
            && self.cognitive.is_none()
            && self.bets.is_none()
    }
}

// ============================================================================
// Briefing
// ============================================================================

/// One titled block of the composed briefing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingSection {
    pub title: String,
    pub body: String,
}

/// A composed briefing over the supplied engine results.
///
/// `sections` and `headline` are deterministic template output in both
/// modes; `narrative` is present only in Enhanced mode and carries the
/// completion endpoint's prose.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopilotBriefing {
    pub mode: CopilotMode,
    pub headline: String,
    pub sections: Vec<BriefingSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    pub generated_at: DateTime<Utc>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CopilotMode::Enhanced).unwrap(), "\"enhanced\"");
        assert_eq!(serde_json::to_string(&CopilotMode::Template).unwrap(), "\"template\"");
    }

    #[test]
    fn test_empty_context() {
        let ctx = BriefingContext::default();
        assert!(ctx.is_empty());

        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_briefing_serializes_camel_case() {
        let briefing = CopilotBriefing {
            mode: CopilotMode::Template,
            headline: "h".to_string(),
            sections: vec![BriefingSection {
                title: "t".to_string(),
                body: "b".to_string(),
            }],
            narrative: None,
            generated_at: Utc::now(),
        };

        let json = serde_json::to_value(&briefing).unwrap();
        assert_eq!(json["mode"], "template");
        assert!(json.get("generatedAt").is_some());
        assert!(json.get("narrative").is_none());
    }
}
