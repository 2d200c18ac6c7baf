use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::cognitive_model::{
    CategoryScore, CognitiveCategory, CognitiveDebtResponse, CognitiveDebtResult, RiskLevel,
    MAX_RESPONSE_SCORE,
};
use super::cognitive_traits::CognitiveDebtServiceTrait;
use super::question_bank::create_assessment_questions;
use crate::constants::DISPLAY_DECIMAL_PRECISION;

// Hand-tuned percentage cutoffs, preserved exactly
const CRITICAL_THRESHOLD: Decimal = dec!(75);
const HIGH_THRESHOLD: Decimal = dec!(50);
const MODERATE_THRESHOLD: Decimal = dec!(25);
const PRIMARY_CONCERN_THRESHOLD: Decimal = dec!(60);
const CATEGORY_RECOMMENDATION_THRESHOLD: Decimal = dec!(50);

/// Burnout assessment scorer.
pub struct CognitiveDebtService;

impl CognitiveDebtService {
    /// Creates a new CognitiveDebtService instance
    pub fn new() -> Self {
        Self
    }
}

impl Default for CognitiveDebtService {
    fn default() -> Self {
        Self::new()
    }
}

impl CognitiveDebtServiceTrait for CognitiveDebtService {
    /// Scores responses into six weighted category scores, an overall
    /// percentage, a risk level and a narrative with recommendations.
    fn calculate_cognitive_debt(
        &self,
        responses: &[CognitiveDebtResponse],
    ) -> CognitiveDebtResult {
        debug!("Scoring cognitive debt assessment: {} responses", responses.len());

        let questions = create_assessment_questions();

        // Later duplicates overwrite earlier answers; scores clamp to the
        // top of the scale
        let mut by_question: HashMap<&str, u8> = HashMap::new();
        for response in responses {
            by_question.insert(
                response.question_id.as_str(),
                response.score.min(MAX_RESPONSE_SCORE),
            );
        }

        // 1. Accumulate weighted score and weighted maximum per category
        let mut totals: HashMap<CognitiveCategory, (Decimal, Decimal)> = HashMap::new();
        for question in &questions {
            let score = by_question.get(question.id.as_str()).copied().unwrap_or(0);
            let weighted = Decimal::from(score) * question.weight;
            let weighted_max = Decimal::from(MAX_RESPONSE_SCORE) * question.weight;

            let entry = totals.entry(question.category).or_insert((Decimal::ZERO, Decimal::ZERO));
            entry.0 += weighted;
            entry.1 += weighted_max;
        }

        // 2. Per-category percentages, in catalog order
        let mut raw_scores: Vec<(CognitiveCategory, Decimal, Decimal, Decimal)> = Vec::new();
        for category in CognitiveCategory::ALL {
            let (score, max_score) = totals
                .get(&category)
                .copied()
                .unwrap_or((Decimal::ZERO, Decimal::ZERO));
            let percentage = percentage_of(score, max_score);
            raw_scores.push((category, score, max_score, percentage));
        }

        // 3. Overall score and risk level
        let total_score: Decimal = raw_scores.iter().map(|(_, score, _, _)| *score).sum();
        let max_possible_score: Decimal = raw_scores.iter().map(|(_, _, max, _)| *max).sum();
        let percentage_score = percentage_of(total_score, max_possible_score);

        let risk_level = if percentage_score >= CRITICAL_THRESHOLD {
            RiskLevel::Critical
        } else if percentage_score >= HIGH_THRESHOLD {
            RiskLevel::High
        } else if percentage_score >= MODERATE_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        };

        // 4. Concerns above 60%, highest first; catalog order breaks ties
        let mut concerns: Vec<(CognitiveCategory, Decimal)> = raw_scores
            .iter()
            .filter(|(_, _, _, pct)| *pct > PRIMARY_CONCERN_THRESHOLD)
            .map(|(category, _, _, pct)| (*category, *pct))
            .collect();
        concerns.sort_by(|a, b| b.1.cmp(&a.1));
        let primary_concerns: Vec<CognitiveCategory> =
            concerns.iter().map(|(category, _)| *category).collect();

        let recommendations = build_recommendations(risk_level, &raw_scores);
        let message = build_message(risk_level, percentage_score, &primary_concerns);

        let category_scores = raw_scores
            .into_iter()
            .map(|(category, score, max_score, percentage)| CategoryScore {
                category,
                score: score.round_dp(DISPLAY_DECIMAL_PRECISION),
                max_score: max_score.round_dp(DISPLAY_DECIMAL_PRECISION),
                percentage: percentage.round_dp(DISPLAY_DECIMAL_PRECISION),
            })
            .collect();

        CognitiveDebtResult {
            category_scores,
            total_score: total_score.round_dp(DISPLAY_DECIMAL_PRECISION),
            max_possible_score: max_possible_score.round_dp(DISPLAY_DECIMAL_PRECISION),
            percentage_score: percentage_score.round_dp(DISPLAY_DECIMAL_PRECISION),
            risk_level,
            primary_concerns,
            recommendations,
            message,
        }
    }
}

/// Share of `max` that `value` represents, zero when `max` is zero.
fn percentage_of(value: Decimal, max: Decimal) -> Decimal {
    if max > Decimal::ZERO {
        value / max * dec!(100)
    } else {
        Decimal::ZERO
    }
}

/// Risk-gated advice first, then a pair of concrete suggestions for every
/// category past 50%, in catalog order. Falls back to two maintenance
/// notes when nothing triggered.
fn build_recommendations(
    risk_level: RiskLevel,
    raw_scores: &[(CognitiveCategory, Decimal, Decimal, Decimal)],
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if risk_level == RiskLevel::Critical {
        recommendations.push(
            "This level of depletion is not a willpower problem. Talk to a professional about burnout now, not after the next deadline."
                .to_string(),
        );
        recommendations.push(
            "Treat recovery as the project: sleep, time off and medical support come before any career move."
                .to_string(),
        );
    }
    if matches!(risk_level, RiskLevel::High | RiskLevel::Critical) {
        recommendations.push(
            "Start a concrete exit plan: a runway number, a date, and one person who will hold you to it."
                .to_string(),
        );
        recommendations.push(
            "Cut scope at work to the minimum your role survives; you need margin more than approval."
                .to_string(),
        );
    }

    for (category, _, _, percentage) in raw_scores {
        if *percentage > CATEGORY_RECOMMENDATION_THRESHOLD {
            let (first, second) = category_recommendations(*category);
            recommendations.push(first.to_string());
            recommendations.push(second.to_string());
        }
    }

    if recommendations.is_empty() {
        recommendations.push(
            "Your load is manageable; keep the habits that are working.".to_string(),
        );
        recommendations.push(
            "Re-take the assessment after your next crunch period to catch drift early."
                .to_string(),
        );
    }

    recommendations
}

fn category_recommendations(category: CognitiveCategory) -> (&'static str, &'static str) {
    match category {
        CognitiveCategory::MentalFog => (
            "Single-task in blocks and write things down; your memory is overloaded, not broken.",
            "Defend at least one two-hour stretch a day with no meetings and no feeds.",
        ),
        CognitiveCategory::EmotionalExhaustion => (
            "Schedule recovery like meetings; unstructured collapse is not rest.",
            "Say no to one recurring drain this week and watch what it returns.",
        ),
        CognitiveCategory::CreativeShutdown => (
            "Make something small and useless on purpose; creativity restarts at low stakes.",
            "Change one input: a different route, author or tool can unstick the pattern.",
        ),
        CognitiveCategory::RelationshipDecay => (
            "Book time with one person who knew you before this job.",
            "Put the phone in another room for one shared meal a day.",
        ),
        CognitiveCategory::PhysicalSymptoms => (
            "Get the symptoms checked; stress wears bodies in ways that outlast jobs.",
            "Walk daily; the point is a nervous-system downshift, not fitness.",
        ),
        CognitiveCategory::IdentityErosion => (
            "Reintroduce one pre-job identity each week: the runner, the cook, the reader.",
            "Write down what you would keep doing if nobody paid you, and protect an hour for it.",
        ),
    }
}

fn build_message(
    risk_level: RiskLevel,
    percentage_score: Decimal,
    primary_concerns: &[CognitiveCategory],
) -> String {
    let display_pct = percentage_score.round_dp(0).normalize();

    match risk_level {
        RiskLevel::Low => format!(
            "Your cognitive debt score is {}%. The work is taking what it needs, not everything you have.",
            display_pct
        ),
        RiskLevel::Moderate => format!(
            "Your cognitive debt score is {}%. The early warning lights are on; small structural changes now beat dramatic ones later.",
            display_pct
        ),
        RiskLevel::High => format!(
            "Your cognitive debt score is {}%, driven mainly by {}. The pattern is established and will not reverse on its own.",
            display_pct,
            format_concern_list(primary_concerns)
        ),
        RiskLevel::Critical => format!(
            "Your cognitive debt score is {}%. This is a depletion emergency; recovery has to become the primary project.",
            display_pct
        ),
    }
}

/// Joins concern names for the narrative: bare name, "a and b", or an
/// Oxford-comma list for three or more.
fn format_concern_list(concerns: &[CognitiveCategory]) -> String {
    let names: Vec<String> = concerns
        .iter()
        .map(|category| category.as_str().replace('_', " "))
        .collect();

    match names.len() {
        0 => "sustained overload across the board".to_string(),
        1 => names[0].clone(),
        2 => format!("{} and {}", names[0], names[1]),
        _ => {
            let head = names[..names.len() - 1].join(", ");
            format!("{}, and {}", head, names[names.len() - 1])
        }
    }
}

// ============== Tests ==============
