//! Canned briefing templates.
//!
//! Template mode interpolates these sections directly; Enhanced mode reuses
//! the same text as the prompt scaffold, so both modes describe exactly the
//! same facts and only the prose differs.

use rust_decimal::Decimal;

use greenfield_core::bets::BetsSummary;
use greenfield_core::cognitive::{CognitiveDebtResult, RiskLevel};
use greenfield_core::constants::DISPLAY_DECIMAL_PRECISION;
use greenfield_core::runway::RunwayResult;
use greenfield_core::wage::RealWageCalculation;

use crate::types::{BriefingContext, BriefingSection};

/// Instruction preamble for the Enhanced-mode prompt.
const PROMPT_PREAMBLE: &str = "You are the briefing co-pilot for a personal financial-liberation toolkit. \
Write a short narrative (3 to 5 sentences) over the figures below.\n\
Rules:\n\
- Use only the figures given, never invent numbers\n\
- Plain text, no markdown, no bullet lists\n\
- Speak to the reader as \"you\"\n\
- No investment advice and no product recommendations";

// ============================================================================
// Section Composition
// ============================================================================

/// Build the briefing sections for a context, in fixed order: runway, real
/// wage, cognitive debt, small bets. Missing results are skipped; an empty
/// context yields a single getting-started section.
pub fn build_briefing_sections(ctx: &BriefingContext) -> Vec<BriefingSection> {
    if ctx.is_empty() {
        return vec![BriefingSection {
            title: "Getting Started".to_string(),
            body: "No calculator results yet. Run the runway, wage, assessment, or \
                   small-bets tools and the briefing will build itself from those numbers."
                .to_string(),
        }];
    }

    let mut sections = Vec::new();
    if let Some(runway) = &ctx.runway {
        sections.push(runway_section(runway));
    }
    if let Some(wage) = &ctx.wage {
        sections.push(wage_section(wage));
    }
    if let Some(cognitive) = &ctx.cognitive {
        sections.push(cognitive_section(cognitive));
    }
    if let Some(bets) = &ctx.bets {
        sections.push(bets_section(bets));
    }
    sections
}

fn runway_section(result: &RunwayResult) -> BriefingSection {
    BriefingSection {
        title: "Runway".to_string(),
        body: format!(
            "Essential spending is {} per month and {} with discretionary included. \
             Runway on current savings of {}: {}.",
            fmt_money(result.essential_monthly_expenses),
            fmt_money(result.total_monthly_expenses),
            fmt_money(result.current_savings),
            result.runway_display,
        ),
    }
}

fn wage_section(result: &RealWageCalculation) -> BriefingSection {
    BriefingSection {
        title: "Real Wage".to_string(),
        body: format!(
            "The stated rate is {} per hour. After commute time and {} per month \
             of job costs, the real rate is {} per hour across {} working hours a month.",
            fmt_money(result.stated_hourly_wage),
            fmt_money(result.total_monthly_costs),
            fmt_money(result.real_hourly_wage),
            fmt_number(result.total_monthly_hours),
        ),
    }
}

fn cognitive_section(result: &CognitiveDebtResult) -> BriefingSection {
    let mut body = format!(
        "The assessment scores {}% overall, {} risk.",
        fmt_percent(result.percentage_score),
        result.risk_level,
    );
    match result.primary_concerns.first() {
        Some(concern) => body.push_str(&format!(" The leading concern is {}.", concern.label())),
        None => body.push_str(" No single category stands out."),
    }
    BriefingSection {
        title: "Cognitive Debt".to_string(),
        body,
    }
}

fn bets_section(summary: &BetsSummary) -> BriefingSection {
    let body = if summary.active_count == 0 {
        "No bets are active yet.".to_string()
    } else {
        let lead = if summary.active_count == 1 {
            format!(
                "1 active bet brings in {} per month",
                fmt_money(summary.total_monthly_income)
            )
        } else {
            format!(
                "{} active bets bring in {} per month",
                summary.active_count,
                fmt_money(summary.total_monthly_income)
            )
        };
        let mut body = format!(
            "{}, covering {}% of essential spending.",
            lead,
            fmt_percent(summary.essential_coverage_percent)
        );
        if summary.fully_covered {
            body.push_str(" Bet income alone now meets essential expenses.");
        }
        body
    };
    BriefingSection {
        title: "Small Bets".to_string(),
        body,
    }
}

// ============================================================================
// Headline
// ============================================================================

/// Pick the one-line headline for a context.
///
/// A high or critical cognitive-debt result outranks every financial figure;
/// after that the ladder is runway, wage, bets, then the remaining low or
/// moderate assessment.
pub fn compose_headline(ctx: &BriefingContext) -> String {
    if let Some(cognitive) = &ctx.cognitive {
        if cognitive.risk_level >= RiskLevel::High {
            return format!(
                "Recovery comes first: cognitive debt is running {} risk.",
                cognitive.risk_level
            );
        }
    }
    if let Some(runway) = &ctx.runway {
        return format!("Runway check: {} at essentials only.", runway.runway_display);
    }
    if let Some(wage) = &ctx.wage {
        return format!(
            "Real wage: {} per hour against a stated {}.",
            fmt_money(wage.real_hourly_wage),
            fmt_money(wage.stated_hourly_wage)
        );
    }
    if let Some(bets) = &ctx.bets {
        return format!(
            "Side income covers {}% of essential spending.",
            fmt_percent(bets.essential_coverage_percent)
        );
    }
    match &ctx.cognitive {
        // Only a low or moderate assessment is left at this point.
        Some(cognitive) => format!(
            "Cognitive debt sits at {}%, {} risk.",
            fmt_percent(cognitive.percentage_score),
            cognitive.risk_level
        ),
        None => "Your briefing is waiting on its first numbers.".to_string(),
    }
}

// ============================================================================
// Prompt Scaffold
// ============================================================================

/// Build the Enhanced-mode prompt from the composed sections.
///
/// The sections are the same text Template mode would emit, preceded by the
/// narration rules and followed by a locale instruction when the locale is
/// configured and non-default.
pub fn compose_briefing_prompt(sections: &[BriefingSection], locale: Option<&str>) -> String {
    let mut parts = Vec::new();
    parts.push(PROMPT_PREAMBLE.to_string());

    for section in sections {
        parts.push(format!("{}:\n{}", section.title, section.body));
    }

    if let Some(loc) = locale {
        if !loc.is_empty() && loc != "en-US" {
            parts.push(format!(
                "LOCALE:\nRespond in the language and formatting conventions for: {}",
                loc
            ));
        }
    }

    parts.join("\n\n")
}

// ============================================================================
// Formatting Helpers
// ============================================================================

// normalize() strips trailing zeros so the narration is stable regardless
// of how much scale the engine arithmetic carried.
fn fmt_money(amount: Decimal) -> String {
    format!("${}", amount.round_dp(DISPLAY_DECIMAL_PRECISION).normalize())
}

fn fmt_number(value: Decimal) -> String {
    value.round_dp(1).normalize().to_string()
}

fn fmt_percent(pct: Decimal) -> String {
    pct.round_dp(0).normalize().to_string()
}

// ============================================================================
// Tests
// ============================================================================
