use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::bets_model::{BetStatus, BetsSummary, SmallBet};
use super::bets_traits::BetsServiceTrait;
use crate::constants::{DISPLAY_DECIMAL_PRECISION, WEEKS_PER_MONTH};
use crate::runway::format_runway_display;

// A single bet past this share of income reads as concentration risk
const CONCENTRATION_SHARE: Decimal = dec!(60);

/// Small-bets portfolio summarizer.
pub struct BetsService;

impl BetsService {
    /// Creates a new BetsService instance
    pub fn new() -> Self {
        Self
    }
}

impl Default for BetsService {
    fn default() -> Self {
        Self::new()
    }
}

impl BetsServiceTrait for BetsService {
    /// Rolls active bets up into income, coverage of essentials, the net
    /// burn they leave, and how far savings stretch at that burn.
    fn summarize_portfolio(
        &self,
        bets: &[SmallBet],
        essential_monthly_expenses: Decimal,
        savings: Decimal,
    ) -> BetsSummary {
        debug!("Summarizing bet portfolio: {} bets", bets.len());

        let savings = savings.max(Decimal::ZERO);
        let essential = essential_monthly_expenses.max(Decimal::ZERO);

        let active: Vec<&SmallBet> = bets
            .iter()
            .filter(|bet| bet.status == BetStatus::Active)
            .collect();

        let total_income: Decimal = active.iter().map(|bet| bet.monthly_income).sum();
        let total_hours: Decimal = active.iter().map(|bet| bet.hours_per_week).sum();

        let monthly_hours = total_hours * WEEKS_PER_MONTH;
        let effective_hourly_rate = if monthly_hours > Decimal::ZERO {
            total_income / monthly_hours
        } else {
            Decimal::ZERO
        };

        let coverage = if essential > Decimal::ZERO {
            total_income / essential * dec!(100)
        } else {
            Decimal::ZERO
        };

        let net_burn = (essential - total_income).max(Decimal::ZERO);
        let extended_months = if net_burn > Decimal::ZERO {
            savings / net_burn
        } else {
            Decimal::ZERO
        };
        let fully_covered = essential > Decimal::ZERO && total_income >= essential;

        let insights = portfolio_insights(&active, total_income, coverage, extended_months);

        BetsSummary {
            active_count: active.len(),
            total_monthly_income: total_income.round_dp(DISPLAY_DECIMAL_PRECISION),
            total_weekly_hours: total_hours.round_dp(DISPLAY_DECIMAL_PRECISION),
            effective_hourly_rate: effective_hourly_rate.round_dp(DISPLAY_DECIMAL_PRECISION),
            essential_coverage_percent: coverage.round_dp(DISPLAY_DECIMAL_PRECISION),
            net_monthly_burn: net_burn.round_dp(DISPLAY_DECIMAL_PRECISION),
            extended_runway_months: extended_months.round_dp(DISPLAY_DECIMAL_PRECISION),
            extended_runway_display: format_runway_display(extended_months),
            fully_covered,
            insights,
        }
    }
}

fn portfolio_insights(
    active: &[&SmallBet],
    total_income: Decimal,
    coverage: Decimal,
    extended_months: Decimal,
) -> Vec<String> {
    let mut insights = Vec::new();

    let coverage_reading = if coverage >= dec!(100) {
        "Your bets fully cover essential expenses. The job is now optional."
    } else if coverage >= dec!(50) {
        "Bets cover more than half of essentials; each new client halves the remaining gap."
    } else if coverage >= dec!(25) {
        "A quarter of essentials already comes from your own work; the flywheel is turning."
    } else if coverage > Decimal::ZERO {
        "First outside income is flowing. Scale whatever produced it."
    } else {
        "No active income yet; pick the bet with the shortest path to a first dollar."
    };
    insights.push(coverage_reading.to_string());

    if total_income > Decimal::ZERO {
        let concentrated = active.iter().find(|bet| {
            bet.monthly_income / total_income * dec!(100) > CONCENTRATION_SHARE
        });
        match concentrated {
            Some(bet) if active.len() >= 2 => {
                insights.push(format!(
                    "{} carries over 60% of bet income; a second strong bet would de-risk it.",
                    bet.name
                ));
            }
            None if active.len() >= 3 => {
                insights.push(
                    "Income is spread across several bets; no single failure ends the experiment."
                        .to_string(),
                );
            }
            _ => {}
        }
    }

    if extended_months > Decimal::ZERO && total_income > Decimal::ZERO {
        insights.push(format!(
            "With bet income offsetting the burn, your savings now cover {}.",
            format_runway_display(extended_months)
        ));
    }

    insights
}

// ============== Tests ==============
