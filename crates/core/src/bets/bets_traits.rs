use rust_decimal::Decimal;

use super::bets_model::{BetsSummary, SmallBet};

/// Contract for the small-bets portfolio summarizer.
pub trait BetsServiceTrait: Send + Sync {
    /// Summarizes the portfolio against essential spending and savings.
    /// Only active bets contribute income and hours.
    fn summarize_portfolio(
        &self,
        bets: &[SmallBet],
        essential_monthly_expenses: Decimal,
        savings: Decimal,
    ) -> BetsSummary;
}
