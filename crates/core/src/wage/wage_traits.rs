use rust_decimal::Decimal;

use super::wage_model::{RealWageCalculation, WageComparison, WageLiberation, WorkLifeBalance};
use crate::work::{WorkCosts, WorkHours};

/// Contract for the real-wage calculator.
///
/// Every operation is a total function over non-negative inputs; divisions
/// by a zero denominator yield zero instead of failing.
pub trait WageServiceTrait: Send + Sync {
    /// Breaks a stated salary down into the hourly rate the job really pays.
    fn calculate_real_hourly_wage(
        &self,
        annual_salary: Decimal,
        hours: &WorkHours,
        costs: &WorkCosts,
    ) -> RealWageCalculation;

    /// Quantifies the stated/real gap and narrates it.
    fn format_wage_comparison(&self, stated: Decimal, real: Decimal) -> WageComparison;

    /// Prices four alternative work arrangements and estimates the time
    /// and money a commute-free arrangement would recover.
    fn calculate_wage_liberation(
        &self,
        annual_salary: Decimal,
        hours: &WorkHours,
        costs: &WorkCosts,
    ) -> WageLiberation;

    /// Scores how much of the week the job leaves behind.
    fn calculate_work_life_balance(&self, hours: &WorkHours, costs: &WorkCosts) -> WorkLifeBalance;
}
