//! Real-wage domain models.
//!
//! This module contains the data structures for the wage calculator:
//! - The stated-versus-real hourly wage breakdown
//! - Alternative work-arrangement scenarios
//! - The work-life balance picture

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The stated-versus-real hourly wage picture for one job.
///
/// The stated figure uses the naive 40 h x 52 wk year; the real figure
/// divides take-home after job costs by the hours the job actually takes,
/// commute included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealWageCalculation {
    pub stated_hourly_wage: Decimal,
    /// Zero when total monthly hours are zero.
    pub real_hourly_wage: Decimal,
    pub monthly_real_income: Decimal,
    pub total_weekly_hours: Decimal,
    pub total_monthly_hours: Decimal,
    pub total_monthly_costs: Decimal,
}

/// The stated/real gap with a one-line reading of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WageComparison {
    pub difference: Decimal,
    pub percentage_reduction: Decimal,
    pub message: String,
}

/// One alternative work arrangement priced at its effective hourly rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiberationScenario {
    pub name: String,
    pub description: String,
    pub monthly_income: Decimal,
    pub monthly_hours: Decimal,
    pub hourly_rate: Decimal,
}

/// Time and money recovered by deleting the commute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeReclaiming {
    pub hours_per_week: Decimal,
    pub value_per_year: Decimal,
}

/// Scenario comparison produced by the liberation calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WageLiberation {
    pub scenarios: Vec<LiberationScenario>,
    pub time_reclaiming: TimeReclaiming,
    pub insights: Vec<String>,
}

/// Weekly hours split between the job and the rest of life, with a
/// 0-100 quality score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLifeBalance {
    /// Work plus commute, per week.
    pub weekly_work_hours: Decimal,
    /// What is left of the week after work, commute and sleep.
    pub weekly_personal_hours: Decimal,
    pub balance_ratio: Decimal,
    pub quality_score: i32,
    pub recommendations: Vec<String>,
}
