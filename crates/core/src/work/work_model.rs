use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::WEEKS_PER_MONTH;

/// Weekly time commitment for a job, as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkHours {
    pub weekly_hours: Decimal,
    pub commute_daily_minutes: Decimal,
    pub work_days_per_week: Decimal,
}

impl WorkHours {
    /// Commute time per week, in hours.
    pub fn weekly_commute_hours(&self) -> Decimal {
        self.commute_daily_minutes / dec!(60) * self.work_days_per_week
    }

    /// Declared hours plus commute, per week.
    pub fn total_weekly_hours(&self) -> Decimal {
        self.weekly_hours + self.weekly_commute_hours()
    }

    /// Declared hours plus commute, per month.
    pub fn total_monthly_hours(&self) -> Decimal {
        self.total_weekly_hours() * WEEKS_PER_MONTH
    }
}

/// Recurring monthly costs that only exist because of the job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkCosts {
    pub commute_monthly_cost: Decimal,
    pub work_lunches_monthly_cost: Decimal,
    pub work_clothing_monthly_cost: Decimal,
    pub stress_spending_monthly_cost: Decimal,
}

impl WorkCosts {
    /// Sum of every job-related cost for one month.
    pub fn total_monthly(&self) -> Decimal {
        self.commute_monthly_cost
            + self.work_lunches_monthly_cost
            + self.work_clothing_monthly_cost
            + self.stress_spending_monthly_cost
    }
}
