use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::wage_model::{
    LiberationScenario, RealWageCalculation, TimeReclaiming, WageComparison, WageLiberation,
    WorkLifeBalance,
};
use super::wage_traits::WageServiceTrait;
use crate::constants::{
    DISPLAY_DECIMAL_PRECISION, HOURS_PER_WEEK, MONTHS_PER_YEAR, SLEEP_HOURS_PER_WEEK,
    STATED_WAGE_HOURS_PER_YEAR, WEEKS_PER_MONTH,
};
use crate::work::{WorkCosts, WorkHours};

// Scenario names, in the fixed order they are returned
const CURRENT: &str = "Current";
const REMOTE_WORK: &str = "Remote Work";
const FREELANCE: &str = "Freelance";
const OPTIMIZED: &str = "Optimized";

// Hand-tuned scenario multipliers, preserved exactly
const REMOTE_LUNCH_FACTOR: Decimal = dec!(0.3);
const FREELANCE_RATE_FACTOR: Decimal = dec!(1.5);
const FREELANCE_GAP_DISCOUNT: Decimal = dec!(0.75);
const OPTIMIZED_HOURS_FACTOR: Decimal = dec!(0.9);
const OPTIMIZED_LUNCH_FACTOR: Decimal = dec!(0.5);
const OPTIMIZED_CLOTHING_FACTOR: Decimal = dec!(0.5);
const OPTIMIZED_STRESS_FACTOR: Decimal = dec!(0.3);

/// Real-wage calculator.
pub struct WageService;

impl WageService {
    /// Creates a new WageService instance
    pub fn new() -> Self {
        Self
    }
}

impl Default for WageService {
    fn default() -> Self {
        Self::new()
    }
}

impl WageServiceTrait for WageService {
    /// Derives the stated and real hourly wage from one salary, the hours
    /// the job actually takes, and its recurring costs.
    fn calculate_real_hourly_wage(
        &self,
        annual_salary: Decimal,
        hours: &WorkHours,
        costs: &WorkCosts,
    ) -> RealWageCalculation {
        debug!("Calculating real hourly wage for salary {}", annual_salary);

        let annual_salary = annual_salary.max(Decimal::ZERO);
        let stated = annual_salary / STATED_WAGE_HOURS_PER_YEAR;

        let total_weekly_hours = hours.total_weekly_hours();
        let total_monthly_hours = hours.total_monthly_hours();
        let total_monthly_costs = costs.total_monthly();
        let monthly_real_income = annual_salary / MONTHS_PER_YEAR - total_monthly_costs;
        let real = hourly_rate(monthly_real_income, total_monthly_hours);

        RealWageCalculation {
            stated_hourly_wage: stated.round_dp(DISPLAY_DECIMAL_PRECISION),
            real_hourly_wage: real.round_dp(DISPLAY_DECIMAL_PRECISION),
            monthly_real_income: monthly_real_income.round_dp(DISPLAY_DECIMAL_PRECISION),
            total_weekly_hours: total_weekly_hours.round_dp(DISPLAY_DECIMAL_PRECISION),
            total_monthly_hours: total_monthly_hours.round_dp(DISPLAY_DECIMAL_PRECISION),
            total_monthly_costs: total_monthly_costs.round_dp(DISPLAY_DECIMAL_PRECISION),
        }
    }

    /// Quantifies the stated/real gap and picks a one-line reading of it.
    fn format_wage_comparison(&self, stated: Decimal, real: Decimal) -> WageComparison {
        let difference = stated - real;
        let percentage_reduction = if stated > Decimal::ZERO {
            difference / stated * dec!(100)
        } else {
            Decimal::ZERO
        };

        let message = if percentage_reduction >= dec!(50) {
            "Less than half of your stated rate survives contact with reality."
        } else if percentage_reduction >= dec!(30) {
            "Commute and job costs consume close to a third of your stated wage."
        } else if percentage_reduction >= dec!(15) {
            "A noticeable share of your stated wage is going back into the job."
        } else if percentage_reduction > Decimal::ZERO {
            "Your real wage runs slightly below the stated rate."
        } else {
            "Your stated wage holds up; commute and hidden costs barely dent it."
        };

        WageComparison {
            difference: difference.round_dp(DISPLAY_DECIMAL_PRECISION),
            percentage_reduction: percentage_reduction.round_dp(DISPLAY_DECIMAL_PRECISION),
            message: message.to_string(),
        }
    }

    /// Prices the current arrangement against remote, freelance and
    /// optimized alternatives, all from the same salary and profile.
    fn calculate_wage_liberation(
        &self,
        annual_salary: Decimal,
        hours: &WorkHours,
        costs: &WorkCosts,
    ) -> WageLiberation {
        debug!("Calculating wage liberation scenarios");

        let annual_salary = annual_salary.max(Decimal::ZERO);
        let monthly_salary = annual_salary / MONTHS_PER_YEAR;

        // Current arrangement, commute and all costs included
        let current_hours = hours.total_monthly_hours();
        let current_costs = costs.total_monthly();
        let current_income = monthly_salary - current_costs;
        let current_rate = hourly_rate(current_income, current_hours);

        // Remote: the commute disappears entirely and lunches drop to 30%
        let remote_hours = hours.weekly_hours * WEEKS_PER_MONTH;
        let remote_costs = costs.work_lunches_monthly_cost * REMOTE_LUNCH_FACTOR
            + costs.work_clothing_monthly_cost
            + costs.stress_spending_monthly_cost;
        let remote_income = monthly_salary - remote_costs;
        let remote_rate = hourly_rate(remote_income, remote_hours);

        // Freelance: market rate at 1.5x the current real wage, no commute,
        // income discounted 25% for the gaps between clients
        let freelance_hours = hours.weekly_hours * WEEKS_PER_MONTH;
        let freelance_income =
            current_rate * FREELANCE_RATE_FACTOR * freelance_hours * FREELANCE_GAP_DISCOUNT;
        let freelance_rate = hourly_rate(freelance_income, freelance_hours);

        // Optimized: negotiated remote plus 10% fewer hours and trimmed
        // work spending
        let optimized_hours = hours.weekly_hours * OPTIMIZED_HOURS_FACTOR * WEEKS_PER_MONTH;
        let optimized_costs = costs.work_lunches_monthly_cost * OPTIMIZED_LUNCH_FACTOR
            + costs.work_clothing_monthly_cost * OPTIMIZED_CLOTHING_FACTOR
            + costs.stress_spending_monthly_cost * OPTIMIZED_STRESS_FACTOR;
        let optimized_income = monthly_salary - optimized_costs;
        let optimized_rate = hourly_rate(optimized_income, optimized_hours);

        let scenarios = vec![
            build_liberation_scenario(
                CURRENT,
                "Your arrangement as it stands today",
                current_income,
                current_hours,
                current_rate,
            ),
            build_liberation_scenario(
                REMOTE_WORK,
                "Same job with the commute deleted",
                remote_income,
                remote_hours,
                remote_rate,
            ),
            build_liberation_scenario(
                FREELANCE,
                "Market-rate contracting with a 25% gap discount",
                freelance_income,
                freelance_hours,
                freelance_rate,
            ),
            build_liberation_scenario(
                OPTIMIZED,
                "Remote plus a negotiated 10% hours reduction",
                optimized_income,
                optimized_hours,
                optimized_rate,
            ),
        ];

        // Time and money recovered by going remote
        let reclaimed_weekly_hours = (current_hours - remote_hours) / WEEKS_PER_MONTH;
        let reclaimed_value_per_year = (remote_income - current_income) * MONTHS_PER_YEAR
            + reclaimed_weekly_hours * current_rate * dec!(52);
        let time_reclaiming = TimeReclaiming {
            hours_per_week: reclaimed_weekly_hours.round_dp(DISPLAY_DECIMAL_PRECISION),
            value_per_year: reclaimed_value_per_year.round_dp(DISPLAY_DECIMAL_PRECISION),
        };

        let mut insights = Vec::new();
        if current_rate > Decimal::ZERO {
            let reading = if current_rate < dec!(10) {
                "Your real hourly wage is under $10. Structural change, not optimization, is the answer."
            } else if current_rate < dec!(15) {
                "Your real wage is under $15 an hour; plenty of alternatives clear that bar."
            } else if current_rate < dec!(25) {
                "A meaningful slice of your stated wage never reaches you; the scenarios below show where it goes."
            } else {
                "Your real wage is holding up; the gains below are about time more than money."
            };
            insights.push(reading.to_string());

            if remote_rate >= current_rate * dec!(1.2) {
                insights.push(
                    "Remote work alone would lift your effective rate by 20% or more.".to_string(),
                );
            }
            if optimized_rate >= current_rate * dec!(1.3) {
                insights.push(
                    "Negotiating remote plus a 10% hours cut would lift your effective rate by 30% or more."
                        .to_string(),
                );
            }
        }
        if reclaimed_weekly_hours >= dec!(10) {
            insights.push(format!(
                "You would reclaim {} hours a week by dropping the commute; that is more than a full working day.",
                reclaimed_weekly_hours.round_dp(1).normalize()
            ));
        }

        WageLiberation {
            scenarios,
            time_reclaiming,
            insights,
        }
    }

    /// Splits the week between the job and everything else, then scores
    /// the split.
    fn calculate_work_life_balance(
        &self,
        hours: &WorkHours,
        costs: &WorkCosts,
    ) -> WorkLifeBalance {
        let weekly_work_hours = hours.total_weekly_hours();
        let weekly_personal_hours =
            (HOURS_PER_WEEK - weekly_work_hours - SLEEP_HOURS_PER_WEEK).max(Decimal::ZERO);
        let balance_ratio = if weekly_work_hours > Decimal::ZERO {
            weekly_personal_hours / weekly_work_hours
        } else {
            Decimal::ZERO
        };

        let mut quality_score: i32 = 100;
        if hours.weekly_hours > dec!(50) {
            quality_score -= 30;
        } else if hours.weekly_hours > dec!(45) {
            quality_score -= 15;
        }
        if hours.commute_daily_minutes > dec!(60) {
            quality_score -= 20;
        } else if hours.commute_daily_minutes > dec!(30) {
            quality_score -= 10;
        }
        if costs.stress_spending_monthly_cost > dec!(200) {
            quality_score -= 15;
        }
        let quality_score = quality_score.max(0);

        let mut recommendations = Vec::new();
        if hours.weekly_hours > dec!(50) {
            recommendations.push(
                "Your hours are past the point where extra time produces extra output; claw back your evenings."
                    .to_string(),
            );
        } else if hours.weekly_hours > dec!(45) {
            recommendations.push(
                "You are consistently over 45 hours; decide which of them actually matter."
                    .to_string(),
            );
        }
        if hours.commute_daily_minutes > dec!(60) {
            recommendations.push(
                "An hour-plus commute is a part-time job you pay to have; negotiate remote days or move the work."
                    .to_string(),
            );
        } else if hours.commute_daily_minutes > dec!(30) {
            recommendations.push(
                "Half an hour each way adds up; two remote days a week would return a workday every month."
                    .to_string(),
            );
        }
        if costs.stress_spending_monthly_cost > dec!(200) {
            recommendations.push(
                "Stress spending over $200 a month is the job quietly billing you; treat the cause, not the symptom."
                    .to_string(),
            );
        }
        if recommendations.is_empty() {
            recommendations.push(
                "Your balance looks sustainable; protect it when the job asks for more."
                    .to_string(),
            );
        }

        WorkLifeBalance {
            weekly_work_hours: weekly_work_hours.round_dp(DISPLAY_DECIMAL_PRECISION),
            weekly_personal_hours: weekly_personal_hours.round_dp(DISPLAY_DECIMAL_PRECISION),
            balance_ratio: balance_ratio.round_dp(DISPLAY_DECIMAL_PRECISION),
            quality_score,
            recommendations,
        }
    }
}

/// Income per hour, zero when there are no hours to divide by.
fn hourly_rate(monthly_income: Decimal, monthly_hours: Decimal) -> Decimal {
    if monthly_hours > Decimal::ZERO {
        monthly_income / monthly_hours
    } else {
        Decimal::ZERO
    }
}

fn build_liberation_scenario(
    name: &str,
    description: &str,
    monthly_income: Decimal,
    monthly_hours: Decimal,
    hourly_rate: Decimal,
) -> LiberationScenario {
    LiberationScenario {
        name: name.to_string(),
        description: description.to_string(),
        monthly_income: monthly_income.round_dp(DISPLAY_DECIMAL_PRECISION),
        monthly_hours: monthly_hours.round_dp(DISPLAY_DECIMAL_PRECISION),
        hourly_rate: hourly_rate.round_dp(DISPLAY_DECIMAL_PRECISION),
    }
}

// ============== Tests ==============

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_hours() -> WorkHours {
        WorkHours {
            weekly_hours: dec!(40),
            commute_daily_minutes: dec!(30),
            work_days_per_week: dec!(5),
        }
    }

    fn no_costs() -> WorkCosts {
        WorkCosts::default()
    }

    #[test]
    fn test_stated_wage_uses_naive_denominator() {
        let service = WageService::new();
        let result =
            service.calculate_real_hourly_wage(dec!(62400), &standard_hours(), &no_costs());

        // 62400 / 2080 is exactly 30
        assert_eq!(result.stated_hourly_wage, dec!(30));
        assert_eq!(result.total_weekly_hours, dec!(42.5));
    }

    #[test]
    fn test_commute_alone_drags_real_below_stated() {
        let service = WageService::new();
        let result =
            service.calculate_real_hourly_wage(dec!(62400), &standard_hours(), &no_costs());

        // 5200 monthly over 184.025 hours
        assert_eq!(result.real_hourly_wage, dec!(28.26));
        assert!(result.real_hourly_wage < result.stated_hourly_wage);
    }

    #[test]
    fn test_costs_reduce_monthly_real_income() {
        let service = WageService::new();
        let costs = WorkCosts {
            commute_monthly_cost: dec!(300),
            work_lunches_monthly_cost: dec!(200),
            work_clothing_monthly_cost: dec!(50),
            stress_spending_monthly_cost: dec!(100),
        };
        let result = service.calculate_real_hourly_wage(dec!(62400), &standard_hours(), &costs);

        assert_eq!(result.total_monthly_costs, dec!(650));
        assert_eq!(result.monthly_real_income, dec!(4550));
    }

    #[test]
    fn test_zero_hours_yields_zero_real_wage() {
        let service = WageService::new();
        let result =
            service.calculate_real_hourly_wage(dec!(62400), &WorkHours::default(), &no_costs());
        assert_eq!(result.real_hourly_wage, Decimal::ZERO);
    }

    #[test]
    fn test_comparison_message_tiers() {
        let service = WageService::new();

        let severe = service.format_wage_comparison(dec!(30), dec!(10));
        assert!(severe.message.starts_with("Less than half"));
        assert_eq!(severe.percentage_reduction, dec!(66.67));

        let slight = service.format_wage_comparison(dec!(30), dec!(28.26));
        assert_eq!(slight.difference, dec!(1.74));
        assert!(slight.message.contains("slightly below"));
    }

    #[test]
    fn test_comparison_with_zero_stated_wage() {
        let service = WageService::new();
        let comparison = service.format_wage_comparison(Decimal::ZERO, Decimal::ZERO);
        assert_eq!(comparison.percentage_reduction, Decimal::ZERO);
        assert!(comparison.message.contains("holds up"));
    }

    #[test]
    fn test_comparison_when_real_exceeds_stated() {
        // Part-time arrangements can price above the naive 2080-hour rate
        let service = WageService::new();
        let comparison = service.format_wage_comparison(dec!(30), dec!(40));
        assert!(comparison.percentage_reduction < Decimal::ZERO);
        assert!(comparison.message.contains("holds up"));
    }

    #[test]
    fn test_liberation_scenarios_in_fixed_order() {
        let service = WageService::new();
        let result =
            service.calculate_wage_liberation(dec!(62400), &standard_hours(), &no_costs());

        let names: Vec<&str> = result.scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![CURRENT, REMOTE_WORK, FREELANCE, OPTIMIZED]);
    }

    #[test]
    fn test_liberation_with_heavy_commute() {
        let service = WageService::new();
        let hours = WorkHours {
            weekly_hours: dec!(40),
            commute_daily_minutes: dec!(60),
            work_days_per_week: dec!(5),
        };
        let costs = WorkCosts {
            commute_monthly_cost: dec!(300),
            work_lunches_monthly_cost: dec!(200),
            work_clothing_monthly_cost: dec!(50),
            stress_spending_monthly_cost: dec!(100),
        };
        let result = service.calculate_wage_liberation(dec!(62400), &hours, &costs);

        // Five commute hours a week come straight back
        assert_eq!(result.time_reclaiming.hours_per_week, dec!(5));
        assert!(result.time_reclaiming.value_per_year > dec!(11000));

        // Remote clears the 1.2x bar, optimized clears 1.3x
        assert!(result.insights.iter().any(|i| i.contains("Remote work alone")));
        assert!(result.insights.iter().any(|i| i.contains("10% hours cut")));
    }

    #[test]
    fn test_reclaimed_hours_insight_needs_double_digit_commute() {
        let service = WageService::new();
        let hours = WorkHours {
            weekly_hours: dec!(40),
            commute_daily_minutes: dec!(120),
            work_days_per_week: dec!(5),
        };
        let result = service.calculate_wage_liberation(dec!(62400), &hours, &no_costs());

        assert_eq!(result.time_reclaiming.hours_per_week, dec!(10));
        assert!(result.insights.iter().any(|i| i.contains("reclaim 10 hours a week")));
    }

    #[test]
    fn test_liberation_with_zero_inputs_is_all_zero() {
        let service = WageService::new();
        let result =
            service.calculate_wage_liberation(Decimal::ZERO, &WorkHours::default(), &no_costs());

        assert_eq!(result.scenarios.len(), 4);
        assert!(result.scenarios.iter().all(|s| s.hourly_rate == Decimal::ZERO));
        assert!(result.insights.is_empty());
    }

    #[test]
    fn test_work_life_balance_with_sane_profile() {
        let service = WageService::new();
        let balance = service.calculate_work_life_balance(&standard_hours(), &no_costs());

        // 168 - 42.5 - 56
        assert_eq!(balance.weekly_personal_hours, dec!(69.5));
        assert_eq!(balance.quality_score, 100);
        assert_eq!(balance.recommendations.len(), 1);
        assert!(balance.recommendations[0].contains("sustainable"));
    }

    #[test]
    fn test_work_life_balance_stacks_penalties() {
        let service = WageService::new();
        let hours = WorkHours {
            weekly_hours: dec!(55),
            commute_daily_minutes: dec!(90),
            work_days_per_week: dec!(5),
        };
        let costs = WorkCosts {
            stress_spending_monthly_cost: dec!(250),
            ..WorkCosts::default()
        };
        let balance = service.calculate_work_life_balance(&hours, &costs);

        // 100 - 30 - 20 - 15
        assert_eq!(balance.quality_score, 35);
        assert_eq!(balance.recommendations.len(), 3);
    }

    #[test]
    fn test_personal_hours_floor_at_zero() {
        let service = WageService::new();
        let hours = WorkHours {
            weekly_hours: dec!(110),
            commute_daily_minutes: dec!(60),
            work_days_per_week: dec!(6),
        };
        let balance = service.calculate_work_life_balance(&hours, &no_costs());
        assert_eq!(balance.weekly_personal_hours, Decimal::ZERO);
    }

    #[test]
    fn test_repeated_calls_are_deep_equal() {
        let service = WageService::new();
        let hours = standard_hours();
        let costs = no_costs();
        assert_eq!(
            service.calculate_wage_liberation(dec!(62400), &hours, &costs),
            service.calculate_wage_liberation(dec!(62400), &hours, &costs)
        );
    }
}
