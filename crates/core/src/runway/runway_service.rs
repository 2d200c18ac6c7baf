use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::runway_display::format_runway_display;
use super::runway_model::{RunwayResult, RunwayScenario, StressTestScenario, ViabilityTier};
use super::runway_traits::RunwayServiceTrait;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::expenses::{essential_monthly, total_monthly, ExpenseCategory};

// Scenario names, in the fixed order they are returned
const BARE_MINIMUM: &str = "Bare Minimum";
const CURRENT_LIFESTYLE: &str = "Current Lifestyle";
const LEAN_TRANSITION: &str = "Lean Transition";
const INCOME_BRIDGE: &str = "Income Bridge";

const ECONOMIC_DOWNTURN: &str = "Economic Downturn";
const HEALTH_EMERGENCY: &str = "Health Emergency";
const JOB_MARKET_CRASH: &str = "Job Market Crash";

// Hand-tuned multipliers, preserved exactly
const LEAN_TRANSITION_FACTOR: Decimal = dec!(0.8);
const INCOME_BRIDGE_FACTOR: Decimal = dec!(0.5);
const ECONOMIC_DOWNTURN_FACTOR: Decimal = dec!(1.2);
const HEALTH_EMERGENCY_FACTOR: Decimal = dec!(1.5);

/// Month cutoffs that map a scenario's runway onto a viability tier.
///
/// Leaner scenarios deliberately demand a longer runway for the same label.
struct ViabilityThresholds {
    excellent: Decimal,
    good: Decimal,
    challenging: Decimal,
}

impl ViabilityThresholds {
    fn classify(&self, months: Decimal) -> ViabilityTier {
        if months >= self.excellent {
            ViabilityTier::Excellent
        } else if months >= self.good {
            ViabilityTier::Good
        } else if months >= self.challenging {
            ViabilityTier::Challenging
        } else {
            ViabilityTier::Risky
        }
    }
}

const BARE_MINIMUM_THRESHOLDS: ViabilityThresholds = ViabilityThresholds {
    excellent: dec!(12),
    good: dec!(6),
    challenging: dec!(3),
};
const CURRENT_LIFESTYLE_THRESHOLDS: ViabilityThresholds = ViabilityThresholds {
    excellent: dec!(12),
    good: dec!(6),
    challenging: dec!(3),
};
const LEAN_TRANSITION_THRESHOLDS: ViabilityThresholds = ViabilityThresholds {
    excellent: dec!(18),
    good: dec!(9),
    challenging: dec!(6),
};
const INCOME_BRIDGE_THRESHOLDS: ViabilityThresholds = ViabilityThresholds {
    excellent: dec!(24),
    good: dec!(12),
    challenging: dec!(6),
};

/// Savings runway calculator.
pub struct RunwayService;

impl RunwayService {
    /// Creates a new RunwayService instance
    pub fn new() -> Self {
        Self
    }
}

impl Default for RunwayService {
    fn default() -> Self {
        Self::new()
    }
}

impl RunwayServiceTrait for RunwayService {
    /// Derives base runway, four comparative scenarios, three stress tests
    /// and the aggregate insight list from one expense collection and one
    /// savings balance.
    fn calculate_runway(&self, categories: &[ExpenseCategory], savings: Decimal) -> RunwayResult {
        debug!(
            "Calculating savings runway: {} expense categories, savings {}",
            categories.len(),
            savings
        );

        let savings = savings.max(Decimal::ZERO);
        let essential = essential_monthly(categories);
        let total = total_monthly(categories);

        // 1. Raw month figures for every scenario and stress test
        let base_months = runway_months(savings, essential);
        let current_months = runway_months(savings, total);
        let lean_months = runway_months(savings, essential * LEAN_TRANSITION_FACTOR);
        let bridge_months = runway_months(savings, total * INCOME_BRIDGE_FACTOR);
        let downturn_months = runway_months(savings, essential * ECONOMIC_DOWNTURN_FACTOR);
        let emergency_months = runway_months(savings, essential * HEALTH_EMERGENCY_FACTOR);
        let crash_months = base_months / dec!(2);

        // 2. Comparative scenarios, fixed order
        let scenarios = vec![
            build_scenario(
                BARE_MINIMUM,
                "Essential expenses only",
                essential,
                base_months,
                &BARE_MINIMUM_THRESHOLDS,
            ),
            build_scenario(
                CURRENT_LIFESTYLE,
                "Spending exactly as you do today",
                total,
                current_months,
                &CURRENT_LIFESTYLE_THRESHOLDS,
            ),
            build_scenario(
                LEAN_TRANSITION,
                "Essentials trimmed by 20%",
                essential * LEAN_TRANSITION_FACTOR,
                lean_months,
                &LEAN_TRANSITION_THRESHOLDS,
            ),
            build_scenario(
                INCOME_BRIDGE,
                "Half of current spending covered by side income",
                total * INCOME_BRIDGE_FACTOR,
                bridge_months,
                &INCOME_BRIDGE_THRESHOLDS,
            ),
        ];

        // 3. Stress tests against the essential-only baseline, fixed order
        let stress_tests = vec![
            build_stress_test(
                ECONOMIC_DOWNTURN,
                "Essential costs rise 20% while income stays at zero",
                essential * ECONOMIC_DOWNTURN_FACTOR,
                downturn_months,
                base_months,
            ),
            build_stress_test(
                HEALTH_EMERGENCY,
                "A sustained 50% increase in essential spending",
                essential * HEALTH_EMERGENCY_FACTOR,
                emergency_months,
                base_months,
            ),
            build_stress_test(
                JOB_MARKET_CRASH,
                "Same spending, but the search takes twice as long",
                essential,
                crash_months,
                base_months,
            ),
        ];

        // 4. Aggregate insights from the raw figures
        let insights =
            overall_insights(base_months, current_months, bridge_months, emergency_months);

        RunwayResult {
            total_monthly_expenses: total.round_dp(DISPLAY_DECIMAL_PRECISION),
            essential_monthly_expenses: essential.round_dp(DISPLAY_DECIMAL_PRECISION),
            current_savings: savings.round_dp(DISPLAY_DECIMAL_PRECISION),
            runway_months: base_months.round_dp(DISPLAY_DECIMAL_PRECISION),
            runway_display: format_runway_display(base_months),
            scenarios,
            stress_tests,
            insights,
        }
    }
}

/// Months a savings balance lasts at the given monthly spend. Zero spend
/// yields zero months rather than dividing by zero.
fn runway_months(savings: Decimal, monthly_expenses: Decimal) -> Decimal {
    if monthly_expenses > Decimal::ZERO {
        savings / monthly_expenses
    } else {
        Decimal::ZERO
    }
}

fn build_scenario(
    name: &str,
    description: &str,
    monthly_expenses: Decimal,
    months: Decimal,
    thresholds: &ViabilityThresholds,
) -> RunwayScenario {
    RunwayScenario {
        name: name.to_string(),
        description: description.to_string(),
        monthly_expenses: monthly_expenses.round_dp(DISPLAY_DECIMAL_PRECISION),
        runway_months: months.round_dp(DISPLAY_DECIMAL_PRECISION),
        runway_display: format_runway_display(months),
        viability: thresholds.classify(months),
        insights: scenario_insights(name, months),
    }
}

fn build_stress_test(
    name: &str,
    description: &str,
    adjusted_monthly: Decimal,
    stressed_months: Decimal,
    base_months: Decimal,
) -> StressTestScenario {
    StressTestScenario {
        name: name.to_string(),
        description: description.to_string(),
        adjusted_monthly_expenses: adjusted_monthly.round_dp(DISPLAY_DECIMAL_PRECISION),
        runway_months: stressed_months.round_dp(DISPLAY_DECIMAL_PRECISION),
        runway_display: format_runway_display(stressed_months),
        impact: impact_message(base_months, stressed_months),
    }
}

/// Narrates how much shorter the stressed runway is than the baseline.
fn impact_message(base_months: Decimal, stressed_months: Decimal) -> String {
    let reduction = if base_months > Decimal::ZERO {
        (base_months - stressed_months) / base_months * dec!(100)
    } else {
        Decimal::ZERO
    };
    // normalize() strips trailing zeros so the narration is stable
    // regardless of how the division arrived at the figure
    let reduction = reduction.round_dp(DISPLAY_DECIMAL_PRECISION).normalize();

    if reduction >= dec!(30) {
        format!("Severely reduces your runway ({}% shorter than baseline)", reduction)
    } else if reduction >= dec!(15) {
        format!("Significantly reduces your runway ({}% shorter than baseline)", reduction)
    } else {
        format!("A manageable impact on your runway ({}% shorter than baseline)", reduction)
    }
}

/// Canned per-scenario commentary, keyed on scenario name and month count.
fn scenario_insights(name: &str, months: Decimal) -> Vec<String> {
    let insights: Vec<&str> = match name {
        BARE_MINIMUM => {
            if months >= dec!(12) {
                vec![
                    "Over a year of essential cover gives you genuine freedom to choose what comes next.",
                    "Consider whether part of this cushion could fund the transition itself.",
                ]
            } else if months >= dec!(6) {
                vec!["A solid cushion for a deliberate, unhurried transition."]
            } else if months >= dec!(3) {
                vec!["Enough space to make a move, but the clock will be audible."]
            } else {
                vec!["Build this number first; every other scenario depends on it."]
            }
        }
        CURRENT_LIFESTYLE => {
            if months >= dec!(12) {
                vec!["You could keep every current habit for more than a year."]
            } else if months >= dec!(6) {
                vec!["Half a year of business as usual without touching your lifestyle."]
            } else if months >= dec!(3) {
                vec!["A few months of unchanged spending before choices get forced."]
            } else {
                vec!["Current spending drains savings quickly; the discretionary lines are the lever."]
            }
        }
        LEAN_TRANSITION => {
            if months >= dec!(18) {
                vec!["A 20% trim stretches your savings into a long, patient search."]
            } else if months >= dec!(9) {
                vec!["Lean spending buys meaningfully more time than your current budget."]
            } else if months >= dec!(6) {
                vec!["A lean budget makes the window workable, if uncomfortable."]
            } else {
                vec!["Even trimmed spending leaves a short window; pair this with bridge income."]
            }
        }
        INCOME_BRIDGE => {
            if months >= dec!(24) {
                vec!["With half your costs covered, savings stop being the constraint."]
            } else if months >= dec!(12) {
                vec!["Modest income while transitioning turns months of cover into years."]
            } else if months >= dec!(6) {
                vec!["Part-time income keeps the runway long enough to stay selective."]
            } else {
                vec!["Even with bridge income the window is short; secure the income before leaving."]
            }
        }
        _ => vec![],
    };

    insights.into_iter().map(String::from).collect()
}

/// Top-level insight list: an overall readiness message plus conditional
/// observations about the scenario and stress-test spread.
fn overall_insights(
    base_months: Decimal,
    current_months: Decimal,
    bridge_months: Decimal,
    emergency_months: Decimal,
) -> Vec<String> {
    let mut insights = Vec::new();

    let readiness = if base_months >= dec!(18) {
        "You have exceptional runway. The question is no longer whether you can leave, but what you want to build."
    } else if base_months >= dec!(12) {
        "A year or more of cover puts you in a strong position to make a planned exit."
    } else if base_months >= dec!(6) {
        "You have a real transition window. A focused plan matters more than more savings."
    } else if base_months >= dec!(3) {
        "You have a foothold. Grow the cushion or line up bridge income before jumping."
    } else {
        "Runway is critically short. Prioritize essentials-only saving before any move."
    };
    insights.push(readiness.to_string());

    let trim_gain = base_months - current_months;
    if trim_gain >= dec!(6) {
        insights.push(format!(
            "Cutting to essentials alone would add {} months of runway; discretionary spending is your biggest lever.",
            trim_gain.round_dp(DISPLAY_DECIMAL_PRECISION).normalize()
        ));
    }

    if emergency_months < dec!(3) {
        insights.push(
            "A 50% expense shock would leave you under 3 months of cover; build a deeper emergency buffer before transitioning."
                .to_string(),
        );
    }

    if bridge_months >= base_months * dec!(2) {
        insights.push(
            "Even modest side income would at least double your time; part-time work changes this picture entirely."
                .to_string(),
        );
    }

    insights
}

// ============== Tests ==============
