use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Average weeks per month used for all hour/week conversions.
///
/// Hand-tuned constant carried over from the original calculators; kept
/// exactly for behavioral compatibility.
pub const WEEKS_PER_MONTH: Decimal = dec!(4.33);

/// The naive 40 h x 52 wk denominator behind the "stated" hourly wage.
pub const STATED_WAGE_HOURS_PER_YEAR: Decimal = dec!(2080);

/// Months per year.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Total hours in a week.
pub const HOURS_PER_WEEK: Decimal = dec!(168);

/// Sleep budget per week (7 x 8 hours) deducted before personal time.
pub const SLEEP_HOURS_PER_WEEK: Decimal = dec!(56);

/// Decimal precision for display values.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
