use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::WEEKS_PER_MONTH;

/// Formats a fractional month count into the human string shown next to
/// every runway figure.
///
/// Under a tenth of a month reads as "Less than a week", under one month
/// as whole weeks, and anything longer as months with an optional leftover
/// weeks clause. Week counts floor rather than round, matching the
/// conservative tone of the calculator.
pub fn format_runway_display(months: Decimal) -> String {
    if months < dec!(0.1) {
        return "Less than a week".to_string();
    }

    if months < Decimal::ONE {
        let weeks = (months * WEEKS_PER_MONTH).floor().to_i64().unwrap_or(0);
        return format!("{} week{}", weeks, plural_suffix(weeks));
    }

    let whole_months = months.floor();
    let leftover_weeks = ((months - whole_months) * WEEKS_PER_MONTH)
        .floor()
        .to_i64()
        .unwrap_or(0);
    let whole_months = whole_months.to_i64().unwrap_or(0);

    if leftover_weeks == 0 {
        format!("{} month{}", whole_months, plural_suffix(whole_months))
    } else {
        format!(
            "{} month{}, {} week{}",
            whole_months,
            plural_suffix(whole_months),
            leftover_weeks,
            plural_suffix(leftover_weeks)
        )
    }
}

fn plural_suffix(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_a_tenth_of_a_month() {
        assert_eq!(format_runway_display(dec!(0.05)), "Less than a week");
        assert_eq!(format_runway_display(Decimal::ZERO), "Less than a week");
    }

    #[test]
    fn test_under_one_month_shows_weeks() {
        // floor(0.5 * 4.33) = 2
        assert_eq!(format_runway_display(dec!(0.5)), "2 weeks");
        // floor(0.231 * 4.33) = 1
        assert_eq!(format_runway_display(dec!(0.231)), "1 week");
        // Just above the "less than a week" cutoff still floors to zero weeks
        assert_eq!(format_runway_display(dec!(0.15)), "0 weeks");
    }

    #[test]
    fn test_whole_months() {
        assert_eq!(format_runway_display(dec!(1)), "1 month");
        assert_eq!(format_runway_display(dec!(2)), "2 months");
        assert_eq!(format_runway_display(dec!(12)), "12 months");
    }

    #[test]
    fn test_months_with_leftover_weeks() {
        // floor(0.25 * 4.33) = 1
        assert_eq!(format_runway_display(dec!(1.25)), "1 month, 1 week");
        // floor(0.5 * 4.33) = 2
        assert_eq!(format_runway_display(dec!(6.5)), "6 months, 2 weeks");
    }

    #[test]
    fn test_leftover_that_floors_to_zero_weeks_is_omitted() {
        // floor(0.05 * 4.33) = 0, so only the month clause appears
        assert_eq!(format_runway_display(dec!(3.05)), "3 months");
    }
}
