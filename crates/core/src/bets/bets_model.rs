//! Small-bets domain models.
//!
//! A "bet" is one income experiment (a product, a service, a side
//! contract) tracked by its monthly income and weekly hours. The list
//! operations are pure and return new collections.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, ValidationError};

// =============================================================================
// Status
// =============================================================================

/// Lifecycle stage of a bet. Only active bets count toward income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetStatus {
    Idea,
    Active,
    Paused,
    Archived,
}

impl BetStatus {
    /// Returns the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            BetStatus::Idea => "idea",
            BetStatus::Active => "active",
            BetStatus::Paused => "paused",
            BetStatus::Archived => "archived",
        }
    }
}

impl std::fmt::Display for BetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Bets
// =============================================================================

/// One tracked income experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmallBet {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: BetStatus,
    pub monthly_income: Decimal,
    pub hours_per_week: Decimal,
}

/// Payload for creating a new bet. When `id` is `None` a UUID is
/// generated on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSmallBet {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub status: BetStatus,
    pub monthly_income: Decimal,
    pub hours_per_week: Decimal,
}

impl NewSmallBet {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(
                ValidationError::InvalidInput("Bet name cannot be empty".to_string()).into(),
            );
        }
        if self.name.len() > 100 {
            return Err(ValidationError::InvalidInput(
                "Bet name cannot exceed 100 characters".to_string(),
            )
            .into());
        }
        if self.monthly_income < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount(format!(
                "Monthly income for '{}' cannot be negative",
                self.name
            ))
            .into());
        }
        if self.hours_per_week < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount(format!(
                "Weekly hours for '{}' cannot be negative",
                self.name
            ))
            .into());
        }
        Ok(())
    }
}

// =============================================================================
// Portfolio summary
// =============================================================================

/// Derived view of the whole portfolio against essential expenses.
/// Recomputed on every change and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetsSummary {
    pub active_count: usize,
    pub total_monthly_income: Decimal,
    pub total_weekly_hours: Decimal,
    /// Income per hour across active bets, zero when no hours are logged.
    pub effective_hourly_rate: Decimal,
    /// Share of essential expenses covered by bet income.
    pub essential_coverage_percent: Decimal,
    /// Essential spending left after bet income, floored at zero.
    pub net_monthly_burn: Decimal,
    /// How long savings last at the net burn. Zero when the burn is zero;
    /// see `fully_covered` for the distinction that matters.
    pub extended_runway_months: Decimal,
    pub extended_runway_display: String,
    /// True when bet income alone meets essential expenses.
    pub fully_covered: bool,
    pub insights: Vec<String>,
}

// =============================================================================
// Pure list operations
// =============================================================================

/// Appends a validated bet, filling in a UUID when none was supplied.
/// Returns a new list; the input is never mutated.
pub fn add_bet(bets: &[SmallBet], new_bet: NewSmallBet) -> Result<Vec<SmallBet>> {
    new_bet.validate()?;

    let id = new_bet.id.unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut updated = bets.to_vec();
    updated.push(SmallBet {
        id,
        name: new_bet.name,
        description: new_bet.description,
        status: new_bet.status,
        monthly_income: new_bet.monthly_income,
        hours_per_week: new_bet.hours_per_week,
    });
    Ok(updated)
}

/// Moves the matching bet to a new lifecycle stage. An unknown id leaves
/// the list unchanged.
pub fn set_bet_status(bets: &[SmallBet], bet_id: &str, status: BetStatus) -> Vec<SmallBet> {
    bets.iter()
        .map(|bet| {
            if bet.id == bet_id {
                SmallBet {
                    status,
                    ..bet.clone()
                }
            } else {
                bet.clone()
            }
        })
        .collect()
}

/// Records new monthly income and weekly hours for the matching bet.
/// Negative inputs are clamped to zero; an unknown id leaves the list
/// unchanged.
pub fn update_bet_performance(
    bets: &[SmallBet],
    bet_id: &str,
    monthly_income: Decimal,
    hours_per_week: Decimal,
) -> Vec<SmallBet> {
    let monthly_income = monthly_income.max(Decimal::ZERO);
    let hours_per_week = hours_per_week.max(Decimal::ZERO);

    bets.iter()
        .map(|bet| {
            if bet.id == bet_id {
                SmallBet {
                    monthly_income,
                    hours_per_week,
                    ..bet.clone()
                }
            } else {
                bet.clone()
            }
        })
        .collect()
}

/// Drops the matching bet. An unknown id leaves the list unchanged.
pub fn remove_bet(bets: &[SmallBet], bet_id: &str) -> Vec<SmallBet> {
    bets.iter()
        .filter(|bet| bet.id != bet_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_bet(id: &str, status: BetStatus, income: Decimal) -> SmallBet {
        SmallBet {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            status,
            monthly_income: income,
            hours_per_week: dec!(5),
        }
    }

    #[test]
    fn test_add_bet_generates_id() {
        let bets = [sample_bet("newsletter", BetStatus::Active, dec!(120))];
        let updated = add_bet(
            &bets,
            NewSmallBet {
                id: None,
                name: "Template shop".to_string(),
                description: "Notion templates".to_string(),
                status: BetStatus::Idea,
                monthly_income: Decimal::ZERO,
                hours_per_week: dec!(2),
            },
        )
        .unwrap();

        assert_eq!(updated.len(), 2);
        assert!(!updated[1].id.is_empty());
    }

    #[test]
    fn test_add_bet_rejects_negative_income() {
        let result = add_bet(
            &[],
            NewSmallBet {
                id: None,
                name: "Broken".to_string(),
                description: String::new(),
                status: BetStatus::Idea,
                monthly_income: dec!(-1),
                hours_per_week: Decimal::ZERO,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_set_bet_status() {
        let bets = [sample_bet("newsletter", BetStatus::Idea, Decimal::ZERO)];
        let updated = set_bet_status(&bets, "newsletter", BetStatus::Active);
        assert_eq!(updated[0].status, BetStatus::Active);
    }

    #[test]
    fn test_update_performance_clamps_negatives() {
        let bets = [sample_bet("newsletter", BetStatus::Active, dec!(120))];
        let updated = update_bet_performance(&bets, "newsletter", dec!(-50), dec!(-1));
        assert_eq!(updated[0].monthly_income, Decimal::ZERO);
        assert_eq!(updated[0].hours_per_week, Decimal::ZERO);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let bets = vec![sample_bet("newsletter", BetStatus::Active, dec!(120))];
        assert_eq!(set_bet_status(&bets, "missing", BetStatus::Paused), bets);
        assert_eq!(remove_bet(&bets, "missing"), bets);
    }

    #[test]
    fn test_remove_bet() {
        let bets = [
            sample_bet("newsletter", BetStatus::Active, dec!(120)),
            sample_bet("shop", BetStatus::Paused, dec!(40)),
        ];
        let updated = remove_bet(&bets, "newsletter");
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].id, "shop");
    }
}
