use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, ValidationError};

/// A single monthly expense line in the user's budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategory {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub is_essential: bool,
}

/// Payload for creating a new expense category. When `id` is `None` a
/// UUID is generated on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpenseCategory {
    pub id: Option<String>,
    pub name: String,
    pub amount: Decimal,
    pub is_essential: bool,
}

impl NewExpenseCategory {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidInput(
                "Expense category name cannot be empty".to_string(),
            )
            .into());
        }
        if self.name.len() > 100 {
            return Err(ValidationError::InvalidInput(
                "Expense category name cannot exceed 100 characters".to_string(),
            )
            .into());
        }
        if self.amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount(format!(
                "Monthly amount for '{}' cannot be negative",
                self.name
            ))
            .into());
        }
        Ok(())
    }
}

/// The default budget template new profiles start from. Amounts are all
/// zero; the split between essential and discretionary lines is the part
/// users tend to keep.
pub fn default_categories() -> Vec<ExpenseCategory> {
    let essential = [
        ("housing", "Housing"),
        ("utilities", "Utilities"),
        ("groceries", "Groceries"),
        ("transportation", "Transportation"),
        ("insurance", "Insurance"),
        ("healthcare", "Healthcare"),
    ];
    let discretionary = [
        ("dining-out", "Dining Out"),
        ("subscriptions", "Subscriptions"),
        ("entertainment", "Entertainment"),
        ("shopping", "Shopping"),
    ];

    essential
        .iter()
        .map(|(id, name)| (id, name, true))
        .chain(discretionary.iter().map(|(id, name)| (id, name, false)))
        .map(|(id, name, is_essential)| ExpenseCategory {
            id: (*id).to_string(),
            name: (*name).to_string(),
            amount: Decimal::ZERO,
            is_essential,
        })
        .collect()
}

/// Appends a validated category, filling in a UUID when none was supplied.
/// Returns a new list; the input is never mutated.
pub fn add_category(
    categories: &[ExpenseCategory],
    new_category: NewExpenseCategory,
) -> Result<Vec<ExpenseCategory>> {
    new_category.validate()?;

    let id = new_category.id.unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut updated = categories.to_vec();
    updated.push(ExpenseCategory {
        id,
        name: new_category.name,
        amount: new_category.amount,
        is_essential: new_category.is_essential,
    });
    Ok(updated)
}

/// Sets the monthly amount on the matching category. Negative inputs are
/// clamped to zero and an unknown id leaves the list unchanged.
pub fn update_category_amount(
    categories: &[ExpenseCategory],
    category_id: &str,
    amount: Decimal,
) -> Vec<ExpenseCategory> {
    let amount = amount.max(Decimal::ZERO);
    categories
        .iter()
        .map(|category| {
            if category.id == category_id {
                ExpenseCategory {
                    amount,
                    ..category.clone()
                }
            } else {
                category.clone()
            }
        })
        .collect()
}

/// Flips the essential flag on the matching category. An unknown id leaves
/// the list unchanged.
pub fn set_category_essential(
    categories: &[ExpenseCategory],
    category_id: &str,
    is_essential: bool,
) -> Vec<ExpenseCategory> {
    categories
        .iter()
        .map(|category| {
            if category.id == category_id {
                ExpenseCategory {
                    is_essential,
                    ..category.clone()
                }
            } else {
                category.clone()
            }
        })
        .collect()
}

/// Drops the matching category. An unknown id leaves the list unchanged.
pub fn remove_category(categories: &[ExpenseCategory], category_id: &str) -> Vec<ExpenseCategory> {
    categories
        .iter()
        .filter(|category| category.id != category_id)
        .cloned()
        .collect()
}

/// Total monthly spend across every category.
pub fn total_monthly(categories: &[ExpenseCategory]) -> Decimal {
    categories
        .iter()
        .map(|category| category.amount)
        .sum()
}

/// Monthly spend across essential categories only.
pub fn essential_monthly(categories: &[ExpenseCategory]) -> Decimal {
    categories
        .iter()
        .filter(|category| category.is_essential)
        .map(|category| category.amount)
        .sum()
}

/// Monthly spend across discretionary categories only.
pub fn discretionary_monthly(categories: &[ExpenseCategory]) -> Decimal {
    categories
        .iter()
        .filter(|category| !category.is_essential)
        .map(|category| category.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_categories() -> Vec<ExpenseCategory> {
        vec![
            ExpenseCategory {
                id: "housing".to_string(),
                name: "Housing".to_string(),
                amount: dec!(1500),
                is_essential: true,
            },
            ExpenseCategory {
                id: "dining-out".to_string(),
                name: "Dining Out".to_string(),
                amount: dec!(250),
                is_essential: false,
            },
        ]
    }

    #[test]
    fn test_default_categories_split() {
        let categories = default_categories();
        assert_eq!(categories.len(), 10);
        assert_eq!(categories.iter().filter(|c| c.is_essential).count(), 6);
        assert!(categories.iter().all(|c| c.amount == Decimal::ZERO));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let new_category = NewExpenseCategory {
            id: None,
            name: "   ".to_string(),
            amount: dec!(100),
            is_essential: true,
        };
        assert!(new_category.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let new_category = NewExpenseCategory {
            id: None,
            name: "Pet Care".to_string(),
            amount: dec!(-20),
            is_essential: false,
        };
        assert!(new_category.validate().is_err());
    }

    #[test]
    fn test_add_category_generates_id() {
        let categories = sample_categories();
        let updated = add_category(
            &categories,
            NewExpenseCategory {
                id: None,
                name: "Pet Care".to_string(),
                amount: dec!(80),
                is_essential: false,
            },
        )
        .unwrap();

        assert_eq!(updated.len(), 3);
        assert!(!updated[2].id.is_empty());
        // Input list is untouched
        assert_eq!(categories.len(), 2);
    }

    #[test]
    fn test_add_category_keeps_provided_id() {
        let updated = add_category(
            &[],
            NewExpenseCategory {
                id: Some("pet-care".to_string()),
                name: "Pet Care".to_string(),
                amount: dec!(80),
                is_essential: false,
            },
        )
        .unwrap();
        assert_eq!(updated[0].id, "pet-care");
    }

    #[test]
    fn test_update_amount_clamps_negative() {
        let categories = sample_categories();
        let updated = update_category_amount(&categories, "housing", dec!(-50));
        assert_eq!(updated[0].amount, Decimal::ZERO);
    }

    #[test]
    fn test_update_amount_unknown_id_is_noop() {
        let categories = sample_categories();
        let updated = update_category_amount(&categories, "does-not-exist", dec!(999));
        assert_eq!(updated, categories);
    }

    #[test]
    fn test_set_essential_flag() {
        let categories = sample_categories();
        let updated = set_category_essential(&categories, "dining-out", true);
        assert!(updated[1].is_essential);
        assert_eq!(essential_monthly(&updated), dec!(1750));
    }

    #[test]
    fn test_remove_category() {
        let categories = sample_categories();
        let updated = remove_category(&categories, "housing");
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].id, "dining-out");
    }

    #[test]
    fn test_totals_split_by_flag() {
        let categories = sample_categories();
        assert_eq!(total_monthly(&categories), dec!(1750));
        assert_eq!(essential_monthly(&categories), dec!(1500));
        assert_eq!(discretionary_monthly(&categories), dec!(250));
    }
}
