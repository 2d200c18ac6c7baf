use rust_decimal::Decimal;

use super::runway_model::RunwayResult;
use crate::expenses::ExpenseCategory;

/// Contract for the savings runway calculator.
pub trait RunwayServiceTrait: Send + Sync {
    /// Derives the full runway picture from an expense list and a savings
    /// balance. Total over its input domain: degenerate inputs produce
    /// zero-valued results rather than errors.
    fn calculate_runway(&self, categories: &[ExpenseCategory], savings: Decimal) -> RunwayResult;
}
