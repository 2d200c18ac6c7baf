//! Expenses module - budget categories and pure list operations.

mod expenses_model;

// Re-export the public interface
pub use expenses_model::{
    add_category, default_categories, discretionary_monthly, essential_monthly, remove_category,
    set_category_essential, total_monthly, update_category_amount, ExpenseCategory,
    NewExpenseCategory,
};
