use serde::{Deserialize, Serialize};

use super::Cents;

pub type ExpenseId = i64;

/// One recorded expense. Expenses are immutable once recorded - corrections
/// are made by removing and re-adding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique within the ledger, monotonically increasing
    pub id: ExpenseId,
    /// Human-readable description
    pub description: String,
    /// Amount in cents; sign is unrestricted (negative = refund)
    pub amount_cents: Cents,
    /// Free-form category, stored trimmed (e.g. "Food", "Rent")
    pub category: String,
}

impl Expense {
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount_cents: Cents,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount_cents,
            category: category.into().trim().to_string(),
        }
    }
}
