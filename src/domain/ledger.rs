use super::{CategoryFilter, Cents, Expense, ExpenseId, Theme};

/// The full in-memory ledger state. Loaded once at startup, mutated only
/// through the application service, written back after every mutation of
/// `expenses` or `theme`. The filter is an ephemeral view setting and is
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct LedgerState {
    pub expenses: Vec<Expense>,
    pub filter: CategoryFilter,
    pub theme: Theme,
}

/// Allocate the next expense id: one past the highest id currently in use.
/// Ids stay unique for the ledger's lifetime because expenses are only ever
/// appended with ids from this function.
pub fn next_expense_id(expenses: &[Expense]) -> ExpenseId {
    expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1
}

/// The distinct trimmed categories present in the ledger, in ascending
/// lexicographic order.
pub fn distinct_categories(expenses: &[Expense]) -> Vec<String> {
    let mut categories: Vec<String> = expenses
        .iter()
        .map(|e| e.category.trim().to_string())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

/// The expenses visible under a filter, in insertion order.
pub fn filter_expenses<'a>(expenses: &'a [Expense], filter: &CategoryFilter) -> Vec<&'a Expense> {
    expenses.iter().filter(|e| filter.matches(e)).collect()
}

/// Sum of amounts over the filtered view. Zero for an empty selection.
pub fn total(expenses: &[Expense], filter: &CategoryFilter) -> Cents {
    expenses
        .iter()
        .filter(|e| filter.matches(e))
        .map(|e| e.amount_cents)
        .sum()
}
