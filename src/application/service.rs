use crate::domain::{
    distinct_categories, filter_expenses, next_expense_id, parse_cents, total, CategoryFilter,
    Cents, Expense, ExpenseId, LedgerState, Notification, Theme,
};
use crate::storage::Repository;

use super::{AppError, Notifier};

/// Validation rules applied when recording an expense. The amount sign is
/// unrestricted by default so negative entries can represent refunds.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRules {
    pub allow_negative_amounts: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            allow_negative_amounts: true,
        }
    }
}

/// Application service providing high-level operations for the expense
/// ledger. This is the primary interface for any client (CLI, TUI, etc.).
///
/// The service owns the in-memory `LedgerState`, loaded once at
/// construction, and writes the mutated parts back to the repository after
/// every change to the expense list or the theme.
pub struct LedgerService {
    repo: Repository,
    state: LedgerState,
    rules: ValidationRules,
    notifier: Notifier,
}

impl LedgerService {
    /// Build a service over an already-connected repository, loading the
    /// persisted state.
    pub async fn load(repo: Repository) -> Result<Self, AppError> {
        let expenses = repo.load_expenses().await?;
        let theme = repo.load_theme().await?;
        Ok(Self {
            repo,
            state: LedgerState {
                expenses,
                filter: CategoryFilter::All,
                theme,
            },
            rules: ValidationRules::default(),
            notifier: Notifier::default(),
        })
    }

    /// Initialize a new database at the given path and load it.
    pub async fn init(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let repo = Repository::init(&db_url).await?;
        Self::load(repo).await
    }

    /// Connect to an existing database and load it.
    pub async fn connect(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}", database_path);
        let repo = Repository::connect(&db_url).await?;
        Self::load(repo).await
    }

    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    // ========================
    // Expense operations
    // ========================

    /// Record a new expense from raw user input. Validation failures leave
    /// the ledger untouched and are surfaced as explicit errors.
    pub async fn add_expense(
        &mut self,
        description: &str,
        amount_text: &str,
        category: &str,
    ) -> Result<Expense, AppError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(AppError::EmptyDescription);
        }

        let amount_cents =
            parse_cents(amount_text).map_err(|e| AppError::InvalidAmount(e.to_string()))?;

        let category = category.trim();
        if category.is_empty() {
            return Err(AppError::EmptyCategory);
        }

        if amount_cents < 0 && !self.rules.allow_negative_amounts {
            return Err(AppError::NegativeAmount(amount_cents));
        }

        let id = next_expense_id(&self.state.expenses);
        let expense = Expense::new(id, description, amount_cents, category);
        self.state.expenses.push(expense.clone());
        self.repo.save_expenses(&self.state.expenses).await?;

        self.notifier.notify(Notification::success("Expense added"));
        Ok(expense)
    }

    /// Remove an expense by id. Removing an absent id is a no-op, so the
    /// operation is idempotent. Returns the removed expense, if any.
    pub async fn remove_expense(&mut self, id: ExpenseId) -> Result<Option<Expense>, AppError> {
        let removed = self
            .state
            .expenses
            .iter()
            .position(|e| e.id == id)
            .map(|index| self.state.expenses.remove(index));

        self.repo.save_expenses(&self.state.expenses).await?;

        if removed.is_some() {
            self.notifier.notify(Notification::info("Expense removed"));
        }
        Ok(removed)
    }

    /// Distinct categories currently in use, ascending.
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.state.expenses)
    }

    /// Expenses visible under the given filter, in insertion order.
    pub fn expenses(&self, filter: &CategoryFilter) -> Vec<&Expense> {
        filter_expenses(&self.state.expenses, filter)
    }

    /// Expenses visible under the current view filter.
    pub fn visible_expenses(&self) -> Vec<&Expense> {
        filter_expenses(&self.state.expenses, &self.state.filter)
    }

    /// Sum of amounts under the given filter.
    pub fn total(&self, filter: &CategoryFilter) -> Cents {
        total(&self.state.expenses, filter)
    }

    /// Update the ephemeral view filter. A filter naming a category with no
    /// expenses is accepted and yields an empty view; it is never an error.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.state.filter = filter;
    }

    // ========================
    // Theme operations
    // ========================

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub async fn set_theme(&mut self, theme: Theme) -> Result<(), AppError> {
        self.state.theme = theme;
        self.repo.save_theme(theme).await?;
        Ok(())
    }

    /// Switch between light and dark, returning the new theme.
    pub async fn toggle_theme(&mut self) -> Result<Theme, AppError> {
        let theme = self.state.theme.toggled();
        self.set_theme(theme).await?;
        Ok(theme)
    }

    // ========================
    // Notifications
    // ========================

    /// The current transient notification, if it has not expired.
    pub fn current_notification(&self) -> Option<Notification> {
        self.notifier.current()
    }
}
