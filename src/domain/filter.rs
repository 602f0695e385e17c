use std::fmt;

use super::Expense;

/// Sentinel value accepted on the CLI for the "no restriction" filter.
pub const ALL_CATEGORIES: &str = "all";

/// View filter over the expense list: either everything, or a single
/// category matched exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse a user-supplied filter value. The sentinel is case-insensitive;
    /// anything else is taken verbatim as a category name.
    pub fn parse(input: &str) -> Self {
        if input.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(input.to_string())
        }
    }

    /// Build a filter from an optional CLI argument (absent = all).
    pub fn from_arg(arg: Option<&str>) -> Self {
        arg.map(Self::parse).unwrap_or_default()
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => expense.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{}", ALL_CATEGORIES),
            CategoryFilter::Category(category) => write!(f, "{}", category),
        }
    }
}
