use anyhow::{Context, Result};
use sqlx::{Row, SqlitePool};

use crate::domain::{Expense, Theme};

use super::MIGRATION_001_INITIAL;

/// Key under which the serialized expense list is stored.
pub const EXPENSES_KEY: &str = "expenses";
/// Key under which the theme preference is stored.
pub const THEME_KEY: &str = "theme";

/// Repository for persisting the ledger as two independent key-value
/// entries. Every write replaces the entry in full; there are no
/// incremental updates.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given path.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(MIGRATION_001_INITIAL)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;
        Ok(())
    }

    /// Initialize a new database (connect + migrate).
    pub async fn init(database_url: &str) -> Result<Self> {
        let repo = Self::connect(database_url).await?;
        repo.migrate().await?;
        Ok(repo)
    }

    /// Fetch the raw value stored under a key, if any.
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to read key '{}'", key))?;

        Ok(row.map(|row| row.get("value")))
    }

    /// Replace the value stored under a key.
    async fn put(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query("INSERT OR REPLACE INTO kv (key, value) VALUES (?, ?)")
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to write key '{}'", key))?;
        Ok(())
    }

    /// Load the expense list. A missing or unparseable entry yields an
    /// empty ledger; a corrupt store is never fatal.
    pub async fn load_expenses(&self) -> Result<Vec<Expense>> {
        let expenses = match self.get(EXPENSES_KEY).await? {
            Some(json) => serde_json::from_str(&json).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(expenses)
    }

    /// Rewrite the stored expense list in full.
    pub async fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
        let json = serde_json::to_string(expenses).context("Failed to serialize expenses")?;
        self.put(EXPENSES_KEY, &json).await
    }

    /// Load the theme preference, defaulting to light when the entry is
    /// missing or holds an unknown value.
    pub async fn load_theme(&self) -> Result<Theme> {
        let theme = self
            .get(THEME_KEY)
            .await?
            .and_then(|value| Theme::from_str(&value))
            .unwrap_or_default();
        Ok(theme)
    }

    /// Rewrite the stored theme preference.
    pub async fn save_theme(&self, theme: Theme) -> Result<()> {
        self.put(THEME_KEY, theme.as_str()).await
    }
}
