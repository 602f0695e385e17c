// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use spesa::application::LedgerService;
use tempfile::TempDir;

/// Helper to create a test service with a temporary database
pub async fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let service = LedgerService::init(db_path.to_str().unwrap()).await?;
    Ok((service, temp_dir))
}

/// Test fixture: a small ledger spanning two categories
pub struct SampleLedger;

impl SampleLedger {
    /// Lunch 12.50 (Food), Rent 800.00 (Rent), Groceries 43.20 (Food)
    pub async fn populate(service: &mut LedgerService) -> Result<()> {
        service.add_expense("Lunch", "12.50", "Food").await?;
        service.add_expense("Monthly rent", "800", "Rent").await?;
        service.add_expense("Groceries", "43.20", "Food").await?;
        Ok(())
    }
}
