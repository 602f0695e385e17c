use anyhow::Result;
use spesa::application::LedgerService;
use spesa::domain::{CategoryFilter, Theme};
use spesa::storage::MIGRATION_001_INITIAL;
use tempfile::TempDir;

async fn init_db() -> Result<(LedgerService, TempDir, String)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_str()
        .unwrap()
        .to_string();
    let service = LedgerService::init(&db_path).await?;
    Ok((service, temp_dir, db_path))
}

#[tokio::test]
async fn test_expenses_round_trip_across_instances() -> Result<()> {
    let (mut service, _temp, db_path) = init_db().await?;

    service.add_expense("Lunch", "12.50", "Food").await?;
    service.add_expense("Monthly rent", "800", "Rent").await?;
    let before = service.state().expenses.clone();
    drop(service);

    let reloaded = LedgerService::connect(&db_path).await?;
    assert_eq!(reloaded.state().expenses, before);
    assert_eq!(reloaded.total(&CategoryFilter::All), 81250);
    Ok(())
}

#[tokio::test]
async fn test_theme_round_trip_across_instances() -> Result<()> {
    let (mut service, _temp, db_path) = init_db().await?;

    service.set_theme(Theme::Dark).await?;
    drop(service);

    let reloaded = LedgerService::connect(&db_path).await?;
    assert_eq!(reloaded.theme(), Theme::Dark);
    Ok(())
}

#[tokio::test]
async fn test_theme_toggle_alternates_and_persists() -> Result<()> {
    let (mut service, _temp, db_path) = init_db().await?;
    assert_eq!(service.theme(), Theme::Light);

    assert_eq!(service.toggle_theme().await?, Theme::Dark);
    assert_eq!(service.toggle_theme().await?, Theme::Light);
    assert_eq!(service.toggle_theme().await?, Theme::Dark);
    drop(service);

    let reloaded = LedgerService::connect(&db_path).await?;
    assert_eq!(reloaded.theme(), Theme::Dark);
    Ok(())
}

#[tokio::test]
async fn test_filter_is_ephemeral() -> Result<()> {
    let (mut service, _temp, db_path) = init_db().await?;

    service.add_expense("Lunch", "12.50", "Food").await?;
    service.set_filter(CategoryFilter::Category("Food".into()));
    drop(service);

    // The view filter resets to "all" on every load
    let reloaded = LedgerService::connect(&db_path).await?;
    assert_eq!(reloaded.state().filter, CategoryFilter::All);
    Ok(())
}

#[tokio::test]
async fn test_removal_is_persisted() -> Result<()> {
    let (mut service, _temp, db_path) = init_db().await?;

    let id = service.add_expense("Lunch", "12.50", "Food").await?.id;
    service.add_expense("Groceries", "43.20", "Food").await?;
    service.remove_expense(id).await?;
    drop(service);

    let reloaded = LedgerService::connect(&db_path).await?;
    assert_eq!(reloaded.state().expenses.len(), 1);
    assert_eq!(reloaded.state().expenses[0].description, "Groceries");
    Ok(())
}

#[tokio::test]
async fn test_fresh_database_loads_documented_defaults() -> Result<()> {
    let (service, _temp, _db_path) = init_db().await?;

    assert!(service.state().expenses.is_empty());
    assert_eq!(service.state().filter, CategoryFilter::All);
    assert_eq!(service.theme(), Theme::Light);
    Ok(())
}

#[tokio::test]
async fn test_corrupt_store_recovers_with_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_str()
        .unwrap()
        .to_string();

    // Plant garbage under both keys before the service ever loads
    {
        let pool = sqlx::SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path)).await?;
        sqlx::query(MIGRATION_001_INITIAL).execute(&pool).await?;
        sqlx::query("INSERT OR REPLACE INTO kv (key, value) VALUES ('expenses', 'not json')")
            .execute(&pool)
            .await?;
        sqlx::query("INSERT OR REPLACE INTO kv (key, value) VALUES ('theme', 'sepia')")
            .execute(&pool)
            .await?;
        pool.close().await;
    }

    // Malformed entries are never fatal: empty ledger, light theme
    let mut service = LedgerService::connect(&db_path).await?;
    assert!(service.state().expenses.is_empty());
    assert_eq!(service.theme(), Theme::Light);

    // And the ledger is usable again after the next write
    service.add_expense("Lunch", "12.50", "Food").await?;
    drop(service);
    let reloaded = LedgerService::connect(&db_path).await?;
    assert_eq!(reloaded.state().expenses.len(), 1);
    Ok(())
}
