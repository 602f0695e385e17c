mod common;

use anyhow::Result;
use common::test_service;
use spesa::application::{AppError, ValidationRules};
use spesa::domain::CategoryFilter;

#[tokio::test]
async fn test_empty_description_is_rejected() -> Result<()> {
    let (mut service, _temp) = test_service().await?;

    let err = service.add_expense("", "12.50", "Food").await.unwrap_err();
    assert!(matches!(err, AppError::EmptyDescription));

    let err = service.add_expense("   ", "12.50", "Food").await.unwrap_err();
    assert!(matches!(err, AppError::EmptyDescription));

    assert!(service.state().expenses.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_unparseable_amount_is_rejected() -> Result<()> {
    let (mut service, _temp) = test_service().await?;

    for amount in ["", "  ", "abc", "1.2.3", "12,50", ".", "-.", "1.-5", "1.€5"] {
        let err = service.add_expense("Lunch", amount, "Food").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)), "amount: {:?}", amount);
    }

    assert!(service.state().expenses.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_empty_category_is_rejected() -> Result<()> {
    let (mut service, _temp) = test_service().await?;

    let err = service.add_expense("Lunch", "12.50", "  ").await.unwrap_err();
    assert!(matches!(err, AppError::EmptyCategory));

    assert!(service.state().expenses.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_rejected_add_leaves_ledger_unchanged() -> Result<()> {
    let (mut service, _temp) = test_service().await?;
    service.add_expense("Lunch", "12.50", "Food").await?;

    let before = service.state().expenses.clone();
    assert!(service.add_expense("", "1", "Food").await.is_err());
    assert!(service.add_expense("x", "nope", "Food").await.is_err());
    assert!(service.add_expense("x", "1", "").await.is_err());

    assert_eq!(service.state().expenses, before);
    Ok(())
}

#[tokio::test]
async fn test_negative_amounts_are_accepted_by_default() -> Result<()> {
    let (mut service, _temp) = test_service().await?;

    service.add_expense("Shoes", "79.99", "Clothing").await?;
    let refund = service.add_expense("Refund: shoes", "-79.99", "Clothing").await?;
    assert_eq!(refund.amount_cents, -7999);

    assert_eq!(service.total(&CategoryFilter::All), 0);
    Ok(())
}

#[tokio::test]
async fn test_zero_amount_is_accepted() -> Result<()> {
    let (mut service, _temp) = test_service().await?;

    let expense = service.add_expense("Free sample", "0", "Food").await?;
    assert_eq!(expense.amount_cents, 0);
    Ok(())
}

#[tokio::test]
async fn test_reject_negative_rule() -> Result<()> {
    let (service, _temp) = test_service().await?;
    let mut service = service.with_rules(ValidationRules {
        allow_negative_amounts: false,
    });

    let err = service
        .add_expense("Refund: shoes", "-79.99", "Clothing")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NegativeAmount(-7999)));
    assert!(service.state().expenses.is_empty());

    // Zero and positive amounts remain valid under the rule
    service.add_expense("Free sample", "0", "Food").await?;
    service.add_expense("Lunch", "12.50", "Food").await?;
    assert_eq!(service.state().expenses.len(), 2);
    Ok(())
}
