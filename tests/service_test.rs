mod common;

use anyhow::Result;
use kakeibo::application::AppError;
use kakeibo::domain::{Bop, Entry};

use common::{expense, income, test_service};

#[tokio::test]
async fn test_add_and_list_via_service() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let entry = service
        .add_entry(expense(20240301, 1200).with_memo("lunch"))
        .await?;
    assert!(entry.is_persisted());

    let listed = service.list_entries().await?;
    assert_eq!(listed, vec![entry]);

    Ok(())
}

#[tokio::test]
async fn test_update_and_delete_via_service() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let entry = service.add_entry(income(20240325, 250000)).await?;

    let mut edited = entry.clone();
    edited.amount = 260000;
    edited.memo = "bonus month".to_string();
    service.update_entry(&edited).await?;

    let listed = service.list_entries().await?;
    assert_eq!(listed, vec![edited]);

    service.delete_entry(entry.id.unwrap()).await?;
    assert!(service.list_entries().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_update_requires_persisted_entry() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let result = service.update_entry(&expense(20240301, 100)).await;
    assert!(matches!(result, Err(AppError::EntryNotPersisted)));

    Ok(())
}

#[tokio::test]
async fn test_get_entry_not_found() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let result = service.get_entry(7).await;
    assert!(matches!(result, Err(AppError::EntryNotFound(7))));

    Ok(())
}

#[tokio::test]
async fn test_rejects_invalid_date() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let result = service.add_entry(expense(20230229, 100)).await;
    assert!(matches!(result, Err(AppError::InvalidDate(20230229))));

    Ok(())
}

#[tokio::test]
async fn test_rejects_negative_amount() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let result = service.add_entry(expense(20240301, -100)).await;
    assert!(matches!(result, Err(AppError::InvalidAmount(_))));

    Ok(())
}

#[tokio::test]
async fn test_rejects_unknown_master_codes() -> Result<()> {
    let (service, _temp) = test_service().await?;

    // Category 17 does not exist in the expense category master.
    let result = service
        .add_entry(Entry::new(20240301, Bop::Expense, 17, 1, 100))
        .await;
    assert!(matches!(
        result,
        Err(AppError::UnknownCategory { cat_cd: 17, .. })
    ));

    // Payment 6 is a gap in the expense payment master.
    let result = service
        .add_entry(Entry::new(20240301, Bop::Expense, 11, 6, 100))
        .await;
    assert!(matches!(
        result,
        Err(AppError::UnknownPayment { pmt_cd: 6, .. })
    ));

    // Codes are validated per classifier: category 11 is expense-only.
    let result = service
        .add_entry(Entry::new(20240301, Bop::Income, 11, 1, 100))
        .await;
    assert!(matches!(result, Err(AppError::UnknownCategory { .. })));

    Ok(())
}

#[tokio::test]
async fn test_zero_amount_is_accepted() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let entry = service.add_entry(expense(20240301, 0)).await?;
    assert_eq!(entry.amount, 0);

    Ok(())
}

#[tokio::test]
async fn test_clear_entries() -> Result<()> {
    let (service, _temp) = test_service().await?;

    service.add_entry(expense(20240301, 100)).await?;
    service.add_entry(income(20240302, 200)).await?;
    assert_eq!(service.count_entries().await?, 2);

    service.clear_entries().await?;
    assert_eq!(service.count_entries().await?, 0);
    assert!(service.list_entries().await?.is_empty());

    Ok(())
}
