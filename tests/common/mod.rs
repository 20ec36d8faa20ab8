// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use kakeibo::application::LedgerService;
use kakeibo::domain::{Bop, Entry, Yen, Ymd};
use tempfile::TempDir;

/// Helper to create a test service with a temporary database
pub async fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let service = LedgerService::init(db_path.to_str().unwrap()).await?;
    Ok((service, temp_dir))
}

/// Helper to create a temporary directory and the path of a database in it
pub fn test_db_path() -> Result<(String, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    Ok((db_path.to_str().unwrap().to_string(), temp_dir))
}

/// An expense entry with valid master codes (食費, 現金)
pub fn expense(ymd: Ymd, amount: Yen) -> Entry {
    Entry::new(ymd, Bop::Expense, 11, 1, amount)
}

/// An income entry with valid master codes (給与, 振込)
pub fn income(ymd: Ymd, amount: Yen) -> Entry {
    Entry::new(ymd, Bop::Income, 1, 1, amount)
}
