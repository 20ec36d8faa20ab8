use crate::domain::{self, Entry, EntryId, is_valid_ymd};
use crate::storage::{LedgerStore, StoreHandle};

use super::AppError;

/// Application service providing high-level ledger operations.
/// This is the primary interface for any client (CLI, exporter, etc.).
///
/// The service owns the caller-side validation the store deliberately
/// omits: date validity, non-negative amounts, and category/payment code
/// resolution against the master tables.
pub struct LedgerService {
    store: StoreHandle,
}

impl LedgerService {
    /// Create a service over the database at the given path. The store is
    /// opened lazily by the first operation.
    pub fn new(database_path: &str) -> Self {
        Self {
            store: StoreHandle::new(database_path),
        }
    }

    /// Create a service and open the database eagerly (connect + migrate).
    pub async fn init(database_path: &str) -> Result<Self, AppError> {
        let service = Self::new(database_path);
        service.store().await?;
        Ok(service)
    }

    async fn store(&self) -> Result<&LedgerStore, AppError> {
        Ok(self.store.get().await?)
    }

    fn validate(entry: &Entry) -> Result<(), AppError> {
        if !is_valid_ymd(entry.ymd) {
            return Err(AppError::InvalidDate(entry.ymd));
        }
        if entry.amount < 0 {
            return Err(AppError::InvalidAmount(
                "Amount must be non-negative".to_string(),
            ));
        }
        if !domain::is_valid_category(entry.bop, entry.cat_cd) {
            return Err(AppError::UnknownCategory {
                bop: entry.bop,
                cat_cd: entry.cat_cd,
            });
        }
        if !domain::is_valid_payment(entry.bop, entry.pmt_cd) {
            return Err(AppError::UnknownPayment {
                bop: entry.bop,
                pmt_cd: entry.pmt_cd,
            });
        }
        Ok(())
    }

    /// Record a new entry. Returns the entry with its assigned id.
    pub async fn add_entry(&self, entry: Entry) -> Result<Entry, AppError> {
        Self::validate(&entry)?;
        let id = self.store().await?.add(&entry).await?;
        Ok(entry.with_id(id))
    }

    /// Replace a previously persisted entry wholesale, keyed by its id.
    pub async fn update_entry(&self, entry: &Entry) -> Result<(), AppError> {
        let id = entry.id.ok_or(AppError::EntryNotPersisted)?;
        Self::validate(entry)?;
        self.store().await?.update(id, entry).await?;
        Ok(())
    }

    /// Fetch a single entry.
    pub async fn get_entry(&self, id: EntryId) -> Result<Entry, AppError> {
        self.store()
            .await?
            .get(id)
            .await?
            .ok_or(AppError::EntryNotFound(id))
    }

    /// Delete an entry. Deleting an id that no longer exists is a no-op.
    pub async fn delete_entry(&self, id: EntryId) -> Result<(), AppError> {
        self.store().await?.delete(id).await?;
        Ok(())
    }

    /// List every entry, newest date first.
    pub async fn list_entries(&self) -> Result<Vec<Entry>, AppError> {
        Ok(self.store().await?.list_all().await?)
    }

    /// Delete every entry.
    pub async fn clear_entries(&self) -> Result<(), AppError> {
        self.store().await?.clear_all().await?;
        Ok(())
    }

    /// Count stored entries.
    pub async fn count_entries(&self) -> Result<i64, AppError> {
        Ok(self.store().await?.count().await?)
    }
}
