use tokio::sync::OnceCell;

use super::{LedgerStore, StorageError};

/// Process-wide lazy handle to the ledger store.
///
/// The store moves through {unopened -> opening -> open} exactly once: the
/// first operation triggers the open, and concurrent first callers all await
/// the same in-flight initialization instead of racing to create the schema
/// twice. If the open fails, the handle stays unopened and a later call
/// retries.
pub struct StoreHandle {
    database_path: String,
    cell: OnceCell<LedgerStore>,
}

impl StoreHandle {
    /// Create an unopened handle. No I/O happens until the first `get`.
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
            cell: OnceCell::new(),
        }
    }

    /// Get the open store, opening it on first use.
    pub async fn get(&self) -> Result<&LedgerStore, StorageError> {
        self.cell
            .get_or_try_init(|| LedgerStore::open(&self.database_path))
            .await
    }

    /// Returns true once the store has been opened.
    pub fn is_open(&self) -> bool {
        self.cell.initialized()
    }

    pub fn database_path(&self) -> &str {
        &self.database_path
    }
}
