mod error;
mod handle;
mod store;

pub use error::StorageError;
pub use handle::StoreHandle;
pub use store::LedgerStore;

/// SQL migration for the initial schema (version 1).
pub const MIGRATION_001_INITIAL: &str = include_str!("migrations/001_initial.sql");

/// Current schema version, tracked via `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 1;
