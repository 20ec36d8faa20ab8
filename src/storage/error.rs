use thiserror::Error;

/// The single error kind surfaced by the ledger store: any failure of the
/// underlying medium (unavailable, rejected write, corrupted row). The store
/// never catches or retries; retry policy belongs to the caller.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to open database: {source}")]
    Open {
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to apply schema migration: {source}")]
    Migrate {
        #[source]
        source: sqlx::Error,
    },

    #[error("database operation failed: {source}")]
    Query {
        #[from]
        source: sqlx::Error,
    },

    #[error("stored record {id} is corrupted: {reason}")]
    CorruptRecord { id: i64, reason: String },
}
