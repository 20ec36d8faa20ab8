use thiserror::Error;

use crate::domain::{Bop, EntryId, Ymd};
use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Entry not found: {0}")]
    EntryNotFound(EntryId),

    #[error("Entry has no id; it was never persisted")]
    EntryNotPersisted,

    #[error("Invalid date: {0} is not a valid YYYYMMDD date")]
    InvalidDate(Ymd),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown {bop} category code: {cat_cd}")]
    UnknownCategory { bop: Bop, cat_cd: i32 },

    #[error("Unknown {bop} payment method code: {pmt_cd}")]
    UnknownPayment { bop: Bop, pmt_cd: i32 },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
