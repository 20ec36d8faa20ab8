use serde::{Deserialize, Serialize};

use super::{Yen, Ymd};

/// Surrogate key assigned by the store on first insert. Monotonically
/// increasing; never reused, never reassigned.
pub type EntryId = i64;

/// The income-vs-expense classifier (収支区分). Wire codes are fixed:
/// 1 = income, 2 = expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bop {
    Income,
    Expense,
}

impl Bop {
    pub fn code(&self) -> i32 {
        match self {
            Bop::Income => 1,
            Bop::Expense => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Bop::Income),
            2 => Some(Bop::Expense),
            _ => None,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Bop::Income),
            "expense" => Some(Bop::Expense),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Bop::Income => "income",
            Bop::Expense => "expense",
        }
    }
}

impl std::fmt::Display for Bop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One household ledger entry: an income or expense on a given date,
/// classified by category and payment method codes from the master tables.
/// Entries are replaced wholesale on edit, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// None until the store assigns an id on insert.
    pub id: Option<EntryId>,
    /// Transaction date, YYYYMMDD.
    pub ymd: Ymd,
    /// Income or expense.
    pub bop: Bop,
    /// Category code within the bop classifier (see master tables).
    pub cat_cd: i32,
    /// Payment method code within the bop classifier (see master tables).
    pub pmt_cd: i32,
    /// Free-text note.
    pub memo: String,
    /// Amount in whole yen, non-negative.
    pub amount: Yen,
    /// Marks the entry as unpaid (未払い).
    pub accrued: bool,
}

impl Entry {
    /// Create an unpersisted entry. The id is assigned by the store.
    pub fn new(ymd: Ymd, bop: Bop, cat_cd: i32, pmt_cd: i32, amount: Yen) -> Self {
        Self {
            id: None,
            ymd,
            bop,
            cat_cd,
            pmt_cd,
            memo: String::new(),
            amount,
            accrued: false,
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn with_accrued(mut self, accrued: bool) -> Self {
        self.accrued = accrued;
        self
    }

    pub fn with_id(mut self, id: EntryId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns true once the entry has been persisted.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
