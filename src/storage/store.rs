use log::debug;
use sqlx::{Row, SqlitePool};

use crate::domain::{Bop, Entry, EntryId};

use super::{MIGRATION_001_INITIAL, SCHEMA_VERSION, StorageError};

/// Durable, single-process store for ledger entries, backed by SQLite.
///
/// The store is deliberately schema-agnostic about master codes: it persists
/// whatever category/payment codes it is given. Validating them against the
/// master tables is the service layer's job.
pub struct LedgerStore {
    pool: SqlitePool,
}

impl LedgerStore {
    /// Create a store over an existing connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given URL.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = SqlitePool::connect(database_url)
            .await
            .map_err(|source| StorageError::Open { source })?;
        Ok(Self::new(pool))
    }

    /// Open (or create) the database file and bring the schema up to date.
    pub async fn open(database_path: &str) -> Result<Self, StorageError> {
        let database_url = format!("sqlite:{}?mode=rwc", database_path);
        let store = Self::connect(&database_url).await?;
        store.migrate().await?;
        debug!("ledger store open at {}", database_path);
        Ok(store)
    }

    /// Apply pending schema migrations, tracked via `PRAGMA user_version`.
    /// Idempotent: a database already at the current version is untouched.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        let row = sqlx::query("PRAGMA user_version")
            .fetch_one(&self.pool)
            .await
            .map_err(|source| StorageError::Migrate { source })?;
        let version: i32 = row.get(0);

        if version < SCHEMA_VERSION {
            debug!("migrating schema from version {} to {}", version, SCHEMA_VERSION);
            sqlx::query(MIGRATION_001_INITIAL)
                .execute(&self.pool)
                .await
                .map_err(|source| StorageError::Migrate { source })?;
            sqlx::query(&format!("PRAGMA user_version = {}", SCHEMA_VERSION))
                .execute(&self.pool)
                .await
                .map_err(|source| StorageError::Migrate { source })?;
        }

        Ok(())
    }

    /// Insert an entry and return its freshly assigned id. Any id already
    /// set on the input is ignored.
    pub async fn add(&self, entry: &Entry) -> Result<EntryId, StorageError> {
        let row = sqlx::query(
            r#"
            INSERT INTO entries (ymd, bop_cd, cat_cd, pmt_cd, memo, amount, accrued_flg)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(entry.ymd)
        .bind(entry.bop.code())
        .bind(entry.cat_cd)
        .bind(entry.pmt_cd)
        .bind(&entry.memo)
        .bind(entry.amount)
        .bind(entry.accrued as i32)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("id"))
    }

    /// Replace the entry stored at `id` wholesale. Upsert semantics: if no
    /// row exists at that id, one is created there rather than erroring.
    pub async fn update(&self, id: EntryId, entry: &Entry) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO entries (id, ymd, bop_cd, cat_cd, pmt_cd, memo, amount, accrued_flg)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                ymd = excluded.ymd,
                bop_cd = excluded.bop_cd,
                cat_cd = excluded.cat_cd,
                pmt_cd = excluded.pmt_cd,
                memo = excluded.memo,
                amount = excluded.amount,
                accrued_flg = excluded.accrued_flg
            "#,
        )
        .bind(id)
        .bind(entry.ymd)
        .bind(entry.bop.code())
        .bind(entry.cat_cd)
        .bind(entry.pmt_cd)
        .bind(&entry.memo)
        .bind(entry.amount)
        .bind(entry.accrued as i32)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete the entry at `id`. Deleting a missing id is not an error.
    pub async fn delete(&self, id: EntryId) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM entries WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Fetch a single entry by id.
    pub async fn get(&self, id: EntryId) -> Result<Option<Entry>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT id, ymd, bop_cd, cat_cd, pmt_cd, memo, amount, accrued_flg
            FROM entries
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_entry(&row)?)),
            None => Ok(None),
        }
    }

    /// List every entry, newest date first. Ties on equal `ymd` order
    /// later-inserted entries first (insertion order reversed).
    pub async fn list_all(&self) -> Result<Vec<Entry>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT id, ymd, bop_cd, cat_cd, pmt_cd, memo, amount, accrued_flg
            FROM entries
            ORDER BY ymd DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_entry).collect()
    }

    /// Delete every entry. The id counter is not reset, so ids stay unique
    /// across a clear.
    pub async fn clear_all(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM entries").execute(&self.pool).await?;
        Ok(())
    }

    /// Count stored entries.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM entries")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("count"))
    }

    fn row_to_entry(row: &sqlx::sqlite::SqliteRow) -> Result<Entry, StorageError> {
        let id: EntryId = row.get("id");
        let bop_cd: i32 = row.get("bop_cd");
        let bop = Bop::from_code(bop_cd).ok_or_else(|| StorageError::CorruptRecord {
            id,
            reason: format!("unknown bop code {}", bop_cd),
        })?;

        Ok(Entry {
            id: Some(id),
            ymd: row.get("ymd"),
            bop,
            cat_cd: row.get("cat_cd"),
            pmt_cd: row.get("pmt_cd"),
            memo: row.get("memo"),
            amount: row.get("amount"),
            accrued: row.get::<i32, _>("accrued_flg") != 0,
        })
    }
}
