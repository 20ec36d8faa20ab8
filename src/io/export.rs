use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::LedgerService;
use crate::domain::{self, Entry, format_ymd};

/// Full-ledger snapshot for backup export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub entries: Vec<Entry>,
}

/// Exporter for converting ledger data to external formats.
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export all entries to CSV, master codes resolved to display names.
    /// Returns the number of rows written.
    pub async fn export_entries_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let entries = self.service.list_entries().await?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "id", "date", "bop", "category", "payment", "amount", "memo", "accrued",
        ])?;

        let mut count = 0;
        for entry in &entries {
            csv_writer.write_record([
                entry.id.map(|id| id.to_string()).unwrap_or_default(),
                format_ymd(entry.ymd),
                domain::bop_name(entry.bop).to_string(),
                domain::category_name(entry.bop, entry.cat_cd)
                    .unwrap_or_default()
                    .to_string(),
                domain::payment_name(entry.bop, entry.pmt_cd)
                    .unwrap_or_default()
                    .to_string(),
                entry.amount.to_string(),
                entry.memo.clone(),
                (if entry.accrued { "1" } else { "0" }).to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the full ledger as a JSON snapshot.
    pub async fn export_full_json<W: Write>(&self, mut writer: W) -> Result<LedgerSnapshot> {
        let entries = self.service.list_entries().await?;

        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            entries,
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
