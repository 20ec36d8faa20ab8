use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::LedgerService;
use crate::domain::{
    self, Bop, Entry, EntryId, Ymd, format_ymd_short, format_yen, parse_yen, parse_ymd, today_ymd,
};

/// Kakeibo - Household Ledger
#[derive(Parser)]
#[command(name = "kakeibo")]
#[command(about = "A local-first household income/expense ledger")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "kakeibo.db")]
    pub database: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new database
    Init,

    /// Record a new entry
    Add {
        /// Amount in yen (e.g., "1200" or "1,200")
        amount: String,

        /// Classifier: income or expense
        #[arg(short, long, default_value = "expense")]
        bop: String,

        /// Category code (see `masters`)
        #[arg(short, long)]
        category: i32,

        /// Payment method code (see `masters`)
        #[arg(short, long)]
        payment: i32,

        /// Date of the entry (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Free-text note
        #[arg(short, long)]
        memo: Option<String>,

        /// Mark the entry as unpaid
        #[arg(long)]
        accrued: bool,
    },

    /// Replace an existing entry wholesale
    Edit {
        /// Entry id
        id: EntryId,

        /// Amount in yen (e.g., "1200" or "1,200")
        amount: String,

        /// Classifier: income or expense
        #[arg(short, long, default_value = "expense")]
        bop: String,

        /// Category code (see `masters`)
        #[arg(short, long)]
        category: i32,

        /// Payment method code (see `masters`)
        #[arg(short, long)]
        payment: i32,

        /// Date of the entry (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Free-text note
        #[arg(short, long)]
        memo: Option<String>,

        /// Mark the entry as unpaid
        #[arg(long)]
        accrued: bool,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: EntryId,
    },

    /// List all entries, newest date first
    List,

    /// Show the category and payment method code tables
    Masters,

    /// Export data to CSV or JSON
    Export {
        /// What to export: entries, full
        #[arg(default_value = "entries")]
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Delete every entry
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Init => {
                LedgerService::init(&self.database).await?;
                println!("Database initialized: {}", self.database);
            }

            Commands::Add {
                amount,
                bop,
                category,
                payment,
                date,
                memo,
                accrued,
            } => {
                let service = LedgerService::new(&self.database);
                let entry = build_entry(&amount, &bop, category, payment, date, memo, accrued)?;

                let entry = service.add_entry(entry).await?;
                println!(
                    "Recorded entry #{}: {} {} on {}",
                    entry.id.unwrap_or_default(),
                    domain::bop_name(entry.bop),
                    format_yen(entry.amount),
                    domain::format_ymd(entry.ymd)
                );
            }

            Commands::Edit {
                id,
                amount,
                bop,
                category,
                payment,
                date,
                memo,
                accrued,
            } => {
                let service = LedgerService::new(&self.database);
                let entry =
                    build_entry(&amount, &bop, category, payment, date, memo, accrued)?.with_id(id);

                service.update_entry(&entry).await?;
                println!("Updated entry #{}", id);
            }

            Commands::Delete { id } => {
                let service = LedgerService::new(&self.database);
                service.delete_entry(id).await?;
                println!("Deleted entry #{}", id);
            }

            Commands::List => {
                let service = LedgerService::new(&self.database);
                run_list_command(&service).await?;
            }

            Commands::Masters => {
                run_masters_command();
            }

            Commands::Export {
                export_type,
                output,
            } => {
                let service = LedgerService::new(&self.database);
                run_export_command(&service, &export_type, output.as_deref()).await?;
            }

            Commands::Clear { yes } => {
                if !yes {
                    anyhow::bail!("Refusing to delete all entries without --yes");
                }
                let service = LedgerService::new(&self.database);
                service.clear_entries().await?;
                println!("All entries deleted.");
            }
        }

        Ok(())
    }
}

fn build_entry(
    amount: &str,
    bop: &str,
    category: i32,
    payment: i32,
    date: Option<String>,
    memo: Option<String>,
    accrued: bool,
) -> Result<Entry> {
    let bop = Bop::from_str(bop)
        .with_context(|| format!("Invalid classifier '{}'. Valid values: income, expense", bop))?;

    let amount = parse_yen(amount).context("Invalid amount format. Use '1200' or '1,200'")?;

    let ymd: Ymd = match date {
        Some(date_str) => parse_ymd(&date_str)
            .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str))?,
        None => today_ymd(),
    };

    let mut entry = Entry::new(ymd, bop, category, payment, amount).with_accrued(accrued);
    if let Some(memo) = memo {
        entry = entry.with_memo(memo);
    }
    Ok(entry)
}

async fn run_list_command(service: &LedgerService) -> Result<()> {
    let entries = service.list_entries().await?;
    if entries.is_empty() {
        println!("No entries found.");
        return Ok(());
    }

    println!(
        "{:<6} {:<6} {:<6} {:<12} {:<14} {:>12}  {}",
        "ID", "DATE", "BOP", "CATEGORY", "PAYMENT", "AMOUNT", "MEMO"
    );
    println!("{}", "-".repeat(72));
    for entry in entries {
        let category = domain::category_name(entry.bop, entry.cat_cd).unwrap_or("?");
        let payment = domain::payment_name(entry.bop, entry.pmt_cd).unwrap_or("?");
        let memo = if entry.accrued {
            format!("{} [未払い]", entry.memo)
        } else {
            entry.memo.clone()
        };

        println!(
            "{:<6} {:<6} {:<6} {:<12} {:<14} {:>12}  {}",
            entry.id.unwrap_or_default(),
            format_ymd_short(entry.ymd),
            domain::bop_name(entry.bop),
            category,
            payment,
            format_yen(entry.amount),
            memo.trim()
        );
    }

    Ok(())
}

fn run_masters_command() {
    for bop in [Bop::Income, Bop::Expense] {
        println!("{} ({})", domain::bop_name(bop), bop);
        println!("  Categories:");
        for item in domain::categories_for(bop) {
            println!("    {:>3}  {}", item.code, item.name);
        }
        println!("  Payment methods:");
        for item in domain::payments_for(bop) {
            println!("    {:>3}  {}", item.code, item.name);
        }
        println!();
    }
}

async fn run_export_command(
    service: &LedgerService,
    export_type: &str,
    output: Option<&str>,
) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;
    use std::io::{Write, stdout};

    let exporter = Exporter::new(service);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    match export_type {
        "entries" => {
            let count = exporter.export_entries_csv(writer).await?;
            if output.is_some() {
                eprintln!("Exported {} entries", count);
            }
        }
        "full" => {
            let snapshot = exporter.export_full_json(writer).await?;
            if output.is_some() {
                eprintln!("Exported full ledger: {} entries", snapshot.entries.len());
            }
        }
        _ => {
            anyhow::bail!(
                "Invalid export type '{}'. Valid types: entries, full",
                export_type
            );
        }
    }

    Ok(())
}
