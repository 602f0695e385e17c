use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::LedgerService;
use crate::domain::{format_cents, Expense, Theme};

/// Ledger snapshot for JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub theme: Theme,
    pub expenses: Vec<Expense>,
}

/// Exporter for converting ledger data to external formats
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export all expenses to CSV format. Returns the number of rows written.
    pub fn export_expenses_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let expenses = &self.service.state().expenses;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "description", "amount", "category"])?;

        let mut count = 0;
        for expense in expenses {
            csv_writer.write_record([
                expense.id.to_string(),
                expense.description.clone(),
                format_cents(expense.amount_cents),
                expense.category.clone(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the full ledger as a versioned JSON snapshot.
    pub fn export_snapshot_json<W: Write>(&self, mut writer: W) -> Result<LedgerSnapshot> {
        let state = self.service.state();
        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            theme: state.theme,
            expenses: state.expenses.clone(),
        };

        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writeln!(writer)?;
        Ok(snapshot)
    }
}
