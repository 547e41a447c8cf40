use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::{LedgerService, SummaryReport};
use crate::domain::{ExchangeRates, Transaction};

/// One-way session snapshot for JSON export. The tracker never reads it
/// back; the ledger lives and dies with the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub rates: ExchangeRates,
    pub transactions: Vec<Transaction>,
    pub summary: SummaryReport,
}

/// Exporter for dumping the current session to CSV or JSON.
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export transactions to CSV format. Returns the row count.
    pub fn export_transactions_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        // Write header
        csv_writer.write_record(["id", "kind", "category", "amount_cents", "created_at"])?;

        let mut count = 0;
        for transaction in self.service.transactions() {
            csv_writer.write_record(&[
                transaction.id.to_string(),
                transaction.kind.to_string(),
                transaction.category.to_string(),
                transaction.amount_cents.to_string(),
                transaction.created_at.to_rfc3339(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the full session as a JSON snapshot.
    pub fn export_session_json<W: Write>(&self, mut writer: W) -> Result<SessionSnapshot> {
        let snapshot = SessionSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            rates: self.service.rates(),
            transactions: self.service.transactions().to_vec(),
            summary: self.service.summary(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
