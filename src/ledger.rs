use serde::{Deserialize, Serialize};

use crate::types::Month;

/// fixed message returned when a month has no recorded transactions
pub const NO_TRANSACTIONS_MESSAGE: &str = "No transactions recorded for this month.";

/// a single recorded transaction, immutable once appended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub description: String,
    pub month: Month,
}

/// append-only transaction log keyed by month
///
/// Entries arrive in non-decreasing month order because the engine only
/// moves forward; the log itself does not enforce ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// append a transaction record
    pub fn record(&mut self, description: impl Into<String>, month: Month) {
        self.entries.push(LedgerEntry {
            description: description.into(),
            month,
        });
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn entries_for_month(&self, month: Month) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter().filter(move |e| e.month == month)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// human-readable summary of the month's transactions, one per line
    pub fn month_summary(&self, month: Month) -> String {
        let mut summary = String::new();
        for entry in self.entries_for_month(month) {
            summary.push_str("- ");
            summary.push_str(&entry.description);
            summary.push('\n');
        }

        if summary.is_empty() {
            return NO_TRANSACTIONS_MESSAGE.to_string();
        }
        summary
    }
}
