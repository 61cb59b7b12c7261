//! JSON snapshot export
//!
//! Dumps every collection into one self-contained document, suitable for
//! backup or for feeding another tool. The snapshot is a copy; importing it
//! back is out of scope.

use std::io::Write;

use serde::Serialize;

use crate::error::{FindualError, FindualResult};
use crate::models::{BankAccount, Category, CreditCard, Goal, Transaction};
use crate::storage::Storage;

/// A full dump of the stored state
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub exported_at: String,
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub cards: Vec<CreditCard>,
    pub banks: Vec<BankAccount>,
    pub goals: Vec<Goal>,
}

impl Snapshot {
    /// Capture the current state of all collections
    pub fn capture(storage: &Storage) -> FindualResult<Self> {
        Ok(Self {
            exported_at: chrono::Local::now().to_rfc3339(),
            transactions: storage.transactions.get_all()?,
            categories: storage.categories.get_all()?,
            cards: storage.cards.get_all()?,
            banks: storage.banks.get_all()?,
            goals: storage.goals.get_all()?,
        })
    }
}

/// Export the full state as pretty-printed JSON
pub fn export_snapshot_json<W: Write + ?Sized>(
    storage: &Storage,
    writer: &mut W,
) -> FindualResult<()> {
    let snapshot = Snapshot::capture(storage)?;
    serde_json::to_writer_pretty(&mut *writer, &snapshot)
        .map_err(|e| FindualError::Export(e.to_string()))?;
    writer
        .write_all(b"\n")
        .map_err(|e| FindualError::Export(e.to_string()))?;
    Ok(())
}
