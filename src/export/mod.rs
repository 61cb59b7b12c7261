//! Export functionality
//!
//! CSV for the transaction history, JSON for a full snapshot.

pub mod csv;
pub mod json;

pub use csv::export_transactions_csv;
pub use json::{export_snapshot_json, Snapshot};
