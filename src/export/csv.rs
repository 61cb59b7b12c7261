//! CSV export
//!
//! Writes the transaction history as delimited rows with the signed amount
//! convention: expenses are negative, incomes positive. Recurring templates
//! are exported too, marked by the Recurring column.

use std::io::Write;

use crate::error::{FindualError, FindualResult};
use crate::models::{PaymentMethod, Transaction, TransactionType};
use crate::storage::Storage;

const HEADER: [&str; 9] = [
    "ID",
    "Date",
    "Description",
    "Category",
    "Amount",
    "Type",
    "Context",
    "Method",
    "Recurring",
];

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write + ?Sized>(
    storage: &Storage,
    writer: &mut W,
) -> FindualResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| FindualError::Export(e.to_string()))?;

    for txn in storage.transactions.get_all()? {
        csv_writer
            .write_record(record(&txn))
            .map_err(|e| FindualError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FindualError::Export(e.to_string()))?;
    Ok(())
}

fn record(txn: &Transaction) -> Vec<String> {
    let signed = txn.signed();
    let amount = format!(
        "{}{}.{:02}",
        if signed.is_negative() { "-" } else { "" },
        signed.whole().abs(),
        signed.cents_part()
    );
    let method = match txn.payment {
        PaymentMethod::Credit { .. } => "CREDIT",
        PaymentMethod::Debit { .. } => "DEBIT",
    };
    let kind = match txn.kind {
        TransactionType::Income => "INCOME",
        TransactionType::Expense => "EXPENSE",
    };

    vec![
        txn.id.to_string(),
        txn.date.to_string(),
        txn.description.clone(),
        txn.category.clone(),
        amount,
        kind.to_string(),
        txn.context.to_string(),
        method.to_string(),
        txn.is_recurring.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FindualPaths;
    use crate::models::{AccountContext, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FindualPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_signed_amounts() {
        let (_temp_dir, storage) = create_test_storage();

        storage
            .transactions
            .push(Transaction::new(
                "Client invoice",
                Money::from_cents(500000),
                NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
                TransactionType::Income,
                "Sales/Services",
                AccountContext::Pj,
                PaymentMethod::debit(),
            ))
            .unwrap();
        storage
            .transactions
            .push(Transaction::new(
                "Groceries",
                Money::from_cents(35050),
                NaiveDate::from_ymd_opt(2025, 3, 6).unwrap(),
                TransactionType::Expense,
                "Food",
                AccountContext::Pf,
                PaymentMethod::credit(),
            ))
            .unwrap();

        let mut csv_output = Vec::new();
        export_transactions_csv(&storage, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.starts_with("ID,Date,Description,Category,Amount,Type,Context,Method"));
        assert!(csv_string.contains("5000.00,INCOME,PJ,DEBIT"));
        assert!(csv_string.contains("-350.50,EXPENSE,PF,CREDIT"));
    }

    #[test]
    fn test_export_quotes_commas() {
        let (_temp_dir, storage) = create_test_storage();

        storage
            .transactions
            .push(Transaction::new(
                "Dinner, drinks",
                Money::from_cents(12000),
                NaiveDate::from_ymd_opt(2025, 3, 6).unwrap(),
                TransactionType::Expense,
                "Food",
                AccountContext::Pf,
                PaymentMethod::debit(),
            ))
            .unwrap();

        let mut csv_output = Vec::new();
        export_transactions_csv(&storage, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("\"Dinner, drinks\""));
    }

    #[test]
    fn test_export_empty_store_is_header_only() {
        let (_temp_dir, storage) = create_test_storage();

        let mut csv_output = Vec::new();
        export_transactions_csv(&storage, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert_eq!(csv_string.lines().count(), 1);
    }
}
