//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{PaymentMethod, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Ctx")]
    context: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Flags")]
    flags: String,
}

impl TransactionRow {
    fn from_transaction(txn: &Transaction) -> Self {
        let method = match txn.payment {
            PaymentMethod::Credit { .. } => "CREDIT",
            PaymentMethod::Debit { .. } => "DEBIT",
        };
        let mut flags: Vec<String> = Vec::new();
        if txn.is_transfer {
            flags.push("transfer".into());
        }
        if txn.is_recurring {
            flags.push("recurring".into());
        }
        if let Some(info) = txn.installment {
            flags.push(format!("{}/{}", info.current, info.total));
        }

        Self {
            date: txn.date.format("%Y-%m-%d").to_string(),
            description: txn.description.clone(),
            category: txn.category.clone(),
            amount: txn.signed().to_string(),
            context: txn.context.to_string(),
            method: method.to_string(),
            flags: flags.join(","),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(TransactionRow::from_transaction)
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format one transaction's details
pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Amount:      {}\n", txn.signed()));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Context:     {}\n", txn.context));

    match txn.payment {
        PaymentMethod::Credit { card_id } => {
            output.push_str("Method:      CREDIT\n");
            if let Some(id) = card_id {
                output.push_str(&format!("Card:        {}\n", id));
            }
        }
        PaymentMethod::Debit { bank_account_id } => {
            output.push_str("Method:      DEBIT\n");
            if let Some(id) = bank_account_id {
                output.push_str(&format!("Bank:        {}\n", id));
            }
        }
    }

    if let Some(info) = txn.installment {
        output.push_str(&format!(
            "Installment: {}/{} (group {})\n",
            info.current, info.total, info.group_id
        ));
    }
    if txn.is_transfer {
        output.push_str("Transfer:    yes\n");
    }
    if txn.is_recurring {
        output.push_str("Recurring:   template (projected, never posted)\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountContext, Money, TransactionType};
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::new(
            "Groceries",
            Money::from_cents(35050),
            NaiveDate::from_ymd_opt(2025, 3, 6).unwrap(),
            TransactionType::Expense,
            "Food",
            AccountContext::Pf,
            PaymentMethod::debit(),
        )
    }

    #[test]
    fn test_table_contains_fields() {
        let table = format_transaction_table(&[sample()]);
        assert!(table.contains("Groceries"));
        assert!(table.contains("Food"));
        assert!(table.contains("-R$ 350.50"));
        assert!(table.contains("PF"));
    }

    #[test]
    fn test_empty_table() {
        assert!(format_transaction_table(&[]).contains("No transactions found"));
    }

    #[test]
    fn test_details_show_flags() {
        let mut txn = sample();
        txn.is_transfer = true;
        let details = format_transaction_details(&txn);
        assert!(details.contains("Transfer:    yes"));
        assert!(details.contains("DEBIT"));
    }
}
