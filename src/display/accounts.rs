//! Bank account and credit card display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{BankAccount, Money};
use crate::services::CardUsage;

#[derive(Tabled)]
struct BankRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Ctx")]
    context: String,
    #[tabled(rename = "Initial")]
    initial: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format bank accounts with their derived balances
pub fn format_bank_table(banks: &[(BankAccount, Money)]) -> String {
    if banks.is_empty() {
        return "No bank accounts found.\n".to_string();
    }

    let rows: Vec<BankRow> = banks
        .iter()
        .map(|(bank, balance)| BankRow {
            name: bank.name.clone(),
            context: bank.context.to_string(),
            initial: bank.initial_balance.to_string(),
            balance: balance.to_string(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Ctx")]
    context: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "Closes")]
    closing_day: u32,
    #[tabled(rename = "Due")]
    due_day: u32,
}

/// Format credit cards with derived usage
pub fn format_card_table(usages: &[CardUsage]) -> String {
    if usages.is_empty() {
        return "No credit cards found.\n".to_string();
    }

    let rows: Vec<CardRow> = usages
        .iter()
        .map(|u| CardRow {
            name: u.card.name.clone(),
            context: u.card.context.to_string(),
            limit: u.card.limit.to_string(),
            used: u.usage.to_string(),
            available: u.available.to_string(),
            closing_day: u.card.closing_day,
            due_day: u.card.due_day,
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}
