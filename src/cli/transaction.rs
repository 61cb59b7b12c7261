//! Transaction CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{FindualError, FindualResult};
use crate::models::{PaymentMethod, Transaction, TransactionId};
use crate::services::{InstallmentService, InstallmentTemplate, TransactionService};
use crate::storage::Storage;

use super::{
    parse_context, parse_context_gated, parse_date, parse_kind, parse_money, resolve_bank,
    resolve_card,
};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a transaction
    Add {
        /// Description
        description: String,
        /// Amount (e.g. "120.50" or "120,50")
        amount: String,
        /// INCOME or EXPENSE
        #[arg(short = 't', long, default_value = "expense")]
        kind: String,
        /// Category name
        #[arg(short, long, default_value = "Other Expenses")]
        category: String,
        /// PF or PJ
        #[arg(short = 'x', long, default_value = "pf")]
        context: String,
        /// Transaction date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        /// Pay by credit instead of debit
        #[arg(long)]
        credit: bool,
        /// Credit card name or id (implies --credit)
        #[arg(long)]
        card: Option<String>,
        /// Bank account name or id (debit only)
        #[arg(short, long)]
        bank: Option<String>,
        /// Store as a recurring monthly template
        #[arg(short, long)]
        recurring: bool,
    },
    /// Add a credit purchase split into installments
    Installment {
        /// Description
        description: String,
        /// Total purchase amount
        total: String,
        /// Number of installments
        count: u32,
        /// Category name
        #[arg(short, long, default_value = "Other Expenses")]
        category: String,
        /// PF or PJ
        #[arg(short = 'x', long, default_value = "pf")]
        context: String,
        /// First installment date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        /// Credit card name or id
        #[arg(long)]
        card: Option<String>,
    },
    /// List transactions
    List {
        /// Filter by context (PF or PJ)
        #[arg(short = 'x', long)]
        context: Option<String>,
        /// Filter by type (INCOME or EXPENSE)
        #[arg(short = 't', long)]
        kind: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show one transaction
    Show {
        /// Transaction id
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction id
        id: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New category name
        #[arg(long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction id
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FindualResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            kind,
            category,
            context,
            date,
            credit,
            card,
            bank,
            recurring,
        } => {
            let payment = if credit || card.is_some() {
                let card_id = card
                    .as_deref()
                    .map(|c| resolve_card(storage, c).map(|c| c.id))
                    .transpose()?;
                PaymentMethod::Credit { card_id }
            } else {
                let bank_account_id = bank
                    .as_deref()
                    .map(|b| resolve_bank(storage, b).map(|b| b.id))
                    .transpose()?;
                PaymentMethod::Debit { bank_account_id }
            };

            let mut txn = Transaction::new(
                description,
                parse_money(&amount)?,
                parse_date(date.as_deref())?,
                parse_kind(&kind)?,
                category,
                parse_context_gated(settings, &context)?,
                payment,
            );
            txn.is_recurring = recurring;

            let added = service.add(txn)?;
            if added.is_recurring {
                println!(
                    "Added recurring template: {} {} on day {}",
                    added.description,
                    added.signed(),
                    chrono::Datelike::day(&added.date)
                );
            } else {
                println!("Added: {} ({})", added, added.id);
            }
        }

        TransactionCommands::Installment {
            description,
            total,
            count,
            category,
            context,
            date,
            card,
        } => {
            let card_id = card
                .as_deref()
                .map(|c| resolve_card(storage, c).map(|c| c.id))
                .transpose()?;
            let template = InstallmentTemplate {
                description,
                date: parse_date(date.as_deref())?,
                category,
                context: parse_context_gated(settings, &context)?,
                card_id,
            };

            let installment_service = InstallmentService::new(storage);
            let txns = installment_service.add_purchase(template, parse_money(&total)?, count)?;
            println!("Added {} installments:", txns.len());
            print!("{}", format_transaction_table(&txns));
        }

        TransactionCommands::List {
            context,
            kind,
            limit,
        } => {
            let context = context.as_deref().map(parse_context).transpose()?;
            let kind = kind.as_deref().map(parse_kind).transpose()?;
            let mut txns = service.list(context, kind)?;
            txns.truncate(limit);
            print!("{}", format_transaction_table(&txns));
        }

        TransactionCommands::Show { id } => {
            let txn = find_transaction(storage, &id)?;
            print!("{}", format_transaction_details(&txn));
        }

        TransactionCommands::Edit {
            id,
            description,
            amount,
            category,
            date,
        } => {
            let mut txn = find_transaction(storage, &id)?;
            if let Some(description) = description {
                txn.description = description;
            }
            if let Some(amount) = amount {
                txn.amount = parse_money(&amount)?;
            }
            if let Some(category) = category {
                txn.category = category;
            }
            if let Some(date) = date {
                txn.date = parse_date(Some(&date))?;
            }
            let updated = service.update(txn)?;
            println!("Updated: {} ({})", updated, updated.id);
        }

        TransactionCommands::Delete { id } => {
            let txn = find_transaction(storage, &id)?;
            service.delete(txn.id)?;
            println!("Deleted: {}", txn.description);
        }
    }

    Ok(())
}

/// Find a transaction by full uuid or its short display form (txn-xxxxxxxx)
fn find_transaction(storage: &Storage, input: &str) -> FindualResult<Transaction> {
    if let Ok(id) = input.parse::<TransactionId>() {
        if let Some(txn) = storage.transactions.get(id)? {
            return Ok(txn);
        }
    }
    let matches = storage
        .transactions
        .filter(|t| t.id.to_string() == input)?;
    matches
        .into_iter()
        .next()
        .ok_or_else(|| FindualError::transaction_not_found(input))
}
