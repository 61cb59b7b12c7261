//! Transfer CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::FindualResult;
use crate::services::{TransferKind, TransferService};
use crate::storage::Storage;

use super::{parse_context_gated, parse_date, parse_money, resolve_bank};

/// Transfer subcommands
#[derive(Subcommand)]
pub enum TransferCommands {
    /// Move value between the PF and PJ contexts
    Context {
        /// Source context (PF or PJ)
        from: String,
        /// Destination context (PF or PJ)
        to: String,
        /// Amount
        amount: String,
        /// Description
        #[arg(short = 'm', long, default_value = "Transfer")]
        description: String,
        /// Date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        /// Source bank account name or id
        #[arg(long)]
        from_bank: Option<String>,
        /// Destination bank account name or id
        #[arg(long)]
        to_bank: Option<String>,
    },
    /// Move value between two bank accounts
    Bank {
        /// Source bank account name or id
        from: String,
        /// Destination bank account name or id
        to: String,
        /// Amount
        amount: String,
        /// Description
        #[arg(short = 'm', long, default_value = "Transfer")]
        description: String,
        /// Date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle a transfer command
pub fn handle_transfer_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransferCommands,
) -> FindualResult<()> {
    let service = TransferService::new(storage);

    match cmd {
        TransferCommands::Context {
            from,
            to,
            amount,
            description,
            date,
            from_bank,
            to_bank,
        } => {
            let kind = TransferKind::Context {
                from: parse_context_gated(settings, &from)?,
                to: parse_context_gated(settings, &to)?,
                from_bank: from_bank
                    .as_deref()
                    .map(|b| resolve_bank(storage, b).map(|b| b.id))
                    .transpose()?,
                to_bank: to_bank
                    .as_deref()
                    .map(|b| resolve_bank(storage, b).map(|b| b.id))
                    .transpose()?,
            };
            let result = service.execute(
                kind,
                parse_money(&amount)?,
                parse_date(date.as_deref())?,
                &description,
            )?;
            println!("Transfer recorded:");
            println!("  {} [{}]", result.outgoing, result.outgoing.context);
            println!("  {} [{}]", result.incoming, result.incoming.context);
        }

        TransferCommands::Bank {
            from,
            to,
            amount,
            description,
            date,
        } => {
            let from_bank = resolve_bank(storage, &from)?;
            let to_bank = resolve_bank(storage, &to)?;
            let result = service.execute(
                TransferKind::BankToBank {
                    from: from_bank.id,
                    to: to_bank.id,
                },
                parse_money(&amount)?,
                parse_date(date.as_deref())?,
                &description,
            )?;
            println!("Transfer recorded:");
            println!("  {}", result.outgoing);
            println!("  {}", result.incoming);
        }
    }

    Ok(())
}
