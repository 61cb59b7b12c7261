//! Bank account CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_bank_table;
use crate::error::FindualResult;
use crate::models::BankAccount;
use crate::services::{BalanceService, BankService};
use crate::storage::Storage;

use super::{parse_context, parse_context_gated, parse_money, resolve_bank};

/// Bank account subcommands
#[derive(Subcommand)]
pub enum BankCommands {
    /// Register a bank account
    Add {
        /// Account name
        name: String,
        /// Balance at registration time
        #[arg(short, long, default_value = "0")]
        balance: String,
        /// PF or PJ
        #[arg(short = 'x', long, default_value = "pf")]
        context: String,
        /// Display color (hex, e.g. "#8A05BE")
        #[arg(long)]
        color: Option<String>,
    },
    /// List bank accounts with derived balances
    List {
        /// Filter by context (PF or PJ)
        #[arg(short = 'x', long)]
        context: Option<String>,
    },
    /// Edit a bank account
    Edit {
        /// Account name or id
        bank: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New initial balance
        #[arg(short, long)]
        balance: Option<String>,
        /// New display color
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete a bank account
    Delete {
        /// Account name or id
        bank: String,
    },
}

/// Handle a bank command
pub fn handle_bank_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BankCommands,
) -> FindualResult<()> {
    let service = BankService::new(storage);

    match cmd {
        BankCommands::Add {
            name,
            balance,
            context,
            color,
        } => {
            let mut bank = BankAccount::new(
                name,
                parse_money(&balance)?,
                parse_context_gated(settings, &context)?,
            );
            if let Some(color) = color {
                bank.color = color;
            }
            let added = service.add(bank)?;
            println!("Added bank account: {} ({})", added.name, added.id);
        }

        BankCommands::List { context } => {
            let context = context.as_deref().map(parse_context).transpose()?;
            let balance_service = BalanceService::new(storage);
            let banks = service.list(context)?;
            let mut with_balances = Vec::with_capacity(banks.len());
            for bank in banks {
                let balance = balance_service.bank_balance(bank.id)?;
                with_balances.push((bank, balance));
            }
            print!("{}", format_bank_table(&with_balances));
        }

        BankCommands::Edit {
            bank,
            name,
            balance,
            color,
        } => {
            let mut found = resolve_bank(storage, &bank)?;
            if name.is_none() && balance.is_none() && color.is_none() {
                println!("No changes specified. Use --name, --balance, or --color.");
                return Ok(());
            }
            if let Some(name) = name {
                found.name = name;
            }
            if let Some(balance) = balance {
                found.initial_balance = parse_money(&balance)?;
            }
            if let Some(color) = color {
                found.color = color;
            }
            let updated = service.update(found)?;
            println!("Updated bank account: {}", updated.name);
        }

        BankCommands::Delete { bank } => {
            let found = resolve_bank(storage, &bank)?;
            service.delete(found.id)?;
            println!("Deleted bank account: {}", found.name);
        }
    }

    Ok(())
}
