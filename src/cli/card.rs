//! Credit card CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_card_table;
use crate::error::FindualResult;
use crate::models::CreditCard;
use crate::services::{BalanceService, CardService};
use crate::storage::Storage;

use super::{parse_context, parse_context_gated, parse_money, resolve_card};

/// Credit card subcommands
#[derive(Subcommand)]
pub enum CardCommands {
    /// Register a credit card
    Add {
        /// Card name
        name: String,
        /// Credit limit
        limit: String,
        /// Statement closing day (1-31)
        #[arg(long, default_value = "1")]
        closing_day: u32,
        /// Payment due day (1-31)
        #[arg(long, default_value = "10")]
        due_day: u32,
        /// PF or PJ
        #[arg(short = 'x', long, default_value = "pf")]
        context: String,
    },
    /// List cards with derived usage
    List {
        /// Filter by context (PF or PJ)
        #[arg(short = 'x', long)]
        context: Option<String>,
    },
    /// Edit a card
    Edit {
        /// Card name or id
        card: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New limit
        #[arg(short, long)]
        limit: Option<String>,
        /// New closing day
        #[arg(long)]
        closing_day: Option<u32>,
        /// New due day
        #[arg(long)]
        due_day: Option<u32>,
    },
    /// Delete a card
    Delete {
        /// Card name or id
        card: String,
    },
}

/// Handle a card command
pub fn handle_card_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CardCommands,
) -> FindualResult<()> {
    let service = CardService::new(storage);

    match cmd {
        CardCommands::Add {
            name,
            limit,
            closing_day,
            due_day,
            context,
        } => {
            let card = CreditCard::new(
                name,
                parse_money(&limit)?,
                closing_day,
                due_day,
                parse_context_gated(settings, &context)?,
            );
            let added = service.add(card)?;
            println!("Added card: {} ({})", added.name, added.id);
        }

        CardCommands::List { context } => {
            let context = context.as_deref().map(parse_context).transpose()?;
            let balance_service = BalanceService::new(storage);
            let mut usages = Vec::new();
            for card in service.list(context)? {
                usages.push(balance_service.card_usage(card.id)?);
            }
            print!("{}", format_card_table(&usages));
        }

        CardCommands::Edit {
            card,
            name,
            limit,
            closing_day,
            due_day,
        } => {
            let mut found = resolve_card(storage, &card)?;
            if name.is_none() && limit.is_none() && closing_day.is_none() && due_day.is_none() {
                println!("No changes specified.");
                return Ok(());
            }
            if let Some(name) = name {
                found.name = name;
            }
            if let Some(limit) = limit {
                found.limit = parse_money(&limit)?;
            }
            if let Some(day) = closing_day {
                found.closing_day = day;
            }
            if let Some(day) = due_day {
                found.due_day = day;
            }
            let updated = service.update(found)?;
            println!("Updated card: {}", updated.name);
        }

        CardCommands::Delete { card } => {
            let found = resolve_card(storage, &card)?;
            service.delete(found.id)?;
            println!("Deleted card: {}", found.name);
        }
    }

    Ok(())
}
