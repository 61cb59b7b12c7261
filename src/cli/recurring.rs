//! Recurring bill CLI commands
//!
//! Templates are created through `transaction add --recurring`; this module
//! covers inspecting them and their projections.

use clap::Subcommand;

use crate::display::{format_transaction_table, format_upcoming_bills};
use crate::error::FindualResult;
use crate::services::RecurringService;
use crate::storage::Storage;

use super::{parse_context, parse_month};

/// Recurring bill subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// List the stored templates
    List,
    /// Project templates onto a month
    Project {
        /// Month to view (YYYY-MM, default current)
        #[arg(short, long)]
        month: Option<String>,
        /// Filter by context (PF or PJ)
        #[arg(short = 'x', long)]
        context: Option<String>,
    },
    /// Bills due in the next 30 days (templates + card due dates)
    Upcoming,
}

/// Handle a recurring command
pub fn handle_recurring_command(storage: &Storage, cmd: RecurringCommands) -> FindualResult<()> {
    let service = RecurringService::new(storage);

    match cmd {
        RecurringCommands::List => {
            print!("{}", format_transaction_table(&service.templates()?));
        }

        RecurringCommands::Project { month, context } => {
            let (year, month) = parse_month(month.as_deref())?;
            let context = context.as_deref().map(parse_context).transpose()?;
            let projected = service.project_month(year, month, context)?;
            println!("Projection for {:04}-{:02}:", year, month);
            print!("{}", format_transaction_table(&projected));
        }

        RecurringCommands::Upcoming => {
            let today = chrono::Local::now().date_naive();
            print!("{}", format_upcoming_bills(&service.upcoming_bills(today)?));
        }
    }

    Ok(())
}
