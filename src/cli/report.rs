//! Dashboard and report CLI commands

use clap::Subcommand;

use crate::display::{format_composition, format_daily_flow, format_dashboard};
use crate::error::FindualResult;
use crate::services::BalanceService;
use crate::storage::Storage;

use super::parse_month;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Headline balances and month volume
    Dashboard {
        /// Month to view (YYYY-MM, default current)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Daily in/out movement for a month
    Flow {
        /// Month to view (YYYY-MM, default current)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Expense volume by category
    Composition {
        /// Month to view (YYYY-MM, default current)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of categories to show
        #[arg(short, long, default_value = "8")]
        top: usize,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> FindualResult<()> {
    let service = BalanceService::new(storage);

    match cmd {
        ReportCommands::Dashboard { month } => {
            let (year, month) = parse_month(month.as_deref())?;
            let metrics = service.dashboard(year, month)?;
            print!("{}", format_dashboard(&metrics, year, month));
        }

        ReportCommands::Flow { month } => {
            let (year, month) = parse_month(month.as_deref())?;
            print!("{}", format_daily_flow(&service.daily_flow(year, month)?));
        }

        ReportCommands::Composition { month, top } => {
            let (year, month) = parse_month(month.as_deref())?;
            print!(
                "{}",
                format_composition(&service.expense_composition(year, month, top)?)
            );
        }
    }

    Ok(())
}
