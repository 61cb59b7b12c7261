use anyhow::Result;
use clap::{Parser, Subcommand};

use findual::cli::{
    handle_bank_command, handle_card_command, handle_category_command, handle_export_command,
    handle_goal_command, handle_recurring_command, handle_report_command,
    handle_transaction_command, handle_transfer_command,
};
use findual::config::{FindualPaths, Settings};
use findual::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "findual",
    version,
    about = "Personal and business finance tracker",
    long_about = "Findual tracks personal (PF) and business (PJ) finances side by \
                  side: transactions, credit-card installments, recurring bills, \
                  bank accounts, transfers, categories, and savings goals, all \
                  stored as local JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(findual::cli::TransactionCommands),

    /// Transfer commands
    #[command(subcommand)]
    Transfer(findual::cli::TransferCommands),

    /// Bank account commands
    #[command(subcommand)]
    Bank(findual::cli::BankCommands),

    /// Credit card commands
    #[command(subcommand)]
    Card(findual::cli::CardCommands),

    /// Category commands
    #[command(subcommand, alias = "cat")]
    Category(findual::cli::CategoryCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(findual::cli::GoalCommands),

    /// Recurring bill commands
    #[command(subcommand)]
    Recurring(findual::cli::RecurringCommands),

    /// Dashboard and reports
    #[command(subcommand)]
    Report(findual::cli::ReportCommands),

    /// Export data
    #[command(subcommand)]
    Export(findual::cli::ExportCommands),

    /// Enable, disable, or show the business (PJ) context
    Pj {
        /// "on", "off", or omitted for status
        state: Option<String>,
    },

    /// Initialize the data directory and seed default categories
    Init,

    /// Show configuration and paths
    Config,

    /// Delete all stored data
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FindualPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Transfer(cmd)) => {
            handle_transfer_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Bank(cmd)) => {
            handle_bank_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Card(cmd)) => {
            handle_card_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Recurring(cmd)) => {
            handle_recurring_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Pj { state }) => match state.as_deref() {
            None => {
                println!(
                    "PJ support is {}",
                    if settings.pj_enabled { "enabled" } else { "disabled" }
                );
            }
            Some("on") if settings.pj_enabled => println!("PJ support is already enabled"),
            Some("off") if !settings.pj_enabled => println!("PJ support is already disabled"),
            Some("on") | Some("off") => {
                let enabled = settings.toggle_pj(&paths)?;
                println!(
                    "PJ support is now {}",
                    if enabled { "enabled" } else { "disabled" }
                );
            }
            Some(other) => {
                anyhow::bail!("Invalid state: '{}'. Use 'on' or 'off'.", other);
            }
        },
        Some(Commands::Init) => {
            println!("Initializing Findual at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete.");
            println!();
            println!("Default categories for PF and PJ have been created.");
            println!("Run 'findual category list' to see them.");
        }
        Some(Commands::Config) => {
            println!("Findual Configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Schema version: {}", settings.schema_version);
            println!("  PJ enabled:     {}", settings.pj_enabled);
        }
        Some(Commands::Reset { yes }) => {
            if !yes {
                println!("This deletes every transaction, category, card, bank account,");
                println!("and goal. Re-run with --yes to confirm.");
                return Ok(());
            }
            storage.reset()?;
            println!("All data deleted.");
        }
        None => {
            println!("Findual - PF/PJ finance tracker");
            println!();
            println!("Run 'findual --help' for usage information.");
            println!("Run 'findual init' to set up the data directory.");
        }
    }

    Ok(())
}
