//! Export CLI commands

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{FindualError, FindualResult};
use crate::export::{export_snapshot_json, export_transactions_csv};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export the transaction history as CSV
    Csv {
        /// Output file (default stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export all collections as one JSON snapshot
    Json {
        /// Output file (default stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> FindualResult<()> {
    match cmd {
        ExportCommands::Csv { output } => {
            write_to(output, |w| export_transactions_csv(storage, w))?;
        }
        ExportCommands::Json { output } => {
            write_to(output, |w| export_snapshot_json(storage, w))?;
        }
    }
    Ok(())
}

fn write_to<F>(output: Option<PathBuf>, export: F) -> FindualResult<()>
where
    F: FnOnce(&mut dyn Write) -> FindualResult<()>,
{
    match output {
        Some(path) => {
            let mut file = File::create(&path)
                .map_err(|e| FindualError::Export(format!("{}: {}", path.display(), e)))?;
            export(&mut file)?;
            println!("Exported to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export(&mut handle)?;
        }
    }
    Ok(())
}
