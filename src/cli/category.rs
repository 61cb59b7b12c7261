//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_table;
use crate::error::{FindualError, FindualResult};
use crate::models::{Category, CategoryScope};
use crate::services::CategoryService;
use crate::storage::Storage;

use super::parse_kind;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a category
    Add {
        /// Category name
        name: String,
        /// INCOME or EXPENSE
        #[arg(short = 't', long, default_value = "expense")]
        kind: String,
        /// PF, PJ, or BOTH
        #[arg(short, long, default_value = "both")]
        scope: String,
    },
    /// List categories
    List,
    /// Edit a category
    Edit {
        /// Category name
        name: String,
        /// New name
        #[arg(long = "name")]
        new_name: Option<String>,
        /// New scope (PF, PJ, or BOTH)
        #[arg(long)]
        scope: Option<String>,
    },
    /// Delete a category
    Delete {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> FindualResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::Add { name, kind, scope } => {
            let scope = CategoryScope::parse(&scope).ok_or_else(|| {
                FindualError::Validation(format!(
                    "Invalid scope: '{}'. Use PF, PJ, or BOTH.",
                    scope
                ))
            })?;
            let added = service.add(Category::new(name, parse_kind(&kind)?, scope))?;
            println!("Added category: {}", added);
        }

        CategoryCommands::List => {
            print!("{}", format_category_table(&service.list()?));
        }

        CategoryCommands::Edit {
            name,
            new_name,
            scope,
        } => {
            let mut found = service
                .find_by_name(&name)?
                .ok_or_else(|| FindualError::category_not_found(&name))?;
            if let Some(new_name) = new_name {
                found.name = new_name;
            }
            if let Some(scope) = scope {
                found.scope = CategoryScope::parse(&scope).ok_or_else(|| {
                    FindualError::Validation(format!(
                        "Invalid scope: '{}'. Use PF, PJ, or BOTH.",
                        scope
                    ))
                })?;
            }
            let updated = service.update(found)?;
            println!("Updated category: {}", updated);
        }

        CategoryCommands::Delete { name } => {
            let found = service
                .find_by_name(&name)?
                .ok_or_else(|| FindualError::category_not_found(&name))?;
            service.delete(found.id)?;
            println!("Deleted category: {}", found.name);
        }
    }

    Ok(())
}
