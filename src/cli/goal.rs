//! Savings goal CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_goal_table;
use crate::error::{FindualError, FindualResult};
use crate::models::{Goal, Money};
use crate::services::GoalService;
use crate::storage::Storage;

use super::{parse_context_gated, parse_date, parse_money, resolve_bank};

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
        /// PF or PJ
        #[arg(short = 'x', long, default_value = "pf")]
        context: String,
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,
    },
    /// List goals with progress
    List,
    /// Edit a goal
    Edit {
        /// Goal name
        goal: String,
        /// New name
        #[arg(long = "name")]
        new_name: Option<String>,
        /// New target amount
        #[arg(long)]
        target: Option<String>,
        /// New target date (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,
    },
    /// Contribute to a goal (records an expense)
    Fund {
        /// Goal name
        goal: String,
        /// Amount to contribute
        amount: String,
        /// Date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        /// Bank account name or id the money comes from
        #[arg(short, long)]
        bank: Option<String>,
    },
    /// Withdraw from a goal (records an income)
    Withdraw {
        /// Goal name
        goal: String,
        /// Amount to withdraw
        amount: String,
        /// Date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        /// Bank account name or id the money goes to
        #[arg(short, long)]
        bank: Option<String>,
    },
    /// Delete a goal
    Delete {
        /// Goal name
        goal: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> FindualResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Add {
            name,
            target,
            context,
            deadline,
        } => {
            let mut goal = Goal::new(
                name,
                parse_money(&target)?,
                parse_context_gated(settings, &context)?,
            );
            if let Some(deadline) = deadline {
                goal.deadline = Some(parse_date(Some(&deadline))?);
            }
            let added = service.add(goal)?;
            println!("Added goal: {}", added);
        }

        GoalCommands::List => {
            print!("{}", format_goal_table(&service.list()?));
        }

        GoalCommands::Edit {
            goal,
            new_name,
            target,
            deadline,
        } => {
            let mut found = find_goal(&service, &goal)?;
            if let Some(new_name) = new_name {
                found.name = new_name;
            }
            if let Some(target) = target {
                found.target_amount = parse_money(&target)?;
            }
            if let Some(deadline) = deadline {
                found.deadline = Some(parse_date(Some(&deadline))?);
            }
            let updated = service.update(found)?;
            println!("Updated goal: {}", updated);
        }

        GoalCommands::Fund {
            goal,
            amount,
            date,
            bank,
        } => {
            apply_funding(storage, &service, &goal, parse_money(&amount)?, date, bank)?;
        }

        GoalCommands::Withdraw {
            goal,
            amount,
            date,
            bank,
        } => {
            let amount = parse_money(&amount)?;
            apply_funding(storage, &service, &goal, -amount, date, bank)?;
        }

        GoalCommands::Delete { goal } => {
            let found = find_goal(&service, &goal)?;
            service.delete(found.id)?;
            println!("Deleted goal: {}", found.name);
        }
    }

    Ok(())
}

fn apply_funding(
    storage: &Storage,
    service: &GoalService,
    goal: &str,
    delta: Money,
    date: Option<String>,
    bank: Option<String>,
) -> FindualResult<()> {
    let found = find_goal(service, goal)?;
    let bank_id = bank
        .as_deref()
        .map(|b| resolve_bank(storage, b).map(|b| b.id))
        .transpose()?;

    let result = service.add_funds(found.id, delta, parse_date(date.as_deref())?, bank_id)?;
    match &result.transaction {
        Some(txn) => println!("{} -> {}", txn.description, result.goal),
        None => println!("Nothing applied; goal unchanged: {}", result.goal),
    }
    Ok(())
}

fn find_goal(service: &GoalService, input: &str) -> FindualResult<Goal> {
    let by_name = service
        .list()?
        .into_iter()
        .find(|g| g.name.eq_ignore_ascii_case(input));
    if let Some(goal) = by_name {
        return Ok(goal);
    }
    if let Ok(id) = input.parse() {
        if let Some(goal) = service.get(id)? {
            return Ok(goal);
        }
    }
    Err(FindualError::goal_not_found(input))
}
