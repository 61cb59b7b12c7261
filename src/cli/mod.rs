//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Each entity gets
//! its own subcommand enum and handler.

pub mod bank;
pub mod card;
pub mod category;
pub mod export;
pub mod goal;
pub mod recurring;
pub mod report;
pub mod transaction;
pub mod transfer;

pub use bank::{handle_bank_command, BankCommands};
pub use card::{handle_card_command, CardCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use recurring::{handle_recurring_command, RecurringCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use transfer::{handle_transfer_command, TransferCommands};

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{FindualError, FindualResult};
use crate::models::{AccountContext, BankAccount, CreditCard, Money, TransactionType};
use crate::services::{BankService, CardService};
use crate::storage::Storage;

/// Parse a money argument
pub(crate) fn parse_money(s: &str) -> FindualResult<Money> {
    Money::parse(s).map_err(|e| {
        FindualError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '100.00' or '100,00'. {}",
            s, e
        ))
    })
}

/// Parse a date argument, defaulting to today
pub(crate) fn parse_date(s: Option<&str>) -> FindualResult<NaiveDate> {
    match s {
        None => Ok(chrono::Local::now().date_naive()),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            FindualError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD.", s))
        }),
    }
}

/// Parse a year-month argument ("YYYY-MM"), defaulting to the current month
pub(crate) fn parse_month(s: Option<&str>) -> FindualResult<(i32, u32)> {
    match s {
        None => {
            let today = chrono::Local::now().date_naive();
            Ok((chrono::Datelike::year(&today), chrono::Datelike::month(&today)))
        }
        Some(s) => {
            let parts: Vec<&str> = s.splitn(2, '-').collect();
            let parsed = if parts.len() == 2 {
                match (parts[0].parse::<i32>(), parts[1].parse::<u32>()) {
                    (Ok(y), Ok(m)) if (1..=12).contains(&m) => Some((y, m)),
                    _ => None,
                }
            } else {
                None
            };
            parsed.ok_or_else(|| {
                FindualError::Validation(format!("Invalid month: '{}'. Use YYYY-MM.", s))
            })
        }
    }
}

/// Parse a context argument
pub(crate) fn parse_context(s: &str) -> FindualResult<AccountContext> {
    AccountContext::parse(s).ok_or_else(|| {
        FindualError::Validation(format!("Invalid context: '{}'. Use PF or PJ.", s))
    })
}

/// Parse a context argument for commands that create data, honoring the
/// PJ toggle
pub(crate) fn parse_context_gated(settings: &Settings, s: &str) -> FindualResult<AccountContext> {
    let context = parse_context(s)?;
    if context == AccountContext::Pj && !settings.pj_enabled {
        return Err(FindualError::Validation(
            "PJ support is disabled. Enable it with 'findual pj on'.".into(),
        ));
    }
    Ok(context)
}

/// Parse a transaction type argument
pub(crate) fn parse_kind(s: &str) -> FindualResult<TransactionType> {
    TransactionType::parse(s).ok_or_else(|| {
        FindualError::Validation(format!("Invalid type: '{}'. Use INCOME or EXPENSE.", s))
    })
}

/// Resolve a bank account from a name or id argument
pub(crate) fn resolve_bank(storage: &Storage, input: &str) -> FindualResult<BankAccount> {
    let service = BankService::new(storage);
    if let Some(bank) = service.find_by_name(input)? {
        return Ok(bank);
    }
    if let Ok(id) = input.parse() {
        if let Some(bank) = service.get(id)? {
            return Ok(bank);
        }
    }
    Err(FindualError::bank_not_found(input))
}

/// Resolve a credit card from a name or id argument
pub(crate) fn resolve_card(storage: &Storage, input: &str) -> FindualResult<CreditCard> {
    let service = CardService::new(storage);
    if let Some(card) = service.find_by_name(input)? {
        return Ok(card);
    }
    if let Ok(id) = input.parse() {
        if let Some(card) = service.get(id)? {
            return Ok(card);
        }
    }
    Err(FindualError::card_not_found(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month(Some("2025-03")).unwrap(), (2025, 3));
        assert!(parse_month(Some("2025-13")).is_err());
        assert!(parse_month(Some("march")).is_err());
        assert!(parse_month(None).is_ok());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Some("2025-03-15")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
        assert!(parse_date(Some("15/03/2025")).is_err());
    }

    #[test]
    fn test_parse_money_rejects_garbage() {
        assert!(parse_money("abc").is_err());
        assert_eq!(parse_money("10,50").unwrap().cents(), 1050);
    }
}
