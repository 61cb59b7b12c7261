//! Display formatting for terminal output

pub mod accounts;
pub mod report;
pub mod transaction;

pub use accounts::{format_bank_table, format_card_table};
pub use report::{
    format_category_table, format_composition, format_daily_flow, format_dashboard,
    format_goal_table, format_upcoming_bills,
};
pub use transaction::{format_transaction_details, format_transaction_table};
