//! Business logic services
//!
//! Each service borrows the storage coordinator and owns one slice of the
//! domain. Derived numbers (balances, card usage, projections) are always
//! recomputed from the stored rows, never cached.

pub mod balance;
pub mod bank;
pub mod card;
pub mod category;
pub mod goal;
pub mod installment;
pub mod recurring;
pub mod transaction;
pub mod transfer;

pub use balance::{BalanceService, CardUsage, CategorySlice, DailyFlow, DashboardMetrics};
pub use bank::BankService;
pub use card::CardService;
pub use category::CategoryService;
pub use goal::{FundingResult, GoalService};
pub use installment::{InstallmentService, InstallmentTemplate};
pub use recurring::{BillSource, RecurringService, UpcomingBill};
pub use transaction::TransactionService;
pub use transfer::{TransferKind, TransferResult, TransferService};
