//! Core data models for Findual
//!
//! This module contains all the data structures that represent the PF/PJ
//! finance domain: transactions, categories, credit cards, bank accounts,
//! and savings goals.

pub mod bank;
pub mod card;
pub mod category;
pub mod dates;
pub mod goal;
pub mod ids;
pub mod money;
pub mod transaction;

pub use bank::BankAccount;
pub use card::CreditCard;
pub use category::{Category, CategoryScope};
pub use goal::Goal;
pub use ids::{BankAccountId, CardId, CategoryId, GoalId, InstallmentGroupId, TransactionId};
pub use money::Money;
pub use transaction::{
    AccountContext, InstallmentInfo, PaymentMethod, Transaction, TransactionType,
};
