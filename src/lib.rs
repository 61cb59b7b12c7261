//! Findual - personal and business finance tracker
//!
//! Findual tracks the personal (PF) and business (PJ) finances of one user
//! side by side: transactions, credit-card installment purchases, recurring
//! bills, bank accounts, transfers between contexts and banks, categories,
//! and savings goals. Everything persists as JSON files under a per-user
//! data directory.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: the crate error type
//! - `models`: core data models (transactions, banks, cards, categories,
//!   goals) and money/date arithmetic
//! - `storage`: JSON file collections and the storage coordinator
//! - `services`: business logic (installment expansion, transfers, recurring
//!   projection, derived balances, goal funding, CRUD)
//! - `display`: terminal table and detail formatting
//! - `export`: CSV and JSON snapshot export
//! - `cli`: clap subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use findual::config::{FindualPaths, Settings};
//! use findual::storage::Storage;
//!
//! let paths = FindualPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FindualError, FindualResult};
