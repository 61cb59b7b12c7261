//! First-run initialization
//!
//! Seeds the default category set. Transactions reference categories by name,
//! so the seed is a convenience starting point, not a constraint.

use crate::config::FindualPaths;
use crate::error::FindualResult;
use crate::models::{Category, CategoryScope, TransactionType};

use super::Storage;

/// The default category set, mirroring the PF/PJ split
pub fn default_categories() -> Vec<Category> {
    use CategoryScope::{Both, Pf, Pj};
    use TransactionType::{Expense, Income};

    vec![
        // Income
        Category::new("Sales/Services", Income, Pj),
        Category::new("Salary/Pró-labore", Income, Pf),
        Category::new("Investment Income", Income, Both),
        Category::new("Capital Contribution", Income, Pj),
        Category::new("Other Income", Income, Both),
        // Expenses
        Category::new("Rent/Office", Expense, Both),
        Category::new("Food", Expense, Pf),
        Category::new("Software/SaaS", Expense, Pj),
        Category::new("Marketing", Expense, Pj),
        Category::new("Taxes", Expense, Pj),
        Category::new("Leisure", Expense, Pf),
        Category::new("Transport", Expense, Both),
        Category::new("Education", Expense, Both),
        Category::new("Health", Expense, Pf),
        Category::new("Transfer/Pró-labore", Expense, Pj),
        Category::new("Investment", Expense, Both),
        Category::new("Other Expenses", Expense, Both),
    ]
}

/// Initialize storage on first run: create directories and seed default
/// categories if none exist yet
pub fn initialize_storage(paths: &FindualPaths) -> FindualResult<Storage> {
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    if storage.categories.is_empty()? {
        for category in default_categories() {
            storage.categories.push(category)?;
        }
        storage.categories.save()?;
    }

    Ok(storage)
}
