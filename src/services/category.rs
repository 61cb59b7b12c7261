//! Category service
//!
//! Transactions reference categories by name, so deleting a category leaves
//! history intact; old rows simply keep a name the list no longer contains.

use crate::error::{FindualError, FindualResult};
use crate::models::{AccountContext, Category, CategoryId, TransactionType};
use crate::storage::Storage;

/// Service for managing categories
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a category; names are unique within a direction
    pub fn add(&self, category: Category) -> FindualResult<Category> {
        category
            .validate()
            .map_err(|e| FindualError::Validation(e.to_string()))?;

        let clash = self
            .storage
            .categories
            .filter(|c| c.kind == category.kind && c.name.eq_ignore_ascii_case(&category.name))?;
        if !clash.is_empty() {
            return Err(FindualError::Duplicate {
                entity_type: "Category",
                identifier: category.name,
            });
        }

        self.storage.categories.push(category.clone())?;
        self.storage.categories.save()?;
        Ok(category)
    }

    /// Replace an existing category wholesale
    pub fn update(&self, category: Category) -> FindualResult<Category> {
        category
            .validate()
            .map_err(|e| FindualError::Validation(e.to_string()))?;
        if !self.storage.categories.replace(category.clone())? {
            return Err(FindualError::category_not_found(category.id.to_string()));
        }
        self.storage.categories.save()?;
        Ok(category)
    }

    /// Delete a category. Transactions keep the name they were labelled with.
    pub fn delete(&self, id: CategoryId) -> FindualResult<bool> {
        let deleted = self.storage.categories.delete(id)?;
        if deleted {
            self.storage.categories.save()?;
        }
        Ok(deleted)
    }

    /// Get a category by id
    pub fn get(&self, id: CategoryId) -> FindualResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Find a category by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> FindualResult<Option<Category>> {
        Ok(self
            .storage
            .categories
            .filter(|c| c.name.eq_ignore_ascii_case(name))?
            .into_iter()
            .next())
    }

    /// Categories usable for a direction in a context
    pub fn available(
        &self,
        kind: TransactionType,
        context: AccountContext,
    ) -> FindualResult<Vec<Category>> {
        self.storage
            .categories
            .filter(|c| c.kind == kind && c.scope.applies_to(context))
    }

    /// List all categories
    pub fn list(&self) -> FindualResult<Vec<Category>> {
        self.storage.categories.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FindualPaths;
    use crate::models::CategoryScope;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FindualPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_and_find() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        service
            .add(Category::new(
                "Food",
                TransactionType::Expense,
                CategoryScope::Pf,
            ))
            .unwrap();
        let found = service.find_by_name("food").unwrap().unwrap();
        assert_eq!(found.name, "Food");
    }

    #[test]
    fn test_duplicate_name_same_direction_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        service
            .add(Category::new(
                "Consulting",
                TransactionType::Income,
                CategoryScope::Pj,
            ))
            .unwrap();
        let err = service
            .add(Category::new(
                "consulting",
                TransactionType::Income,
                CategoryScope::Both,
            ))
            .unwrap_err();
        assert!(matches!(err, FindualError::Duplicate { .. }));

        // Same name under the other direction is fine
        service
            .add(Category::new(
                "Consulting",
                TransactionType::Expense,
                CategoryScope::Pj,
            ))
            .unwrap();
    }

    #[test]
    fn test_available_respects_scope() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        service
            .add(Category::new(
                "Food",
                TransactionType::Expense,
                CategoryScope::Pf,
            ))
            .unwrap();
        service
            .add(Category::new(
                "Taxes",
                TransactionType::Expense,
                CategoryScope::Pj,
            ))
            .unwrap();
        service
            .add(Category::new(
                "Transport",
                TransactionType::Expense,
                CategoryScope::Both,
            ))
            .unwrap();

        let pf = service
            .available(TransactionType::Expense, AccountContext::Pf)
            .unwrap();
        let names: Vec<&str> = pf.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Transport"]);
    }

    #[test]
    fn test_delete_leaves_no_trace_in_list_only() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let cat = service
            .add(Category::new(
                "Leisure",
                TransactionType::Expense,
                CategoryScope::Pf,
            ))
            .unwrap();
        assert!(service.delete(cat.id).unwrap());
        assert!(!service.delete(cat.id).unwrap());
        assert!(service.list().unwrap().is_empty());
    }
}
