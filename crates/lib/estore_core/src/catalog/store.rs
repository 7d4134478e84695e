//! Category storage contract and its in-memory implementation.

use std::collections::BTreeMap;

use super::{CatalogError, Category, CategoryId};

/// Storage collaborator for categories.
///
/// The store owns id generation: it is the only caller of
/// [`Category::assign_id`].
pub trait CategoryStore {
    /// Persist a transient category and return it with its new id.
    fn insert(&mut self, category: Category) -> Result<Category, CatalogError>;

    fn get(&self, id: CategoryId) -> Option<&Category>;

    /// Overwrite the name and description of a persisted category.
    fn update(&mut self, category: Category) -> Result<(), CatalogError>;

    fn remove(&mut self, id: CategoryId) -> Result<Category, CatalogError>;

    /// All categories in ascending id order.
    fn list(&self) -> Vec<&Category>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory category store.
///
/// Ids start at 1 and only grow; removed ids are not handed out again.
#[derive(Debug)]
pub struct InMemoryCategoryStore {
    categories: BTreeMap<CategoryId, Category>,
    /// `None` once every id has been handed out.
    next_id: Option<i32>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self {
            categories: BTreeMap::new(),
            next_id: Some(1),
        }
    }

    fn allocate_id(&mut self) -> Result<CategoryId, CatalogError> {
        let id = self.next_id.ok_or(CatalogError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        Ok(CategoryId::new(id))
    }
}

impl Default for InMemoryCategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryStore for InMemoryCategoryStore {
    fn insert(&mut self, mut category: Category) -> Result<Category, CatalogError> {
        if let Some(id) = category.id() {
            return Err(CatalogError::AlreadyPersisted(id));
        }
        let id = self.allocate_id()?;
        category.assign_id(id)?;
        log::debug!("Inserted category {id} ({})", category.name());
        self.categories.insert(id, category.clone());
        Ok(category)
    }

    fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    fn update(&mut self, category: Category) -> Result<(), CatalogError> {
        let id = category.id().ok_or(CatalogError::NotPersisted)?;
        let stored = self
            .categories
            .get_mut(&id)
            .ok_or(CatalogError::NotFound(id))?;
        stored.rename(category.name())?;
        stored.set_description(category.description().map(str::to_string));
        log::debug!("Updated category {id}");
        Ok(())
    }

    fn remove(&mut self, id: CategoryId) -> Result<Category, CatalogError> {
        let removed = self
            .categories
            .remove(&id)
            .ok_or(CatalogError::NotFound(id))?;
        log::debug!("Removed category {id}");
        Ok(removed)
    }

    fn list(&self) -> Vec<&Category> {
        self.categories.values().collect()
    }

    fn len(&self) -> usize {
        self.categories.len()
    }
}
