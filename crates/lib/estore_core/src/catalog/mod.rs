//! Product catalog: the category entity and the store contract that
//! persists it.

pub mod category;
pub mod store;

use thiserror::Error;

pub use category::{Category, CategoryId};
pub use store::{CategoryStore, InMemoryCategoryStore};

/// Catalog errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid entity: category name must not be empty")]
    InvalidEntity,

    #[error("Category id already assigned: {current} (requested {requested})")]
    AlreadyAssigned {
        current: CategoryId,
        requested: CategoryId,
    },

    #[error("Category already persisted with id {0}")]
    AlreadyPersisted(CategoryId),

    #[error("Category has not been persisted")]
    NotPersisted,

    #[error("Category not found: {0}")]
    NotFound(CategoryId),

    #[error("Category id space exhausted")]
    IdsExhausted,
}
