//! Catalog category entity.
//!
//! A category is *transient* until a store assigns its id, then
//! *persisted* for good. The name is never empty in either phase.

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// Store-assigned category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i32);

impl CategoryId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product category.
///
/// Serialized as `{"categoryId", "categoryName", "description"}`; the id and
/// description are omitted when absent. Deserialization applies the same
/// name check as [`Category::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CategoryRecord")]
pub struct Category {
    #[serde(rename = "categoryId", skip_serializing_if = "Option::is_none")]
    id: Option<CategoryId>,
    #[serde(rename = "categoryName")]
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// Wire shape accepted before the name invariant is checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryRecord {
    #[serde(default)]
    category_id: Option<CategoryId>,
    category_name: String,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<CategoryRecord> for Category {
    type Error = CatalogError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        let mut category = Category::new(record.category_name, record.description)?;
        category.id = record.category_id;
        Ok(category)
    }
}

fn check_name(name: &str) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::InvalidEntity);
    }
    Ok(())
}

impl Category {
    /// Create a transient category.
    ///
    /// # Errors
    /// `CatalogError::InvalidEntity` if `name` is empty or whitespace only.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Result<Self, CatalogError> {
        let name = name.into();
        check_name(&name)?;
        Ok(Self {
            id: None,
            name,
            description,
        })
    }

    pub fn id(&self) -> Option<CategoryId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Replace the name. An empty name is rejected and the current name kept.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), CatalogError> {
        let name = name.into();
        check_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Set or clear the description.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Record the store-assigned id.
    ///
    /// Re-assigning the same id is a no-op; a different one is rejected and
    /// leaves the category untouched.
    pub fn assign_id(&mut self, id: CategoryId) -> Result<(), CatalogError> {
        match self.id {
            None => {
                self.id = Some(id);
                Ok(())
            }
            Some(current) if current == id => Ok(()),
            Some(current) => Err(CatalogError::AlreadyAssigned {
                current,
                requested: id,
            }),
        }
    }
}
