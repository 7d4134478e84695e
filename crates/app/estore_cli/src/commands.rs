use std::path::Path;

use estore_core::auth::loader;
use estore_core::catalog::{Category, CategoryStore, InMemoryCategoryStore};
use serde::Deserialize;

use crate::Result;

/// Category as accepted on import; ids come from the store.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewCategory {
    category_name: String,
    #[serde(default)]
    description: Option<String>,
}

pub fn check_auth(config: Option<&Path>) -> Result<()> {
    let settings = loader::load(config)?;
    println!(
        "auth settings OK (issuer={}, audience={}, expiry={}m)",
        settings.issuer(),
        settings.audience(),
        settings.expiry_in_minutes()
    );
    Ok(())
}

pub fn import_categories(file: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(file)?;
    let records: Vec<NewCategory> = serde_json::from_str(&contents)?;

    let mut store = InMemoryCategoryStore::new();
    for record in records {
        let category = Category::new(record.category_name, record.description)?;
        store.insert(category)?;
    }
    log::info!("Imported {} categories from {}", store.len(), file.display());

    for category in store.list() {
        if let Some(id) = category.id() {
            println!("{id}\t{}", category.name());
        }
    }
    Ok(())
}
