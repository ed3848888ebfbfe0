use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::models::{Item, ItemId, ItemName, ItemUpdate, Price};

/// Business rule failures raised by the item store
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ItemDbError {
    #[error("Duplicate Name")]
    DuplicateName(String),
    #[error("Item not found")]
    NotFound(ItemId),
}

/// Catalogue the service starts with when seeding is enabled
const SEED_ITEMS: &[(&str, f64)] = &[
    ("Apple", 1.5),
    ("Banana", 2.0),
    ("Cherry", 3.5),
    ("Dragonfruit", 4.0),
    ("Elderberry", 5.25),
    ("Fig", 6.0),
    ("Guava", 7.75),
    ("Honeydew", 8.0),
    ("Kiwi", 9.5),
    ("Lemon", 12.0),
];

/// In-memory item store
///
/// Items live in insertion order and an item's id is its position in the
/// vector, so ids are never reused. All mutations take the write lock for
/// the whole check-then-write sequence.
#[derive(Debug, Default)]
pub struct ItemDb {
    items: RwLock<Vec<Item>>,
}

impl ItemDb {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with the sample catalogue
    pub fn with_seed() -> Self {
        let items = SEED_ITEMS
            .iter()
            .enumerate()
            .map(|(id, (name, price))| Item {
                id: id as u64,
                name: name.to_string(),
                price: *price,
            })
            .collect();
        Self {
            items: RwLock::new(items),
        }
    }

    /// Number of stored items
    pub(crate) async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// List the items in the window `offset..offset + limit`, keeping those
    /// priced at or above `min_price`.
    ///
    /// The window is cut from the raw store before the price filter runs, so
    /// a window may come back shorter than `limit` (or empty) even when
    /// matching items exist further along.
    pub async fn list_items(&self, min_price: f64, offset: usize, limit: usize) -> Vec<Item> {
        let items = self.items.read().await;
        let start = offset.min(items.len());
        let end = offset.saturating_add(limit).min(items.len());
        let result: Vec<Item> = items[start..end]
            .iter()
            .filter(|item| item.price >= min_price)
            .cloned()
            .collect();
        debug!(
            "Listed {} items (min_price={}, offset={}, limit={})",
            result.len(),
            min_price,
            offset,
            limit
        );
        result
    }

    /// Append a new item unless an item with the same name already exists
    pub async fn create_item(&self, name: ItemName, price: Price) -> Result<Item, ItemDbError> {
        let mut items = self.items.write().await;

        if items.iter().any(|item| item.name == name.as_str()) {
            warn!("Rejected item creation, name '{}' already exists", name);
            return Err(ItemDbError::DuplicateName(name.into_inner()));
        }

        let item = Item {
            id: items.len() as u64,
            name: name.into_inner(),
            price: price.value(),
        };
        items.push(item.clone());
        info!("Created item {} '{}'", item.id, item.name);
        Ok(item)
    }

    /// Apply the supplied fields to the item with the given id
    ///
    /// A new name is checked against every stored item, the target included,
    /// so renaming an item to its current name is rejected as a duplicate.
    /// The name check runs before the id lookup.
    pub async fn update_item(&self, item_id: ItemId, update: ItemUpdate) -> Result<Item, ItemDbError> {
        let mut items = self.items.write().await;

        if let Some(name) = &update.name {
            if items.iter().any(|item| item.name == name.as_str()) {
                warn!("Rejected update of item {}, name '{}' already exists", item_id, name);
                return Err(ItemDbError::DuplicateName(name.to_string()));
            }
        }

        let item = items
            .iter_mut()
            .find(|item| Some(item.id) == item_id.get())
            .ok_or(ItemDbError::NotFound(item_id))?;

        if let Some(name) = update.name {
            item.name = name.into_inner();
        }
        if let Some(price) = update.price {
            item.price = price.value();
        }
        info!("Updated item {} '{}'", item.id, item.name);
        Ok(item.clone())
    }
}
