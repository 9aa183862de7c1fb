//! Immutable catalog of purchasable items.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{ItemId, Price};

/// Errors rejected at catalog construction time.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two items share an id.
    #[error("duplicate catalog item id: {0}")]
    DuplicateId(ItemId),
    /// An item has a zero price.
    #[error("catalog item {0} must have a positive unit price")]
    NonPositivePrice(ItemId),
}

/// A purchasable item. Supplied at startup, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique item id.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price in whole rupees; always positive.
    pub unit_price: Price,
    /// Opaque presentation data (emoji, tagline, ...). The core never
    /// interprets it.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Immutable list of purchasable items with id lookup.
///
/// Iteration preserves the supplied order, which is the order the shop
/// displays items in.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Build a catalog from a list of items.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two items share an id, or
    /// `CatalogError::NonPositivePrice` if an item's price is zero.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());

        for (pos, item) in items.iter().enumerate() {
            if item.unit_price.as_rupees() == 0 {
                return Err(CatalogError::NonPositivePrice(item.id.clone()));
            }
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }

        Ok(Self { items, index })
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.index.get(id).and_then(|&pos| self.items.get(pos))
    }

    /// Whether an id resolves to a catalog item.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    /// Number of items in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
