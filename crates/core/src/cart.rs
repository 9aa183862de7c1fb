//! Quantity-bounded cart mapping and derived totals.
//!
//! The cart is a mapping from item id to quantity. Mutations only ever write
//! quantities in `[QTY_MIN, QTY_MAX]`; hydrated state may carry values outside
//! that range (or ids no longer in the catalog), which the read side tolerates
//! without rewriting storage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::ItemId;

/// Smallest quantity a cart entry can hold.
pub const QTY_MIN: i64 = 1;
/// Largest quantity a single mutation will write.
pub const QTY_MAX: i64 = 99;

/// Clamp a requested quantity into `[QTY_MIN, QTY_MAX]`.
///
/// Idempotent: clamping an already-clamped value is a no-op.
#[must_use]
pub const fn clamp_quantity(qty: i64) -> i64 {
    if qty < QTY_MIN {
        QTY_MIN
    } else if qty > QTY_MAX {
        QTY_MAX
    } else {
        qty
    }
}

/// Read-side clamp into `[0, QTY_MAX]` for stored values of unknown origin.
const fn clamp_stored(qty: i64) -> i64 {
    if qty < 0 {
        0
    } else if qty > QTY_MAX {
        QTY_MAX
    } else {
        qty
    }
}

/// Totals derived from the cart and catalog. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Total unit count across all entries.
    pub items_count: u32,
    /// Sum of line totals in whole rupees.
    pub amount_total: u32,
}

/// Mapping of item id to quantity.
///
/// Serializes as a plain JSON object (`{"c1": 2, "c3": 1}`), which is the
/// persisted cart record layout. Keys are ordered so the serialized form is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: BTreeMap<ItemId, i64>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` units of an item, on top of any existing quantity.
    ///
    /// The requested quantity is clamped into `[QTY_MIN, QTY_MAX]` before the
    /// addition; the stored sum itself is not re-clamped (the read side caps
    /// it). Unknown item ids are ignored.
    pub fn add(&mut self, catalog: &Catalog, item_id: &ItemId, qty: i64) {
        if !catalog.contains(item_id) {
            return;
        }
        let qty = clamp_quantity(qty);
        *self.entries.entry(item_id.clone()).or_insert(0) += qty;
    }

    /// Adjust an item's quantity by `delta` (typically ±1).
    ///
    /// The new quantity is `clamp(current + delta)` with a missing entry
    /// treated as quantity 1, so decrementing never removes the item nor goes
    /// below 1. Unknown item ids are ignored.
    pub fn adjust(&mut self, catalog: &Catalog, item_id: &ItemId, delta: i64) {
        if !catalog.contains(item_id) {
            return;
        }
        let current = self.entries.get(item_id).copied().unwrap_or(QTY_MIN);
        self.entries
            .insert(item_id.clone(), clamp_quantity(current + delta));
    }

    /// Remove an item's entry entirely. No-op if absent.
    ///
    /// Deliberately skips the catalog check so entries whose id no longer
    /// resolves can still be dropped.
    pub fn remove(&mut self, item_id: &ItemId) {
        self.entries.remove(item_id);
    }

    /// Reset the cart to the empty mapping.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Compute totals over the current entries.
    ///
    /// Entries whose id no longer resolves in the catalog are skipped, and
    /// each stored quantity is clamped into `[0, QTY_MAX]` for the
    /// computation only (a zero contributes nothing). The cart itself is
    /// never modified here.
    #[must_use]
    pub fn totals(&self, catalog: &Catalog) -> CartTotals {
        let mut totals = CartTotals::default();

        for (item_id, &raw_qty) in &self.entries {
            let qty = u32::try_from(clamp_stored(raw_qty)).unwrap_or(0);
            if qty == 0 {
                continue;
            }
            let Some(item) = catalog.get(item_id) else {
                continue;
            };

            totals.items_count += qty;
            totals.amount_total += item.unit_price.line_total(qty);
        }

        totals
    }

    /// Stored quantity for an item, if present.
    #[must_use]
    pub fn quantity(&self, item_id: &ItemId) -> Option<i64> {
        self.entries.get(item_id).copied()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct entries (not unit count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate entries in id order, for rendering.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, i64)> {
        self.entries.iter().map(|(id, &qty)| (id, qty))
    }
}
