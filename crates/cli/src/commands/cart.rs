//! Cart commands.

use twiscent_core::{CartTotals, ItemId, clamp_quantity};
use twiscent_storefront::StorefrontSession;

/// Show the cart contents and totals.
pub fn show(session: &StorefrontSession) {
    if session.cart().is_empty() {
        tracing::info!("Cart is empty");
        return;
    }

    for (item_id, qty) in session.cart().iter() {
        match session.catalog().get(item_id) {
            Some(item) => {
                let units = u32::try_from(qty.clamp(0, 99)).unwrap_or(0);
                tracing::info!(
                    "{}  {} x{} = ₹{}",
                    item.id,
                    item.name,
                    qty,
                    item.unit_price.line_total(units)
                );
            }
            None => tracing::warn!("{item_id}  (no longer in catalog) x{qty}"),
        }
    }

    report_totals(session.totals());
}

/// Add an item to the cart.
pub fn add(session: &mut StorefrontSession, id: &str, qty: i64) {
    let item_id = ItemId::new(id);
    let Some(item) = session.catalog().get(&item_id) else {
        tracing::warn!("Unknown item: {id}");
        return;
    };
    let name = item.name.clone();

    let totals = session.add_item(&item_id, qty);
    tracing::info!("Added {} x {name}", clamp_quantity(qty));
    report_totals(totals);
}

/// Remove an item from the cart.
pub fn remove(session: &mut StorefrontSession, id: &str) {
    let item_id = ItemId::new(id);
    let totals = session.remove_item(&item_id);
    tracing::info!("Removed {id}");
    report_totals(totals);
}

/// Adjust an item's quantity by `delta`.
pub fn adjust(session: &mut StorefrontSession, id: &str, delta: i64) {
    let item_id = ItemId::new(id);
    if !session.catalog().contains(&item_id) {
        tracing::warn!("Unknown item: {id}");
        return;
    }

    let totals = session.adjust_quantity(&item_id, delta);
    let qty = session.cart().quantity(&item_id).unwrap_or(0);
    tracing::info!("{id} is now x{qty}");
    report_totals(totals);
}

/// Empty the cart.
pub fn clear(session: &mut StorefrontSession) {
    let totals = session.clear_cart();
    tracing::info!("Cart cleared");
    report_totals(totals);
}

fn report_totals(totals: CartTotals) {
    tracing::info!(
        "Total: {} item(s), ₹{}",
        totals.items_count,
        totals.amount_total
    );
}
