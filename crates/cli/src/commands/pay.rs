//! Payment link commands.

use twiscent_core::{ItemId, clamp_quantity};
use twiscent_storefront::StorefrontSession;

/// Default note for a whole-cart payment.
const CART_NOTE: &str = "Twiscent Cart Order";

/// Build a payment link for the current cart total.
pub fn cart(session: &StorefrontSession, note: Option<&str>) {
    let totals = session.totals();
    if totals.amount_total == 0 {
        tracing::warn!("Cart is empty");
        return;
    }

    match session.cart_payment_link(note.unwrap_or(CART_NOTE)) {
        Some(link) => {
            tracing::info!(
                "Pay ₹{} for {} item(s):",
                totals.amount_total,
                totals.items_count
            );
            tracing::info!("{link}");
        }
        None => suggest_upi_setup(),
    }
}

/// Build a payment link for a single item, leaving the cart alone.
pub fn buy_now(session: &StorefrontSession, id: &str, qty: i64, note: Option<&str>) {
    let item_id = ItemId::new(id);
    let Some(item) = session.catalog().get(&item_id) else {
        tracing::warn!("Unknown item: {id}");
        return;
    };

    let qty = clamp_quantity(qty);
    let default_note = format!("Twiscent Order - {} x{qty}", item.name);
    let amount = item.unit_price.line_total(u32::try_from(qty).unwrap_or(1));

    match session.buy_now_link(&item_id, qty, note.unwrap_or(&default_note)) {
        Some(link) => {
            tracing::info!("Pay ₹{amount} for {} x{qty}:", item.name);
            tracing::info!("{link}");
        }
        None => suggest_upi_setup(),
    }
}

fn suggest_upi_setup() {
    tracing::warn!("Set UPI ID first: run `twiscent upi set <id>`");
}
