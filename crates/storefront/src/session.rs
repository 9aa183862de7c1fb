//! The storefront session: cart + payment profile with a persistence
//! lifecycle.
//!
//! A session hydrates both records from the store on open, then runs every
//! user intent as read current state, compute new state, persist, return.
//! All operations are synchronous and run to completion; the store has a
//! single active writer.
//!
//! Persistence failures during a mutation are logged and absorbed: the
//! in-memory state change still lands and the fresh totals still come back,
//! so a full disk degrades durability, not the shop.

use twiscent_core::{
    Cart, CartTotals, Catalog, DEFAULT_PAYEE_NAME, ItemId, PaymentProfile, UpiAddress,
    UpiAddressError, build_payment_link, clamp_quantity,
};

use crate::records;
use crate::store::DynStore;

/// Session state owning the catalog, store handle, cart, and payment
/// profile.
///
/// Any UI layer drives the session through these operations and re-renders
/// from the returned state.
pub struct StorefrontSession {
    catalog: Catalog,
    store: DynStore,
    cart: Cart,
    profile: PaymentProfile,
}

impl StorefrontSession {
    /// Open a session, hydrating the cart and profile from the store.
    #[must_use]
    pub fn open(catalog: Catalog, store: DynStore) -> Self {
        let cart = records::load_cart(store.as_ref());
        let profile = records::load_profile(store.as_ref());

        Self {
            catalog,
            store,
            cart,
            profile,
        }
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    /// Add `qty` units of an item to the cart.
    pub fn add_item(&mut self, item_id: &ItemId, qty: i64) -> CartTotals {
        self.cart.add(&self.catalog, item_id, qty);
        self.persist_cart();
        self.totals()
    }

    /// Adjust an item's quantity by `delta` (±1 for the inc/dec controls).
    pub fn adjust_quantity(&mut self, item_id: &ItemId, delta: i64) -> CartTotals {
        self.cart.adjust(&self.catalog, item_id, delta);
        self.persist_cart();
        self.totals()
    }

    /// Remove an item from the cart entirely.
    pub fn remove_item(&mut self, item_id: &ItemId) -> CartTotals {
        self.cart.remove(item_id);
        self.persist_cart();
        self.totals()
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> CartTotals {
        self.cart.clear();
        self.persist_cart();
        self.totals()
    }

    /// Current totals over the cart and catalog.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.cart.totals(&self.catalog)
    }

    // =========================================================================
    // Payment profile operations
    // =========================================================================

    /// Validate and save the payment profile.
    ///
    /// Both inputs are trimmed. The payee name falls back to the default when
    /// blank. On validation failure the previous profile stays in place, in
    /// memory and in the store.
    ///
    /// # Errors
    ///
    /// Returns `UpiAddressError` when the trimmed address is empty or lacks
    /// the `@` separator.
    pub fn save_payment_profile(
        &mut self,
        upi_id: &str,
        payee_name: &str,
    ) -> Result<PaymentProfile, UpiAddressError> {
        let address = UpiAddress::parse(upi_id)?;

        let trimmed_name = payee_name.trim();
        let profile = PaymentProfile {
            upi_id: address.into_inner(),
            payee_name: if trimmed_name.is_empty() {
                DEFAULT_PAYEE_NAME.to_owned()
            } else {
                trimmed_name.to_owned()
            },
        };

        if let Err(e) = records::save_profile(self.store.as_ref(), &profile) {
            tracing::error!("Failed to persist payment profile: {e}");
        }
        self.profile = profile.clone();

        Ok(profile)
    }

    /// The current payment profile.
    #[must_use]
    pub fn payment_profile(&self) -> &PaymentProfile {
        &self.profile
    }

    // =========================================================================
    // Payment links
    // =========================================================================

    /// Payment link for the current cart total, or `None` when the cart is
    /// empty or the profile is unusable.
    #[must_use]
    pub fn cart_payment_link(&self, note: &str) -> Option<String> {
        build_payment_link(self.totals().amount_total, note, &self.profile)
    }

    /// Payment link for a single item without touching the cart.
    ///
    /// `None` when the id is unknown, in addition to the usual
    /// unavailability conditions.
    #[must_use]
    pub fn buy_now_link(
        &self,
        item_id: &ItemId,
        qty: i64,
        note: &str,
    ) -> Option<String> {
        let item = self.catalog.get(item_id)?;
        let qty = u32::try_from(clamp_quantity(qty)).unwrap_or(1);
        build_payment_link(item.unit_price.line_total(qty), note, &self.profile)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The catalog this session sells from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current cart contents.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    fn persist_cart(&self) {
        if let Err(e) = records::save_cart(self.store.as_ref(), &self.cart) {
            tracing::error!("Failed to persist cart: {e}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::builtin_items;
    use crate::store::{KeyValueStore, MemStore};

    fn session_with(store: Arc<MemStore>) -> StorefrontSession {
        let catalog = Catalog::new(builtin_items()).unwrap();
        StorefrontSession::open(catalog, store)
    }

    #[test]
    fn test_mutations_persist_after_every_call() {
        let store = Arc::new(MemStore::new());
        let mut session = session_with(Arc::clone(&store));

        session.add_item(&ItemId::new("c1"), 2);
        assert_eq!(
            store.get(records::CART_KEY).as_deref(),
            Some(r#"{"c1":2}"#)
        );

        session.adjust_quantity(&ItemId::new("c1"), 1);
        assert_eq!(
            store.get(records::CART_KEY).as_deref(),
            Some(r#"{"c1":3}"#)
        );

        session.clear_cart();
        assert_eq!(store.get(records::CART_KEY).as_deref(), Some("{}"));
    }

    #[test]
    fn test_reopen_restores_cart() {
        let store = Arc::new(MemStore::new());

        {
            let mut session = session_with(Arc::clone(&store));
            session.add_item(&ItemId::new("c1"), 2);
            session.add_item(&ItemId::new("c3"), 1);
        }

        let session = session_with(store);
        let totals = session.totals();
        assert_eq!(totals.items_count, 3);
        assert_eq!(totals.amount_total, 697);
    }

    #[test]
    fn test_invalid_profile_save_leaves_store_untouched() {
        let store = Arc::new(MemStore::new());
        let mut session = session_with(Arc::clone(&store));

        session
            .save_payment_profile("shop@bank", "Twiscent")
            .unwrap();
        let stored = store.get(records::PROFILE_KEY);

        let result = session.save_payment_profile("", "New Name");
        assert!(result.is_err());
        assert_eq!(store.get(records::PROFILE_KEY), stored);
        assert_eq!(session.payment_profile().upi_id, "shop@bank");

        let result = session.save_payment_profile("no-separator", "New Name");
        assert!(result.is_err());
        assert_eq!(session.payment_profile().upi_id, "shop@bank");
    }

    #[test]
    fn test_profile_save_trims_and_defaults_name() {
        let store = Arc::new(MemStore::new());
        let mut session = session_with(store);

        let saved = session.save_payment_profile("  shop@bank  ", "   ").unwrap();
        assert_eq!(saved.upi_id, "shop@bank");
        assert_eq!(saved.payee_name, DEFAULT_PAYEE_NAME);
    }

    #[test]
    fn test_cart_payment_link() {
        let store = Arc::new(MemStore::new());
        let mut session = session_with(store);

        // Empty cart, no link regardless of profile.
        session.save_payment_profile("shop@bank", "").unwrap();
        assert_eq!(session.cart_payment_link("Order"), None);

        session.add_item(&ItemId::new("c1"), 2);
        session.add_item(&ItemId::new("c3"), 1);
        assert_eq!(
            session.cart_payment_link("Order").as_deref(),
            Some("upi://pay?pa=shop%40bank&pn=Twiscent%20Candles&am=697&cu=INR&tn=Order")
        );
    }

    #[test]
    fn test_cart_payment_link_without_profile() {
        let store = Arc::new(MemStore::new());
        let mut session = session_with(store);

        session.add_item(&ItemId::new("c1"), 1);
        assert_eq!(session.cart_payment_link("Order"), None);
    }

    #[test]
    fn test_buy_now_link_leaves_cart_alone() {
        let store = Arc::new(MemStore::new());
        let mut session = session_with(store);
        session.save_payment_profile("shop@bank", "Twiscent").unwrap();

        let link = session
            .buy_now_link(&ItemId::new("c4"), 2, "Twiscent Order - Mocha Latte x2")
            .unwrap();
        assert!(link.contains("am=558"));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_buy_now_link_unknown_item() {
        let store = Arc::new(MemStore::new());
        let mut session = session_with(store);
        session.save_payment_profile("shop@bank", "Twiscent").unwrap();

        assert_eq!(session.buy_now_link(&ItemId::new("c9"), 1, "Order"), None);
    }

    #[test]
    fn test_corrupt_records_hydrate_as_defaults() {
        let store = Arc::new(MemStore::new());
        store.set(records::CART_KEY, "corrupt").unwrap();
        store.set(records::PROFILE_KEY, "[1,2]").unwrap();

        let session = session_with(store);
        assert!(session.cart().is_empty());
        assert_eq!(session.payment_profile(), &PaymentProfile::default());
    }
}
