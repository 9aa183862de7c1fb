//! Persisted record layout for the cart and payment profile.
//!
//! Two independent string-keyed records:
//!
//! - `twiscent_cart_v1` - JSON object of item id to quantity
//! - `twiscent_upi_v1` - JSON object `{"upiId": ..., "payeeName": ...}`
//!
//! Loading treats a malformed stored value identically to an absent key: the
//! failure is logged and the default comes back. A shopper with a damaged
//! record loses that record, nothing more.

use twiscent_core::{Cart, PaymentProfile};

use crate::store::{KeyValueStore, StoreError};

/// Store key for the serialized cart record.
pub const CART_KEY: &str = "twiscent_cart_v1";
/// Store key for the serialized payment profile record.
pub const PROFILE_KEY: &str = "twiscent_upi_v1";

/// Load the persisted cart, or an empty cart when absent or unreadable.
#[must_use]
pub fn load_cart(store: &dyn KeyValueStore) -> Cart {
    load_record(store, CART_KEY)
}

/// Persist the cart record.
///
/// # Errors
///
/// Returns `StoreError` when the record cannot be written.
pub fn save_cart(store: &dyn KeyValueStore, cart: &Cart) -> Result<(), StoreError> {
    store.set(CART_KEY, &serde_json::to_string(cart)?)
}

/// Load the persisted payment profile, or the default when absent or
/// unreadable.
#[must_use]
pub fn load_profile(store: &dyn KeyValueStore) -> PaymentProfile {
    load_record(store, PROFILE_KEY)
}

/// Persist the payment profile record.
///
/// # Errors
///
/// Returns `StoreError` when the record cannot be written.
pub fn save_profile(store: &dyn KeyValueStore, profile: &PaymentProfile) -> Result<(), StoreError> {
    store.set(PROFILE_KEY, &serde_json::to_string(profile)?)
}

fn load_record<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: Default + serde::de::DeserializeOwned,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Discarding unreadable record {key}: {e}");
            T::default()
        }
    }
}
