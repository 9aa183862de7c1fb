//! Twiscent Core - shared types and pure storefront logic.
//!
//! This crate provides the cart state machine and derivation logic used by
//! the Twiscent storefront components:
//! - `storefront` - Session layer (persistence, configuration, catalog loading)
//! - `cli` - Terminal front-end driving the session
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! clocks, no global state. Every operation runs to completion
//! synchronously; hydration and persistence live in the `storefront` crate.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for item ids, prices, UPI addresses, and
//!   the payment profile
//! - [`catalog`] - The immutable list of purchasable items
//! - [`cart`] - Quantity-bounded cart mapping and derived totals
//! - [`upi`] - The `upi://pay` deep-link builder

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;
pub mod upi;

pub use cart::{Cart, CartTotals, QTY_MAX, QTY_MIN, clamp_quantity};
pub use catalog::{Catalog, CatalogError, CatalogItem};
pub use types::*;
pub use upi::build_payment_link;
