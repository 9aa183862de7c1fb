//! Core types for the Twiscent storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod profile;
pub mod upi_address;

pub use id::ItemId;
pub use price::Price;
pub use profile::{DEFAULT_PAYEE_NAME, PaymentProfile};
pub use upi_address::{UpiAddress, UpiAddressError};
