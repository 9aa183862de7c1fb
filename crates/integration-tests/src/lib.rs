//! Integration tests for the Twiscent storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p twiscent-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Shopping scenarios over the session API
//! - `payment_links` - Profile setup and deep-link generation
//! - `persistence` - Filesystem store behavior across restarts
