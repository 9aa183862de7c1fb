//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod pay;
pub mod upi;

use std::sync::Arc;

use twiscent_storefront::{FsStore, StorefrontConfig, StorefrontSession, load_catalog};

/// Open a storefront session from environment configuration.
///
/// # Errors
///
/// Returns an error when configuration is invalid, the data directory cannot
/// be created, or a configured catalog file fails to load.
pub fn open_session() -> Result<StorefrontSession, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let store = FsStore::open(&config.data_dir)?;
    let catalog = load_catalog(config.catalog_path.as_deref())?;

    Ok(StorefrontSession::open(catalog, Arc::new(store)))
}
