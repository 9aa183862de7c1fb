//! Catalog sources: the built-in candle line-up and JSON catalog files.
//!
//! The catalog is static input data. Most deployments run the built-in
//! six-candle catalog; a JSON file (a top-level array of items) can replace
//! it via `TWISCENT_CATALOG`.

use std::path::Path;

use serde_json::json;
use thiserror::Error;
use twiscent_core::{Catalog, CatalogError, CatalogItem, ItemId, Price};

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not a valid item list.
    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Item list violates a catalog constraint.
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// The built-in candle line-up.
///
/// The `emoji` and `tagline` metadata keys are presentation-only; the core
/// never reads them.
#[must_use]
pub fn builtin_items() -> Vec<CatalogItem> {
    let line_up = [
        ("c1", "Eucalyptus Mint", 199, "🌿", "Fresh • Clean • Spa vibe"),
        ("c2", "Vanilla Bean", 249, "🍦", "Warm • Sweet • Classic"),
        ("c3", "Rose Oud", 299, "🌹", "Luxury • Bold • Date night"),
        ("c4", "Mocha Latte", 279, "☕", "Coffee • Cozy • Winter"),
        ("c5", "Fresh Linen", 229, "🧺", "Soft • Clean • Airy"),
        ("c6", "Lavender Calm", 219, "🌸", "Relaxing • Floral • Sleep"),
    ];

    line_up
        .into_iter()
        .map(|(id, name, price, emoji, tagline)| CatalogItem {
            id: ItemId::new(id),
            name: name.to_owned(),
            unit_price: Price::new(price),
            metadata: json!({ "emoji": emoji, "tagline": tagline }),
        })
        .collect()
}

/// Load the catalog from `path`, or the built-in catalog when `path` is
/// `None`.
///
/// # Errors
///
/// Returns `CatalogLoadError` when the file cannot be read or parsed, or
/// when the item list contains duplicate ids or zero prices.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogLoadError> {
    let items = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<Vec<CatalogItem>>(&raw)?
        }
        None => builtin_items(),
    };

    Ok(Catalog::new(items)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = load_catalog(None).unwrap();

        assert_eq!(catalog.len(), 6);
        let rose = catalog.get(&ItemId::new("c3")).unwrap();
        assert_eq!(rose.name, "Rose Oud");
        assert_eq!(rose.unit_price, Price::new(299));
        assert_eq!(rose.metadata["emoji"], "🌹");
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"s1","name":"Sandalwood","unit_price":349}}]"#
        )
        .unwrap();

        let catalog = load_catalog(Some(file.path())).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(&ItemId::new("s1")));
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog(Some(Path::new("/nonexistent/catalog.json")));
        assert!(matches!(result, Err(CatalogLoadError::Io(_))));
    }

    #[test]
    fn test_load_catalog_rejects_duplicates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"s1","name":"A","unit_price":100}},{{"id":"s1","name":"B","unit_price":200}}]"#
        )
        .unwrap();

        let result = load_catalog(Some(file.path()));
        assert!(matches!(result, Err(CatalogLoadError::Invalid(_))));
    }
}
