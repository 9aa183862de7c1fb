//! Catalog listing command.

use twiscent_storefront::StorefrontSession;

/// List every purchasable item.
pub fn list(session: &StorefrontSession) {
    for item in session.catalog().iter() {
        let emoji = item.metadata.get("emoji").and_then(|v| v.as_str());
        let tagline = item.metadata.get("tagline").and_then(|v| v.as_str());

        match (emoji, tagline) {
            (Some(emoji), Some(tagline)) => tracing::info!(
                "{}  {} {} - {} ({tagline})",
                item.id,
                emoji,
                item.name,
                item.unit_price
            ),
            _ => tracing::info!("{}  {} - {}", item.id, item.name, item.unit_price),
        }
    }
}
