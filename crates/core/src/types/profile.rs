//! Payment profile: the payee identity behind generated links.

use serde::{Deserialize, Serialize};

use super::upi_address::{UpiAddress, UpiAddressError};

/// Fallback payee display name used when none is configured.
pub const DEFAULT_PAYEE_NAME: &str = "Twiscent Candles";

/// Payee identity used to construct payment links.
///
/// The profile starts out empty on a fresh device and is only replaced by an
/// explicit, validated save. Field names match the persisted record layout
/// (`upiId` / `payeeName`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentProfile {
    /// UPI virtual payment address; empty until the shopper saves one.
    pub upi_id: String,
    /// Display name shown in the payment app.
    pub payee_name: String,
}

impl Default for PaymentProfile {
    fn default() -> Self {
        Self {
            upi_id: String::new(),
            payee_name: DEFAULT_PAYEE_NAME.to_owned(),
        }
    }
}

impl PaymentProfile {
    /// Parse the stored address, if it is usable.
    ///
    /// # Errors
    ///
    /// Returns the parse failure for an empty or separator-less address.
    pub fn upi_address(&self) -> Result<UpiAddress, UpiAddressError> {
        UpiAddress::parse(&self.upi_id)
    }

    /// Payee name with the fallback applied when blank.
    #[must_use]
    pub fn payee_name_or_default(&self) -> &str {
        let name = self.payee_name.trim();
        if name.is_empty() { DEFAULT_PAYEE_NAME } else { name }
    }
}
