//! UPI payment profile commands.

use twiscent_core::UpiAddressError;
use twiscent_storefront::StorefrontSession;

/// Validate and save the payment profile.
///
/// # Errors
///
/// Returns `UpiAddressError` when the address is empty or lacks the `@`
/// separator; the previously saved profile is left untouched.
pub fn set(
    session: &mut StorefrontSession,
    upi_id: &str,
    payee_name: &str,
) -> Result<(), UpiAddressError> {
    let profile = session.save_payment_profile(upi_id, payee_name)?;
    tracing::info!("UPI saved: {} ({})", profile.upi_id, profile.payee_name);
    Ok(())
}

/// Show the saved payment profile.
pub fn show(session: &StorefrontSession) {
    let profile = session.payment_profile();
    if profile.upi_id.is_empty() {
        tracing::info!("No UPI ID saved yet. Run `twiscent upi set <id>` to set one.");
        return;
    }
    tracing::info!("UPI ID: {}", profile.upi_id);
    tracing::info!("Payee name: {}", profile.payee_name);
}
