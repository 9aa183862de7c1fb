//! UPI deep-link construction.
//!
//! A UPI deep link pre-fills a transaction in any compatible payment app:
//!
//! ```text
//! upi://pay?pa=<payee address>&pn=<payee name>&am=<amount>&cu=INR&tn=<note>
//! ```
//!
//! The builder is a pure function over the amount, note, and payment profile.
//! Unavailability (unset profile, zero amount) is a normal `None` return, not
//! an error.

use crate::types::PaymentProfile;

/// The only currency the storefront trades in.
const CURRENCY: &str = "INR";

/// Build a `upi://pay` deep link, or `None` when a link cannot be offered.
///
/// Returns `None` when the profile's address is empty or lacks the `@`
/// separator, or when `amount` is zero. Otherwise the link carries the payee
/// address (`pa`), display name (`pn`, falling back to the default payee name
/// when blank), amount (`am`, plain whole-rupee decimal string), the fixed
/// currency (`cu`), and the caller's note (`tn`) encoded verbatim. Every
/// value is percent-encoded per URI component rules.
///
/// ## Examples
///
/// ```
/// use twiscent_core::{PaymentProfile, build_payment_link};
///
/// let profile = PaymentProfile {
///     upi_id: "shop@bank".to_owned(),
///     payee_name: String::new(),
/// };
///
/// assert_eq!(
///     build_payment_link(697, "Order", &profile).as_deref(),
///     Some("upi://pay?pa=shop%40bank&pn=Twiscent%20Candles&am=697&cu=INR&tn=Order"),
/// );
/// assert_eq!(build_payment_link(0, "Order", &profile), None);
/// ```
#[must_use]
pub fn build_payment_link(amount: u32, note: &str, profile: &PaymentProfile) -> Option<String> {
    let address = profile.upi_address().ok()?;
    if amount == 0 {
        return None;
    }

    let pa = urlencoding::encode(address.as_str());
    let pn = urlencoding::encode(profile.payee_name_or_default());
    let am = amount.to_string();
    let tn = urlencoding::encode(note);

    Some(format!(
        "upi://pay?pa={pa}&pn={pn}&am={am}&cu={CURRENCY}&tn={tn}"
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn profile(upi_id: &str, payee_name: &str) -> PaymentProfile {
        PaymentProfile {
            upi_id: upi_id.to_owned(),
            payee_name: payee_name.to_owned(),
        }
    }

    #[test]
    fn test_link_with_blank_name_uses_default() {
        let link = build_payment_link(697, "Order", &profile("shop@bank", "")).unwrap();
        assert_eq!(
            link,
            "upi://pay?pa=shop%40bank&pn=Twiscent%20Candles&am=697&cu=INR&tn=Order"
        );
    }

    #[test]
    fn test_link_is_deterministic() {
        let p = profile("shop@bank", "Twiscent");
        assert_eq!(
            build_payment_link(450, "Cart", &p),
            build_payment_link(450, "Cart", &p)
        );
    }

    #[test]
    fn test_unavailable_for_zero_amount() {
        assert_eq!(build_payment_link(0, "Order", &profile("shop@bank", "X")), None);
    }

    #[test]
    fn test_unavailable_for_missing_separator() {
        assert_eq!(build_payment_link(697, "Order", &profile("shopbank", "X")), None);
        assert_eq!(build_payment_link(697, "Order", &profile("", "X")), None);
    }

    #[test]
    fn test_note_encoded_verbatim() {
        let link =
            build_payment_link(279, "Order #7 & gift", &profile("shop@bank", "Twiscent")).unwrap();
        assert!(link.ends_with("&tn=Order%20%237%20%26%20gift"));
    }

    #[test]
    fn test_amount_is_plain_decimal() {
        let link = build_payment_link(1495, "Order", &profile("shop@bank", "Twiscent")).unwrap();
        assert!(link.contains("&am=1495&"));
    }
}
