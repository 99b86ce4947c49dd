//! Payment signature verification.
//!
//! After checkout the gateway hands the client a signature proving the
//! payment is genuine: HMAC-SHA256 over `"{payment_id}|{subscription_id}"`
//! keyed with the merchant's API secret, hex-encoded. The verifier
//! recomputes that digest and compares it against the candidate the
//! client submitted.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Verifier for gateway payment signatures.
pub struct PaymentSignatureVerifier {
    /// The merchant API secret shared with the gateway.
    secret: SecretString,
}

impl PaymentSignatureVerifier {
    /// Creates a new verifier keyed with the given secret.
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Checks a candidate signature for a payment.
    ///
    /// `subscription_id` must be the id stored on the user record, never a
    /// caller-supplied value; binding the digest to the stored id is what
    /// defeats substitution attacks. Comparison is exact on the hex string
    /// (case-sensitive, as issued by the gateway) and constant-time.
    pub fn verify(&self, payment_id: &str, subscription_id: &str, candidate: &str) -> bool {
        let expected = self.sign(payment_id, subscription_id);
        constant_time_compare(expected.as_bytes(), candidate.as_bytes())
    }

    /// Computes the hex-encoded signature for a payment.
    ///
    /// Exposed for test fixtures that need a valid candidate.
    pub fn sign(&self, payment_id: &str, subscription_id: &str) -> String {
        let signed_payload = format!("{}|{}", payment_id, subscription_id);

        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key");
        mac.update(signed_payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

/// Performs constant-time comparison of two byte slices.
///
/// This prevents timing attacks that could leak information about the
/// expected signature.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
