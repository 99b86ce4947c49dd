//! Refund eligibility policy.
//!
//! A cancelled subscription is refunded only while the payment is younger
//! than the refund window. Pure duration arithmetic in milliseconds; no
//! timezone or calendar handling.

use chrono::Duration;

use crate::domain::foundation::Timestamp;

/// Length of the refund window following a verified payment, in days.
pub const REFUND_WINDOW_DAYS: i64 = 14;

/// Returns true iff `now` falls within the refund window opened at
/// `created_at`.
///
/// The boundary is inclusive: a payment exactly `REFUND_WINDOW_DAYS` old
/// is still refundable.
pub fn is_refund_eligible(created_at: &Timestamp, now: &Timestamp) -> bool {
    now.duration_since(created_at) <= Duration::days(REFUND_WINDOW_DAYS)
}

/// Whole days elapsed since a payment, for reporting in rejections.
pub fn days_since_payment(created_at: &Timestamp, now: &Timestamp) -> i64 {
    now.duration_since(created_at).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WINDOW_MS: i64 = 14 * 24 * 60 * 60 * 1000;

    fn payment_time() -> Timestamp {
        Timestamp::from_unix_secs(1_700_000_000)
    }

    #[test]
    fn eligible_immediately_after_payment() {
        let created = payment_time();
        assert!(is_refund_eligible(&created, &created));
    }

    #[test]
    fn eligible_one_millisecond_before_window_closes() {
        let created = payment_time();
        let now = created.plus_millis(WINDOW_MS - 1);
        assert!(is_refund_eligible(&created, &now));
    }

    #[test]
    fn eligible_exactly_at_window_boundary() {
        let created = payment_time();
        let now = created.plus_millis(WINDOW_MS);
        assert!(is_refund_eligible(&created, &now));
    }

    #[test]
    fn ineligible_one_millisecond_after_window_closes() {
        let created = payment_time();
        let now = created.plus_millis(WINDOW_MS + 1);
        assert!(!is_refund_eligible(&created, &now));
    }

    #[test]
    fn ineligible_twenty_days_after_payment() {
        let created = payment_time();
        let now = created.add_days(20);
        assert!(!is_refund_eligible(&created, &now));
    }

    #[test]
    fn clock_skew_before_payment_stays_eligible() {
        let created = payment_time();
        let now = created.plus_millis(-5_000);
        assert!(is_refund_eligible(&created, &now));
    }

    #[test]
    fn days_since_payment_truncates_to_whole_days() {
        let created = payment_time();
        assert_eq!(days_since_payment(&created, &created.add_days(20)), 20);
        assert_eq!(
            days_since_payment(&created, &created.plus_millis(WINDOW_MS - 1)),
            13
        );
    }

    proptest! {
        #[test]
        fn eligibility_matches_window_arithmetic(elapsed_ms in -WINDOW_MS..3 * WINDOW_MS) {
            let created = payment_time();
            let now = created.plus_millis(elapsed_ms);
            prop_assert_eq!(is_refund_eligible(&created, &now), elapsed_ms <= WINDOW_MS);
        }
    }
}
