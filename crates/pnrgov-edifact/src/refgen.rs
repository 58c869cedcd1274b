//! # Reference and Ticket Number Generation
//!
//! Message and interchange reference tokens for the envelope segments, and
//! the synthesized thirteen-digit ticket stock carried by SSR TKNE.
//!
//! Single-reservation interchanges use time-based references (with a random
//! suffix on the interchange reference); manifest interchanges use fully
//! random references. Both forms are visible to downstream consumers and
//! are kept distinct deliberately.

use chrono::NaiveDateTime;
use rand::Rng;

/// Time-based message reference: `ddMMyyHHmmss` of the issue instant.
pub fn message_reference(issued_at: NaiveDateTime) -> String {
    issued_at.format("%d%m%y%H%M%S").to_string()
}

/// Time-based interchange reference: the message reference form plus a
/// random three-digit suffix.
pub fn interchange_reference(issued_at: NaiveDateTime, rng: &mut impl Rng) -> String {
    format!(
        "{}{}",
        issued_at.format("%d%m%y%H%M%S"),
        rng.gen_range(100..1000)
    )
}

/// Manifest message reference: random six digits, zero-padded.
pub fn manifest_message_reference(rng: &mut impl Rng) -> String {
    format!("{:06}", rng.gen_range(1..=999_999))
}

/// Manifest interchange reference: random thirteen-digit number.
pub fn manifest_interchange_reference(rng: &mut impl Rng) -> String {
    rng.gen_range(1_000_000_000_000u64..10_000_000_000_000)
        .to_string()
}

/// Synthesized ticket number: `139` stock prefix, seven random digits,
/// `000`, and a coupon suffix `C<n>`.
pub fn ticket_number(coupon: usize, rng: &mut impl Rng) -> String {
    format!("139{}000C{}", rng.gen_range(1_000_000..10_000_000), coupon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn issued() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(10, 45, 12)
            .unwrap()
    }

    #[test]
    fn test_message_reference_is_timestamp() {
        assert_eq!(message_reference(issued()), "140326104512");
    }

    #[test]
    fn test_interchange_reference_extends_message_reference() {
        let mut rng = StdRng::seed_from_u64(1);
        let reference = interchange_reference(issued(), &mut rng);
        assert!(reference.starts_with("140326104512"));
        assert_eq!(reference.len(), 15);
    }

    #[test]
    fn test_manifest_message_reference_is_six_digits() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let reference = manifest_message_reference(&mut rng);
            assert_eq!(reference.len(), 6);
            assert!(reference.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_manifest_interchange_reference_is_thirteen_digits() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let reference = manifest_interchange_reference(&mut rng);
            assert_eq!(reference.len(), 13);
        }
    }

    #[test]
    fn test_ticket_number_shape() {
        let mut rng = StdRng::seed_from_u64(4);
        let ticket = ticket_number(2, &mut rng);
        assert!(ticket.starts_with("139"));
        assert!(ticket.ends_with("000C2"));
        // 13-digit stock before the coupon suffix.
        assert_eq!(ticket.len(), "139".len() + 7 + "000".len() + "C2".len());
    }

    #[test]
    fn test_seeded_rng_reproduces_references() {
        let a = ticket_number(1, &mut StdRng::seed_from_u64(9));
        let b = ticket_number(1, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
