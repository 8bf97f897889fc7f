//! Keyed MD5 digests over ticket material.
//!
//! # Security
//!
//! MD5 is cryptographically broken. It is used here only because the
//! UNI-Login wire protocol is defined over it; the digests must match
//! the identity provider bit-for-bit. Do not reuse these functions for
//! anything other than compatibility with that fixed external protocol.

use md5::{Digest, Md5};

use crate::ticket::{Ticket, TicketCheck};

/// Message reported when a ticket's `auth` value does not match the
/// recomputed digest. Fixed wording, consumed by existing integrations.
pub(crate) const SIGNATURE_MISMATCH: &str = "Auth/token calculation mismatch";

/// MD5 over the UTF-8 bytes of `input`, as lowercase hex.
#[must_use]
pub fn md5_hex(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Digest signed into the phase-A redirect: `md5(returnURL + secret)`.
///
/// This signature lets the identity provider prove it received an
/// unmodified return address. It is independent of [`sign_ticket`] and
/// the two must not be conflated: they cover different input tuples.
#[must_use]
pub fn sign_return_url(return_url: &str, secret: &str) -> String {
    md5_hex(&format!("{return_url}{secret}"))
}

/// Digest asserted by a phase-B ticket: `md5(timestamp + secret + user)`.
///
/// Concatenation order is fixed by the wire protocol: timestamp, then
/// secret, then user.
#[must_use]
pub fn sign_ticket(timestamp: &str, secret: &str, user: &str) -> String {
    md5_hex(&format!("{timestamp}{secret}{user}"))
}

/// Whether `auth` equals the recomputed ticket digest.
///
/// Plain string equality: the fields are compared exactly as received,
/// with no trimming or case folding.
#[must_use]
pub fn verify_ticket_signature(auth: &str, timestamp: &str, secret: &str, user: &str) -> bool {
    auth == sign_ticket(timestamp, secret, user)
}

/// Run the signature check for a reconstructed ticket.
pub(crate) fn check_ticket(ticket: &Ticket, secret: &str) -> TicketCheck {
    if verify_ticket_signature(&ticket.auth, &ticket.timestamp, secret, &ticket.user) {
        TicketCheck::pass()
    } else {
        TicketCheck::fail(SIGNATURE_MISMATCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex_known_vectors() {
        // RFC 1321 vectors.
        assert_eq!(md5_hex(""), "d41d8cb98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_sign_return_url_matches_provider_vector() {
        assert_eq!(
            sign_return_url("http://some.dummy.url", "secret"),
            "666f00db6b378a1455c6d153cb4bfe13"
        );
    }

    #[test]
    fn test_sign_ticket_matches_provider_vector() {
        assert_eq!(
            sign_ticket("0", "secret", "some_user"),
            "31b166f19998267a16da4b3d76228ffc"
        );
    }

    #[test]
    fn test_signature_round_trip() {
        let auth = sign_ticket("20260830120000", "secret", "bubber");
        assert!(verify_ticket_signature(&auth, "20260830120000", "secret", "bubber"));
    }

    #[test]
    fn test_changing_any_input_invalidates_signature() {
        let auth = sign_ticket("20260830120000", "secret", "bubber");

        assert!(!verify_ticket_signature(&auth, "20260830120001", "secret", "bubber"));
        assert!(!verify_ticket_signature(&auth, "20260830120000", "leaked", "bubber"));
        assert!(!verify_ticket_signature(&auth, "20260830120000", "secret", "intruder"));
    }

    #[test]
    fn test_check_ticket_reports_fixed_mismatch_message() {
        let ticket = Ticket {
            auth: "random".to_string(),
            timestamp: "0".to_string(),
            user: "some_user".to_string(),
            ltoken: None,
        };

        let check = check_ticket(&ticket, "secret");
        assert!(!check.valid);
        assert_eq!(check.message.as_deref(), Some("Auth/token calculation mismatch"));
    }
}
