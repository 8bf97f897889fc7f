//! Ticket freshness window.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::ticket::TicketCheck;

/// Lexical form of a ticket timestamp: `YYYYMMDDHHmmss`, UTC.
pub const TICKET_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Decides whether a ticket's timestamp is still within the allowed age
/// window.
///
/// The window is inclusive at the boundary: a ticket exactly
/// `max_age_secs` old is already stale. A window of `0` disables the
/// check, making every ticket vacuously fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessPolicy {
    max_age_secs: u64,
}

impl FreshnessPolicy {
    /// Create a policy with the given window in seconds.
    #[must_use]
    pub fn new(max_age_secs: u64) -> Self {
        Self { max_age_secs }
    }

    /// Whether this policy performs any checking at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.max_age_secs >= 1
    }

    /// Check a timestamp against the current UTC instant.
    #[must_use]
    pub fn check(&self, timestamp: &str) -> TicketCheck {
        self.check_at(timestamp, Utc::now())
    }

    /// Check a timestamp against an explicit `now`.
    ///
    /// A timestamp that does not parse as `YYYYMMDDHHmmss` fails the
    /// check outright; a forged or garbled timestamp must not slip
    /// through as fresh.
    #[must_use]
    pub fn check_at(&self, timestamp: &str, now: DateTime<Utc>) -> TicketCheck {
        if !self.is_enabled() {
            return TicketCheck::pass();
        }

        let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, TICKET_TIMESTAMP_FORMAT) else {
            return TicketCheck::fail(format!(
                "Ticket timestamp '{timestamp}' is not a valid YYYYMMDDHHmmss value"
            ));
        };

        let age_secs = now.timestamp() - parsed.and_utc().timestamp();
        let window = i64::try_from(self.max_age_secs).unwrap_or(i64::MAX);

        if age_secs >= window {
            TicketCheck::fail(format!(
                "Ticket timestamp has exceeded the value defined in maxTicketAge ({})",
                self.max_age_secs
            ))
        } else {
            TicketCheck::pass()
        }
    }
}
