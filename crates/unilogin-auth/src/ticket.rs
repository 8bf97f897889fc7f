//! Ticket reconstruction and verification results.
//!
//! A [`Ticket`] is the signed identity payload the provider hands back
//! via query parameters on the callback leg. Nothing here is persisted:
//! tickets and verification results live for a single request.

use serde::Serialize;

use crate::request::SsoRequest;

/// The asserted identity payload from a callback request.
///
/// Fields are taken verbatim from the query string — no trimming, no
/// case folding. `ltoken` is an opaque long-lived token the provider may
/// attach; it is passed through unmodified and never validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    /// The asserted proof value, an MD5 hex digest.
    pub auth: String,
    /// Issuance time in `YYYYMMDDHHmmss` form (UTC), not a Unix epoch.
    pub timestamp: String,
    /// The asserted subject identifier.
    pub user: String,
    /// Optional opaque long-lived token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ltoken: Option<String>,
}

impl Ticket {
    /// Reconstruct a ticket from a callback request.
    ///
    /// Returns `None` unless all of `auth`, `timestamp` and `user` are
    /// present; a partial triple is a malformed callback, not a ticket.
    pub fn from_request<R: SsoRequest + ?Sized>(request: &R) -> Option<Self> {
        let auth = request.query_param("auth")?;
        let timestamp = request.query_param("timestamp")?;
        let user = request.query_param("user")?;

        Some(Self {
            auth: auth.to_string(),
            timestamp: timestamp.to_string(),
            user: user.to_string(),
            ltoken: request.query_param("ltoken").map(str::to_string),
        })
    }
}

/// Outcome of a single verification sub-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketCheck {
    /// Whether the check passed.
    pub valid: bool,
    /// Failure detail; `None` when the check passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TicketCheck {
    /// A passing check, carrying no message.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing check with a human-readable detail.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Combined outcome of a verification attempt.
///
/// Both sub-results are always carried, including the one that passed,
/// so the host can tell which check failed. Produced fresh per attempt
/// and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    /// Signature comparison against the recomputed digest.
    pub signature: TicketCheck,
    /// Ticket age against the configured freshness window.
    pub freshness: TicketCheck,
}

impl VerificationResult {
    /// Whether both checks passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.signature.valid && self.freshness.valid
    }

    /// The value handed to the verification callback: `None` only when
    /// both checks pass, otherwise the full result.
    #[must_use]
    pub fn into_failure(self) -> Option<Self> {
        if self.is_valid() {
            None
        } else {
            Some(self)
        }
    }
}
