//! Terminal outcomes and the completion bridge.
//!
//! Mirrors the success / fail / error convention of pluggable
//! authentication middleware so the strategy composes with any host
//! framework implementing it. The host's verification callback resolves
//! by returning a [`Verdict`], which maps onto the terminal
//! [`AuthOutcome`] the host matches on.

use http::StatusCode;

/// What the host's verification callback decided about an identity.
///
/// A verdict resolves the request exactly once by construction; there is
/// no separate completion function to call twice or forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<U, E> {
    /// An identity was resolved.
    Authenticated {
        /// The resolved identity.
        user: U,
        /// Optional detail passed through to the success terminal.
        info: Option<String>,
    },
    /// No identity could be resolved; an expected authentication
    /// failure, not an error.
    Rejected {
        /// Optional failure detail.
        info: Option<String>,
    },
    /// An unexpected failure (identity-store outage and the like).
    /// Signature mismatches do not belong here; they are carried in the
    /// verification result instead.
    Errored(E),
}

impl<U, E> Verdict<U, E> {
    /// Assemble a verdict from the classic `(err, user, info)`
    /// completion triple.
    ///
    /// Precedence is fixed: an error wins regardless of the other
    /// arguments, then a missing identity means rejection, otherwise
    /// success.
    #[must_use]
    pub fn from_completion(err: Option<E>, user: Option<U>, info: Option<String>) -> Self {
        if let Some(err) = err {
            return Verdict::Errored(err);
        }
        match user {
            Some(user) => Verdict::Authenticated { user, info },
            None => Verdict::Rejected { info },
        }
    }

    /// Map this verdict onto its terminal outcome.
    #[must_use]
    pub fn into_outcome(self) -> AuthOutcome<U, E> {
        match self {
            Verdict::Authenticated { user, info } => AuthOutcome::Success { user, info },
            Verdict::Rejected { info } => AuthOutcome::Fail { info, status: None },
            Verdict::Errored(err) => AuthOutcome::Error(err),
        }
    }
}

/// How a request-handling cycle concluded.
///
/// The strategy never renders HTTP itself; the host interprets the
/// outcome with whatever framework delivered the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome<U, E> {
    /// Phase A: send the browser to the identity provider.
    Redirect(String),
    /// Phase B succeeded and an identity was resolved.
    Success {
        /// The resolved identity.
        user: U,
        /// Optional detail from the verification callback.
        info: Option<String>,
    },
    /// Authentication failed: malformed callback (carries a status) or
    /// unresolved identity (no status).
    Fail {
        /// Optional failure detail.
        info: Option<String>,
        /// HTTP-equivalent status for protocol errors, e.g. 400.
        status: Option<StatusCode>,
    },
    /// An unexpected failure surfaced by the verification callback.
    Error(E),
}

impl<U, E> AuthOutcome<U, E> {
    /// Whether this is the redirect terminal.
    #[must_use]
    pub fn is_redirect(&self) -> bool {
        matches!(self, AuthOutcome::Redirect(_))
    }

    /// Whether this is the success terminal.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success { .. })
    }

    /// Whether this is the fail terminal.
    #[must_use]
    pub fn is_fail(&self) -> bool {
        matches!(self, AuthOutcome::Fail { .. })
    }
}
