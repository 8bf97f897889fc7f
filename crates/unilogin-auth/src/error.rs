//! Error types for the UNI-Login strategy.
//!
//! Configuration problems are the only fatal errors in this crate:
//! signature mismatches and stale tickets are normal protocol outcomes
//! and travel through [`crate::VerificationResult`] instead.

use thiserror::Error;

/// Errors raised while constructing a strategy.
///
/// Each variant names the configuration field that was missing or empty,
/// so callers can surface an actionable message. Once construction
/// succeeds the configuration is immutable and none of these can occur
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniloginError {
    /// The relying-party identifier was missing or empty.
    #[error("configuration requires a non-empty 'identifier'")]
    MissingIdentifier,

    /// The shared signing secret was missing or empty.
    #[error("configuration requires a non-empty 'shared_secret'")]
    MissingSharedSecret,

    /// The identity-provider base URL was missing or empty.
    #[error("configuration requires a non-empty 'provider_base_url'")]
    MissingProviderBaseUrl,
}
