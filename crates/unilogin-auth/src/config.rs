//! Relying-party configuration.

use secrecy::{ExposeSecret, SecretString};

use crate::error::UniloginError;

/// Immutable configuration for a UNI-Login relying party.
///
/// Validated once at construction; every later code path may assume the
/// three string fields are non-empty. The shared secret is held as a
/// [`SecretString`] so `Debug` output and tracing events never echo it.
///
/// `max_ticket_age` is the freshness window in seconds; `0` (the
/// default) disables freshness checking entirely.
#[derive(Debug, Clone)]
pub struct Config {
    identifier: String,
    shared_secret: SecretString,
    provider_base_url: String,
    max_ticket_age: u64,
}

impl Config {
    /// Create a configuration, rejecting missing or empty fields.
    ///
    /// # Errors
    ///
    /// Returns the [`UniloginError`] variant naming the first empty
    /// field, in declaration order.
    pub fn new(
        identifier: impl Into<String>,
        shared_secret: impl Into<String>,
        provider_base_url: impl Into<String>,
    ) -> Result<Self, UniloginError> {
        let identifier = identifier.into();
        let shared_secret = shared_secret.into();
        let provider_base_url = provider_base_url.into();

        if identifier.is_empty() {
            return Err(UniloginError::MissingIdentifier);
        }
        if shared_secret.is_empty() {
            return Err(UniloginError::MissingSharedSecret);
        }
        if provider_base_url.is_empty() {
            return Err(UniloginError::MissingProviderBaseUrl);
        }

        Ok(Self {
            identifier,
            shared_secret: SecretString::new(shared_secret),
            provider_base_url,
            max_ticket_age: 0,
        })
    }

    /// Set the maximum accepted ticket age in seconds.
    ///
    /// A value of `0` disables the freshness check; any value of `1` or
    /// more makes tickets whose age reaches the window (inclusive)
    /// stale.
    #[must_use]
    pub fn with_max_ticket_age(mut self, seconds: u64) -> Self {
        self.max_ticket_age = seconds;
        self
    }

    /// The relying-party identifier sent as `id` in the redirect URL.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The identity-provider endpoint the browser is redirected to.
    #[must_use]
    pub fn provider_base_url(&self) -> &str {
        &self.provider_base_url
    }

    /// The freshness window in seconds (`0` = disabled).
    #[must_use]
    pub fn max_ticket_age(&self) -> u64 {
        self.max_ticket_age
    }

    /// The shared signing secret. Crate-internal: the secret must not
    /// leave the signing paths.
    pub(crate) fn shared_secret(&self) -> &str {
        self.shared_secret.expose_secret()
    }
}
