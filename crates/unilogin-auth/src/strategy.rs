//! The authentication state machine.
//!
//! Each inbound request is routed to exactly one of two protocol phases
//! from the shape of its query string alone; no session state survives
//! between phases. Phase A signs a return URL and redirects to the
//! identity provider; phase B verifies the returned ticket and defers
//! the success/fail/error decision to the host's verifier.

use async_trait::async_trait;
use http::StatusCode;
use tracing::{debug, warn};

use crate::config::Config;
use crate::freshness::FreshnessPolicy;
use crate::outcome::{AuthOutcome, Verdict};
use crate::redirect;
use crate::request::SsoRequest;
use crate::signature;
use crate::ticket::{Ticket, VerificationResult};

/// Per-call options for [`UniloginStrategy::authenticate`].
#[derive(Debug, Clone, Default)]
pub struct AuthenticateOptions {
    /// Explicit return URL for phase A. When absent, the return URL is
    /// synthesized from the request's scheme, host and path.
    pub return_url: Option<String>,
}

impl AuthenticateOptions {
    /// Options carrying an explicit return URL.
    #[must_use]
    pub fn with_return_url(url: impl Into<String>) -> Self {
        Self {
            return_url: Some(url.into()),
        }
    }
}

/// Host-supplied verification callback.
///
/// Invoked once per callback request with the combined verification
/// outcome (`None` only when both the signature and freshness checks
/// passed), the original request, and the reconstructed ticket. The
/// implementation performs any identity lookup and resolves with a
/// [`Verdict`]; the strategy does not interpret anything else.
#[async_trait]
pub trait VerifyTicket<R: SsoRequest + Sync>: Send + Sync {
    /// The identity type resolved on success.
    type User: Send;
    /// The unexpected-failure type routed to the error terminal.
    type Error: Send;

    /// Consult the verification outcome and decide the terminal.
    async fn verify(
        &self,
        failure: Option<VerificationResult>,
        request: &R,
        ticket: &Ticket,
    ) -> Verdict<Self::User, Self::Error>;
}

/// Redirect-based UNI-Login SSO strategy for a relying party.
///
/// Stateless and safely shared across concurrent requests: the
/// configuration is read-only and nothing outlives a single
/// [`authenticate`](Self::authenticate) call.
#[derive(Debug, Clone)]
pub struct UniloginStrategy<V> {
    config: Config,
    policy: FreshnessPolicy,
    verifier: V,
}

impl<V> UniloginStrategy<V> {
    /// Create a strategy from a validated configuration and a verifier.
    pub fn new(config: Config, verifier: V) -> Self {
        let policy = FreshnessPolicy::new(config.max_ticket_age());
        Self {
            config,
            policy,
            verifier,
        }
    }

    /// The strategy's configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle one inbound request.
    ///
    /// - no query parameters → phase A: redirect to the identity
    ///   provider with a freshly signed return URL;
    /// - query contains the full `auth`/`timestamp`/`user` triple →
    ///   phase B: verify the ticket and route through the verifier;
    /// - anything else → fail with HTTP-equivalent status 400, no
    ///   partial verification attempted.
    pub async fn authenticate<R>(
        &self,
        request: &R,
        options: &AuthenticateOptions,
    ) -> AuthOutcome<V::User, V::Error>
    where
        R: SsoRequest + Sync,
        V: VerifyTicket<R>,
    {
        if request.query_is_empty() {
            return AuthOutcome::Redirect(self.initiate_session(request, options));
        }

        match Ticket::from_request(request) {
            Some(ticket) => self.verify_callback(request, ticket).await,
            None => {
                warn!("callback query present but missing one of 'auth', 'timestamp', 'user'");
                AuthOutcome::Fail {
                    info: Some("Bad request".to_string()),
                    status: Some(StatusCode::BAD_REQUEST),
                }
            }
        }
    }

    /// Phase A: build the signed redirect target.
    fn initiate_session<R: SsoRequest>(
        &self,
        request: &R,
        options: &AuthenticateOptions,
    ) -> String {
        let return_url = options.return_url.clone().unwrap_or_else(|| {
            // Plain concatenation, no separator inserted: the provider
            // wire format expects scheme://host<path> verbatim.
            format!("{}://{}{}", request.scheme(), request.host(), request.path())
        });

        debug!(return_url = %return_url, "initiating UNI-Login session");
        redirect::login_redirect_url(&self.config, &return_url)
    }

    /// Phase B: verify the returned ticket and hand off to the verifier.
    async fn verify_callback<R>(&self, request: &R, ticket: Ticket) -> AuthOutcome<V::User, V::Error>
    where
        R: SsoRequest + Sync,
        V: VerifyTicket<R>,
    {
        let result = VerificationResult {
            signature: signature::check_ticket(&ticket, self.config.shared_secret()),
            freshness: self.policy.check(&ticket.timestamp),
        };

        debug!(
            user = %ticket.user,
            signature_valid = result.signature.valid,
            freshness_valid = result.freshness.valid,
            "verified callback ticket"
        );

        let verdict = self
            .verifier
            .verify(result.into_failure(), request, &ticket)
            .await;

        verdict.into_outcome()
    }
}
