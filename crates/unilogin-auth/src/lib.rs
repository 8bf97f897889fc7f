//! Redirect-based UNI-Login SSO strategy for relying parties.
//!
//! This crate implements the two-phase UNI-Login handshake:
//! - **Phase A** — a request with no query parameters starts a session:
//!   the strategy signs a return URL and emits a redirect to the
//!   identity provider.
//! - **Phase B** — a request carrying the `auth`/`timestamp`/`user`
//!   triple is a callback: the strategy verifies the ticket's signature
//!   and freshness and hands the result to a host-supplied verifier,
//!   which resolves to one of the success / fail / error terminals.
//!
//! The protocol is stateless: nothing is stored between the phases, and
//! the configuration is safely shared across concurrent requests.
//!
//! # Example
//!
//! ```rust,ignore
//! use unilogin_auth::{
//!     AuthOutcome, AuthenticateOptions, Config, Ticket, UniloginStrategy, Verdict,
//!     VerificationResult, VerifyTicket,
//! };
//!
//! struct LookupVerifier { /* identity store handle */ }
//!
//! #[async_trait::async_trait]
//! impl VerifyTicket<MyRequest> for LookupVerifier {
//!     type User = Account;
//!     type Error = StoreError;
//!
//!     async fn verify(
//!         &self,
//!         failure: Option<VerificationResult>,
//!         _request: &MyRequest,
//!         ticket: &Ticket,
//!     ) -> Verdict<Account, StoreError> {
//!         if failure.is_some() {
//!             return Verdict::Rejected { info: Some("invalid ticket".into()) };
//!         }
//!         match self.lookup(&ticket.user).await {
//!             Ok(Some(account)) => Verdict::Authenticated { user: account, info: None },
//!             Ok(None) => Verdict::Rejected { info: Some("unknown user".into()) },
//!             Err(e) => Verdict::Errored(e),
//!         }
//!     }
//! }
//!
//! let config = Config::new("my-rp", "shared-secret", "https://sso.emu.dk/unilogin/login.cgi")?
//!     .with_max_ticket_age(60);
//! let strategy = UniloginStrategy::new(config, LookupVerifier::new());
//!
//! match strategy.authenticate(&request, &AuthenticateOptions::default()).await {
//!     AuthOutcome::Redirect(url) => redirect_browser(url),
//!     AuthOutcome::Success { user, .. } => establish_session(user),
//!     AuthOutcome::Fail { info, status } => reject(info, status),
//!     AuthOutcome::Error(e) => internal_error(e),
//! }
//! ```
//!
//! # Security
//!
//! The ticket signature scheme is keyed **MD5**, which is
//! cryptographically broken. It is retained solely for bit-for-bit wire
//! compatibility with the legacy UNI-Login protocol and must not be
//! relied on for anything else; substituting a stronger digest would
//! break interoperability with the provider. The shared secret is held
//! as a [`secrecy::SecretString`] and is never logged.

mod config;
mod error;
mod freshness;
mod outcome;
mod redirect;
mod request;
mod signature;
mod strategy;
mod ticket;

// Re-export public API
pub use config::Config;
pub use error::UniloginError;
pub use freshness::{FreshnessPolicy, TICKET_TIMESTAMP_FORMAT};
pub use outcome::{AuthOutcome, Verdict};
pub use redirect::login_redirect_url;
pub use request::{RequestParts, SsoRequest};
pub use signature::{md5_hex, sign_return_url, sign_ticket, verify_ticket_signature};
pub use strategy::{AuthenticateOptions, UniloginStrategy, VerifyTicket};
pub use ticket::{Ticket, TicketCheck, VerificationResult};
