//! Abstract view of the inbound request.
//!
//! The strategy never binds to a server framework. Hosts adapt whatever
//! request type their framework hands them; [`RequestParts`] is a plain
//! owned implementation for frameworkless hosts and tests.

use std::collections::HashMap;

/// Read-only request view consumed by the strategy.
///
/// Scheme, host and path are only consulted when no explicit return URL
/// is supplied to [`crate::UniloginStrategy::authenticate`].
pub trait SsoRequest {
    /// Look up a single query parameter by name.
    fn query_param(&self, name: &str) -> Option<&str>;

    /// Whether the request carries no query parameters at all.
    fn query_is_empty(&self) -> bool;

    /// The request scheme, e.g. `https`.
    fn scheme(&self) -> &str;

    /// The request host, e.g. `rp.example.dk`.
    fn host(&self) -> &str;

    /// The request path, e.g. `/login`.
    fn path(&self) -> &str;
}

/// Owned request parts for hosts without a framework adapter.
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    /// Request scheme.
    pub scheme: String,
    /// Request host.
    pub host: String,
    /// Request path.
    pub path: String,
    /// Query parameters.
    pub query: HashMap<String, String>,
}

impl SsoRequest for RequestParts {
    fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    fn query_is_empty(&self) -> bool {
        self.query.is_empty()
    }

    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn path(&self) -> &str {
        &self.path
    }
}
