//! Phase-A redirect URL construction.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::config::Config;
use crate::signature;

/// Build the identity-provider redirect target for a return URL.
///
/// The wire format is fixed and must be reproduced byte-for-byte,
/// including field order and the provider's `returURL` spelling:
///
/// ```text
/// <base>?id=<identifier>&returURL=<returnURL>&path=<base64(returnURL) percent-encoded>&auth=<md5(returnURL+secret)>
/// ```
///
/// `returURL` itself is deliberately not percent-encoded; only the
/// base64 `path` field is, matching what the provider parses.
#[must_use]
pub fn login_redirect_url(config: &Config, return_url: &str) -> String {
    let auth = signature::sign_return_url(return_url, config.shared_secret());
    let path = urlencoding::encode(&STANDARD.encode(return_url.as_bytes())).into_owned();

    format!(
        "{}?id={}&returURL={}&path={}&auth={}",
        config.provider_base_url(),
        config.identifier(),
        return_url,
        path,
        auth
    )
}
