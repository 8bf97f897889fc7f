//! End-to-end handshake flow against the provider's recorded wire
//! vectors.

use async_trait::async_trait;
use chrono::Utc;
use http::StatusCode;
use unilogin_auth::{
    AuthOutcome, AuthenticateOptions, Config, RequestParts, Ticket, UniloginStrategy, Verdict,
    VerificationResult, VerifyTicket, TICKET_TIMESTAMP_FORMAT,
};

/// Verifier that captures the failure object it was handed and resolves
/// like a host application consulting an identity store.
struct CapturingVerifier {
    known_user: &'static str,
}

#[async_trait]
impl VerifyTicket<RequestParts> for CapturingVerifier {
    type User = String;
    type Error = String;

    async fn verify(
        &self,
        failure: Option<VerificationResult>,
        _request: &RequestParts,
        ticket: &Ticket,
    ) -> Verdict<Self::User, Self::Error> {
        if let Some(failure) = failure {
            let detail = failure
                .signature
                .message
                .or(failure.freshness.message)
                .unwrap_or_default();
            return Verdict::Rejected { info: Some(detail) };
        }
        if ticket.user == self.known_user {
            Verdict::Authenticated {
                user: ticket.user.clone(),
                info: None,
            }
        } else {
            Verdict::Rejected {
                info: Some("unknown user".to_string()),
            }
        }
    }
}

fn strategy(max_ticket_age: u64) -> UniloginStrategy<CapturingVerifier> {
    let config = Config::new("test", "secret", "path_to_unilogin")
        .unwrap()
        .with_max_ticket_age(max_ticket_age);
    UniloginStrategy::new(config, CapturingVerifier { known_user: "some_user" })
}

fn callback(auth: &str, timestamp: &str, user: &str) -> RequestParts {
    let mut request = RequestParts::default();
    request.query.insert("auth".to_string(), auth.to_string());
    request
        .query
        .insert("timestamp".to_string(), timestamp.to_string());
    request.query.insert("user".to_string(), user.to_string());
    request
}

#[tokio::test]
async fn initiation_emits_recorded_redirect_url() {
    let outcome = strategy(0)
        .authenticate(
            &RequestParts::default(),
            &AuthenticateOptions::with_return_url("http://some.dummy.url"),
        )
        .await;

    let AuthOutcome::Redirect(url) = outcome else {
        panic!("expected redirect, got {outcome:?}");
    };
    assert_eq!(
        url,
        "path_to_unilogin?id=test&returURL=http://some.dummy.url\
         &path=aHR0cDovL3NvbWUuZHVtbXkudXJs&auth=666f00db6b378a1455c6d153cb4bfe13"
    );
}

#[tokio::test]
async fn recorded_ticket_vector_authenticates() {
    // md5("0" + "secret" + "some_user"), as issued by the provider.
    let outcome = strategy(0)
        .authenticate(
            &callback("31b166f19998267a16da4b3d76228ffc", "0", "some_user"),
            &AuthenticateOptions::default(),
        )
        .await;

    assert_eq!(
        outcome,
        AuthOutcome::Success {
            user: "some_user".to_string(),
            info: None,
        }
    );
}

#[tokio::test]
async fn forged_signature_is_rejected_with_mismatch_detail() {
    let outcome = strategy(0)
        .authenticate(
            &callback("random", "0", "some_user"),
            &AuthenticateOptions::default(),
        )
        .await;

    assert_eq!(
        outcome,
        AuthOutcome::Fail {
            info: Some("Auth/token calculation mismatch".to_string()),
            status: None,
        }
    );
}

#[tokio::test]
async fn fresh_ticket_within_window_authenticates() {
    let timestamp = Utc::now().format(TICKET_TIMESTAMP_FORMAT).to_string();
    let auth = unilogin_auth::sign_ticket(&timestamp, "secret", "some_user");

    let outcome = strategy(30)
        .authenticate(
            &callback(&auth, &timestamp, "some_user"),
            &AuthenticateOptions::default(),
        )
        .await;

    assert!(outcome.is_success(), "got {outcome:?}");
}

#[tokio::test]
async fn stale_ticket_is_rejected_with_age_detail() {
    // Correctly signed, but issued at the epoch.
    let auth = unilogin_auth::sign_ticket("19700101000000", "secret", "some_user");

    let outcome = strategy(1)
        .authenticate(
            &callback(&auth, "19700101000000", "some_user"),
            &AuthenticateOptions::default(),
        )
        .await;

    assert_eq!(
        outcome,
        AuthOutcome::Fail {
            info: Some(
                "Ticket timestamp has exceeded the value defined in maxTicketAge (1)".to_string()
            ),
            status: None,
        }
    );
}

#[tokio::test]
async fn incomplete_callback_is_a_bad_request() {
    let mut request = callback("hash", "19700101000000", "some_user");
    request.query.remove("timestamp");

    let outcome = strategy(0)
        .authenticate(&request, &AuthenticateOptions::default())
        .await;

    assert_eq!(
        outcome,
        AuthOutcome::Fail {
            info: Some("Bad request".to_string()),
            status: Some(StatusCode::BAD_REQUEST),
        }
    );
}
