//! Hosted identity provider over the Identity Toolkit REST API.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::{AuthError, IdentityProvider, PROVIDER_ERROR_PREFIX};
use crate::session::{Identity, Session, SessionFeed, SessionSubscription};

/// Production REST base.
pub const FIREBASE_AUTH_BASE: &str = "https://identitytoolkit.googleapis.com/v1";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    email: String,
    id_token: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map a REST error code to the client SDK's `auth/<code>` wording.
///
/// Codes may carry a detail after `" : "`, e.g.
/// `WEAK_PASSWORD : Password should be at least 6 characters`.
pub(crate) fn map_rest_error(raw: &str) -> AuthError {
    let (code, detail) = match raw.split_once(" : ") {
        Some((code, detail)) => (code.trim(), Some(detail.trim())),
        None => (raw.trim(), None),
    };
    let sdk_code = match code {
        "EMAIL_EXISTS" => "email-already-in-use",
        "INVALID_EMAIL" => "invalid-email",
        "WEAK_PASSWORD" => "weak-password",
        "MISSING_PASSWORD" => "missing-password",
        "INVALID_LOGIN_CREDENTIALS" | "INVALID_PASSWORD" | "EMAIL_NOT_FOUND" => {
            "invalid-credential"
        }
        "USER_DISABLED" => "user-disabled",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "too-many-requests",
        "OPERATION_NOT_ALLOWED" => "operation-not-allowed",
        "INVALID_API_KEY" | "API_KEY_INVALID" => "invalid-api-key",
        _ => "internal-error",
    };
    match detail {
        Some(detail) => AuthError::new(format!(
            "{}{} (auth/{}).",
            PROVIDER_ERROR_PREFIX, detail, sdk_code
        )),
        None => AuthError::from_code(sdk_code),
    }
}

/// Identity provider talking to the hosted auth service.
pub struct FirebaseIdentity {
    http: reqwest::Client,
    base: String,
    api_key: String,
    id_token: Mutex<Option<String>>,
    feed: SessionFeed,
}

impl FirebaseIdentity {
    /// Create a provider against the production service.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base(FIREBASE_AUTH_BASE, api_key)
    }

    /// Create a provider against a custom REST base (emulator, tests).
    ///
    /// No session is persisted between runs, so a signed-out session is
    /// published right away.
    pub fn with_base(base: impl Into<String>, api_key: impl Into<String>) -> Self {
        let provider = Self {
            http: reqwest::Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            id_token: Mutex::new(None),
            feed: SessionFeed::new(),
        };
        provider.feed.publish(Session::signed_out());
        provider
    }

    /// ID token of the signed-in account, for calls that need one.
    pub fn id_token(&self) -> Option<String> {
        self.id_token.lock().clone()
    }

    async fn password_call(
        &self,
        endpoint: &str,
        email: &str,
        secret: &str,
    ) -> Result<Session, AuthError> {
        let url = format!("{}/accounts:{}", self.base, endpoint);
        let body = PasswordRequest {
            email,
            password: secret,
            return_secure_token: true,
        };

        let resp = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, endpoint, "Identity request failed");
                AuthError::from_code("network-request-failed")
            })?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|_| AuthError::from_code("network-request-failed"))?;

        if !status.is_success() {
            let err = match serde_json::from_str::<ErrorEnvelope>(&text) {
                Ok(envelope) => map_rest_error(&envelope.error.message),
                Err(_) => AuthError::from_code("internal-error"),
            };
            tracing::debug!(%status, error = %err, endpoint, "Identity provider refused");
            return Err(err);
        }

        let account: AccountResponse =
            serde_json::from_str(&text).map_err(|_| AuthError::from_code("internal-error"))?;

        *self.id_token.lock() = Some(account.id_token);

        let session = Session::signed_in(Identity::new(account.email).with_user_id(account.local_id));
        self.feed.publish(session.clone());
        Ok(session)
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentity {
    async fn register(&self, email: &str, secret: &str) -> Result<Session, AuthError> {
        self.password_call("signUp", email, secret).await
    }

    async fn sign_in(&self, email: &str, secret: &str) -> Result<Session, AuthError> {
        self.password_call("signInWithPassword", email, secret).await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.id_token.lock().take();
        self.feed.publish(Session::signed_out());
        Ok(())
    }

    fn subscribe(&self) -> SessionSubscription {
        self.feed.subscribe()
    }

    fn current(&self) -> Option<Session> {
        self.feed.current()
    }

    fn name(&self) -> &'static str {
        "firebase"
    }
}
