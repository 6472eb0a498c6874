//! In-process identity provider.
//!
//! Accounts live only as long as the provider. Passwords are kept as
//! SHA-256 digests. Validation and error wording follow the hosted provider
//! so the UI behaves the same against either backend.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};

use super::{AuthError, IdentityProvider, PROVIDER_ERROR_PREFIX};
use crate::session::{Identity, Session, SessionFeed, SessionSubscription};

/// Minimum password length accepted by the hosted provider.
const MIN_SECRET_LEN: usize = 6;

struct Account {
    user_id: String,
    secret_digest: String,
}

/// Identity provider backed by an in-memory account table.
pub struct MemoryIdentity {
    accounts: Mutex<HashMap<String, Account>>,
    feed: SessionFeed,
}

impl Default for MemoryIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryIdentity {
    /// Create a provider with no accounts. A signed-out session is published
    /// immediately.
    pub fn new() -> Self {
        let provider = Self::unbooted();
        provider.feed.publish(Session::signed_out());
        provider
    }

    /// Create a provider that has not reported any session yet.
    ///
    /// Observers stay in their loading state until [`MemoryIdentity::boot`].
    pub fn unbooted() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            feed: SessionFeed::new(),
        }
    }

    /// Report the initial signed-out session.
    pub fn boot(&self) {
        if self.feed.current().is_none() {
            self.feed.publish(Session::signed_out());
        }
    }

    /// Number of registered accounts.
    pub fn account_count(&self) -> usize {
        self.accounts.lock().len()
    }

    fn digest(secret: &str) -> String {
        hex::encode(Sha256::digest(secret.as_bytes()))
    }

    fn normalize(email: &str) -> String {
        email.trim().to_lowercase()
    }

    fn check_email(email: &str) -> Result<(), AuthError> {
        let valid = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
            None => false,
        };
        if valid {
            Ok(())
        } else {
            Err(AuthError::from_code("invalid-email"))
        }
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentity {
    async fn register(&self, email: &str, secret: &str) -> Result<Session, AuthError> {
        let email = Self::normalize(email);
        Self::check_email(&email)?;
        if secret.is_empty() {
            return Err(AuthError::from_code("missing-password"));
        }
        if secret.chars().count() < MIN_SECRET_LEN {
            return Err(AuthError::new(format!(
                "{}Password should be at least {} characters (auth/weak-password).",
                PROVIDER_ERROR_PREFIX, MIN_SECRET_LEN
            )));
        }

        let user_id = {
            let mut accounts = self.accounts.lock();
            if accounts.contains_key(&email) {
                return Err(AuthError::from_code("email-already-in-use"));
            }
            let user_id = format!("mem-{:04}", accounts.len() + 1);
            accounts.insert(
                email.clone(),
                Account {
                    user_id: user_id.clone(),
                    secret_digest: Self::digest(secret),
                },
            );
            user_id
        };

        tracing::info!(provider = "memory", "Registered account");
        let session = Session::signed_in(Identity::new(email).with_user_id(user_id));
        self.feed.publish(session.clone());
        Ok(session)
    }

    async fn sign_in(&self, email: &str, secret: &str) -> Result<Session, AuthError> {
        let email = Self::normalize(email);
        Self::check_email(&email)?;
        if secret.is_empty() {
            return Err(AuthError::from_code("missing-password"));
        }

        let user_id = {
            let accounts = self.accounts.lock();
            match accounts.get(&email) {
                Some(account) if account.secret_digest == Self::digest(secret) => {
                    account.user_id.clone()
                }
                _ => return Err(AuthError::from_code("invalid-credential")),
            }
        };

        let session = Session::signed_in(Identity::new(email).with_user_id(user_id));
        self.feed.publish(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
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
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_register_signs_in() {
        let provider = MemoryIdentity::new();
        let session = provider.register("Farmer@Example.com", "secret-1").await.unwrap();
        assert!(session.is_signed_in());
        assert_eq!(session.email(), Some("farmer@example.com"));
        assert_eq!(provider.current(), Some(session));
    }

    #[tokio::test]
    async fn test_register_twice_is_rejected() {
        let provider = MemoryIdentity::new();
        provider.register("a@b.co", "secret-1").await.unwrap();
        let err = provider.register("a@b.co", "secret-2").await.unwrap_err();
        assert_eq!(err.message, "Firebase: Error (auth/email-already-in-use).");
        assert_eq!(provider.account_count(), 1);
    }

    #[tokio::test]
    async fn test_weak_and_missing_passwords() {
        let provider = MemoryIdentity::new();
        let weak = provider.register("a@b.co", "123").await.unwrap_err();
        assert_eq!(
            weak.message,
            "Firebase: Password should be at least 6 characters (auth/weak-password)."
        );
        assert_eq!(
            crate::router::humanize_auth_error(&weak.message),
            "Password should be at least 6 characters (auth/weak-password)."
        );
        let missing = provider.register("a@b.co", "").await.unwrap_err();
        assert!(missing.message.contains("auth/missing-password"));
    }

    #[tokio::test]
    async fn test_invalid_email() {
        let provider = MemoryIdentity::new();
        for email in ["", "no-at-sign", "@example.com", "user@nodot", "user@trailing."] {
            let err = provider.register(email, "secret-1").await.unwrap_err();
            assert!(err.message.contains("auth/invalid-email"), "{email}");
        }
    }

    #[tokio::test]
    async fn test_sign_in_wrong_secret() {
        let provider = MemoryIdentity::new();
        provider.register("a@b.co", "secret-1").await.unwrap();
        provider.sign_out().await.unwrap();

        let err = provider.sign_in("a@b.co", "secret-2").await.unwrap_err();
        assert!(err.message.contains("auth/invalid-credential"));
        assert!(!provider.current().unwrap().is_signed_in());

        let ok = provider.sign_in("A@B.CO", "secret-1").await.unwrap();
        assert_eq!(ok.identity.unwrap().user_id.as_deref(), Some("mem-0001"));
    }

    #[tokio::test]
    async fn test_unbooted_reports_nothing_until_boot() {
        let provider = MemoryIdentity::unbooted();
        assert_eq!(provider.current(), None);
        provider.boot();
        assert_eq!(provider.current(), Some(Session::signed_out()));
    }
}
