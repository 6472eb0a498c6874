//! Identity provider boundary.
//!
//! The advisor never stores credentials itself. Registration, sign-in,
//! sign-out and session tracking are delegated to an [`IdentityProvider`]:
//!
//! - [`FirebaseIdentity`]: the hosted provider, over its REST API
//! - [`MemoryIdentity`]: in-process accounts for offline use and tests
//!
//! ## Example
//!
//! ```ignore
//! use regai_core::identity::{IdentityProvider, MemoryIdentity};
//!
//! let provider = MemoryIdentity::new();
//! let mut sessions = provider.subscribe();
//!
//! provider.register("farmer@example.com", "secret-123").await?;
//! let session = sessions.next().await;
//! ```

mod firebase;
mod memory;

pub use firebase::{FirebaseIdentity, FIREBASE_AUTH_BASE};
pub use memory::MemoryIdentity;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::session::{Session, SessionSubscription};

/// Prefix the hosted provider puts in front of every error message.
pub const PROVIDER_ERROR_PREFIX: &str = "Firebase: ";

/// Error reported by an identity provider, carrying its raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Error in the hosted provider's wording for an `auth/<code>` failure.
    pub fn from_code(code: &str) -> Self {
        Self::new(format!("{}Error (auth/{}).", PROVIDER_ERROR_PREFIX, code))
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AuthError {}

impl From<AuthError> for crate::RegaiError {
    fn from(err: AuthError) -> Self {
        crate::RegaiError::AuthFailure(crate::router::humanize_auth_error(&err.message))
    }
}

/// Session primitives of an external identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account and sign it in.
    async fn register(&self, email: &str, secret: &str) -> Result<Session, AuthError>;

    /// Sign in to an existing account.
    async fn sign_in(&self, email: &str, secret: &str) -> Result<Session, AuthError>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Observe session changes. The first notification carries the current
    /// session once the provider knows it.
    fn subscribe(&self) -> SessionSubscription;

    /// Last session the provider reported, if it has reported one.
    fn current(&self) -> Option<Session>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Shared handle, constructed once at startup.
pub type SharedIdentity = Arc<dyn IdentityProvider>;
