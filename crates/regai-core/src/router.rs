//! Auth-gated view router.
//!
//! A small state machine over the mutually exclusive top-level views:
//!
//! ```text
//!            session(signed in)                 session(signed out)
//!   Loading ───────────────────► Dashboard ◄──┐  Loading ──────────► Landing
//!                                   │         │
//!                          sign-out │         │ credentials accepted
//!                                   ▼         │
//!                                Landing ──► CredentialForm
//!                                   ▲  open     │
//!                                   └───────────┘ back
//! ```
//!
//! Session notifications override the current view: signed in always lands
//! on `Dashboard`, signed out on `Landing`. Failed credential submissions and
//! failed sign-outs leave the view unchanged.

use std::sync::Arc;

use crate::identity::{AuthError, IdentityProvider, PROVIDER_ERROR_PREFIX};
use crate::session::{Session, SessionSubscription};

/// Top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// No session notification has arrived yet
    Loading,
    Landing,
    CredentialForm,
    Dashboard,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Loading => "loading",
            View::Landing => "landing",
            View::CredentialForm => "credentialForm",
            View::Dashboard => "dashboard",
        }
    }
}

/// Which half of the credential form is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialMode {
    #[default]
    Register,
    SignIn,
}

impl CredentialMode {
    pub fn title(&self) -> &'static str {
        match self {
            CredentialMode::Register => "Register",
            CredentialMode::SignIn => "Sign In",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            CredentialMode::Register => CredentialMode::SignIn,
            CredentialMode::SignIn => CredentialMode::Register,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// Inline message shown under the credential form or on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    fn new(text: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A view change that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: View,
    pub to: View,
}

/// Strip the provider prefix from a raw provider error.
pub fn humanize_auth_error(raw: &str) -> String {
    raw.strip_prefix(PROVIDER_ERROR_PREFIX).unwrap_or(raw).to_string()
}

/// View router state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRouter {
    view: View,
    mode: CredentialMode,
    notice: Option<Notice>,
    session: Option<Session>,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            view: View::Loading,
            mode: CredentialMode::default(),
            notice: None,
            session: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn mode(&self) -> CredentialMode {
        self.mode
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Last session observed from the provider.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn go(&mut self, to: View) -> Transition {
        let from = self.view;
        self.view = to;
        if from != to {
            tracing::debug!(from = from.as_str(), to = to.as_str(), "View transition");
        }
        Transition { from, to }
    }

    /// Apply a session notification from the provider.
    pub fn on_session_change(&mut self, session: &Session) -> Transition {
        self.session = Some(session.clone());
        if session.is_signed_in() {
            self.go(View::Dashboard)
        } else {
            self.go(View::Landing)
        }
    }

    /// Landing → CredentialForm.
    pub fn open_credential_form(&mut self) -> Option<Transition> {
        if self.view != View::Landing {
            return None;
        }
        self.notice = None;
        Some(self.go(View::CredentialForm))
    }

    /// CredentialForm → Landing.
    pub fn back(&mut self) -> Option<Transition> {
        if self.view != View::CredentialForm {
            return None;
        }
        Some(self.go(View::Landing))
    }

    /// Switch between the register and sign-in halves of the form.
    pub fn set_mode(&mut self, mode: CredentialMode) {
        self.mode = mode;
    }

    /// The provider accepted the submitted credentials.
    pub fn credentials_accepted(&mut self, mode: CredentialMode) -> Option<Transition> {
        if self.view != View::CredentialForm {
            return None;
        }
        let text = match mode {
            CredentialMode::Register => "Registration successful! You are now signed in.",
            CredentialMode::SignIn => "Sign-in successful! Welcome back.",
        };
        self.notice = Some(Notice::new(text, NoticeKind::Success));
        Some(self.go(View::Dashboard))
    }

    /// The provider refused the submitted credentials. The view does not change.
    pub fn credentials_rejected(&mut self, err: &AuthError) {
        self.notice = Some(Notice::new(
            format!("Authentication failed: {}", humanize_auth_error(&err.message)),
            NoticeKind::Error,
        ));
    }

    /// Apply the outcome of a credential submission.
    pub fn finish_credentials(
        &mut self,
        mode: CredentialMode,
        outcome: &Result<Session, AuthError>,
    ) -> Option<Transition> {
        match outcome {
            Ok(session) => {
                self.session = Some(session.clone());
                self.credentials_accepted(mode)
            }
            Err(err) => {
                self.credentials_rejected(err);
                None
            }
        }
    }

    /// Sign-out completed: Dashboard → Landing.
    pub fn signed_out(&mut self) -> Option<Transition> {
        if self.view != View::Dashboard {
            return None;
        }
        self.notice = Some(Notice::new("You have been signed out.", NoticeKind::Info));
        Some(self.go(View::Landing))
    }

    /// Sign-out failed; stay on the dashboard.
    pub fn sign_out_failed(&mut self, err: &AuthError) {
        tracing::warn!(error = %err, "Sign-out failed");
    }

    /// Apply the outcome of a sign-out call.
    pub fn finish_sign_out(&mut self, outcome: &Result<(), AuthError>) -> Option<Transition> {
        match outcome {
            Ok(()) => self.signed_out(),
            Err(err) => {
                self.sign_out_failed(err);
                None
            }
        }
    }
}

/// Call the provider primitive matching `mode`.
pub async fn authenticate(
    provider: &dyn IdentityProvider,
    mode: CredentialMode,
    email: &str,
    secret: &str,
) -> Result<Session, AuthError> {
    let outcome = match mode {
        CredentialMode::Register => provider.register(email, secret).await,
        CredentialMode::SignIn => provider.sign_in(email, secret).await,
    };
    match &outcome {
        Ok(_) => tracing::info!(provider = provider.name(), mode = mode.title(), "Authenticated"),
        Err(e) => tracing::error!(provider = provider.name(), error = %e, "Authentication error"),
    }
    outcome
}

/// Router bound to a provider, for callers without their own event loop.
pub struct AuthController {
    provider: Arc<dyn IdentityProvider>,
    router: ViewRouter,
}

impl AuthController {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            router: ViewRouter::new(),
        }
    }

    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut ViewRouter {
        &mut self.router
    }

    pub fn view(&self) -> View {
        self.router.view()
    }

    /// Wait for the provider's first notification and leave `Loading`.
    pub async fn settle(&mut self, sessions: &mut SessionSubscription) -> Option<Transition> {
        let session = sessions.next().await?;
        Some(self.router.on_session_change(&session))
    }

    /// Submit the credential form in its current mode.
    pub async fn submit_credentials(&mut self, email: &str, secret: &str) -> Option<Transition> {
        let mode = self.router.mode();
        let outcome = authenticate(self.provider.as_ref(), mode, email, secret).await;
        self.router.finish_credentials(mode, &outcome)
    }

    pub async fn sign_out(&mut self) -> Option<Transition> {
        let outcome = self.provider.sign_out().await;
        self.router.finish_sign_out(&outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Identity;

    fn signed_in() -> Session {
        Session::signed_in(Identity::new("farmer@example.com"))
    }

    #[test]
    fn test_starts_loading() {
        let router = ViewRouter::new();
        assert_eq!(router.view(), View::Loading);
        assert_eq!(router.mode(), CredentialMode::Register);
        assert!(router.notice().is_none());
    }

    #[test]
    fn test_first_notification_picks_view() {
        let mut router = ViewRouter::new();
        let t = router.on_session_change(&Session::signed_out());
        assert_eq!(t, Transition { from: View::Loading, to: View::Landing });

        let mut router = ViewRouter::new();
        let t = router.on_session_change(&signed_in());
        assert_eq!(t, Transition { from: View::Loading, to: View::Dashboard });
    }

    #[test]
    fn test_landing_credential_form_round_trip() {
        let mut router = ViewRouter::new();
        router.on_session_change(&Session::signed_out());

        assert!(router.open_credential_form().is_some());
        assert_eq!(router.view(), View::CredentialForm);
        assert!(router.open_credential_form().is_none());

        assert!(router.back().is_some());
        assert_eq!(router.view(), View::Landing);
        assert!(router.back().is_none());
    }

    #[test]
    fn test_user_actions_ignored_while_loading() {
        let mut router = ViewRouter::new();
        assert!(router.open_credential_form().is_none());
        assert!(router.signed_out().is_none());
        assert!(router.credentials_accepted(CredentialMode::SignIn).is_none());
        assert_eq!(router.view(), View::Loading);
    }

    #[test]
    fn test_rejected_credentials_keep_form() {
        let mut router = ViewRouter::new();
        router.on_session_change(&Session::signed_out());
        router.open_credential_form();

        let err = AuthError::from_code("invalid-credential");
        let t = router.finish_credentials(CredentialMode::SignIn, &Err(err));
        assert!(t.is_none());
        assert_eq!(router.view(), View::CredentialForm);

        let notice = router.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Authentication failed: Error (auth/invalid-credential).");
    }

    #[test]
    fn test_sign_out_failure_stays_on_dashboard() {
        let mut router = ViewRouter::new();
        router.on_session_change(&signed_in());
        let t = router.finish_sign_out(&Err(AuthError::new("offline")));
        assert!(t.is_none());
        assert_eq!(router.view(), View::Dashboard);
    }

    #[test]
    fn test_humanize_only_strips_leading_prefix() {
        assert_eq!(humanize_auth_error("Firebase: Error (auth/x)."), "Error (auth/x).");
        assert_eq!(humanize_auth_error("plain message"), "plain message");
        assert_eq!(humanize_auth_error("see Firebase: docs"), "see Firebase: docs");
    }

    #[test]
    fn test_mode_toggle() {
        let mut router = ViewRouter::new();
        router.set_mode(router.mode().other());
        assert_eq!(router.mode(), CredentialMode::SignIn);
        assert_eq!(router.mode().title(), "Sign In");
    }
}
