//! Auth-gated view routing against both identity backends.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{FakeServer, Reply};
use regai_core::{
    AuthController, CredentialMode, FirebaseIdentity, IdentityProvider, MemoryIdentity,
    NoticeKind, View,
};
use serde_json::json;

#[tokio::test]
async fn test_register_sign_out_sign_in_cycle() {
    let provider = Arc::new(MemoryIdentity::new());
    let mut sessions = provider.subscribe();
    let mut auth = AuthController::new(provider.clone());

    assert_eq!(auth.view(), View::Loading);
    auth.settle(&mut sessions).await.unwrap();
    assert_eq!(auth.view(), View::Landing);

    auth.router_mut().open_credential_form().unwrap();
    assert_eq!(auth.view(), View::CredentialForm);

    let t = auth
        .submit_credentials("wanjiru@example.com", "shamba123")
        .await
        .unwrap();
    assert_eq!((t.from, t.to), (View::CredentialForm, View::Dashboard));
    let notice = auth.router().notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.text, "Registration successful! You are now signed in.");

    // The provider notification for the same sign-in keeps the dashboard.
    let session = sessions.next().await.unwrap();
    assert_eq!(session.email(), Some("wanjiru@example.com"));
    assert_eq!(auth.router_mut().on_session_change(&session).to, View::Dashboard);

    auth.sign_out().await.unwrap();
    assert_eq!(auth.view(), View::Landing);
    assert_eq!(auth.router().notice().unwrap().kind, NoticeKind::Info);

    auth.router_mut().open_credential_form().unwrap();
    auth.router_mut().set_mode(CredentialMode::SignIn);
    auth.submit_credentials("wanjiru@example.com", "shamba123")
        .await
        .unwrap();
    assert_eq!(auth.view(), View::Dashboard);
    assert_eq!(
        auth.router().notice().unwrap().text,
        "Sign-in successful! Welcome back."
    );
}

#[tokio::test]
async fn test_duplicate_registration_stays_on_form() {
    let provider = Arc::new(MemoryIdentity::new());
    provider.register("otieno@example.com", "kisumu99").await.unwrap();
    provider.sign_out().await.unwrap();

    let mut sessions = provider.subscribe();
    let mut auth = AuthController::new(provider.clone());
    auth.settle(&mut sessions).await.unwrap();
    auth.router_mut().open_credential_form().unwrap();

    let t = auth.submit_credentials("otieno@example.com", "kisumu99").await;
    assert!(t.is_none());
    assert_eq!(auth.view(), View::CredentialForm);
    let notice = auth.router().notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(
        notice.text,
        "Authentication failed: Error (auth/email-already-in-use)."
    );
}

#[tokio::test]
async fn test_unbooted_provider_keeps_loading() {
    let provider = Arc::new(MemoryIdentity::unbooted());
    let mut sessions = provider.subscribe();
    let mut auth = AuthController::new(provider.clone());

    let pending = tokio::time::timeout(Duration::from_millis(50), auth.settle(&mut sessions)).await;
    assert!(pending.is_err());
    assert_eq!(auth.view(), View::Loading);

    provider.boot();
    auth.settle(&mut sessions).await.unwrap();
    assert_eq!(auth.view(), View::Landing);
}

#[tokio::test]
async fn test_router_sees_every_transition_even_when_polled_late() {
    let provider = Arc::new(MemoryIdentity::new());
    let mut sessions = provider.subscribe();
    let mut auth = AuthController::new(provider.clone());
    auth.settle(&mut sessions).await.unwrap();

    // Sign in and out before the observer looks at its queue.
    provider.register("achieng@example.com", "mavuno21").await.unwrap();
    provider.sign_out().await.unwrap();

    let signed_in = sessions.next().await.unwrap();
    assert_eq!(signed_in.email(), Some("achieng@example.com"));
    assert_eq!(auth.router_mut().on_session_change(&signed_in).to, View::Dashboard);

    let signed_out = sessions.next().await.unwrap();
    assert!(!signed_out.is_signed_in());
    let t = auth.router_mut().on_session_change(&signed_out);
    assert_eq!((t.from, t.to), (View::Dashboard, View::Landing));
}

fn firebase_fake() -> FakeServer {
    FakeServer::start(|req| {
        let body = req.json();
        let email = body["email"].as_str().unwrap_or_default().to_string();
        if req.url.starts_with("/accounts:signUp?key=test-key") {
            if email == "taken@example.com" {
                return Reply::json(400, json!({"error": {"code": 400, "message": "EMAIL_EXISTS"}}));
            }
            Reply::json(
                200,
                json!({"localId": "uid-1", "email": email, "idToken": "token-1", "refreshToken": "r"}),
            )
        } else if req.url.starts_with("/accounts:signInWithPassword?key=test-key") {
            if body["password"] == "right-pass" {
                Reply::json(200, json!({"localId": "uid-1", "email": email, "idToken": "token-2"}))
            } else {
                Reply::json(
                    400,
                    json!({"error": {"code": 400, "message": "INVALID_LOGIN_CREDENTIALS"}}),
                )
            }
        } else {
            Reply::json(404, json!({"error": {"code": 404, "message": "NOT_FOUND"}}))
        }
    })
}

#[tokio::test]
async fn test_firebase_backend_routing() {
    let server = firebase_fake();
    let provider = Arc::new(FirebaseIdentity::with_base(&server.base, "test-key"));
    let mut sessions = provider.subscribe();
    let mut auth = AuthController::new(provider.clone());

    auth.settle(&mut sessions).await.unwrap();
    assert_eq!(auth.view(), View::Landing);
    auth.router_mut().open_credential_form().unwrap();

    assert!(auth.submit_credentials("taken@example.com", "secret1").await.is_none());
    assert_eq!(
        auth.router().notice().unwrap().text,
        "Authentication failed: Error (auth/email-already-in-use)."
    );

    auth.router_mut().set_mode(CredentialMode::SignIn);
    assert!(auth.submit_credentials("mwangi@example.com", "wrong").await.is_none());
    assert_eq!(
        auth.router().notice().unwrap().text,
        "Authentication failed: Error (auth/invalid-credential)."
    );

    auth.submit_credentials("mwangi@example.com", "right-pass")
        .await
        .unwrap();
    assert_eq!(auth.view(), View::Dashboard);
    assert_eq!(provider.id_token().as_deref(), Some("token-2"));
    assert_eq!(
        provider.current().unwrap().identity.unwrap().user_id.as_deref(),
        Some("uid-1")
    );

    let sent = server.seen();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[2].json()["returnSecureToken"], true);

    auth.sign_out().await.unwrap();
    assert_eq!(auth.view(), View::Landing);
    assert!(provider.id_token().is_none());
}
