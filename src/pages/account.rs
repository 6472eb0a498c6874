//! Signed-in dashboard: greeting, sign-out, and the plan workspace.

use dioxus::prelude::*;

use super::NoticeBanner;
use crate::components::PlanFormPanel;
use crate::context::{use_identity, use_router};

#[component]
pub fn Account() -> Element {
    let identity = use_identity();
    let mut router = use_router();
    let mut signing_out = use_signal(|| false);

    let email = router
        .read()
        .session()
        .and_then(|s| s.email())
        .unwrap_or("farmer")
        .to_string();
    let notice = router.read().notice().cloned();

    let sign_out = move |_| {
        if signing_out() {
            return;
        }
        let identity = identity.clone();
        signing_out.set(true);

        spawn(async move {
            let outcome = identity.sign_out().await;
            signing_out.set(false);
            if let Some(t) = router.write().finish_sign_out(&outcome) {
                tracing::info!("{} -> {}", t.from.as_str(), t.to.as_str());
            }
        });
    };

    rsx! {
        main { class: "account-page",
            div { class: "account-header",
                div {
                    h2 { class: "section-header", "Hello, {email}!" }
                    p { class: "auth-lead", "Welcome! You are logged in." }
                }
                button {
                    r#type: "button",
                    class: "btn-secondary",
                    disabled: signing_out(),
                    onclick: sign_out,
                    "Log Out"
                }
            }

            if let Some(notice) = notice {
                NoticeBanner { notice }
            }

            PlanFormPanel {}
        }
    }
}
