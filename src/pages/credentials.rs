//! Credential form: register or sign in with email and password.

use dioxus::prelude::*;
use regai_core::router::authenticate;
use regai_core::CredentialMode;

use super::NoticeBanner;
use crate::context::{use_identity, use_router};

#[component]
pub fn Credentials() -> Element {
    let identity = use_identity();
    let mut router = use_router();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let mode = router.read().mode();
    let notice = router.read().notice().cloned();

    let on_submit = move |_| {
        if busy() {
            return;
        }
        let identity = identity.clone();
        let (address, secret) = (email(), password());
        busy.set(true);

        spawn(async move {
            let outcome = authenticate(identity.as_ref(), mode, &address, &secret).await;
            busy.set(false);
            if let Some(t) = router.write().finish_credentials(mode, &outcome) {
                tracing::info!("{} -> {}", t.from.as_str(), t.to.as_str());
            }
        });
    };

    let toggle_mode = move |_| router.write().set_mode(mode.other());

    let go_back = move |_| {
        router.write().back();
    };

    let switch_prompt = match mode {
        CredentialMode::Register => "Already have an account?",
        CredentialMode::SignIn => "New to RegAI?",
    };

    rsx! {
        main { class: "auth-page",
            div { class: "auth-card",
                h2 { class: "section-header", "User Authentication" }
                p { class: "auth-lead", "Register or sign in to your account." }

                div { class: "form-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        placeholder: "farmer@example.com",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }

                div { class: "form-field",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }

                if let Some(notice) = notice {
                    NoticeBanner { notice }
                }

                button {
                    r#type: "button",
                    class: "btn-primary",
                    disabled: busy(),
                    onclick: on_submit,
                    if busy() { "Please wait..." } else { "{mode.title()}" }
                }

                p { class: "auth-switch",
                    "{switch_prompt} "
                    button {
                        r#type: "button",
                        class: "btn-link",
                        onclick: toggle_mode,
                        "{mode.other().title()}"
                    }
                }

                button {
                    r#type: "button",
                    class: "btn-secondary",
                    onclick: go_back,
                    "← Back"
                }
            }
        }
    }
}
