//! Chat with the advisor endpoint.

use dioxus::prelude::*;

use crate::context::use_advisor;

#[derive(Clone, PartialEq)]
struct ChatLine {
    from_farmer: bool,
    text: String,
}

#[component]
pub fn Chatbot() -> Element {
    let advisor = use_advisor();

    let mut draft = use_signal(String::new);
    let mut lines: Signal<Vec<ChatLine>> = use_signal(Vec::new);
    let mut waiting = use_signal(|| false);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let send = move |_| {
        let message = draft().trim().to_string();
        if message.is_empty() || waiting() {
            return;
        }
        let Some(client) = advisor.clone() else {
            error.set(Some("No advisor endpoint is configured.".to_string()));
            return;
        };

        lines.write().push(ChatLine {
            from_farmer: true,
            text: message.clone(),
        });
        draft.set(String::new());
        error.set(None);
        waiting.set(true);

        spawn(async move {
            match client.chat(&message).await {
                Ok(reply) => lines.write().push(ChatLine {
                    from_farmer: false,
                    text: reply,
                }),
                Err(e) => {
                    tracing::error!("Chat request failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            waiting.set(false);
        });
    };

    rsx! {
        main { class: "chat-page",
            h2 { class: "section-header", "Ask the Advisor" }

            div { class: "chat-log",
                if lines.read().is_empty() {
                    p { class: "chat-empty",
                        "Ask about planting seasons, cover crops, or soil care."
                    }
                }
                for (i, line) in lines().into_iter().enumerate() {
                    div {
                        key: "{i}",
                        class: if line.from_farmer { "chat-line farmer" } else { "chat-line advisor" },
                        "{line.text}"
                    }
                }
                if waiting() {
                    div { class: "chat-line advisor pending", "…" }
                }
            }

            if let Some(err) = error() {
                p { class: "notice notice-error", "{err}" }
            }

            div { class: "chat-input",
                input {
                    r#type: "text",
                    placeholder: "Type your question",
                    value: "{draft}",
                    oninput: move |e| draft.set(e.value()),
                }
                button {
                    r#type: "button",
                    class: "btn-primary",
                    disabled: waiting(),
                    onclick: send,
                    "Send"
                }
            }
        }
    }
}
