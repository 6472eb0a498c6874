use dioxus::prelude::*;
use regai_core::{NamedView, View, ViewRouter};

use crate::components::NavHeader;
use crate::context::{launch_settings, use_router, Services};
use crate::pages::{Account, Chatbot, Credentials, Landing, StatsDashboard};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, services, and the two top-level selectors: the
/// named view picked in the header and the auth-gated view router.
#[component]
pub fn App() -> Element {
    let settings = use_hook(launch_settings);
    let services = use_hook(|| Services::from_settings(&settings));
    let mut router: Signal<ViewRouter> = use_signal(ViewRouter::new);
    let named: Signal<NamedView> = use_signal(|| settings.initial_view);

    use_context_provider(|| services.clone());
    use_context_provider(|| router);
    use_context_provider(|| named);

    // Drive the router from the provider's session feed
    use_future(move || {
        let identity = services.identity.clone();
        async move {
            let mut sessions = identity.subscribe();
            while let Some(session) = sessions.next().await {
                let transition = router.write().on_session_change(&session);
                tracing::info!(
                    signed_in = session.is_signed_in(),
                    "Session change: {} -> {}",
                    transition.from.as_str(),
                    transition.to.as_str()
                );
            }
            tracing::warn!("Session feed closed");
        }
    });

    let page = match named() {
        NamedView::Home => rsx! { AuthGate {} },
        NamedView::Dashboard => rsx! { StatsDashboard {} },
        NamedView::Chatbot => rsx! { Chatbot {} },
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-shell",
            NavHeader {}
            {page}
        }
    }
}

/// Exactly one of the router's views.
#[component]
fn AuthGate() -> Element {
    let router = use_router();
    let view = router.read().view();

    match view {
        View::Loading => rsx! {
            div { class: "loading-placeholder",
                div { class: "spinner" }
                p { "Loading..." }
            }
        },
        View::Landing => rsx! { Landing {} },
        View::CredentialForm => rsx! { Credentials {} },
        View::Dashboard => rsx! { Account {} },
    }
}
