//! Navigation header
//!
//! Brand on the left, one button per named view on the right. The
//! selected view lives in a context signal, so switching pages never
//! touches the auth-gated router.

use dioxus::prelude::*;
use regai_core::NamedView;

use crate::context::use_named_view;

#[component]
pub fn NavHeader() -> Element {
    let mut named = use_named_view();

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                div { class: "nav-title",
                    span { class: "brand-mark", "🌱" }
                    h1 { class: "app-title", "RegAI" }
                }

                nav { class: "nav-links",
                    for view in NamedView::all().iter().copied() {
                        button {
                            key: "{view.name()}",
                            r#type: "button",
                            class: if named() == view { "nav-link active" } else { "nav-link" },
                            onclick: move |_| {
                                tracing::debug!("Navigate to {}", view.fragment());
                                named.set(view);
                            },
                            "{view.label()}"
                        }
                    }
                }
            }
        }
    }
}
