//! Page components for RegAI.

mod account;
mod chatbot;
mod credentials;
mod landing;
mod stats;

pub use account::Account;
pub use chatbot::Chatbot;
pub use credentials::Credentials;
pub use landing::Landing;
pub use stats::StatsDashboard;

use dioxus::prelude::*;
use regai_core::{Notice, NoticeKind};

/// Inline notice banner shared by the auth pages.
#[component]
fn NoticeBanner(notice: Notice) -> Element {
    let class = match notice.kind {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Error => "notice notice-error",
        NoticeKind::Info => "notice notice-info",
    };
    rsx! {
        p { class: "{class}", role: "status", "{notice.text}" }
    }
}
