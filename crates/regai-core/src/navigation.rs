//! Named views selected by a URL fragment.
//!
//! The fragment is read once at startup; later in-app navigation does not
//! write it back.

use std::fmt;

/// Top-level pages reachable by fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NamedView {
    #[default]
    Home,
    Dashboard,
    Chatbot,
}

impl NamedView {
    pub fn all() -> &'static [NamedView] {
        &[NamedView::Home, NamedView::Dashboard, NamedView::Chatbot]
    }

    pub fn name(&self) -> &'static str {
        match self {
            NamedView::Home => "home",
            NamedView::Dashboard => "dashboard",
            NamedView::Chatbot => "chatbot",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NamedView::Home => "Home",
            NamedView::Dashboard => "Dashboard",
            NamedView::Chatbot => "Chat Bot",
        }
    }

    /// `#name` form.
    pub fn fragment(&self) -> String {
        format!("#{}", self.name())
    }

    /// Resolve a fragment (`#dashboard` or `dashboard`). Anything unknown,
    /// empty or absent falls back to `Home`.
    pub fn from_fragment(fragment: Option<&str>) -> Self {
        let name = match fragment {
            Some(f) => f.strip_prefix('#').unwrap_or(f),
            None => return NamedView::Home,
        };
        Self::all()
            .iter()
            .copied()
            .find(|v| v.name() == name)
            .unwrap_or(NamedView::Home)
    }

    /// Resolve the fragment part of a full URL, if it has one.
    pub fn from_url(url: &str) -> Self {
        Self::from_fragment(url.split_once('#').map(|(_, frag)| frag))
    }
}

impl fmt::Display for NamedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
