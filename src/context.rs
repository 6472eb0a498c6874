//! Shared services and state for the RegAI desktop app.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Services::from_settings(&launch_settings()));
//!
//! // In child components
//! let identity = use_identity();
//! let mut router = use_router();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use regai_core::{AdvisorClient, NamedView, PlanForm, SharedIdentity, ViewRouter};

pub use crate::{launch_settings, LaunchSettings};

/// Long-lived handles, built once at startup.
#[derive(Clone)]
pub struct Services {
    /// Identity provider; its session feed drives the view router
    pub identity: SharedIdentity,
    /// Advisor client, `None` when the configured endpoint is not a URL
    pub advisor: Option<Arc<AdvisorClient>>,
    pub plan_form: Arc<PlanForm>,
}

impl Services {
    pub fn from_settings(settings: &LaunchSettings) -> Self {
        let advisor = match AdvisorClient::new(&settings.config.endpoint) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::error!("Advisor endpoint unusable: {}", e);
                None
            }
        };
        tracing::debug!(data_dir = ?settings.data_dir, "Building services");
        Self {
            identity: settings.config.build_identity(),
            advisor,
            plan_form: Arc::new(PlanForm::new(settings.config.plan_trust)),
        }
    }
}

fn use_services() -> Services {
    use_context::<Services>()
}

pub fn use_identity() -> SharedIdentity {
    use_services().identity
}

pub fn use_advisor() -> Option<Arc<AdvisorClient>> {
    use_services().advisor
}

pub fn use_plan_form() -> Arc<PlanForm> {
    use_services().plan_form
}

/// Auth-gated view router state.
pub fn use_router() -> Signal<ViewRouter> {
    use_context::<Signal<ViewRouter>>()
}

/// Named view selected in the header.
pub fn use_named_view() -> Signal<NamedView> {
    use_context::<Signal<NamedView>>()
}
