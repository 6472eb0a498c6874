//! RegAI Core Library
//!
//! Client side of the regenerative agriculture advisor for Kenyan
//! smallholder farmers.
//!
//! ## Overview
//!
//! A farmer describes their farm (location, size, crops, soil, experience,
//! goals) and receives a generated regenerative plan together with current
//! weather. Access to the plan workspace is gated behind an account with an
//! external identity provider.
//!
//! - **Session**: who is signed in, published to any number of observers
//! - **Router**: which top-level view shows, driven by session changes and
//!   credential form outcomes
//! - **Plan**: request model, submission guard, and HTML rendering of the
//!   returned plan and weather
//! - **Client**: HTTP calls to the advisor endpoint
//!
//! ## Quick Start
//!
//! ```ignore
//! use regai_core::{AdvisorClient, PlanForm, PlanRequest, PlanTrust, SubmitOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AdvisorClient::new("http://localhost:5000")?;
//!     let form = PlanForm::new(PlanTrust::Escaped);
//!
//!     let request = PlanRequest {
//!         location: "Nairobi".into(),
//!         size: "2".into(),
//!         crops: "maize".into(),
//!         soil_type: "loamy".into(),
//!         experience: "beginner".into(),
//!         goals: "improve_soil".into(),
//!     };
//!
//!     match form.submit(&client, &request).await {
//!         SubmitOutcome::Rendered(results) => println!("{}", results.plan_html),
//!         SubmitOutcome::Failed { alert, .. } => eprintln!("{}", alert),
//!         SubmitOutcome::Ignored => {}
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod navigation;
pub mod plan;
pub mod router;
pub mod session;

// Re-exports
pub use client::{AdvisorClient, HealthReport};
pub use config::{default_data_dir, AdvisorConfig, IdentityConfig};
pub use error::{RegaiError, RegaiResult};
pub use identity::{
    AuthError, FirebaseIdentity, IdentityProvider, MemoryIdentity, SharedIdentity,
};
pub use navigation::NamedView;
pub use plan::{
    format_plan, render_weather, PlanEndpoint, PlanForm, PlanReply, PlanRequest, PlanResults,
    PlanTrust, SubmitOutcome, WeatherSummary, PLAN_FAILURE_ALERT,
};
pub use router::{
    humanize_auth_error, AuthController, CredentialMode, Notice, NoticeKind, Transition, View,
    ViewRouter,
};
pub use session::{Identity, Session, SessionFeed, SessionSubscription};
