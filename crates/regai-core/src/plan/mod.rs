//! Farm-plan request, response and rendering.
//!
//! ## Flow
//!
//! ```text
//! form fields ──► PlanRequest ──POST /generate-plan──► JSON envelope
//!                                                         │
//!                       ┌─────────── success: true ───────┤
//!                       ▼                                 ▼ success: false
//!             PlanReply::Ready { weather, plan }   PlanReply::Rejected { message }
//!                       │                                 │
//!        render_weather + format_plan              blocking alert
//!                       ▼
//!                  PlanResults
//! ```

mod form;
mod render;

pub use form::{
    PlanEndpoint, PlanForm, PlanResults, SubmitOutcome, BUSY_LABEL, IDLE_LABEL, PLAN_FAILURE_ALERT,
};
pub use render::{format_plan, js_number, render_weather, PlanTrust};

use serde::{Deserialize, Serialize};

use crate::error::{RegaiError, RegaiResult};

/// Form fields sent to the plan endpoint. Nothing is validated: empty
/// strings are forwarded as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub location: String,
    /// Farm size as typed by the farmer
    pub size: String,
    pub crops: String,
    pub soil_type: String,
    pub experience: String,
    pub goals: String,
}

/// Current conditions returned alongside a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    pub description: String,
    /// Rainfall over the last hour in mm, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<f64>,
}

/// Classified response of the plan endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanReply {
    Ready { weather: WeatherSummary, plan: String },
    Rejected { message: String },
}

/// Raw envelope as sent on the wire.
#[derive(Debug, Deserialize)]
struct PlanEnvelope {
    #[serde(default)]
    success: bool,
    weather: Option<WeatherSummary>,
    plan: Option<String>,
    error: Option<String>,
}

impl PlanReply {
    /// Decode and classify a response body by its `success` field.
    ///
    /// A successful envelope without `weather` or `plan` is a decode error;
    /// a missing `success` field counts as a failure.
    pub fn from_json(body: &str) -> RegaiResult<Self> {
        let envelope: PlanEnvelope = serde_json::from_str(body)?;
        match envelope {
            PlanEnvelope {
                success: true,
                weather: Some(weather),
                plan: Some(plan),
                ..
            } => Ok(PlanReply::Ready { weather, plan }),
            PlanEnvelope { success: true, .. } => Err(RegaiError::Decode(
                "successful plan response is missing weather or plan".to_string(),
            )),
            PlanEnvelope { success: false, error, .. } => Ok(PlanReply::Rejected {
                message: error.unwrap_or_else(|| "unknown error".to_string()),
            }),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PlanReply::Ready { .. })
    }
}
