//! Plan form submission.
//!
//! At most one plan request is in flight per form. While one is pending,
//! further submissions are ignored rather than queued.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::{format_plan, render_weather, PlanReply, PlanRequest, PlanTrust};
use crate::error::RegaiResult;

/// Alert shown for any failed submission.
pub const PLAN_FAILURE_ALERT: &str =
    "Sorry, there was an error generating your plan. Please try again.";

pub const IDLE_LABEL: &str = "🧠 Generate My Regenerative Plan";
pub const BUSY_LABEL: &str = "🔄 Generating Plan...";

/// Anything that can answer a plan request.
#[async_trait]
pub trait PlanEndpoint: Send + Sync {
    async fn generate_plan(&self, request: &PlanRequest) -> RegaiResult<PlanReply>;
}

/// Rendered results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanResults {
    pub weather_html: String,
    pub plan_html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was still in flight; nothing was sent
    Ignored,
    /// Show the results panel
    Rendered(PlanResults),
    /// Show `alert`, keep the results panel hidden
    Failed { alert: String, reason: String },
}

/// Submission state of one plan form.
#[derive(Debug, Default)]
pub struct PlanForm {
    in_flight: AtomicBool,
    trust: PlanTrust,
}

/// Clears the in-flight flag on every exit path.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl PlanForm {
    pub fn new(trust: PlanTrust) -> Self {
        Self {
            in_flight: AtomicBool::new(false),
            trust,
        }
    }

    pub fn trust(&self) -> PlanTrust {
        self.trust
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit control label for a given submitting state.
    pub fn label_for(submitting: bool) -> &'static str {
        if submitting {
            BUSY_LABEL
        } else {
            IDLE_LABEL
        }
    }

    /// Submit control label.
    pub fn button_label(&self) -> &'static str {
        Self::label_for(self.is_submitting())
    }

    fn try_begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(&self.in_flight))
    }

    /// Send `request` and turn the reply into what the page shows.
    pub async fn submit(&self, endpoint: &dyn PlanEndpoint, request: &PlanRequest) -> SubmitOutcome {
        let Some(_in_flight) = self.try_begin() else {
            tracing::debug!("Plan submission ignored, request already in flight");
            return SubmitOutcome::Ignored;
        };

        tracing::info!(location = %request.location, crops = %request.crops, "Requesting plan");

        let reason = match endpoint.generate_plan(request).await {
            Ok(PlanReply::Ready { weather, plan }) => {
                return SubmitOutcome::Rendered(PlanResults {
                    weather_html: render_weather(&weather),
                    plan_html: format_plan(&plan, self.trust),
                });
            }
            Ok(PlanReply::Rejected { message }) => message,
            Err(e) => e.to_string(),
        };

        tracing::error!(error = %reason, "Plan request failed");
        SubmitOutcome::Failed {
            alert: PLAN_FAILURE_ALERT.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegaiError;
    use crate::plan::WeatherSummary;
    use std::sync::Arc;
    use tokio::sync::Notify;

    struct Fixed(PlanReply);

    #[async_trait]
    impl PlanEndpoint for Fixed {
        async fn generate_plan(&self, _request: &PlanRequest) -> RegaiResult<PlanReply> {
            Ok(self.0.clone())
        }
    }

    struct Broken;

    #[async_trait]
    impl PlanEndpoint for Broken {
        async fn generate_plan(&self, _request: &PlanRequest) -> RegaiResult<PlanReply> {
            Err(RegaiError::Decode("connection reset".into()))
        }
    }

    /// Holds every request until released.
    struct Gated {
        release: Arc<Notify>,
        reply: PlanReply,
    }

    #[async_trait]
    impl PlanEndpoint for Gated {
        async fn generate_plan(&self, _request: &PlanRequest) -> RegaiResult<PlanReply> {
            self.release.notified().await;
            Ok(self.reply.clone())
        }
    }

    fn ready() -> PlanReply {
        PlanReply::Ready {
            weather: WeatherSummary {
                temperature: 22.0,
                humidity: 65.0,
                description: "partly cloudy".into(),
                rainfall: None,
            },
            plan: "## Step 1\n**Till** soil".into(),
        }
    }

    #[tokio::test]
    async fn test_ready_renders_results() {
        let form = PlanForm::new(PlanTrust::Verbatim);
        match form.submit(&Fixed(ready()), &PlanRequest::default()).await {
            SubmitOutcome::Rendered(results) => {
                assert!(results.plan_html.contains("Step 1</h2>"));
                assert!(results.weather_html.contains("22°C"));
            }
            other => panic!("expected results, got {other:?}"),
        }
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_rejection_alerts() {
        let form = PlanForm::default();
        let reply = PlanReply::Rejected {
            message: "bad input".into(),
        };
        let outcome = form.submit(&Fixed(reply), &PlanRequest::default()).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                alert: PLAN_FAILURE_ALERT.into(),
                reason: "bad input".into()
            }
        );
        assert_eq!(form.button_label(), IDLE_LABEL);
    }

    #[tokio::test]
    async fn test_transport_error_alerts_and_releases() {
        let form = PlanForm::default();
        let outcome = form.submit(&Broken, &PlanRequest::default()).await;
        assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_second_submit_ignored_while_in_flight() {
        let form = Arc::new(PlanForm::default());
        let release = Arc::new(Notify::new());
        let endpoint = Arc::new(Gated {
            release: release.clone(),
            reply: ready(),
        });

        let first = {
            let form = form.clone();
            let endpoint = endpoint.clone();
            tokio::spawn(async move {
                form.submit(endpoint.as_ref(), &PlanRequest::default()).await
            })
        };

        while !form.is_submitting() {
            tokio::task::yield_now().await;
        }
        assert_eq!(form.button_label(), BUSY_LABEL);

        let second = form.submit(endpoint.as_ref(), &PlanRequest::default()).await;
        assert_eq!(second, SubmitOutcome::Ignored);

        release.notify_one();
        let first = first.await.unwrap();
        assert!(matches!(first, SubmitOutcome::Rendered(_)));
        assert!(!form.is_submitting());
        assert_eq!(form.button_label(), IDLE_LABEL);
    }
}
