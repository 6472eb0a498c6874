//! Plan request form and results panel.
//!
//! Six fields are read as-is on submit and forwarded without validation.
//! While a request is outstanding the submit button is disabled and shows
//! the busy label. A failed request raises a native alert and leaves the
//! results panel hidden.

use dioxus::prelude::*;
use regai_core::catalog::{self, CROPS, EXPERIENCE_LEVELS, GOALS, SOILS};
use regai_core::{PlanForm, PlanRequest, PlanResults, SubmitOutcome, PLAN_FAILURE_ALERT};

use crate::context::{use_advisor, use_plan_form};

#[component]
pub fn PlanFormPanel() -> Element {
    let advisor = use_advisor();
    let form = use_plan_form();

    let mut location = use_signal(String::new);
    let mut size = use_signal(String::new);
    let mut crops = use_signal(|| "maize".to_string());
    let mut soil = use_signal(|| "loamy".to_string());
    let mut experience = use_signal(|| "beginner".to_string());
    let mut goals = use_signal(|| "improve_soil".to_string());

    let mut submitting = use_signal(|| false);
    let mut results: Signal<Option<PlanResults>> = use_signal(|| None);

    let counties = use_hook(catalog::counties);

    let on_submit = move |_| {
        if submitting() {
            return;
        }
        let request = PlanRequest {
            location: location(),
            size: size(),
            crops: crops(),
            soil_type: soil(),
            experience: experience(),
            goals: goals(),
        };
        let advisor = advisor.clone();
        let form = form.clone();

        submitting.set(true);
        results.set(None);

        spawn(async move {
            let outcome = match advisor {
                Some(client) => form.submit(client.as_ref(), &request).await,
                None => SubmitOutcome::Failed {
                    alert: PLAN_FAILURE_ALERT.to_string(),
                    reason: "no usable advisor endpoint configured".to_string(),
                },
            };

            let update = PanelUpdate::from(outcome);
            if let Some(rendered) = update.results {
                results.set(Some(rendered));
            }
            if let Some(alert) = update.alert {
                show_alert(&alert).await;
            }
            submitting.set(false);
        });
    };

    rsx! {
        section { class: "plan-section",
            h2 { class: "section-header", "Tell Us About Your Farm" }

            div { class: "plan-form",
                div { class: "form-grid",
                    div { class: "form-field",
                        label { r#for: "location", "📍 Location (County/Town)" }
                        input {
                            id: "location",
                            r#type: "text",
                            list: "county-list",
                            placeholder: "e.g. Nakuru",
                            value: "{location}",
                            oninput: move |e| location.set(e.value()),
                        }
                        datalist { id: "county-list",
                            for county in counties.iter() {
                                option { key: "{county}", value: "{county}" }
                            }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "size", "📏 Farm Size (acres)" }
                        input {
                            id: "size",
                            r#type: "number",
                            step: "0.1",
                            placeholder: "e.g. 2.5",
                            value: "{size}",
                            oninput: move |e| size.set(e.value()),
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "crops", "🌽 Main Crops" }
                        select {
                            id: "crops",
                            value: "{crops}",
                            onchange: move |e| crops.set(e.value()),
                            for crop in CROPS.iter() {
                                option { key: "{crop.key}", value: "{crop.key}", "{crop.label()}" }
                            }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "soil_type", "🪨 Soil Type" }
                        select {
                            id: "soil_type",
                            value: "{soil}",
                            onchange: move |e| soil.set(e.value()),
                            for entry in SOILS.iter() {
                                option { key: "{entry.key}", value: "{entry.key}", title: "{entry.description}", "{entry.label()}" }
                            }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "experience", "👩‍🌾 Farming Experience" }
                        select {
                            id: "experience",
                            value: "{experience}",
                            onchange: move |e| experience.set(e.value()),
                            for (key, label) in EXPERIENCE_LEVELS.iter() {
                                option { key: "{key}", value: "{key}", "{label}" }
                            }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "goals", "🎯 Primary Goal" }
                        select {
                            id: "goals",
                            value: "{goals}",
                            onchange: move |e| goals.set(e.value()),
                            for (key, label) in GOALS.iter() {
                                option { key: "{key}", value: "{key}", "{label}" }
                            }
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "btn-primary btn-generate",
                    disabled: submitting(),
                    onclick: on_submit,
                    "{PlanForm::label_for(submitting())}"
                }
            }

            if submitting() {
                div { class: "plan-loading",
                    div { class: "spinner" }
                    p { "Our AI is analyzing your farm conditions..." }
                }
            }

            if let Some(rendered) = results() {
                div { class: "plan-results",
                    div { class: "weather-panel",
                        h3 { "🌤️ Current Weather" }
                        div { dangerous_inner_html: "{rendered.weather_html}" }
                    }
                    div { class: "plan-content",
                        h3 { "🌱 Your Regenerative Farming Plan" }
                        div { dangerous_inner_html: "{rendered.plan_html}" }
                    }
                }
            }
        }
    }
}

/// What the panel changes after a submission settles. The submit control is
/// re-enabled in every case.
#[derive(Debug, Default, PartialEq)]
struct PanelUpdate {
    results: Option<PlanResults>,
    alert: Option<String>,
}

impl From<SubmitOutcome> for PanelUpdate {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Rendered(rendered) => Self {
                results: Some(rendered),
                alert: None,
            },
            SubmitOutcome::Failed { alert, reason } => {
                tracing::error!("Plan request failed: {}", reason);
                Self {
                    results: None,
                    alert: Some(alert),
                }
            }
            SubmitOutcome::Ignored => Self::default(),
        }
    }
}

/// Modal error dialog; returns once dismissed.
async fn show_alert(text: &str) {
    rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("RegAI")
        .set_description(text)
        .set_buttons(rfd::MessageButtons::Ok)
        .show()
        .await;
}
