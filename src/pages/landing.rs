//! Landing page - entry point for signed-out farmers.
//!
//! Marketing sections describing the problem and the advisor, ending in a
//! call to action that opens the credential form.

use dioxus::prelude::*;

use super::NoticeBanner;
use crate::content::{
    Feature, CLIMATE_IMPACTS, FOOTER_PROJECT_LINKS, FOOTER_RESOURCE_LINKS, HERO_BADGE,
    HERO_PILLARS, HERO_SUBTITLE, PROBLEMS, REQUIREMENTS, SOLUTIONS,
};
use crate::context::use_router;

#[component]
pub fn Landing() -> Element {
    let mut router = use_router();
    let notice = router.read().notice().cloned();

    let get_started = move |_| {
        if let Some(t) = router.write().open_credential_form() {
            tracing::debug!("{} -> {}", t.from.as_str(), t.to.as_str());
        }
    };

    rsx! {
        main { class: "landing",
            header { class: "hero",
                span { class: "hero-badge", "{HERO_BADGE}" }
                h1 { class: "hero-title",
                    "AI-Powered "
                    span { class: "accent", "Regenerative Agriculture" }
                    " Advisor"
                }
                p { class: "hero-subtitle", "{HERO_SUBTITLE}" }

                div { class: "hero-pillars",
                    for pillar in HERO_PILLARS.iter() {
                        span { key: "{pillar}", class: "pill", "{pillar}" }
                    }
                }

                if let Some(notice) = notice {
                    NoticeBanner { notice }
                }

                button {
                    r#type: "button",
                    class: "btn-primary btn-hero",
                    onclick: get_started,
                    "Get Started"
                }
            }

            FeatureSection {
                id: "problem",
                title: "The Problem",
                lead: "Small-scale farmers in Kenya face climate stress without advice that fits their land.",
                features: PROBLEMS,
            }

            FeatureSection {
                id: "solution",
                title: "Our Solution",
                lead: "An AI advisor that turns farm details into a step-by-step regenerative plan.",
                features: SOLUTIONS,
            }

            FeatureSection {
                id: "impact",
                title: "Climate Impact",
                lead: "Regenerative practices build resilience on the farm and draw down carbon.",
                features: CLIMATE_IMPACTS,
            }

            section { class: "landing-section", id: "technical",
                h2 { class: "section-header", "Technical Requirements" }
                div { class: "card-grid",
                    for req in REQUIREMENTS.iter() {
                        div { key: "{req.title}", class: "feature-card",
                            h3 { "{req.title}" }
                            ul { class: "requirement-list",
                                for item in req.items.iter() {
                                    li { key: "{item}", "{item}" }
                                }
                            }
                        }
                    }
                }
            }

            footer { class: "landing-footer",
                div { class: "footer-brand",
                    h3 { "AgriAdvisor AI" }
                    p { "Regenerative agriculture advice for Kenyan smallholders." }
                }
                FooterLinks { title: "Project", links: FOOTER_PROJECT_LINKS }
                FooterLinks { title: "Resources", links: FOOTER_RESOURCE_LINKS }
            }
        }
    }
}

#[component]
fn FeatureSection(
    id: &'static str,
    title: &'static str,
    lead: &'static str,
    features: &'static [Feature],
) -> Element {
    rsx! {
        section { class: "landing-section", id: "{id}",
            h2 { class: "section-header", "{title}" }
            p { class: "section-lead", "{lead}" }
            div { class: "card-grid",
                for feature in features.iter() {
                    div { key: "{feature.title}", class: "feature-card",
                        span { class: "feature-icon", "{feature.icon}" }
                        h3 { "{feature.title}" }
                        p { "{feature.description}" }
                    }
                }
            }
        }
    }
}

#[component]
fn FooterLinks(title: &'static str, links: &'static [&'static str]) -> Element {
    rsx! {
        div { class: "footer-links",
            h4 { "{title}" }
            ul {
                for link in links.iter() {
                    li { key: "{link}", "{link}" }
                }
            }
        }
    }
}
