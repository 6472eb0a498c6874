//! Stats dashboard. Every figure is a static placeholder.

use dioxus::prelude::*;

use crate::components::StatCard;
use crate::content::{BROWSER_SHARE, DASHBOARD_STATS};

#[component]
pub fn StatsDashboard() -> Element {
    rsx! {
        main { class: "stats-page",
            h2 { class: "section-header", "Dashboard" }

            div { class: "stat-grid",
                for stat in DASHBOARD_STATS.iter() {
                    StatCard {
                        key: "{stat.label}",
                        label: stat.label,
                        value: stat.value,
                        trend: stat.trend,
                    }
                }
            }

            div { class: "panel-grid",
                div { class: "panel",
                    h3 { "Views by Browser" }
                    ul { class: "share-list",
                        for (browser, share) in BROWSER_SHARE.iter() {
                            li { key: "{browser}", class: "share-row",
                                span { class: "share-label", "{browser}" }
                                span { class: "share-bar",
                                    span { class: "share-fill", style: "width: {share}%;" }
                                }
                                span { class: "share-value", "{share}%" }
                            }
                        }
                    }
                }

                div { class: "panel",
                    h3 { "Sessions Overview" }
                    p { class: "panel-figure", "312" }
                    div { class: "panel-split",
                        StatCard { label: "Page Views", value: "1,234" }
                        StatCard { label: "Bounce Rate", value: "23%" }
                    }
                }
            }
        }
    }
}
