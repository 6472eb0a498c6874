use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    pub label: &'static str,
    pub value: &'static str,
    /// Small caption under the value, e.g. a month-over-month change
    pub trend: Option<&'static str>,
}

/// Single figure on the stats dashboard.
#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-label", "{props.label}" }
            span { class: "stat-value", "{props.value}" }
            if let Some(trend) = props.trend {
                span { class: "stat-trend", "▲ {trend}" }
            }
        }
    }
}
