//! Static copy for the landing sections and placeholder dashboard figures.

/// Titled card with a short description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
}

pub const HERO_BADGE: &str = "Hackathon Project 2025";
pub const HERO_SUBTITLE: &str = "Empowering small-scale farmers in Kenya with personalized, \
data-driven plans to transition to regenerative agriculture and fight climate change.";
pub const HERO_PILLARS: &[&str] = &["Climate Adaptation", "Carbon Sequestration", "Soil Health"];

pub const PROBLEMS: &[Feature] = &[
    Feature {
        icon: "🧭",
        title: "Lack of Personalization",
        description: "Generic farming advice doesn't account for unique soil, climate, and crop conditions",
    },
    Feature {
        icon: "📚",
        title: "Knowledge Gap",
        description: "Farmers are aware of regenerative practices but lack implementation guidance",
    },
    Feature {
        icon: "🚧",
        title: "Implementation Barriers",
        description: "Without tailored plans, adoption rates remain low despite environmental benefits",
    },
];

pub const SOLUTIONS: &[Feature] = &[
    Feature {
        icon: "🔄",
        title: "Crop Rotation Strategies",
        description: "AI-generated rotation plans optimized for your specific soil and climate conditions",
    },
    Feature {
        icon: "🌱",
        title: "Local Cover Crops",
        description: "Recommendations for the best cover crops available in your region",
    },
    Feature {
        icon: "💧",
        title: "Water & Soil Management",
        description: "Personalized techniques for improving water retention and soil health",
    },
];

pub const CLIMATE_IMPACTS: &[Feature] = &[
    Feature {
        icon: "💦",
        title: "Enhanced Water Retention",
        description: "Improved soil health holds more moisture, increasing drought resilience",
    },
    Feature {
        icon: "🌊",
        title: "Flood Resistance",
        description: "Better soil structure reduces erosion and improves flood management",
    },
    Feature {
        icon: "🌍",
        title: "Carbon Sequestration",
        description: "Healthy soil captures and stores significant amounts of atmospheric carbon",
    },
    Feature {
        icon: "📉",
        title: "Reduced Emissions",
        description: "Less synthetic fertilizer use means lower greenhouse gas emissions",
    },
];

pub const REQUIREMENTS: &[Requirement] = &[
    Requirement {
        title: "Data Sources",
        items: &[
            "Geospatial Data: Google Earth Engine satellite imagery and climate datasets",
            "Local Agricultural Data: Open datasets on Kenyan crops and planting seasons",
            "Historical Weather Data: Precipitation and temperature data for AI model training",
        ],
    },
    Requirement {
        title: "AI Model",
        items: &[
            "Large Language Model (LLM) for plan generation",
            "Prompt-based system for user input processing",
            "Customized text-based regenerative farming plans",
        ],
    },
    Requirement {
        title: "Prototype Interface",
        items: &[
            "Desktop application with intuitive input fields for farm details",
            "Clear, readable plan output",
            "Weather summary alongside every plan",
        ],
    },
];

pub const FOOTER_PROJECT_LINKS: &[&str] = &["Problem", "Solution", "Climate Impact", "Technical"];
pub const FOOTER_RESOURCE_LINKS: &[&str] = &["Documentation", "API Reference", "Examples", "Support"];

/// Placeholder figures; nothing here is measured.
pub const DASHBOARD_STATS: &[Stat] = &[
    Stat {
        label: "Total Sessions",
        value: "2.4k+",
        trend: "17% last month",
    },
    Stat {
        label: "Total Visitors",
        value: "1.6k+",
        trend: "17% last month",
    },
    Stat {
        label: "Time Spent",
        value: "8.49",
        trend: "17% last month",
    },
    Stat {
        label: "AVG Requests Received",
        value: "4.4",
        trend: "17% last month",
    },
];

pub const BROWSER_SHARE: &[(&str, u8)] =
    &[("Chrome", 44), ("Safari", 22), ("Firefox", 18), ("Explorer", 16)];
