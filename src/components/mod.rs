//! UI components for the RegAI desktop app.

mod nav_header;
mod plan_form;
mod stat_card;

pub use nav_header::NavHeader;
pub use plan_form::PlanFormPanel;
pub use stat_card::StatCard;
