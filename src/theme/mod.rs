//! Visual theme for the RegAI desktop app.

mod styles;

pub use styles::GLOBAL_STYLES;
