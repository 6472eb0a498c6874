//! JSONL log files alongside console output.
//!
//! Each running surface (`desktop`, `cli`) appends to its own file per day,
//! so the desktop app and a CLI invocation never interleave lines.
//!
//! ```text
//! ~/.regai/logs/
//! └── raw/
//!     ├── 2026-10-18_desktop.jsonl
//!     └── 2026-10-18_cli.jsonl
//! ```
//!
//! ```ignore
//! use regai_core::logging::LoggingBuilder;
//!
//! let log_path = LoggingBuilder::new(logs_dir, "desktop")
//!     .with_default_level("info")
//!     .init()?;
//! ```
//!
//! Failed plan requests across runs:
//!
//! ```bash
//! jq 'select(.level == "error" and .target == "regai_core::plan::form")' ~/.regai/logs/raw/*.jsonl
//! ```

mod entry;
mod layer;
mod writer;

pub use entry::JsonLogEntry;
pub use layer::{JsonlLayer, LoggingBuilder};
pub use writer::{read_entries, InstanceLogWriter};
