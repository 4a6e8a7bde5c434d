//! Structured logging with a JSONL file sink.
//!
//! Console output goes through `tracing_subscriber::fmt`; every event is also
//! appended as one JSON object per line to a per-day file:
//!
//! ```text
//! <data-dir>/logs/
//! ├── 2026-10-18.jsonl
//! └── 2026-10-19.jsonl
//! ```
//!
//! Submission field values are never logged, only field names and reasons.
//!
//! ## Usage
//!
//! ```ignore
//! use byggservice_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new(data_dir.join("logs"))
//!     .with_filter("byggservice=debug,byggservice_core=debug")
//!     .init()?;
//! ```
//!
//! ### Querying logs with jq
//!
//! ```bash
//! # Every rejected submission
//! jq 'select(.msg == "Rejected contact form submission")' logs/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::JsonLogEntry;
pub use layer::{JsonlLayer, LoggingBuilder};
pub use writer::{read_entries, LogFileWriter};
