//! Gjøvik Byggservice contact form core.
//!
//! Validation and submission gating for the site's contact form. Nothing is
//! ever sent from here: an accepted submission becomes a pre-filled
//! `mailto:` draft that the visitor's own mail client sends.
//!
//! ## Overview
//!
//! - **Submission gate**: honeypot bot check, a capped number of accepted
//!   submissions per trailing hour, and a short cooldown between them. The
//!   log of accepted submissions lives in local storage.
//! - **Sanitizer / validator**: plain-text sanitization, per-field length
//!   caps, and first-failure validation of name, phone, email, project type
//!   and description.
//! - **Bounded text editor**: live word-limit enforcement on the description
//!   for typed, pasted and composed input.
//! - **Draft composer**: percent-encoded `mailto:` link.
//! - **Feedback**: the notices the page shows for each outcome.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use byggservice_core::{now_millis, ContactForm, FormConfig, MemoryStore, RawSubmission};
//!
//! let mut form = ContactForm::new(FormConfig::default(), Arc::new(MemoryStore::new()));
//! match form.submit(&raw, now_millis()) {
//!     Ok(accepted) => open(accepted.draft.as_str()),
//!     Err(e) => show(form.present(&e)),
//! }
//! ```

pub mod config;
pub mod draft;
pub mod editor;
pub mod error;
pub mod feedback;
pub mod fields;
pub mod gate;
pub mod history;
pub mod logging;
pub mod pipeline;
pub mod sanitize;
pub mod schedule;
pub mod storage;
pub mod validate;
pub mod words;

// Re-exports
pub use config::{parse_max_words, FormConfig, RateLimitConfig, DEFAULT_MAX_WORDS, HISTORY_KEY};
pub use draft::{decode_draft, DecodedDraft, DraftComposer, DraftLink};
pub use editor::{
    BoundedTextEditor, EditDelta, EditorState, InputKind, InsertDecision, PasteRequest,
    Replacement, Selection, TextEditPolicy, WordLimitPolicy,
};
pub use error::{FieldReason, RateLimitReason, StorageError, StorageResult, SubmitError};
pub use feedback::{CallAction, FeedbackPresenter, ModalKind, ModalNotice, Notice};
pub use fields::{Field, RawSubmission};
pub use gate::{GatePass, SubmissionGate};
pub use history::{now_millis, EpochMillis, SubmissionHistory};
pub use pipeline::{Accepted, ContactForm};
pub use schedule::{DeferredTask, FollowUp};
pub use storage::{LocalStore, MemoryStore, RedbStore};
pub use validate::{ValidatedSubmission, Validator};
pub use words::{count_words, first_words, BudgetState, WordBudget};
