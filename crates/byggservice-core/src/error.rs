//! Error types for the contact form

use std::fmt;

use thiserror::Error;

use crate::fields::Field;

/// Which rate limit rejected a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitReason {
    /// Too many accepted submissions inside the trailing window
    Window,
    /// The previous accepted submission is too recent
    Cooldown,
}

impl RateLimitReason {
    /// Stable identifier used in logs and tests
    pub fn as_str(&self) -> &'static str {
        match self {
            RateLimitReason::Window => "rate-limit-window",
            RateLimitReason::Cooldown => "rate-limit-cooldown",
        }
    }
}

impl fmt::Display for RateLimitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldReason {
    /// Shorter than the field's minimum after sanitization
    TooShort { min: usize },
    /// Does not match the field's format
    Format,
    /// Nothing selected or entered
    Missing,
    /// More words than the field allows
    WordCount { max: usize },
}

impl FieldReason {
    /// Stable identifier used in logs and tests
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldReason::TooShort { .. } => "too-short",
            FieldReason::Format => "format",
            FieldReason::Missing => "missing",
            FieldReason::WordCount { .. } => "word-count",
        }
    }
}

impl fmt::Display for FieldReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a rejected submit attempt
///
/// Every variant is recovered inside the submit handler. None of them is
/// fatal to the page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The honeypot field was filled in. Rejected silently.
    #[error("Bot detected")]
    BotDetected,

    /// A rate limit is in effect
    #[error("Rate limited: {0}")]
    RateLimited(RateLimitReason),

    /// Form-level required check failed (left to the host's native UI)
    #[error("Form invalid: {0} is required")]
    FormInvalid(Field),

    /// A field failed sanitized validation
    #[error("Field invalid: {field} ({reason})")]
    FieldInvalid { field: Field, reason: FieldReason },

    /// Building the draft link failed
    #[error("Compose failure: {0}")]
    ComposeFailure(String),
}

impl SubmitError {
    /// Whether the user should see anything for this outcome
    pub fn is_silent(&self) -> bool {
        matches!(self, SubmitError::BotDetected)
    }

    /// The field that should receive focus, if any
    pub fn focus(&self) -> Option<Field> {
        match self {
            SubmitError::FieldInvalid { field, .. } | SubmitError::FormInvalid(field) => {
                Some(*field)
            }
            _ => None,
        }
    }
}

/// Errors from the local key/value store
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using StorageError
pub type StorageResult<T> = Result<T, StorageError>;
