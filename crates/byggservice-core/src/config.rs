//! Static configuration of the contact form.
//!
//! Everything here is fixed per deployment. The defaults are the values the
//! live site uses.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::fields::Field;

/// Default maximum word count for the description
pub const DEFAULT_MAX_WORDS: usize = 100;

/// Storage key of the persisted submission log
pub const HISTORY_KEY: &str = "formSubmissions";

/// Rate limiting of accepted submissions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Max accepted submissions inside one window
    pub max_submissions: usize,
    /// Trailing window length in milliseconds
    pub window_ms: i64,
    /// Minimum gap between accepted submissions in milliseconds
    pub cooldown_ms: i64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_submissions: 3,
            window_ms: 3_600_000,
            cooldown_ms: 3_000,
        }
    }
}

/// Per-field sanitization and validation bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLimits {
    pub name_max_chars: usize,
    pub phone_max_chars: usize,
    pub email_max_chars: usize,
    pub project_max_chars: usize,
    pub description_max_chars: usize,
    pub name_min_chars: usize,
    pub description_min_chars: usize,
}

impl FieldLimits {
    /// Character cap applied before validation
    pub fn max_chars(&self, field: Field) -> usize {
        match field {
            Field::Name => self.name_max_chars,
            Field::Phone => self.phone_max_chars,
            Field::Email => self.email_max_chars,
            Field::ProjectType => self.project_max_chars,
            Field::Description => self.description_max_chars,
            Field::Website => 0,
        }
    }
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            name_max_chars: 100,
            phone_max_chars: 20,
            email_max_chars: 100,
            project_max_chars: 50,
            description_max_chars: 1000,
            name_min_chars: 2,
            description_min_chars: 10,
        }
    }
}

/// Draft link contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftConfig {
    /// Fixed recipient of every draft
    pub recipient: String,
    /// Prepended to the project type to form the subject
    pub subject_prefix: String,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            recipient: "post@gjovik-byggservice.no".to_string(),
            subject_prefix: "Ny henvendelse – ".to_string(),
        }
    }
}

/// Delays of the fire-and-forget follow-ups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub open_draft_delay_ms: u64,
    pub reset_form_delay_ms: u64,
    pub success_dismiss_ms: u64,
}

impl TimingConfig {
    pub fn open_draft_delay(&self) -> Duration {
        Duration::from_millis(self.open_draft_delay_ms)
    }

    pub fn reset_form_delay(&self) -> Duration {
        Duration::from_millis(self.reset_form_delay_ms)
    }

    pub fn success_dismiss(&self) -> Duration {
        Duration::from_millis(self.success_dismiss_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            open_draft_delay_ms: 500,
            reset_form_delay_ms: 2_000,
            success_dismiss_ms: 5_000,
        }
    }
}

/// Complete form configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub rate_limit: RateLimitConfig,
    pub limits: FieldLimits,
    pub draft: DraftConfig,
    pub timing: TimingConfig,
    /// Word limit of the description unless the field overrides it
    pub max_words: usize,
    /// Choices offered by the project type selector
    pub project_types: Vec<String>,
    /// Phone number offered in error dialogs
    pub contact_phone: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            rate_limit: RateLimitConfig::default(),
            limits: FieldLimits::default(),
            draft: DraftConfig::default(),
            timing: TimingConfig::default(),
            max_words: DEFAULT_MAX_WORDS,
            project_types: ["Nybygg", "Tilbygg", "Rehab", "Bad", "Kjøkken", "Tak", "Annet"]
                .into_iter()
                .map(String::from)
                .collect(),
            contact_phone: "+4792234450".to_string(),
        }
    }
}

/// Parse a `data-max-words` attribute value.
///
/// Reads leading decimal digits after optional whitespace. A missing or
/// empty attribute, or one with no leading digits, falls back to
/// [`DEFAULT_MAX_WORDS`]. An explicit `0` is kept and admits no words.
pub fn parse_max_words(attr: Option<&str>) -> usize {
    let Some(raw) = attr.filter(|raw| !raw.is_empty()) else {
        return DEFAULT_MAX_WORDS;
    };
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<usize>().unwrap_or(DEFAULT_MAX_WORDS)
}
