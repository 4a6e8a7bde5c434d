//! Field validation.
//!
//! Fields are sanitized, capped, then checked in a fixed order. The first
//! failure wins and later fields are not looked at.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::FieldLimits;
use crate::error::{FieldReason, SubmitError};
use crate::fields::{Field, RawSubmission};
use crate::sanitize::sanitize_field;
use crate::words::count_words;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+47)?[49][0-9]{7}$").expect("PHONE_REGEX should compile - this is a bug")
});

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX should compile - this is a bug")
});

/// Norwegian mobile number: optional `+47`, then 4 or 9, then seven digits.
/// Spaces, hyphens and parentheses are ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    PHONE_REGEX.is_match(&cleaned)
}

/// `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Field values that passed every check, already sanitized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub project_type: String,
    pub description: String,
}

/// Sanitizes and validates the five visible fields.
#[derive(Debug, Clone)]
pub struct Validator {
    limits: FieldLimits,
    max_words: usize,
}

impl Validator {
    pub fn new(limits: FieldLimits, max_words: usize) -> Self {
        Self { limits, max_words }
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Sanitize one field with its configured cap
    pub fn sanitize(&self, field: Field, raw: &str) -> String {
        sanitize_field(raw, self.limits.max_chars(field))
    }

    /// Run every check in order, stopping at the first failure
    pub fn validate(&self, raw: &RawSubmission) -> Result<ValidatedSubmission, SubmitError> {
        let name = self.sanitize(Field::Name, &raw.name);
        let phone = self.sanitize(Field::Phone, &raw.phone);
        let email = self.sanitize(Field::Email, &raw.email);
        let project_type = self.sanitize(Field::ProjectType, &raw.project_type);
        let description = self.sanitize(Field::Description, &raw.description);

        if name.chars().count() < self.limits.name_min_chars {
            return Err(invalid(
                Field::Name,
                FieldReason::TooShort {
                    min: self.limits.name_min_chars,
                },
            ));
        }
        if !is_valid_phone(&phone) {
            return Err(invalid(Field::Phone, FieldReason::Format));
        }
        if !is_valid_email(&email) {
            return Err(invalid(Field::Email, FieldReason::Format));
        }
        if project_type.is_empty() {
            return Err(invalid(Field::ProjectType, FieldReason::Missing));
        }
        if description.chars().count() < self.limits.description_min_chars {
            return Err(invalid(
                Field::Description,
                FieldReason::TooShort {
                    min: self.limits.description_min_chars,
                },
            ));
        }
        if count_words(&description) > self.max_words {
            return Err(invalid(
                Field::Description,
                FieldReason::WordCount {
                    max: self.max_words,
                },
            ));
        }

        Ok(ValidatedSubmission {
            name,
            phone,
            email,
            project_type,
            description,
        })
    }
}

fn invalid(field: Field, reason: FieldReason) -> SubmitError {
    SubmitError::FieldInvalid { field, reason }
}

/// Form-level required check, standing in for the host's native validation.
///
/// Mirrors the `required` attribute: a field passes when its value is not
/// empty, whitespace included.
pub fn check_required(raw: &RawSubmission) -> Result<(), SubmitError> {
    match Field::VALIDATED
        .into_iter()
        .find(|field| raw.get(*field).is_empty())
    {
        Some(field) => Err(SubmitError::FormInvalid(field)),
        None => Ok(()),
    }
}

/// Inline message shown when a field loses focus with an invalid value.
///
/// Empty values get no message; the required check covers them on submit.
pub fn blur_message(field: Field, value: &str, limits: &FieldLimits) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match field {
        Field::Name if value.chars().count() < limits.name_min_chars => {
            Some("Navnet må være minst 2 tegn langt.")
        }
        Field::Phone if !is_valid_phone(value) => Some(
            "Vennligst skriv inn et gyldig norsk telefonnummer (8 siffer, starter med 4 eller 9).",
        ),
        Field::Email if !is_valid_email(value) => {
            Some("Vennligst skriv inn en gyldig e-postadresse.")
        }
        _ => None,
    }
}
