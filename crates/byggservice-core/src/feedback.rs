//! User-visible feedback for submit outcomes.
//!
//! Pure mapping from outcomes to what the page shows. No decisions are made
//! here.

use std::time::Duration;

use crate::config::FormConfig;
use crate::error::{FieldReason, RateLimitReason, SubmitError};
use crate::fields::Field;

/// Look of a modal dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Success,
    Error,
    RateLimit,
}

impl ModalKind {
    /// DOM id of the dialog; one dialog of each kind exists at most
    pub fn id(&self) -> &'static str {
        match self {
            ModalKind::Success => "successModal",
            ModalKind::Error => "errorModal",
            ModalKind::RateLimit => "rateLimitModal",
        }
    }

    /// CSS modifier class of the dialog content
    pub fn class(&self) -> &'static str {
        match self {
            ModalKind::Success => "success",
            ModalKind::Error | ModalKind::RateLimit => "error",
        }
    }
}

/// Secondary action offering to call instead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallAction {
    pub label: String,
    pub href: String,
}

/// A modal dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalNotice {
    pub kind: ModalKind,
    pub title: String,
    pub message: String,
    pub call_action: Option<CallAction>,
    /// Closes by itself after this long
    pub auto_dismiss: Option<Duration>,
}

/// What the page shows for one outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Modal(ModalNotice),
    /// Blocking alert with a single message
    Alert(String),
    /// Message attached to a field, which also receives focus
    FieldMessage { field: Field, message: String },
    /// The host presents its own required-field UI for this field
    NativeValidity(Field),
}

impl Notice {
    /// Field to focus, if any
    pub fn focus(&self) -> Option<Field> {
        match self {
            Notice::FieldMessage { field, .. } | Notice::NativeValidity(field) => Some(*field),
            _ => None,
        }
    }
}

/// Builds notices with the site's messages
#[derive(Debug, Clone)]
pub struct FeedbackPresenter {
    contact_phone: String,
    success_dismiss: Duration,
}

impl FeedbackPresenter {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            contact_phone: config.contact_phone.clone(),
            success_dismiss: config.timing.success_dismiss(),
        }
    }

    /// Confirmation shown for an accepted submission
    pub fn success(&self) -> Notice {
        Notice::Modal(ModalNotice {
            kind: ModalKind::Success,
            title: "Takk for din henvendelse!".to_string(),
            message: "Vi åpner din e-postklient for å sende meldingen. Skjemaet er nå tilbakestilt."
                .to_string(),
            call_action: None,
            auto_dismiss: Some(self.success_dismiss),
        })
    }

    /// Notice for a rejected attempt. Bot rejections show nothing.
    pub fn rejection(&self, error: &SubmitError) -> Option<Notice> {
        let notice = match error {
            SubmitError::BotDetected => return None,
            SubmitError::RateLimited(RateLimitReason::Window) => Notice::Modal(ModalNotice {
                kind: ModalKind::RateLimit,
                title: "For mange forsøk".to_string(),
                message: "Du har nådd grensen for innsendinger. Vennligst prøv igjen senere eller kontakt oss direkte."
                    .to_string(),
                call_action: Some(self.call_action()),
                auto_dismiss: None,
            }),
            SubmitError::RateLimited(RateLimitReason::Cooldown) => Notice::Alert(
                "Vennligst vent litt før du sender inn skjemaet på nytt.".to_string(),
            ),
            SubmitError::FormInvalid(field) => Notice::NativeValidity(*field),
            SubmitError::FieldInvalid { field, reason } => Notice::FieldMessage {
                field: *field,
                message: field_message(*field, *reason),
            },
            SubmitError::ComposeFailure(_) => Notice::Modal(ModalNotice {
                kind: ModalKind::Error,
                title: "Noe gikk galt".to_string(),
                message: "Det oppstod en feil ved sending av skjemaet. Vennligst prøv igjen eller kontakt oss direkte."
                    .to_string(),
                call_action: Some(self.call_action()),
                auto_dismiss: None,
            }),
        };
        Some(notice)
    }

    fn call_action(&self) -> CallAction {
        CallAction {
            label: "Ring oss".to_string(),
            href: format!("tel:{}", self.contact_phone),
        }
    }
}

/// Submit-time message for a failed field check
pub fn field_message(field: Field, reason: FieldReason) -> String {
    match (field, reason) {
        (Field::Name, _) => "Vennligst skriv inn et gyldig navn (minst 2 tegn).".to_string(),
        (Field::Phone, _) => {
            "Vennligst skriv inn et gyldig telefonnummer (8 siffer, starter med 4 eller 9)."
                .to_string()
        }
        (Field::Email, _) => "Vennligst skriv inn en gyldig e-postadresse.".to_string(),
        (Field::ProjectType, _) => "Vennligst velg en prosjekttype.".to_string(),
        (Field::Description, FieldReason::WordCount { max }) => {
            format!("Beskrivelsen kan ikke overstige {max} ord.")
        }
        (Field::Description, _) => "Vennligst beskriv prosjektet ditt (minst 10 tegn).".to_string(),
        (Field::Website, _) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presenter() -> FeedbackPresenter {
        FeedbackPresenter::new(&FormConfig::default())
    }

    #[test]
    fn bot_rejection_shows_nothing() {
        assert_eq!(presenter().rejection(&SubmitError::BotDetected), None);
    }

    #[test]
    fn window_limit_is_a_modal_with_call_action() {
        let notice = presenter()
            .rejection(&SubmitError::RateLimited(RateLimitReason::Window))
            .unwrap();
        let Notice::Modal(modal) = notice else {
            panic!("expected modal");
        };
        assert_eq!(modal.kind, ModalKind::RateLimit);
        assert_eq!(modal.call_action.unwrap().href, "tel:+4792234450");
    }

    #[test]
    fn cooldown_is_an_alert() {
        let notice = presenter()
            .rejection(&SubmitError::RateLimited(RateLimitReason::Cooldown))
            .unwrap();
        assert!(matches!(notice, Notice::Alert(_)));
        assert_eq!(notice.focus(), None);
    }

    #[test]
    fn field_failures_focus_the_field() {
        let notice = presenter()
            .rejection(&SubmitError::FieldInvalid {
                field: Field::Description,
                reason: FieldReason::WordCount { max: 100 },
            })
            .unwrap();
        assert_eq!(notice.focus(), Some(Field::Description));
        assert_eq!(
            notice,
            Notice::FieldMessage {
                field: Field::Description,
                message: "Beskrivelsen kan ikke overstige 100 ord.".to_string(),
            }
        );
    }

    #[test]
    fn success_dismisses_itself() {
        let Notice::Modal(modal) = presenter().success() else {
            panic!("expected modal");
        };
        assert_eq!(modal.kind, ModalKind::Success);
        assert_eq!(modal.auto_dismiss, Some(Duration::from_secs(5)));
        assert_eq!(modal.kind.id(), "successModal");
    }
}
