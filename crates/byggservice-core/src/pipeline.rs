//! The submit pipeline.
//!
//! gate → required check → field validation → draft composition → charge.
//! Quota is charged once, and only after the draft link exists, so a failed
//! attempt never costs the user a submission.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::config::FormConfig;
use crate::draft::{DraftComposer, DraftLink};
use crate::editor::BoundedTextEditor;
use crate::error::SubmitError;
use crate::feedback::{FeedbackPresenter, ModalKind, Notice};
use crate::fields::{Field, RawSubmission};
use crate::gate::SubmissionGate;
use crate::history::{EpochMillis, SubmissionHistory};
use crate::schedule::{DeferredTask, FollowUp};
use crate::storage::LocalStore;
use crate::validate::{blur_message, check_required, ValidatedSubmission, Validator};

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub submission: ValidatedSubmission,
    pub draft: DraftLink,
    /// Confirmation to show
    pub notice: Notice,
    /// Fire-and-forget tasks the host should schedule
    pub follow_ups: Vec<DeferredTask>,
}

/// Contact form state for one page session
pub struct ContactForm {
    config: FormConfig,
    gate: SubmissionGate,
    validator: Validator,
    composer: DraftComposer,
    presenter: FeedbackPresenter,
}

impl ContactForm {
    /// Set up the form, loading the submission history from `store`
    pub fn new(config: FormConfig, store: Arc<dyn LocalStore>) -> Self {
        let gate = SubmissionGate::new(config.rate_limit.clone(), store);
        let validator = Validator::new(config.limits.clone(), config.max_words);
        let composer = DraftComposer::new(config.draft.clone());
        let presenter = FeedbackPresenter::new(&config);
        Self {
            config,
            gate,
            validator,
            composer,
            presenter,
        }
    }

    /// Override the description's word limit, as its `data-max-words` does
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.config.max_words = max_words;
        self.validator = Validator::new(self.config.limits.clone(), max_words);
        self
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn max_words(&self) -> usize {
        self.validator.max_words()
    }

    pub fn history(&self) -> &SubmissionHistory {
        self.gate.history()
    }

    /// A fresh editor for the description field
    pub fn description_editor(&self) -> BoundedTextEditor {
        BoundedTextEditor::with_max_words(self.max_words())
    }

    /// Inline message for a field that just lost focus
    pub fn blur_message(&self, field: Field, value: &str) -> Option<&'static str> {
        blur_message(field, value, &self.config.limits)
    }

    /// Process one submit attempt made at `now`
    #[instrument(skip_all)]
    pub fn submit(&mut self, raw: &RawSubmission, now: EpochMillis) -> Result<Accepted, SubmitError> {
        let pass = self.gate.check(&raw.website, now)?;
        check_required(raw)?;
        let submission = self.validator.validate(raw)?;
        let draft = self.composer.compose(&submission)?;

        self.gate.charge(pass);
        info!(
            recent = self.gate.history().len(),
            "Accepted contact form submission"
        );

        let timing = &self.config.timing;
        let follow_ups = vec![
            DeferredTask::new(timing.open_draft_delay(), FollowUp::OpenDraft(draft.clone())),
            DeferredTask::new(timing.reset_form_delay(), FollowUp::ResetForm),
            DeferredTask::new(
                timing.success_dismiss(),
                FollowUp::DismissModal(ModalKind::Success),
            ),
        ];

        Ok(Accepted {
            submission,
            draft,
            notice: self.presenter.success(),
            follow_ups,
        })
    }

    /// Notice for a rejected attempt, `None` when it must stay silent
    pub fn present(&self, error: &SubmitError) -> Option<Notice> {
        if !error.is_silent() {
            debug!(reason = %error, "Rejected contact form submission");
        }
        self.presenter.rejection(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DraftConfig;
    use crate::error::{FieldReason, RateLimitReason};
    use crate::storage::MemoryStore;

    fn raw() -> RawSubmission {
        RawSubmission {
            name: "Jo".into(),
            phone: "91234567".into(),
            email: "a@b.no".into(),
            project_type: "Rehab".into(),
            description: "kort men gyldig beskrivelse".into(),
            website: String::new(),
        }
    }

    fn form() -> ContactForm {
        ContactForm::new(FormConfig::default(), Arc::new(MemoryStore::new()))
    }

    #[test]
    fn accepted_submission_is_charged_once() {
        let mut form = form();
        let accepted = form.submit(&raw(), 1_000_000).unwrap();
        assert_eq!(form.history().entries(), &[1_000_000]);
        assert_eq!(accepted.draft.subject(), "Ny henvendelse – Rehab");
        assert_eq!(accepted.follow_ups.len(), 3);
    }

    #[test]
    fn validation_failure_is_not_charged() {
        let mut form = form();
        let mut bad = raw();
        bad.email = "nope".into();
        assert_eq!(
            form.submit(&bad, 1_000_000),
            Err(SubmitError::FieldInvalid {
                field: Field::Email,
                reason: FieldReason::Format
            })
        );
        assert!(form.history().is_empty());

        // fixing the typo right away is not blocked by a cooldown
        assert!(form.submit(&raw(), 1_000_001).is_ok());
    }

    #[test]
    fn compose_failure_is_not_charged() {
        let config = FormConfig {
            draft: DraftConfig {
                recipient: String::new(),
                ..DraftConfig::default()
            },
            ..FormConfig::default()
        };
        let mut form = ContactForm::new(config, Arc::new(MemoryStore::new()));
        let err = form.submit(&raw(), 1_000_000).unwrap_err();
        assert!(matches!(err, SubmitError::ComposeFailure(_)));
        assert!(form.history().is_empty());
        assert!(matches!(form.present(&err), Some(Notice::Modal(_))));
    }

    #[test]
    fn required_check_runs_before_field_validation() {
        let mut form = form();
        let mut bad = raw();
        bad.name = "J".into();
        bad.phone.clear();
        assert_eq!(
            form.submit(&bad, 1_000_000),
            Err(SubmitError::FormInvalid(Field::Phone))
        );
    }

    #[test]
    fn cooldown_between_accepted_submissions() {
        let mut form = form();
        form.submit(&raw(), 1_000_000).unwrap();
        assert_eq!(
            form.submit(&raw(), 1_002_000),
            Err(SubmitError::RateLimited(RateLimitReason::Cooldown))
        );
        assert_eq!(form.history().len(), 1);
    }

    #[test]
    fn word_limit_override() {
        let mut form = form().with_max_words(3);
        assert_eq!(form.description_editor().budget().max, 3);
        assert_eq!(
            form.submit(&raw(), 1_000_000),
            Err(SubmitError::FieldInvalid {
                field: Field::Description,
                reason: FieldReason::WordCount { max: 3 }
            })
        );
    }

    #[test]
    fn bot_is_silent() {
        let mut form = form();
        let mut bot = raw();
        bot.website = "spam".into();
        let err = form.submit(&bot, 1_000_000).unwrap_err();
        assert_eq!(form.present(&err), None);
        assert!(form.history().is_empty());
    }
}
