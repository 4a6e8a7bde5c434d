//! Deferred follow-ups of an accepted submission.
//!
//! One-shot, fixed-delay, non-cancellable. They are best-effort: if the host
//! page is torn down before the delay elapses they never run.

use std::time::Duration;

use tracing::debug;

use crate::draft::DraftLink;
use crate::feedback::ModalKind;

/// Action to run once a delay has passed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    /// Navigate to the draft link, handing over to the mail client
    OpenDraft(DraftLink),
    /// Clear the form and the word counter
    ResetForm,
    /// Close a modal that dismisses itself
    DismissModal(ModalKind),
}

/// A follow-up with its delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredTask {
    pub delay: Duration,
    pub follow_up: FollowUp,
}

impl DeferredTask {
    pub fn new(delay: Duration, follow_up: FollowUp) -> Self {
        Self { delay, follow_up }
    }

    /// Wait out the delay, then hand the follow-up to `run`.
    ///
    /// Spawn the returned future on whatever executor drives the page and
    /// drop the handle; there is no cancellation path.
    pub async fn fire<F>(self, run: F)
    where
        F: FnOnce(FollowUp),
    {
        tokio::time::sleep(self.delay).await;
        debug!(delay_ms = self.delay.as_millis() as u64, "running deferred follow-up");
        run(self.follow_up);
    }
}
