//! Submission gate: bot check and rate limiting.
//!
//! The gate decides before any field is validated. Passing the gate does not
//! consume quota; only [`SubmissionGate::charge`] does, and it takes the
//! [`GatePass`] by value so one pass charges at most once.

use std::sync::Arc;

use tracing::warn;

use crate::config::RateLimitConfig;
use crate::error::{RateLimitReason, SubmitError};
use crate::history::{EpochMillis, SubmissionHistory};
use crate::storage::LocalStore;

/// Proof that an attempt passed the gate at `now`
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pass must be charged once the submission succeeds"]
pub struct GatePass {
    now: EpochMillis,
}

impl GatePass {
    pub fn at(&self) -> EpochMillis {
        self.now
    }
}

/// Owns the submission history and the rate-limit decision
pub struct SubmissionGate {
    config: RateLimitConfig,
    history: SubmissionHistory,
    store: Arc<dyn LocalStore>,
}

impl SubmissionGate {
    /// Load the persisted history from `store`
    pub fn new(config: RateLimitConfig, store: Arc<dyn LocalStore>) -> Self {
        let history = SubmissionHistory::load(store.as_ref());
        Self {
            config,
            history,
            store,
        }
    }

    pub fn history(&self) -> &SubmissionHistory {
        &self.history
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Decide on an attempt at `now`.
    ///
    /// `honeypot` is the value of the hidden field. Any content rejects the
    /// attempt as [`SubmitError::BotDetected`] without touching the history.
    pub fn check(&mut self, honeypot: &str, now: EpochMillis) -> Result<GatePass, SubmitError> {
        if !honeypot.is_empty() {
            return Err(SubmitError::BotDetected);
        }

        self.history.prune(now, self.config.window_ms);

        if self.history.len() >= self.config.max_submissions {
            return Err(SubmitError::RateLimited(RateLimitReason::Window));
        }

        if let Some(last) = self.history.last() {
            if now - last < self.config.cooldown_ms {
                return Err(SubmitError::RateLimited(RateLimitReason::Cooldown));
            }
        }

        Ok(GatePass { now })
    }

    /// Record an accepted submission and persist the history.
    ///
    /// A failed write is logged; the in-memory history is charged either way.
    pub fn charge(&mut self, pass: GatePass) {
        self.history.append(pass.now);
        if let Err(e) = self.history.save(self.store.as_ref()) {
            warn!("Failed to persist submission history: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HISTORY_KEY;
    use crate::storage::MemoryStore;

    const HOUR: i64 = 3_600_000;

    fn gate_with(entries: &[EpochMillis]) -> (SubmissionGate, MemoryStore) {
        let store = MemoryStore::new();
        SubmissionHistory::from_entries(entries.to_vec())
            .save(&store)
            .unwrap();
        let gate = SubmissionGate::new(RateLimitConfig::default(), Arc::new(store.clone()));
        (gate, store)
    }

    #[test]
    fn honeypot_is_silent_and_free() {
        let (mut gate, store) = gate_with(&[]);
        assert_eq!(gate.check("http://spam", 10_000), Err(SubmitError::BotDetected));
        assert!(gate.history().is_empty());
        assert_eq!(store.get_item(HISTORY_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn passing_does_not_charge() {
        let (mut gate, _) = gate_with(&[]);
        let pass = gate.check("", 10_000).unwrap();
        assert_eq!(pass.at(), 10_000);
        assert!(gate.history().is_empty());
    }

    #[test]
    fn charge_appends_and_persists() {
        let (mut gate, store) = gate_with(&[]);
        let pass = gate.check("", 10_000).unwrap();
        gate.charge(pass);
        assert_eq!(gate.history().entries(), &[10_000]);
        assert_eq!(
            store.get_item(HISTORY_KEY).unwrap().as_deref(),
            Some("[10000]")
        );
    }

    #[test]
    fn window_capacity() {
        let now = 10 * HOUR;
        let (mut gate, _) = gate_with(&[now - 50_000, now - 40_000, now - 30_000]);
        assert_eq!(
            gate.check("", now),
            Err(SubmitError::RateLimited(RateLimitReason::Window))
        );
    }

    #[test]
    fn old_entries_do_not_count() {
        let now = 10 * HOUR;
        let (mut gate, store) = gate_with(&[now - 2 * HOUR, now - HOUR - 1, now - 30_000]);
        assert!(gate.check("", now).is_ok());
        assert_eq!(gate.history().len(), 1);
        // persisted copy only changes on charge
        assert_eq!(
            SubmissionHistory::load(&store).len(),
            3
        );
    }

    #[test]
    fn cooldown() {
        let now = 10 * HOUR;
        let (mut gate, _) = gate_with(&[now - 2_999]);
        assert_eq!(
            gate.check("", now),
            Err(SubmitError::RateLimited(RateLimitReason::Cooldown))
        );
        assert!(gate.check("", now + 1).is_ok());
    }

    #[test]
    fn window_is_checked_before_cooldown() {
        let now = 10 * HOUR;
        let (mut gate, _) = gate_with(&[now - 20_000, now - 10_000, now - 1_000]);
        assert_eq!(
            gate.check("", now),
            Err(SubmitError::RateLimited(RateLimitReason::Window))
        );
    }
}
