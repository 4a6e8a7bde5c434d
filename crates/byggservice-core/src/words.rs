//! Word counting shared by the live editor and the submit-time check.
//!
//! A word is a maximal run of non-whitespace characters. Both sides must
//! count through [`count_words`] or they disagree at the limit.

/// Number of whitespace-delimited, non-empty tokens
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// The first `n` words joined by single spaces
pub fn first_words(text: &str, n: usize) -> String {
    text.split_whitespace().take(n).collect::<Vec<_>>().join(" ")
}

/// Display state of the live word counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetState {
    #[default]
    Normal,
    /// At or above the warn threshold, not above the max
    Warn,
    /// Above the max. Transient: enforcement removes the excess.
    Exceeded,
}

impl BudgetState {
    /// CSS class toggled on the counter element
    pub fn class(&self) -> &'static str {
        match self {
            BudgetState::Normal => "",
            BudgetState::Warn => "warn",
            BudgetState::Exceeded => "exceeded",
        }
    }
}

/// Live word budget of a bounded field, recomputed on every edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBudget {
    pub count: usize,
    pub max: usize,
    pub warn_at: usize,
}

impl WordBudget {
    /// Budget for `text` under a limit of `max` words
    pub fn measure(text: &str, max: usize) -> Self {
        Self {
            count: count_words(text),
            max,
            warn_at: warn_threshold(max),
        }
    }

    /// Budget of an empty field
    pub fn empty(max: usize) -> Self {
        Self {
            count: 0,
            max,
            warn_at: warn_threshold(max),
        }
    }

    pub fn state(&self) -> BudgetState {
        if self.count > self.max {
            BudgetState::Exceeded
        } else if self.count >= self.warn_at {
            BudgetState::Warn
        } else {
            BudgetState::Normal
        }
    }

    /// Words still admissible
    pub fn remaining(&self) -> usize {
        self.max.saturating_sub(self.count)
    }

    /// Counter text, e.g. `42/100 ord`
    pub fn label(&self) -> String {
        format!("{}/{} ord", self.count, self.max)
    }
}

/// 80 % of `max`, rounded down
fn warn_threshold(max: usize) -> usize {
    max * 4 / 5
}
