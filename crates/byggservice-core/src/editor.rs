//! Word-limited text editing.
//!
//! A bounded field is guarded at three points because no single input event
//! covers every way text arrives:
//!
//! - typed insertions are accepted or rejected whole ([`TextEditPolicy::on_insert`])
//! - pastes are clamped to the admissible number of whole words
//!   ([`TextEditPolicy::on_bulk_replace`])
//! - every change, composition end included, is followed by a settle pass
//!   that hard-truncates anything still over the limit
//!   ([`TextEditPolicy::on_settle`])
//!
//! All offsets are `char` offsets into the field's text.

use std::borrow::Cow;

use serde::Deserialize;
use tracing::debug;

use crate::words::{count_words, first_words, WordBudget};

/// A selected range of the field, `start..end` in chars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Collapsed selection at `pos`
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Selection from UTF-16 offsets into `text`, as a webview reports them
    pub fn from_utf16(text: &str, start: usize, end: usize) -> Self {
        Self::new(char_offset(text, start), char_offset(text, end))
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    fn clamp(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }
}

/// Verdict on a typed insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertDecision {
    Accept,
    /// Leave the field untouched
    Reject,
}

/// New content after a bulk replacement, with the caret placed after the
/// inserted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub text: String,
    pub caret: usize,
}

/// Edit interception for a bounded text field, independent of any event
/// dispatch mechanism.
pub trait TextEditPolicy {
    /// Decide on a typed or composed insertion replacing `selection`
    fn on_insert(&self, current: &str, selection: Selection, insertion: &str) -> InsertDecision;

    /// Splice `replacement` over `selection`, admitting only what fits
    fn on_bulk_replace(&self, current: &str, selection: Selection, replacement: &str)
        -> Replacement;

    /// Backstop after any change. Borrowed when nothing had to change.
    fn on_settle<'a>(&self, current: &'a str) -> Cow<'a, str>;

    /// Whether `current` uses the whole budget
    fn is_at_limit(&self, current: &str) -> bool;
}

/// Caps a field at a number of whitespace-delimited words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLimitPolicy {
    max_words: usize,
}

impl WordLimitPolicy {
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }
}

impl TextEditPolicy for WordLimitPolicy {
    fn on_insert(&self, current: &str, selection: Selection, insertion: &str) -> InsertDecision {
        let (before, after) = split_around(current, selection);
        let next = format!("{before}{insertion}{after}");
        if count_words(&next) > self.max_words {
            InsertDecision::Reject
        } else {
            InsertDecision::Accept
        }
    }

    fn on_bulk_replace(
        &self,
        current: &str,
        selection: Selection,
        replacement: &str,
    ) -> Replacement {
        let (before, after) = split_around(current, selection);
        let kept = count_words(before) + count_words(after);
        let allowed = self.max_words.saturating_sub(kept);
        let admitted = first_words(replacement, allowed);

        if admitted.is_empty() {
            // Nothing fits: the paste only removes the selection, which can
            // never add a word.
            return Replacement {
                text: format!("{before}{after}"),
                caret: before.chars().count(),
            };
        }

        if admitted.split_whitespace().count() < count_words(replacement) {
            debug!(
                allowed,
                pasted = count_words(replacement),
                "clamped paste to the word budget"
            );
        }

        let head = collapse_whitespace(&format!("{before} {admitted}"));
        let text = collapse_whitespace(&format!("{head} {after}"));
        Replacement {
            caret: head.chars().count(),
            text,
        }
    }

    fn on_settle<'a>(&self, current: &'a str) -> Cow<'a, str> {
        if count_words(current) > self.max_words {
            debug!(max = self.max_words, "truncated field to the word budget");
            Cow::Owned(first_words(current, self.max_words))
        } else {
            Cow::Borrowed(current)
        }
    }

    fn is_at_limit(&self, current: &str) -> bool {
        count_words(current) >= self.max_words
    }
}

/// The text before and after `selection`
fn split_around(text: &str, selection: Selection) -> (&str, &str) {
    let len = text.chars().count();
    let selection = selection.clamp(len);
    let start = byte_offset(text, selection.start);
    let end = byte_offset(text, selection.end);
    (&text[..start], &text[end..])
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(idx, _)| idx)
}

/// Char offset of a UTF-16 offset. Offsets inside a surrogate pair round up.
fn char_offset(text: &str, utf16: usize) -> usize {
    let mut units = 0;
    for (idx, c) in text.chars().enumerate() {
        if units >= utf16 {
            return idx;
        }
        units += c.len_utf16();
    }
    text.chars().count()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A single contiguous edit that turns one field value into another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDelta {
    /// Range of the old value that was replaced
    pub selection: Selection,
    /// Text that took its place
    pub inserted: String,
}

impl EditDelta {
    /// Smallest edit turning `old` into `new`.
    ///
    /// Hosts that only report the field's value after an input event can
    /// recover the replaced range and the inserted text from it. The range
    /// is ambiguous when the inserted text repeats its surroundings, which
    /// only matters for edits that are not spliced back verbatim. Pastes
    /// therefore arrive as a [`PasteRequest`] instead.
    pub fn between(old: &str, new: &str) -> Self {
        let old_chars: Vec<char> = old.chars().collect();
        let new_chars: Vec<char> = new.chars().collect();

        let prefix = old_chars
            .iter()
            .zip(new_chars.iter())
            .take_while(|(a, b)| a == b)
            .count();
        let max_suffix = old_chars.len().min(new_chars.len()) - prefix;
        let suffix = old_chars
            .iter()
            .rev()
            .zip(new_chars.iter().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();

        Self {
            selection: Selection::new(prefix, old_chars.len() - suffix),
            inserted: new_chars[prefix..new_chars.len() - suffix].iter().collect(),
        }
    }

    /// Pure deletion
    pub fn is_deletion(&self) -> bool {
        self.inserted.is_empty()
    }
}

/// How an input event produced the new value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Keystroke-level insertion or deletion, drops included
    Typed,
    /// Anything that could not be intercepted
    Programmatic,
}

/// A paste caught before the field applied it.
///
/// `start` and `end` are the field's `selectionStart`/`selectionEnd` in
/// UTF-16 code units; `text` is the clipboard's plain text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PasteRequest {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl PasteRequest {
    /// Paste of `text` at char offset `caret` of `field`
    pub fn at_caret(field: &str, caret: usize, text: &str) -> Self {
        let units = field.chars().take(caret).map(char::len_utf16).sum();
        Self {
            start: units,
            end: units,
            text: text.to_string(),
        }
    }
}

/// Lifecycle of a bounded field. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    /// Nothing has been edited yet
    #[default]
    Idle,
    /// An input method is composing; edits pass through until it ends
    Editing,
    UnderLimit,
    AtLimit,
}

/// One bounded text field: its content, caret, and policy
#[derive(Debug, Clone)]
pub struct BoundedTextEditor<P = WordLimitPolicy> {
    policy: P,
    text: String,
    caret: usize,
    state: EditorState,
}

impl<P: TextEditPolicy> BoundedTextEditor<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            text: String::new(),
            caret: 0,
            state: EditorState::Idle,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn is_composing(&self) -> bool {
        self.state == EditorState::Editing
    }

    /// Typed insertion over `selection`. Rejected insertions change nothing.
    pub fn insert(&mut self, selection: Selection, insertion: &str) -> InsertDecision {
        let selection = selection.clamp(self.text.chars().count());
        if !self.is_composing() {
            let decision = self.policy.on_insert(&self.text, selection, insertion);
            if decision == InsertDecision::Reject {
                return decision;
            }
        }
        let (before, after) = split_around(&self.text, selection);
        let text = format!("{before}{insertion}{after}");
        self.caret = selection.start + insertion.chars().count();
        self.text = text;
        self.settle();
        InsertDecision::Accept
    }

    /// Remove `selection`
    pub fn delete(&mut self, selection: Selection) {
        let selection = selection.clamp(self.text.chars().count());
        let (before, after) = split_around(&self.text, selection);
        self.text = format!("{before}{after}");
        self.caret = selection.start;
        self.settle();
    }

    /// Paste `clipboard` over `selection`, clamped to whole admissible words
    pub fn paste(&mut self, selection: Selection, clipboard: &str) {
        let selection = selection.clamp(self.text.chars().count());
        let Replacement { text, caret } =
            self.policy
                .on_bulk_replace(&self.text, selection, clipboard);
        self.text = text;
        self.caret = caret;
        self.settle();
    }

    /// An input method started composing
    pub fn begin_composition(&mut self) {
        self.state = EditorState::Editing;
    }

    /// An input method committed; `value` is the field's content now
    pub fn end_composition(&mut self, value: &str) {
        self.caret = value.chars().count();
        self.text = value.to_string();
        self.state = EditorState::UnderLimit;
        self.settle();
    }

    /// A change that bypassed interception
    pub fn set_text(&mut self, value: &str) {
        self.text = value.to_string();
        self.caret = self.text.chars().count();
        if !self.is_composing() {
            self.settle();
        }
    }

    /// Apply a field value reported after an input event.
    ///
    /// Returns the content the field must show, which is the previous
    /// content when the edit was rejected.
    pub fn apply_input(&mut self, value: &str, kind: InputKind) -> &str {
        if self.is_composing() {
            self.text = value.to_string();
            self.caret = self.text.chars().count();
            return &self.text;
        }

        let delta = EditDelta::between(&self.text, value);
        match kind {
            InputKind::Typed if delta.is_deletion() => self.delete(delta.selection),
            InputKind::Typed => {
                self.insert(delta.selection, &delta.inserted);
            }
            InputKind::Programmatic => self.set_text(value),
        }
        &self.text
    }

    /// Apply an intercepted paste.
    ///
    /// Returns the content the field must show; the paste itself never
    /// reached it.
    pub fn apply_paste(&mut self, request: &PasteRequest) -> &str {
        let selection = Selection::from_utf16(&self.text, request.start, request.end);
        self.paste(selection, &request.text);
        &self.text
    }

    /// Empty the field and forget it was ever edited
    pub fn reset(&mut self) {
        self.text.clear();
        self.caret = 0;
        self.state = EditorState::Idle;
    }

    fn settle(&mut self) {
        if let Cow::Owned(settled) = self.policy.on_settle(&self.text) {
            self.caret = settled.chars().count();
            self.text = settled;
        }
        self.state = if self.policy.is_at_limit(&self.text) {
            EditorState::AtLimit
        } else {
            EditorState::UnderLimit
        };
    }
}

impl BoundedTextEditor<WordLimitPolicy> {
    /// Editor capped at `max_words`
    pub fn with_max_words(max_words: usize) -> Self {
        Self::new(WordLimitPolicy::new(max_words))
    }

    /// Live budget for the counter display
    pub fn budget(&self) -> WordBudget {
        WordBudget::measure(&self.text, self.policy.max_words())
    }
}
