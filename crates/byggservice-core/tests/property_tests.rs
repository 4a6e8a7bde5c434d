//! Property-based tests for the gate, the word budget and the draft link
//!
//! Uses proptest to check the invariants that must hold for any input.

use std::sync::Arc;

use byggservice_core::sanitize::sanitize_field;
use byggservice_core::{
    count_words, decode_draft, first_words, BoundedTextEditor, DraftComposer, FormConfig,
    InputKind, MemoryStore, PasteRequest, RateLimitConfig, Selection, SubmissionGate, SubmissionHistory,
    ValidatedSubmission,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Words of a few lowercase letters, Norwegian ones included
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zæøå]{1,8}").expect("valid regex")
}

fn words_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..max)
}

/// Free text with mixed whitespace
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 \t\n]{0,200}").expect("valid regex")
}

/// Anything a visitor might type into a field, markup and line breaks included
fn field_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9æøåÆØÅ &<>\"'%?#=+\r\n-]{0,120}").expect("valid regex")
}

/// Gaps between attempts, in milliseconds
fn gaps_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(
        prop_oneof![
            3 => 0i64..5_000,
            2 => 5_000i64..1_200_000,
            1 => 1_200_000i64..4_000_000,
        ],
        1..40,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Pruning keeps exactly the entries inside the window
    #[test]
    fn prune_keeps_only_the_window(
        entries in prop::collection::vec(0i64..10_000_000, 0..30),
        now in 0i64..10_000_000,
        window in 1i64..5_000_000,
    ) {
        let mut history = SubmissionHistory::from_entries(entries.clone());
        history.prune(now, window);

        let expected: Vec<i64> = entries.into_iter().filter(|&t| t >= now - window).collect();
        prop_assert_eq!(history.entries(), expected.as_slice());
    }

    /// However attempts are spaced, accepted submissions respect both limits
    #[test]
    fn gate_never_exceeds_window_or_cooldown(gaps in gaps_strategy()) {
        let config = RateLimitConfig::default();
        let mut gate = SubmissionGate::new(config.clone(), Arc::new(MemoryStore::new()));

        let mut now = 1_700_000_000_000i64;
        let mut accepted: Vec<i64> = Vec::new();
        for gap in gaps {
            now += gap;
            if let Ok(pass) = gate.check("", now) {
                gate.charge(pass);
                accepted.push(now);
            }
        }

        for (i, &t) in accepted.iter().enumerate() {
            let in_window = accepted[..=i]
                .iter()
                .filter(|&&s| s >= t - config.window_ms)
                .count();
            prop_assert!(in_window <= config.max_submissions);
            if i > 0 {
                prop_assert!(t - accepted[i - 1] >= config.cooldown_ms);
            }
        }
    }

    /// A filled honeypot is rejected and never charged
    #[test]
    fn honeypot_is_never_charged(bait in "[a-z]{1,20}", now in 0i64..10_000_000) {
        let mut gate = SubmissionGate::new(RateLimitConfig::default(), Arc::new(MemoryStore::new()));
        prop_assert!(gate.check(&bait, now).is_err());
        prop_assert!(gate.history().is_empty());
    }

    /// Truncating to n words yields min(n, count) words and is stable
    #[test]
    fn first_words_is_a_stable_truncation(text in text_strategy(), n in 0usize..50) {
        let truncated = first_words(&text, n);
        prop_assert_eq!(count_words(&truncated), n.min(count_words(&text)));
        prop_assert_eq!(first_words(&truncated, n), truncated.clone());
    }

    /// A paste at the end of the field admits a prefix of whole pasted words
    #[test]
    fn paste_never_exceeds_the_limit_or_splits_a_word(
        max in 1usize..30,
        existing in words_strategy(30),
        clipboard in words_strategy(60),
    ) {
        let existing: Vec<String> = existing.into_iter().take(max).collect();
        let mut editor = BoundedTextEditor::with_max_words(max);
        editor.set_text(&existing.join(" "));

        let end = editor.text().chars().count();
        editor.paste(Selection::caret(end), &clipboard.join(" "));

        let result: Vec<&str> = editor.text().split_whitespace().collect();
        prop_assert!(result.len() <= max);

        let admitted = (max - existing.len()).min(clipboard.len());
        let expected: Vec<&str> = existing
            .iter()
            .chain(clipboard.iter().take(admitted))
            .map(String::as_str)
            .collect();
        prop_assert_eq!(result, expected);
    }

    /// A paste anywhere in the field, over any selection, keeps the
    /// surrounding text and admits a prefix of whole pasted words
    #[test]
    fn paste_at_any_selection_keeps_words_whole(
        max in 1usize..30,
        existing in words_strategy(30),
        clipboard in words_strategy(60),
        from in any::<prop::sample::Index>(),
        to in any::<prop::sample::Index>(),
    ) {
        let existing: Vec<String> = existing.into_iter().take(max).collect();
        let field = existing.join(" ");
        let mut editor = BoundedTextEditor::with_max_words(max);
        editor.set_text(&field);

        let len = field.chars().count();
        let selection = Selection::new(from.index(len + 1), to.index(len + 1));
        let before: String = field.chars().take(selection.start).collect();
        let after: String = field.chars().skip(selection.end).collect();

        let units = |chars: usize| -> usize {
            field.chars().take(chars).map(char::len_utf16).sum()
        };
        let request = PasteRequest {
            start: units(selection.start),
            end: units(selection.end),
            text: clipboard.join(" "),
        };
        let shown = editor.apply_paste(&request).to_string();

        let kept = count_words(&before) + count_words(&after);
        let admitted = max.saturating_sub(kept).min(clipboard.len());
        let expected: Vec<String> = if admitted == 0 {
            format!("{before}{after}")
                .split_whitespace()
                .map(str::to_string)
                .collect()
        } else {
            before
                .split_whitespace()
                .chain(clipboard.iter().take(admitted).map(String::as_str))
                .chain(after.split_whitespace())
                .map(str::to_string)
                .collect()
        };
        let result: Vec<String> = shown.split_whitespace().map(str::to_string).collect();
        prop_assert!(result.len() <= max);
        prop_assert_eq!(result, expected);
    }

    /// Any reported field value settles within the budget
    #[test]
    fn any_input_settles_within_budget(
        max in 1usize..20,
        values in prop::collection::vec(text_strategy(), 1..10),
        programmatic in any::<bool>(),
    ) {
        let mut editor = BoundedTextEditor::with_max_words(max);
        let kind = if programmatic { InputKind::Programmatic } else { InputKind::Typed };
        for value in values {
            let shown = editor.apply_input(&value, kind).to_string();
            prop_assert!(count_words(&shown) <= max);
            prop_assert!(editor.budget().count <= editor.budget().max);
        }
    }

    /// Sanitized values decode back out of the draft link unchanged
    #[test]
    fn draft_link_carries_sanitized_values(
        name in field_strategy(),
        project in field_strategy(),
        description in field_strategy(),
    ) {
        let config = FormConfig::default();
        let submission = ValidatedSubmission {
            name: sanitize_field(&name, 100),
            phone: "91234567".into(),
            email: "a@b.no".into(),
            project_type: sanitize_field(&project, 50),
            description: sanitize_field(&description, 1000),
        };

        let link = DraftComposer::new(config.draft).compose(&submission).unwrap();
        prop_assert!(!link.as_str().contains(char::is_whitespace));
        prop_assert!(!link.as_str().contains('<'));

        let decoded = decode_draft(link.as_str()).unwrap();
        prop_assert_eq!(decoded.recipient.as_str(), "post@gjovik-byggservice.no");
        prop_assert_eq!(decoded.subject.as_deref(), Some(link.subject()));
        prop_assert_eq!(decoded.body.as_deref(), Some(link.body()));
        prop_assert_eq!(decoded.body.unwrap_or_default().split('\n').count(), 7);
    }
}
