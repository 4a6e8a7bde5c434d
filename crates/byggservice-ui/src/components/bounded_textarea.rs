//! Word-limited textarea.
//!
//! The webview only reports the field's value after each input event, so
//! every change is routed through a [`BoundedTextEditor`], which diffs the
//! reported value against the last accepted one and applies the word limit.
//! Pastes are caught in the page before they land, with their selection and
//! clipboard text, and applied by the editor instead. When the editor keeps
//! something other than what the DOM shows, the element is overwritten and
//! its caret restored.

use byggservice_core::{BoundedTextEditor, Field, InputKind, PasteRequest};
use dioxus::prelude::*;
use tracing::debug;

use super::{class_list, FieldError, WordCounter};

/// Properties for the BoundedTextArea component
#[derive(Clone, PartialEq, Props)]
pub struct BoundedTextAreaProps {
    /// Editor owning the field's content; the form resets it after submit
    pub editor: Signal<BoundedTextEditor>,
    #[props(default = Field::Description)]
    pub field: Field,
    #[props(default = 5)]
    pub rows: u32,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    /// Called with the content the field shows after each edit
    #[props(default)]
    pub onedit: Option<EventHandler<String>>,
}

/// Script that takes over a textarea's pastes and reports each one as a
/// [`PasteRequest`]
pub fn paste_listener_script(id: &str) -> String {
    format!(
        r#"const el = document.getElementById({});
if (el) {{
    el.addEventListener("paste", (event) => {{
        event.preventDefault();
        const text = event.clipboardData ? event.clipboardData.getData("text/plain") : "";
        dioxus.send({{ start: el.selectionStart, end: el.selectionEnd, text }});
    }});
}}"#,
        serde_json::Value::from(id),
    )
}

/// Script that forces a textarea's value and caret
pub fn sync_script(id: &str, text: &str, caret: usize) -> String {
    // setSelectionRange counts UTF-16 code units
    let offset: usize = text.chars().take(caret).map(char::len_utf16).sum();
    format!(
        "const el = document.getElementById({}); if (el) {{ el.value = {}; el.setSelectionRange({offset}, {offset}); }}",
        serde_json::Value::from(id),
        serde_json::Value::from(text),
    )
}

/// Textarea capped at the editor's word limit, with its live counter
///
/// # Example
///
/// ```rust,ignore
/// let editor = use_signal(|| BoundedTextEditor::with_max_words(100));
///
/// rsx! {
///     BoundedTextArea { editor, placeholder: "Beskriv prosjektet".to_string() }
/// }
/// ```
#[component]
pub fn BoundedTextArea(props: BoundedTextAreaProps) -> Element {
    let mut editor = props.editor;
    let onedit = props.onedit;
    let id = props.field.dom_name();
    let label = props.field.label();
    let text = editor.read().text().to_string();
    let budget = editor.read().budget();
    let max_words = budget.max;
    let textarea_class = class_list("form-control", props.error.as_ref().map(|_| "invalid"));

    let write_dom = move || {
        let guard = editor.read();
        let _ = document::eval(&sync_script(id, guard.text(), guard.caret()));
    };

    let sync_dom = move |reported: &str| {
        if editor.read().text() != reported {
            debug!(max_words, "restoring bounded field content");
            write_dom();
        }
    };

    rsx! {
        div { class: "form-group",
            label { r#for: "{id}", "{label}" }
            textarea {
                id: "{id}",
                name: "{id}",
                class: "{textarea_class}",
                rows: "{props.rows}",
                required: true,
                "data-max-words": "{max_words}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{text}",
                onmounted: move |_| {
                    spawn(async move {
                        let mut listener = document::eval(&paste_listener_script(id));
                        while let Ok(request) = listener.recv::<PasteRequest>().await {
                            let shown = editor.write().apply_paste(&request).to_string();
                            write_dom();
                            if let Some(handler) = &onedit {
                                handler.call(shown);
                            }
                        }
                        debug!("paste listener closed");
                    });
                },
                oncompositionstart: move |_| editor.write().begin_composition(),
                oncompositionend: move |_| {
                    let value = editor.read().text().to_string();
                    editor.write().end_composition(&value);
                    sync_dom(&value);
                },
                oninput: move |e| {
                    let reported = e.value();
                    let shown = editor
                        .write()
                        .apply_input(&reported, InputKind::Typed)
                        .to_string();
                    sync_dom(&reported);
                    if let Some(handler) = &onedit {
                        handler.call(shown);
                    }
                },
            }
            WordCounter { budget }
            FieldError { field: props.field, message: props.error.clone() }
        }
    }
}
