//! Input Field Components
//!
//! Labelled single-line inputs and the project type selector. Each one
//! reserves a slot below the control for an inline error message.

use byggservice_core::Field;
use dioxus::prelude::*;

use super::class_list;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Field the input stands for; sets `id`, `name` and the label
    pub field: Field,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Handler called with the value when the input loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<String>>,
    /// Input type (text, tel, email)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub autocomplete: Option<String>,
    /// Inline error message, shown under the input
    #[props(default)]
    pub error: Option<String>,
    #[props(default = true)]
    pub required: bool,
}

/// Whether a key press in a single-line input must be swallowed.
///
/// Enter in a text input would submit the form; only the button does that.
pub fn suppresses_key(key: &Key) -> bool {
    *key == Key::Enter
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// let mut phone = use_signal(String::new);
///
/// rsx! {
///     Input {
///         field: Field::Phone,
///         input_type: "tel".to_string(),
///         value: phone(),
///         oninput: move |s| phone.set(s),
///         onblur: move |s| check_phone(s),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props.field.dom_name();
    let label = props.field.label();
    let input_class = class_list("form-control", props.error.as_ref().map(|_| "invalid"));
    let current = props.value.clone();

    rsx! {
        div { class: "form-group",
            label { r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                name: "{id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                autocomplete: props.autocomplete.as_deref().unwrap_or("on"),
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(current.clone());
                    }
                },
                onkeydown: move |e| {
                    if suppresses_key(&e.key()) {
                        e.prevent_default();
                    }
                },
            }
            FieldError { field: props.field, message: props.error.clone() }
        }
    }
}

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    pub field: Field,
    /// Selected value, empty for none
    pub value: String,
    /// Available choices
    pub options: Vec<String>,
    pub onchange: EventHandler<String>,
    /// Text of the empty first option
    #[props(default = "Velg prosjekttype".to_string())]
    pub placeholder: String,
    #[props(default)]
    pub error: Option<String>,
}

/// Labelled drop-down with an empty first choice
#[component]
pub fn Select(props: SelectProps) -> Element {
    let id = props.field.dom_name();
    let label = props.field.label();
    let select_class = class_list("form-control", props.error.as_ref().map(|_| "invalid"));

    rsx! {
        div { class: "form-group",
            label { r#for: "{id}", "{label}" }
            select {
                id: "{id}",
                name: "{id}",
                class: "{select_class}",
                required: true,
                value: "{props.value}",
                onchange: move |e| props.onchange.call(e.value()),
                option { value: "", "{props.placeholder}" }
                for choice in props.options.iter() {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: *choice == props.value,
                        "{choice}"
                    }
                }
            }
            FieldError { field: props.field, message: props.error.clone() }
        }
    }
}

/// Hidden bait input. Humans never see it, so any content means a bot.
#[component]
pub fn HoneypotField(value: String, oninput: EventHandler<String>) -> Element {
    let name = Field::Website.dom_name();

    rsx! {
        div { class: "honeypot", "aria-hidden": "true",
            input {
                name: "{name}",
                r#type: "text",
                tabindex: "-1",
                autocomplete: "off",
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

/// Inline message under a field. Renders an empty slot when there is none.
#[component]
pub fn FieldError(field: Field, message: Option<String>) -> Element {
    let id = error_id(field);

    rsx! {
        span {
            id: "{id}",
            class: "field-error",
            role: "alert",
            if let Some(message) = message {
                "{message}"
            }
        }
    }
}

/// DOM id of a field's error slot
pub fn error_id(field: Field) -> String {
    format!("{}-error", field.dom_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_enter_is_suppressed() {
        assert!(suppresses_key(&Key::Enter));
        assert!(!suppresses_key(&Key::Tab));
        assert!(!suppresses_key(&Key::Character("a".to_string())));
    }

    #[test]
    fn error_slots_follow_dom_names() {
        assert_eq!(error_id(Field::Phone), "phone-error");
        assert_eq!(error_id(Field::ProjectType), "projectType-error");
    }
}
