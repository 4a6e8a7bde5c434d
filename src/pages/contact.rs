//! Contact page - the form and its dialogs.
//!
//! Every submit goes through the shared [`ContactForm`]; this page only
//! turns its outcome into DOM changes and schedules the follow-ups.
//!
//! [`ContactForm`]: byggservice_core::ContactForm

use std::collections::HashMap;

use byggservice_core::{
    now_millis, BoundedTextEditor, DraftLink, Field, FollowUp, ModalNotice, Notice, RawSubmission,
};
use byggservice_ui::{BoundedTextArea, Button, FormModal, HoneypotField, Input, Select};
use dioxus::prelude::*;

use crate::context::use_contact_form;

/// Script navigating to a draft link, handing it to the mail client
pub fn open_draft_script(link: &DraftLink) -> String {
    format!("window.location.href = {};", js_string(link.as_str()))
}

/// Script run for a notice before the page state is updated, if any
pub fn notice_script(notice: &Notice) -> Option<String> {
    match notice {
        Notice::Modal(_) => None,
        Notice::Alert(message) => Some(format!("alert({});", js_string(message))),
        Notice::FieldMessage { field, .. } => Some(format!(
            "document.getElementById({})?.focus();",
            js_string(field.dom_name())
        )),
        Notice::NativeValidity(field) => Some(format!(
            "const el = document.getElementById({}); if (el) {{ el.reportValidity(); el.focus(); }}",
            js_string(field.dom_name())
        )),
    }
}

fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Contact page component.
#[component]
pub fn Contact() -> Element {
    let mut form = use_contact_form();
    let project_types = form.read().config().project_types.clone();
    let max_words = form.read().max_words();

    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut project_type = use_signal(String::new);
    let mut website = use_signal(String::new);
    let mut editor = use_signal(|| BoundedTextEditor::with_max_words(max_words));
    let mut errors = use_signal(HashMap::<Field, String>::new);
    let mut modal = use_signal(|| Option::<ModalNotice>::None);

    let error_for = move |field: Field| errors.read().get(&field).cloned();

    let mut clear_error = move |field: Field| {
        errors.write().remove(&field);
    };

    let mut check_on_blur = move |field: Field, value: String| {
        let message = form.read().blur_message(field, &value);
        match message {
            Some(message) => {
                errors.write().insert(field, message.to_string());
            }
            None => {
                errors.write().remove(&field);
            }
        }
    };

    let mut show_notice = move |notice: Notice| {
        if let Some(script) = notice_script(&notice) {
            let _ = document::eval(&script);
        }
        match notice {
            Notice::Modal(dialog) => modal.set(Some(dialog)),
            Notice::FieldMessage { field, message } => {
                errors.write().insert(field, message);
            }
            Notice::Alert(_) | Notice::NativeValidity(_) => {}
        }
    };

    let run_follow_up = move |follow_up: FollowUp| match follow_up {
        FollowUp::OpenDraft(link) => {
            tracing::debug!("opening mail draft");
            let _ = document::eval(&open_draft_script(&link));
        }
        FollowUp::ResetForm => {
            name.set(String::new());
            phone.set(String::new());
            email.set(String::new());
            project_type.set(String::new());
            website.set(String::new());
            editor.write().reset();
            errors.write().clear();
        }
        FollowUp::DismissModal(kind) => {
            let open = modal.peek().as_ref().map(|dialog| dialog.kind);
            if open == Some(kind) {
                modal.set(None);
            }
        }
    };

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let values: HashMap<String, String> = e
            .values()
            .into_iter()
            .map(|(key, value)| (key, value.as_value()))
            .collect();
        let raw = RawSubmission::from_form_data(&values);

        let outcome = form.write().submit(&raw, now_millis());
        match outcome {
            Ok(accepted) => {
                errors.write().clear();
                show_notice(accepted.notice);
                for task in accepted.follow_ups {
                    spawn(task.fire(run_follow_up));
                }
            }
            Err(err) => {
                let notice = form.read().present(&err);
                if let Some(notice) = notice {
                    show_notice(notice);
                }
            }
        }
    };

    rsx! {
        main { class: "contact-page",
            section { class: "contact",
                h1 { class: "page-title", "Kontakt oss" }
                p { class: "lead",
                    "Fortell oss om prosjektet ditt, så tar vi kontakt."
                }

                form {
                    id: "contactForm",
                    class: "contact-form",
                    onsubmit: onsubmit,

                    Input {
                        field: Field::Name,
                        value: name(),
                        autocomplete: "name".to_string(),
                        error: error_for(Field::Name),
                        oninput: move |s| {
                            name.set(s);
                            clear_error(Field::Name);
                        },
                        onblur: move |s| check_on_blur(Field::Name, s),
                    }
                    Input {
                        field: Field::Phone,
                        input_type: "tel".to_string(),
                        value: phone(),
                        autocomplete: "tel".to_string(),
                        error: error_for(Field::Phone),
                        oninput: move |s| {
                            phone.set(s);
                            clear_error(Field::Phone);
                        },
                        onblur: move |s| check_on_blur(Field::Phone, s),
                    }
                    Input {
                        field: Field::Email,
                        input_type: "email".to_string(),
                        value: email(),
                        autocomplete: "email".to_string(),
                        error: error_for(Field::Email),
                        oninput: move |s| {
                            email.set(s);
                            clear_error(Field::Email);
                        },
                        onblur: move |s| check_on_blur(Field::Email, s),
                    }
                    Select {
                        field: Field::ProjectType,
                        value: project_type(),
                        options: project_types,
                        error: error_for(Field::ProjectType),
                        onchange: move |s| {
                            project_type.set(s);
                            clear_error(Field::ProjectType);
                        },
                    }
                    BoundedTextArea {
                        editor,
                        placeholder: "Beskriv prosjektet ditt".to_string(),
                        error: error_for(Field::Description),
                        onedit: move |_| clear_error(Field::Description),
                    }
                    HoneypotField {
                        value: website(),
                        oninput: move |s| website.set(s),
                    }

                    Button { button_type: "submit".to_string(), "Send forespørsel" }
                }
            }

            FormModal {
                notice: modal(),
                on_close: move |_| modal.set(None),
            }
        }
    }
}
