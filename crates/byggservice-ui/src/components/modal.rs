//! Form Modal Component
//!
//! Dialog for success, error and rate-limit notices. Closes on the "Lukk"
//! button, a click on the overlay, or Escape.

use byggservice_core::ModalNotice;
use dioxus::prelude::*;

use super::{Button, ButtonVariant, CallLink};

/// Whether a key press closes an open dialog
pub fn closes_modal(key: &Key) -> bool {
    *key == Key::Escape
}

/// Form Modal
///
/// Renders nothing while `notice` is `None`. At most one dialog is shown at a
/// time; a new notice replaces the open one.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FormModal {
///         notice: modal(),
///         on_close: move |_| modal.set(None),
///     }
/// }
/// ```
#[component]
pub fn FormModal(
    /// Dialog to show
    notice: Option<ModalNotice>,
    /// Callback when the dialog is closed
    on_close: EventHandler<()>,
) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };
    let kind = notice.kind;
    let modal_class = format!("modal {}", kind.class());

    rsx! {
        div {
            id: kind.id(),
            class: "modal-overlay",
            role: "dialog",
            "aria-modal": "true",
            tabindex: "-1",
            onmounted: move |e| async move {
                let _ = e.set_focus(true).await;
            },
            onclick: move |_| on_close.call(()),
            onkeydown: move |e| {
                if closes_modal(&e.key()) {
                    on_close.call(());
                }
            },

            div {
                class: "{modal_class}",
                onclick: move |e| e.stop_propagation(),

                h3 { class: "modal-title", "{notice.title}" }
                p { class: "modal-message", "{notice.message}" }

                div { class: "modal-actions",
                    if let Some(call) = notice.call_action.clone() {
                        CallLink { href: call.href, label: call.label }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_close.call(()),
                        "Lukk"
                    }
                }
            }
        }
    }
}
