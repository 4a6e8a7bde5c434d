use dioxus::prelude::*;

use crate::context::{get_data_dir, get_max_words, open_contact_form};
use crate::pages::Contact;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Contact page with the form
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Contact {},
}

/// Root application component.
///
/// Provides global styles, the contact form context, and routing.
#[component]
pub fn App() -> Element {
    // One form per page session; its history is loaded from the store here
    let form = use_signal(|| open_contact_form(&get_data_dir(), get_max_words()));
    use_context_provider(|| form);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
