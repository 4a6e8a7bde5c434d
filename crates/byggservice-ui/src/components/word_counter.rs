//! Live word counter under the description field.

use byggservice_core::WordBudget;
use dioxus::prelude::*;

use super::class_list;

/// Classes of the counter element for a budget
pub fn counter_class(budget: &WordBudget) -> String {
    let state = budget.state().class();
    class_list("word-counter", (!state.is_empty()).then_some(state))
}

/// Shows `n/max ord`, turning `warn` at 80 % and `exceeded` above the max
#[component]
pub fn WordCounter(budget: WordBudget) -> Element {
    let class = counter_class(&budget);

    rsx! {
        div { class: "{class}", "aria-live": "polite", "{budget.label()}" }
    }
}
