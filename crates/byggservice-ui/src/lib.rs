//! Gjøvik Byggservice form components
//!
//! Dioxus components for the contact form. They hold no rules of their own:
//! word limits, validation messages and dialog contents all come from
//! `byggservice-core`.
//!
//! ## Components
//!
//! - [`Input`] / [`Select`]: labelled fields with an inline error slot
//! - [`BoundedTextArea`] + [`WordCounter`]: the word-limited description
//! - [`FormModal`]: success, error and rate-limit dialogs
//! - [`Button`]

pub mod components;

pub use components::*;
