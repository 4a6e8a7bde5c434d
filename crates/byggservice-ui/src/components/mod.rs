//! Reusable form components
//!
//! Class names match the site's stylesheet (`form-group`, `word-counter`,
//! `modal`, `btn`).

mod bounded_textarea;
mod button;
mod input;
mod modal;
mod word_counter;

pub use bounded_textarea::*;
pub use button::*;
pub use input::*;
pub use modal::*;
pub use word_counter::*;

/// Join a base class with optional extra classes
pub(crate) fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
