//! Global styles for the contact form.

mod styles;

pub use styles::GLOBAL_STYLES;
