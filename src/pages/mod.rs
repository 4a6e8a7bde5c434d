//! Page components for the contact form.

mod contact;

pub use contact::Contact;
