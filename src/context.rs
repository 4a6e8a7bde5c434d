//! Contact form context.
//!
//! Provides the page session's [`ContactForm`] to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(open_contact_form(&get_data_dir(), 100)));
//!
//! // In child components
//! let form = use_contact_form();
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use byggservice_core::{ContactForm, FormConfig, LocalStore, MemoryStore, RedbStore};
use dioxus::prelude::*;

/// File holding the persisted submission history
pub const STORE_FILE: &str = "local.redb";

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the description's word limit set from command line args.
pub fn get_max_words() -> usize {
    crate::get_max_words()
}

/// Open the local store under `data_dir`.
///
/// A store that can't be opened is replaced by an in-memory one, so limits
/// then only hold for this session.
pub fn open_store(data_dir: &Path) -> Arc<dyn LocalStore> {
    let path = data_dir.join(STORE_FILE);
    match RedbStore::open(&path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!(
                "Failed to open local store at {:?}, keeping history in memory: {}",
                path,
                e
            );
            Arc::new(MemoryStore::new())
        }
    }
}

/// Build the form for one page session
pub fn open_contact_form(data_dir: &Path, max_words: usize) -> ContactForm {
    ContactForm::new(FormConfig::default(), open_store(data_dir)).with_max_words(max_words)
}

/// Hook to access the contact form from context.
///
/// # Example
///
/// ```ignore
/// let mut form = use_contact_form();
/// let outcome = form.write().submit(&raw, now_millis());
/// ```
pub fn use_contact_form() -> Signal<ContactForm> {
    use_context::<Signal<ContactForm>>()
}
