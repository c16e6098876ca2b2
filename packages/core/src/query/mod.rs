//! Structured Query Translation
//!
//! Converts the typed filter list into the document-store selector form.
//! The live Gateway wire forwards structured filters verbatim; the selector
//! form is the store-native representation exposed by this crate's query
//! API.

pub mod selector;

pub use selector::to_selector;
