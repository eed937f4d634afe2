//! Configuration management
//!
//! The browser configuration document being edited, plus the small local
//! key-value store that remembers credentials between sessions.

pub mod document;
pub mod storage;

pub use document::{AllowedSite, Bookmark, ConfigDocument};
pub use storage::LocalStore;
