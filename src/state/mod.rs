/// State management module
///
/// This module handles all application state, including:
/// - The puppy record type (data.rs)
/// - The fixed, lazily built catalog (catalog.rs)
/// - Screen navigation and the back-stack (nav.rs)
/// - User settings loaded from disk (settings.rs)

pub mod catalog;
pub mod data;
pub mod error;
pub mod nav;
pub mod settings;
