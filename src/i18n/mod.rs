//! # Localization
//!
//! Supplies translated strings and the text direction to the UI. The core
//! never touches this module; only the TUI adapter reads it.
//!
//! - [`language`]: `Language` and `Direction`
//! - [`strings`]: Static English and Arabic string tables
//! - [`context`]: The `Translate` trait and the session-wide `LanguageContext`

pub mod context;
pub mod language;
pub mod strings;

pub use context::{LanguageContext, Translate};
pub use language::{Direction, Language};
