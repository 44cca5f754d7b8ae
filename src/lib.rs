//! Safar library exports for testing

pub mod core;
pub mod i18n;
pub mod planner;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use i18n::Language;
