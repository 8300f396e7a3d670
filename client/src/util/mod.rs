//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! to improve reuse and testability.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod dark_mode;
pub mod theme_env;
