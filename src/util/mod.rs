//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! navigation, theme) from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod redirect;
pub mod storage;
pub mod theme;
pub mod token;
