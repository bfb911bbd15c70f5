//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure display
//! math from page and component logic to improve reuse and testability.

pub mod format;
pub mod guard;
pub mod poll;
pub mod storage;
