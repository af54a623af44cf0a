//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, document) from page and
//! state logic so the latter stays testable natively.

pub mod auth;
pub mod generation;
pub mod storage;
