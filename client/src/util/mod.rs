//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate environment concerns (persistence) from session
//! and navigation logic to improve reuse and testability.

pub mod storage;
