//! Utility helpers shared across section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, root classes, timers,
//! scrolling, inline styles) from component logic so the state models stay
//! testable off-browser.

pub mod animation;
pub mod dark_mode;
pub mod scroll;
pub mod timer;
