//! Utility helpers shared across console UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, dialogs) from page and
//! component logic, and keep display formatting testable.

pub mod dialog;
pub mod display;
pub mod filter;
pub mod storage;
