//! Client state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data types held in `RwSignal`s and provided via Leptos context.
//! Mutations live here as methods so they can be tested natively.

pub mod admin;
pub mod cart;
pub mod forms;
pub mod notice;
