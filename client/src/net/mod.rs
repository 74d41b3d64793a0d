//! Networking modules for the catalog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and executes REST calls, and `types` defines the wire schema
//! shared with the catalog server.

pub mod api;
pub mod types;
