//! Networking modules for the identity-service REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls, `types` defines the wire schema shared with
//! the session store.

pub mod api;
pub mod types;
