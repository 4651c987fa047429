//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models:
//! `session` is process-wide and shared through context, `auth_form` is
//! owned by the auth page alone and never read elsewhere.

pub mod auth_form;
pub mod session;
