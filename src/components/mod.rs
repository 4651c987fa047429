//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and read shared state from Leptos context
//! providers; route-level orchestration stays in `pages`.

pub mod features;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod protected;
pub mod stats;
