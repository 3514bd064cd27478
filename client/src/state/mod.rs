//! Reactive state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one value of each type here; pages and components pull
//! them with `expect_context`. Domain rules stay in the `content` crate.

pub mod content_hub;
pub mod editors;
pub mod notices;
pub mod session;
