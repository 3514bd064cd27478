//! Browser glue shared across the client.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` calls behind the traits and plain values
//! the `content` crate and the components expect, so SSR builds compile
//! the same code paths as no-ops.

pub mod browser_storage;
pub mod clock;
pub mod viewport;
