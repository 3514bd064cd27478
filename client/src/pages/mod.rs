//! Route-level pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public pages render straight from the published content snapshot. The
//! admin page is the only writer and is gated by the session.

pub mod admin;
pub mod benefits;
pub mod herbs;
pub mod home;
pub mod recipes;
