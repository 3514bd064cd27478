//! Reusable UI pieces shared by the public pages and the admin dashboard.

pub mod admin;
pub mod form_fields;
pub mod image_field;
pub mod magazine_flip;
pub mod navbar;
pub mod notice_toasts;
