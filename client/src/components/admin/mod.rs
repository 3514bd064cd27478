//! Admin dashboard tabs: overview plus one editor per collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each editor opens its own `content` editor when mounted, so switching to
//! a tab always starts from what is persisted. Mutations report through
//! [`crate::state::editors::Feedback`].

pub mod benefit_editor;
pub mod herb_editor;
pub mod home_editor;
pub mod magazine_editor;
pub mod overview;
pub mod recipe_editor;

use content::EditSession;
use leptos::prelude::*;

use crate::components::form_fields::Session;

/// Form heading: `create` while drafting, `edit` for an existing record.
pub(crate) fn heading<F: Send + Sync + 'static>(
    session: Session<F>,
    create: &'static str,
    edit: &'static str,
) -> impl Fn() -> &'static str + Copy + Send + Sync + 'static {
    move || if session.with(|s| s.as_ref().is_some_and(EditSession::is_draft)) { create } else { edit }
}

/// Submit button text matching [`heading`].
pub(crate) fn submit_label<F: Send + Sync + 'static>(
    session: Session<F>,
) -> impl Fn() -> &'static str + Copy + Send + Sync + 'static {
    heading(session, "Agregar", "Actualizar")
}

/// Close the form if it is editing `id`.
pub(crate) fn close_if_editing<F: Send + Sync + 'static>(session: Session<F>, id: content::RecordId) {
    session.update(|s| {
        if s.as_ref().and_then(EditSession::existing_id) == Some(id) {
            *s = None;
        }
    });
}
