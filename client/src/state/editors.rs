//! Glue between admin forms and the `content` editors.
//!
//! DESIGN
//! ======
//! Each admin tab owns its editor in a signal. Every mutation goes through
//! [`Feedback::apply`], which turns the outcome into a toast and refreshes
//! the public snapshot on success, so the two can never drift apart.

use content::{CollectionEditor, ContentStore, EditableRecord, EditorError, Notice};
use leptos::prelude::*;

use crate::state::content_hub::ContentHub;
use crate::state::notices::{NoticeState, notify};
use crate::util::browser_storage::BrowserStorage;
use crate::util::clock::BrowserClock;

pub type BrowserEditor<R> = CollectionEditor<R, BrowserStorage, BrowserClock>;

/// Open the editor for `R` over browser storage.
pub fn open_editor<R: EditableRecord>() -> BrowserEditor<R> {
    CollectionEditor::open(ContentStore::new(BrowserStorage), BrowserClock)
}

/// Where mutation outcomes are reported.
#[derive(Clone, Copy)]
pub struct Feedback {
    pub hub: ContentHub,
    pub notices: RwSignal<NoticeState>,
}

impl Feedback {
    pub fn from_context() -> Self {
        Self { hub: expect_context::<ContentHub>(), notices: expect_context::<RwSignal<NoticeState>>() }
    }

    /// Show `notice` and republish content.
    pub fn succeeded(&self, notice: Option<Notice>) {
        if let Some(notice) = notice {
            notify(self.notices, notice);
        }
        self.hub.refresh();
    }

    pub fn failed(&self, notice: Notice) {
        notify(self.notices, notice);
    }

    /// Run `op` against `editor` and report the outcome. Returns `true` on
    /// success.
    pub fn apply<R>(
        &self,
        editor: RwSignal<BrowserEditor<R>>,
        op: impl FnOnce(&mut BrowserEditor<R>) -> Result<Option<Notice>, EditorError>,
    ) -> bool
    where
        R: EditableRecord + Send + Sync + 'static,
    {
        match editor.try_update(op) {
            Some(Ok(notice)) => {
                self.succeeded(notice);
                true
            }
            Some(Err(e)) => {
                log::warn!("{} editor: {e}", R::COLLECTION);
                self.failed(e.notice());
                false
            }
            None => false,
        }
    }
}
