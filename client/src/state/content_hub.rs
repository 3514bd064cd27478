//! Published content snapshot for the public pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps one [`ContentAggregator`] over browser storage. The aggregator's
//! observer copies each refreshed snapshot into a signal, so every view that
//! reads [`ContentHub::snapshot`] re-renders after an admin mutation.
//!
//! DESIGN
//! ======
//! The signal starts at the bundled defaults on both server and browser so
//! hydration sees identical markup; the first [`ContentHub::refresh`] runs in
//! an effect after mount and swaps in whatever `localStorage` holds.

use content::{ContentAggregator, ContentSnapshot, ContentStore};
use leptos::prelude::*;

use crate::util::browser_storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct ContentHub {
    snapshot: RwSignal<ContentSnapshot>,
    aggregator: StoredValue<ContentAggregator<BrowserStorage>>,
}

impl ContentHub {
    pub fn new() -> Self {
        let snapshot = RwSignal::new(ContentSnapshot::defaults());
        let mut aggregator = ContentAggregator::new(ContentStore::new(BrowserStorage));
        aggregator.subscribe(move |next| snapshot.set(next.clone()));
        Self { snapshot, aggregator: StoredValue::new(aggregator) }
    }

    pub fn snapshot(&self) -> ReadSignal<ContentSnapshot> {
        self.snapshot.read_only()
    }

    /// Re-read every collection and republish.
    pub fn refresh(&self) {
        self.aggregator.update_value(|aggregator| {
            aggregator.refresh();
        });
    }
}

impl Default for ContentHub {
    fn default() -> Self {
        Self::new()
    }
}
