//! Toast queue for editor and session feedback.
//!
//! DESIGN
//! ======
//! Notices are plain values from the `content` crate. This module only
//! stacks them, caps how many are visible, and schedules their dismissal.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use content::Notice;
use leptos::prelude::*;

/// How long a toast stays up.
pub const NOTICE_TTL_MS: u32 = 4000;

/// Older toasts are dropped once this many are showing.
pub const MAX_VISIBLE: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl NoticeState {
    /// Queue `notice` and return its toast id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, notice });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove toast `id`. Returns whether it was still showing.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}

/// Show `notice` and dismiss it after [`NOTICE_TTL_MS`].
pub fn notify(state: RwSignal<NoticeState>, notice: Notice) {
    if notice.is_failure() {
        log::warn!("{}: {}", notice.title, notice.description);
    }
    let Some(id) = state.try_update(|s| s.push(notice)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
        state.update(|s| {
            s.dismiss(id);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
