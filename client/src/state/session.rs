//! Admin session state backed by [`content::session::SessionGate`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin route renders nothing sensitive until [`SessionHub::restore`]
//! has run in the browser. SSR never sees `localStorage`, so the status
//! starts as [`SessionStatus::Unknown`] everywhere and the login form or
//! dashboard appears only after hydration.

use content::session::{SessionError, SessionGate, StaticCredentials};
use leptos::prelude::*;

use crate::util::browser_storage::BrowserStorage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Unknown,
    SignedOut,
    SignedIn,
}

#[derive(Clone, Copy)]
pub struct SessionHub {
    status: RwSignal<SessionStatus>,
    gate: StoredValue<SessionGate<BrowserStorage>>,
}

impl SessionHub {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(SessionStatus::Unknown),
            gate: StoredValue::new(open_gate()),
        }
    }

    pub fn status(&self) -> ReadSignal<SessionStatus> {
        self.status.read_only()
    }

    /// Re-read the persisted marker and publish the result.
    pub fn restore(&self) {
        self.gate.set_value(open_gate());
        self.publish();
    }

    /// # Errors
    ///
    /// [`SessionError::InvalidCredentials`] on a bad pair; storage errors
    /// when the marker cannot be written.
    pub fn login(&self, username: &str, password: &str) -> Result<(), SessionError> {
        let mut outcome = Ok(());
        self.gate.update_value(|gate| outcome = gate.login(username, password));
        self.publish();
        outcome
    }

    /// Close the session. A failed marker removal is logged; the gate is
    /// closed for this page regardless.
    pub fn logout(&self) {
        self.gate.update_value(|gate| {
            if let Err(e) = gate.logout() {
                log::warn!("logout: {e}");
            }
        });
        self.publish();
    }

    fn publish(&self) {
        let signed_in = self.gate.with_value(SessionGate::is_authenticated);
        self.status.set(if signed_in { SessionStatus::SignedIn } else { SessionStatus::SignedOut });
    }
}

impl Default for SessionHub {
    fn default() -> Self {
        Self::new()
    }
}

fn open_gate() -> SessionGate<BrowserStorage> {
    SessionGate::restore(BrowserStorage, StaticCredentials::default())
}
