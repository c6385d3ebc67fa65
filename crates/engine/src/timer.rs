//! Deferred mismatch resolution.
//!
//! Holds at most one pending resolution (input is locked while it waits). The
//! token inside still carries its session generation, so even a resolution that
//! escapes cancellation is rejected by the session it was not scheduled for.

use memory_match_core::ResolutionToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    token: ResolutionToken,
    remaining_ms: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ResolutionTimer {
    pending: Option<Pending>,
}

impl ResolutionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `token` to fire after `delay_ms`. Replaces anything pending.
    pub fn schedule(&mut self, token: ResolutionToken, delay_ms: u32) {
        self.pending = Some(Pending {
            token,
            remaining_ms: delay_ms,
        });
    }

    /// Drop the pending resolution. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn remaining_ms(&self) -> Option<u32> {
        self.pending.map(|p| p.remaining_ms)
    }

    /// Let `elapsed_ms` pass; returns the token once its delay has run out.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<ResolutionToken> {
        let pending = self.pending.as_mut()?;
        pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
        if pending.remaining_ms == 0 {
            self.pending.take().map(|p| p.token)
        } else {
            None
        }
    }
}
