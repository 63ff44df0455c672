//! Single-slot directive handoff
//!
//! Connects the command receiver to the drive task with latest-wins
//! semantics: the slot only ever holds the newest undelivered directive, and
//! neither side blocks on it. Safe for one producer and one consumer; the
//! handoff is constructed once at startup and both tasks get a shared
//! handle.

use crate::directive::Directive;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// Capacity-1 latest-wins channel carrying the newest directive
pub struct Handoff {
    channel: Channel<CriticalSectionRawMutex, Directive, 1>,
}

impl Handoff {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Publishes a directive without blocking.
    ///
    /// If the slot still holds an undelivered directive it is displaced and
    /// returned so the caller can diagnose the drop.
    pub fn publish(&self, directive: Directive) -> Option<Directive> {
        match self.channel.try_send(directive) {
            Ok(()) => None,
            Err(_) => {
                let displaced = self.channel.try_receive().ok();
                // slot is free now; the single consumer only ever drains it
                let _ = self.channel.try_send(directive);
                displaced
            }
        }
    }

    /// Non-blocking drain; `None` when no new directive is pending.
    pub fn try_take(&self) -> Option<Directive> {
        self.channel.try_receive().ok()
    }
}

impl Default for Handoff {
    fn default() -> Self {
        Self::new()
    }
}
