//! Runtime diagnostics verbosity
//!
//! Best-effort chatter (per-directive echoes) is gated behind a flag toggled
//! over the transport with `CMD:DEBUG TRUE|FALSE`. Warnings are always
//! emitted; this flag never affects the directive path itself.

use core::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enables or disables verbose diagnostics
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

/// True when verbose diagnostics are enabled
pub fn verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}
