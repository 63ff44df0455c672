//! Command receiver task
//!
//! Assembles newline-terminated lines from the transport UART, parses them
//! against the command grammar and publishes movement directives to the
//! handoff channel. Every anomaly is handled here with a diagnostic; nothing
//! escapes the task and the transport is never blocked on the channel.

use crate::system::diag;
use car_core::frame::{self, Command};
use car_core::handoff::Handoff;
use defmt::{info, warn};
use embassy_rp::uart::{Async, UartRx};
use heapless::Vec;

/// Longest accepted line; anything longer is discarded up to the next
/// terminator
const MAX_LINE_LEN: usize = 64;

/// Command receiver task
#[embassy_executor::task]
pub async fn command_receive(mut rx: UartRx<'static, Async>, handoff: &'static Handoff) {
    let mut line: Vec<u8, MAX_LINE_LEN> = Vec::new();
    let mut discarding = false;

    info!("command receiver up");

    loop {
        let mut byte = [0u8; 1];
        if let Err(e) = rx.read(&mut byte).await {
            warn!("transport read error: {}", e);
            line.clear();
            discarding = false;
            continue;
        }

        if byte[0] != b'\n' {
            if discarding {
                continue;
            }
            if line.push(byte[0]).is_err() {
                warn!("line too long, discarding");
                line.clear();
                discarding = true;
            }
            continue;
        }

        if discarding {
            discarding = false;
        } else {
            handle_line(&line, handoff);
        }
        line.clear();
    }
}

/// Parses one complete line and applies its effect.
fn handle_line(raw: &[u8], handoff: &Handoff) {
    let Ok(text) = core::str::from_utf8(raw) else {
        warn!("non-utf8 line, ignoring");
        return;
    };

    match frame::parse_line(text) {
        Ok(Command::Move(directive)) => {
            if handoff.publish(directive).is_some() {
                warn!("dropped undelivered directive");
            }
            if diag::verbose() {
                info!("accepted {}", directive);
            }
        }
        Ok(Command::SetVerbose(enabled)) => {
            diag::set_verbose(enabled);
            info!("verbose diagnostics {}", if enabled { "on" } else { "off" });
        }
        Err(e) => warn!("rejected line: {}", e),
    }
}
