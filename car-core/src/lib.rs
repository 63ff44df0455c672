//! Hardware-independent control logic for the rc-car firmware
//!
//! Everything with pure semantics lives here so it can be unit tested on the
//! host: the movement directive data model, the line-oriented command
//! grammar, the duty-cycle conversion, the staleness watchdog and the
//! single-slot handoff channel connecting the receiver and drive tasks.

#![cfg_attr(not(test), no_std)]

pub mod directive;
pub mod duty;
pub mod frame;
pub mod handoff;
pub mod watchdog;

pub use directive::Directive;
pub use duty::{Direction, DriveSignal};
pub use frame::{Command, ParseError};
