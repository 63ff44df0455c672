//! Car control firmware entry point
//!
//! Brings up the transport UART and motor outputs, constructs the directive
//! handoff and spawns the two control tasks.

#![no_std]
#![no_main]

use crate::task::{command_receive::command_receive, drive::drive};
use car_core::handoff::Handoff;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use embassy_rp::uart;
use system::resources::{
    self, AssignedResources, DebugHeaderResources, MotorDriverResources, RadioResources,
};
use {defmt_rtt as _, panic_probe as _};

#[cfg(all(feature = "transport-radio", feature = "transport-debug"))]
compile_error!("features `transport-radio` and `transport-debug` are mutually exclusive");
#[cfg(not(any(feature = "transport-radio", feature = "transport-debug")))]
compile_error!("select a transport: `transport-radio` or `transport-debug`");

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Single-slot directive handoff between the receiver and drive tasks.
/// Constructed once here; both tasks get a handle at spawn time.
static HANDOFF: Handoff = Handoff::new();

/// System core modules
mod system;
/// Task implementations
mod task;

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups so each task owns its pins.
    let r = split_resources!(p);

    let mut uart_config = uart::Config::default();
    uart_config.baudrate = resources::TRANSPORT_BAUD;

    // The transport is chosen once at build time; the receiver task only
    // ever sees a ready-made rx half.
    #[cfg(feature = "transport-radio")]
    let rx = uart::UartRx::new(
        r.radio.uart,
        r.radio.rx_pin,
        resources::Irqs,
        r.radio.dma,
        uart_config,
    );
    #[cfg(feature = "transport-debug")]
    let rx = uart::UartRx::new(
        r.debug_header.uart,
        r.debug_header.rx_pin,
        resources::Irqs,
        r.debug_header.dma,
        uart_config,
    );

    spawner.spawn(command_receive(rx, &HANDOFF)).unwrap();
    spawner.spawn(drive(r.motor_driver, &HANDOFF)).unwrap();
}
