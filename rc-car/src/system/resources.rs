//! Hardware Resource Management
//!
//! Manages and allocates hardware resources (pins, peripherals) to the
//! control tasks. Each group below is owned by exactly one task after
//! `split_resources!` runs in `main`, so no pin is ever shared.
//!
//! # Resource Groups
//! - Radio: HC-06 Bluetooth module on UART1 (default transport)
//! - Debug header: wired UART0 (selected by the `transport-debug` feature)
//! - Motor driver: L298N dual H-bridge direction pins and PWM channels

use assign_resources::assign_resources;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{UART0, UART1};
use embassy_rp::uart::InterruptHandler as UartInterruptHandler;

/// Transport baud rate; the HC-06 ships configured for 9600
pub const TRANSPORT_BAUD: u32 = 9600;

assign_resources! {
    /// HC-06 Bluetooth radio, receive side only (no acknowledgments are sent)
    radio: RadioResources {
        uart: UART1,
        rx_pin: PIN_9,
        dma: DMA_CH1,
    },
    /// Wired debug header
    debug_header: DebugHeaderResources {
        uart: UART0,
        rx_pin: PIN_1,
        dma: DMA_CH0,
    },
    /// L298N dual H-bridge pins and PWM channels
    motor_driver: MotorDriverResources {
        // left motor
        left_slice: PWM_SLICE6,
        left_pwm_pin: PIN_28,
        left_forward_pin: PIN_21,
        left_backward_pin: PIN_20,
        // right motor
        right_slice: PWM_SLICE5,
        right_pwm_pin: PIN_27,
        right_forward_pin: PIN_19,
        right_backward_pin: PIN_18,
    },
}

bind_interrupts!(pub struct Irqs {
    UART0_IRQ => UartInterruptHandler<UART0>;
    UART1_IRQ => UartInterruptHandler<UART1>;
});
