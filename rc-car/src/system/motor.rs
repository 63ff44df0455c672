//! Motor output channels
//!
//! Drives one side of the L298N H-bridge: a forward/backward direction pin
//! pair plus a PWM enable line. The 8-bit duty from the control core is
//! scaled onto the configured PWM period; duty 0 stops the motor regardless
//! of the direction pins.

use car_core::duty::{Direction, DriveSignal, DUTY_MAX};
use embassy_rp::gpio;
use embassy_rp::pwm;

/// Which compare register of the PWM slice the enable line is wired to
#[derive(Clone, Copy)]
pub enum PwmChannel {
    A,
    B,
}

/// One H-bridge channel
pub struct MotorChannel {
    forward: gpio::Output<'static>,
    backward: gpio::Output<'static>,
    pwm: pwm::Pwm<'static>,
    config: pwm::Config,
    channel: PwmChannel,
}

impl MotorChannel {
    /// Wraps an already-configured PWM output and its direction pin pair.
    ///
    /// `config` must be the configuration the PWM was created with; its
    /// `top` value defines the duty scale.
    pub fn new(
        forward: gpio::Output<'static>,
        backward: gpio::Output<'static>,
        pwm: pwm::Pwm<'static>,
        config: pwm::Config,
        channel: PwmChannel,
    ) -> Self {
        Self {
            forward,
            backward,
            pwm,
            config,
            channel,
        }
    }

    /// Applies a drive signal to the bridge.
    pub fn apply(&mut self, signal: DriveSignal) {
        match signal.direction {
            Direction::Forward => {
                self.forward.set_high();
                self.backward.set_low();
            }
            Direction::Reverse => {
                self.forward.set_low();
                self.backward.set_high();
            }
        }

        // Scale the 8-bit duty onto the PWM period. Full duty maps to
        // top + 1, which the slice treats as always-on.
        let top = u32::from(self.config.top);
        let compare = (u32::from(signal.duty) * (top + 1) / u32::from(DUTY_MAX)) as u16;
        match self.channel {
            PwmChannel::A => self.config.compare_a = compare,
            PwmChannel::B => self.config.compare_b = compare,
        }
        self.pwm.set_config(&self.config);
    }
}
