//! Drive control task
//!
//! Owns the motor outputs and runs the fixed-rate control cycle: drain the
//! directive handoff, supervise staleness, convert the active directive into
//! per-motor drive signals and apply them. The cycle sleeps for its period
//! but never awaits the channel.

use crate::system::motor::{MotorChannel, PwmChannel};
use crate::system::resources::MotorDriverResources;
use car_core::duty;
use car_core::handoff::Handoff;
use car_core::watchdog::{Freshness, StalenessWatchdog};
use car_core::Directive;
use defmt::{info, warn};
use embassy_rp::gpio;
use embassy_rp::pwm;
use embassy_time::{Duration, Instant, Timer};

/// Control cycle period
const DRIVE_CYCLE: Duration = Duration::from_millis(10);

/// Silence period after which the car stops itself
const DIRECTIVE_TIMEOUT: Duration = Duration::from_millis(200);

/// H-bridge enable PWM frequency; cheaper brushed motors behave better at
/// lower frequencies
const PWM_FREQ_HZ: u32 = 10_000;

/// Drive control task
#[embassy_executor::task]
pub async fn drive(r: MotorDriverResources, handoff: &'static Handoff) {
    let clock_freq_hz = embassy_rp::clocks::clk_sys_freq();

    // Calculate minimum divider needed to keep period under 16-bit limit (65535)
    let divider = ((clock_freq_hz / PWM_FREQ_HZ) / 65535 + 1) as u8;
    let period = (clock_freq_hz / (PWM_FREQ_HZ * divider as u32)) as u16 - 1;

    let mut pwm_config = pwm::Config::default();
    pwm_config.divider = divider.into();
    pwm_config.top = period;

    // left motor
    let left_fwd = gpio::Output::new(r.left_forward_pin, gpio::Level::Low);
    let left_bckw = gpio::Output::new(r.left_backward_pin, gpio::Level::Low);
    let left_pwm = pwm::Pwm::new_output_a(r.left_slice, r.left_pwm_pin, pwm_config.clone());
    let mut left =
        MotorChannel::new(left_fwd, left_bckw, left_pwm, pwm_config.clone(), PwmChannel::A);

    // right motor
    let right_fwd = gpio::Output::new(r.right_forward_pin, gpio::Level::Low);
    let right_bckw = gpio::Output::new(r.right_backward_pin, gpio::Level::Low);
    let right_pwm = pwm::Pwm::new_output_b(r.right_slice, r.right_pwm_pin, pwm_config.clone());
    let mut right = MotorChannel::new(right_fwd, right_bckw, right_pwm, pwm_config, PwmChannel::B);

    let mut current = Directive::NEUTRAL;
    let mut watchdog =
        StalenessWatchdog::new(DIRECTIVE_TIMEOUT.as_ticks(), Instant::now().as_ticks());

    info!("drive task up, cycle {}ms", DRIVE_CYCLE.as_millis());

    loop {
        match handoff.try_take() {
            Some(directive) => {
                current = directive;
                watchdog.feed(Instant::now().as_ticks());
            }
            None => {
                if watchdog.check(Instant::now().as_ticks()) == Freshness::Stale
                    && !current.is_neutral()
                {
                    warn!(
                        "no directive for {}ms, stopping",
                        DIRECTIVE_TIMEOUT.as_millis()
                    );
                    current = Directive::NEUTRAL;
                }
            }
        }

        let (left_signal, right_signal) = duty::split(&current);
        left.apply(left_signal);
        right.apply(right_signal);

        Timer::after(DRIVE_CYCLE).await;
    }
}
