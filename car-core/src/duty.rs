//! Duty-cycle conversion
//!
//! Maps a signed fraction of full scale onto the H-bridge interface: a
//! rotation sense plus an 8-bit PWM duty. The mapping is deterministic with
//! no ramping, so an abrupt directive change produces an abrupt output
//! change.

use crate::directive::Directive;
use defmt::Format;
use libm::{fabsf, roundf};

/// Full-scale 8-bit duty
pub const DUTY_MAX: u8 = 255;

/// Rotation sense of one motor channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Direction {
    /// Forward motion (right for the steering axis)
    Forward,
    /// Reverse motion (left for the steering axis)
    Reverse,
}

/// One motor's drive signal: rotation sense plus 8-bit PWM duty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub struct DriveSignal {
    pub direction: Direction,
    pub duty: u8,
}

impl DriveSignal {
    /// Stopped output
    pub const STOP: Self = Self {
        direction: Direction::Forward,
        duty: 0,
    };

    /// Converts a signed fraction in [-1, 1] into a drive signal.
    ///
    /// A non-negative fraction drives forward, duty is `round(255 * |f|)`.
    pub fn from_fraction(fraction: f32) -> Self {
        let direction = if fraction >= 0.0 {
            Direction::Forward
        } else {
            Direction::Reverse
        };
        let duty = roundf(f32::from(DUTY_MAX) * fabsf(fraction)) as u8;
        Self { direction, duty }
    }
}

/// Splits a directive into (left, right) motor signals.
///
/// The left motor is driven by the lateral axis and the right motor by the
/// longitudinal axis, matching the car's wiring.
pub fn split(directive: &Directive) -> (DriveSignal, DriveSignal) {
    (
        DriveSignal::from_fraction(directive.lateral),
        DriveSignal::from_fraction(directive.longitudinal),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_selects_direction() {
        assert_eq!(DriveSignal::from_fraction(0.5).direction, Direction::Forward);
        assert_eq!(DriveSignal::from_fraction(0.0).direction, Direction::Forward);
        assert_eq!(DriveSignal::from_fraction(-0.0).direction, Direction::Forward);
        assert_eq!(
            DriveSignal::from_fraction(-0.5).direction,
            Direction::Reverse
        );
    }

    #[test]
    fn magnitude_rounds_to_eight_bits() {
        assert_eq!(DriveSignal::from_fraction(1.0).duty, 255);
        assert_eq!(DriveSignal::from_fraction(-1.0).duty, 255);
        // 255 * 0.5 = 127.5 rounds away from zero
        assert_eq!(DriveSignal::from_fraction(0.5).duty, 128);
        assert_eq!(DriveSignal::from_fraction(-0.3).duty, 77);
        assert_eq!(DriveSignal::from_fraction(0.0).duty, 0);
    }

    #[test]
    fn split_maps_axes_to_motors() {
        let (left, right) = split(&Directive {
            lateral: 0.5,
            longitudinal: -0.5,
        });
        assert_eq!(
            left,
            DriveSignal {
                direction: Direction::Forward,
                duty: 128
            }
        );
        assert_eq!(
            right,
            DriveSignal {
                direction: Direction::Reverse,
                duty: 128
            }
        );
    }

    #[test]
    fn neutral_stops_both_motors() {
        let (left, right) = split(&Directive::NEUTRAL);
        assert_eq!(left.duty, 0);
        assert_eq!(right.duty, 0);
    }
}
