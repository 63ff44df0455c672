//! Movement directive data model
//!
//! A directive is the current commanded motion: one signed fraction of full
//! scale per axis. It is replaced wholesale each time a valid command is
//! parsed and copied by the drive task each cycle; the frame parser rejects
//! out-of-range values, so a directive in the control loop is always within
//! full scale.

use defmt::Format;
use libm::fabsf;

/// Commanded motion, one signed fraction of full scale per axis
#[derive(Debug, Clone, Copy, PartialEq, Format)]
pub struct Directive {
    /// -1.0 = full left, +1.0 = full right
    pub lateral: f32,
    /// -1.0 = full reverse, +1.0 = full forward
    pub longitudinal: f32,
}

impl Directive {
    /// Both axes at rest
    pub const NEUTRAL: Self = Self {
        lateral: 0.0,
        longitudinal: 0.0,
    };

    /// True when both axes are at rest
    pub fn is_neutral(&self) -> bool {
        self.lateral == 0.0 && self.longitudinal == 0.0
    }

    /// True when both axes are within full scale
    pub fn in_range(&self) -> bool {
        fabsf(self.lateral) <= 1.0 && fabsf(self.longitudinal) <= 1.0
    }
}

impl Default for Directive {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_neutral() {
        assert_eq!(Directive::default(), Directive::NEUTRAL);
        assert!(Directive::default().is_neutral());
    }

    #[test]
    fn non_neutral_detected() {
        let d = Directive {
            lateral: 0.0,
            longitudinal: -0.1,
        };
        assert!(!d.is_neutral());
    }

    #[test]
    fn range_check() {
        assert!(Directive {
            lateral: -1.0,
            longitudinal: 1.0
        }
        .in_range());
        assert!(!Directive {
            lateral: 1.1,
            longitudinal: 0.0
        }
        .in_range());
    }
}
