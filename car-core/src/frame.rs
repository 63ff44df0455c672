//! Line-oriented command grammar
//!
//! Movement lines are `CMD: x.x,y.y` with fixed-width bias-encoded fields:
//! the wire value is the signed fraction plus 1.0, so the transport never
//! carries a sign character. `CMD:DEBUG TRUE|FALSE` toggles verbose
//! diagnostics. Anything else is rejected with a typed error; malformed or
//! out-of-range numeric fields reject the whole line rather than being
//! coerced.

use crate::directive::Directive;
use core::fmt::Write;
use defmt::Format;

/// Movement command prefix
pub const MOVE_PREFIX: &str = "CMD: ";
/// Debug toggle command prefix
pub const DEBUG_PREFIX: &str = "CMD:DEBUG ";

/// Canonical movement line length, `CMD: x.x,y.y`
pub const MOVE_LINE_LEN: usize = 12;

/// Bias added to each signed fraction on the wire
pub const WIRE_BIAS: f32 = 1.0;

// Fixed field layout within a movement line
const LATERAL_FIELD: core::ops::Range<usize> = 5..8;
const LONGITUDINAL_FIELD: core::ops::Range<usize> = 9..12;
const SEPARATOR_OFFSET: usize = 8;

/// A successfully parsed transport line
#[derive(Debug, Clone, Copy, PartialEq, Format)]
pub enum Command {
    /// Movement order, decoded back to signed fractions
    Move(Directive),
    /// Verbose diagnostics toggle
    SetVerbose(bool),
}

/// Axis a field error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Axis {
    Lateral,
    Longitudinal,
}

/// Why a transport line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum ParseError {
    /// Line does not start with a recognized command prefix
    UnknownCommand,
    /// Movement line shorter than the fixed field layout
    LineTooShort,
    /// No `,` between the two fields
    MissingSeparator,
    /// Field is not a decimal number
    BadField(Axis),
    /// Field decodes outside the transmitted range [0, 2]
    OutOfRange(Axis),
}

/// Parses one newline-terminated transport line.
///
/// The terminator (and any `\r` before it) may be present or already
/// stripped; both forms are accepted.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(rest) = line.strip_prefix(DEBUG_PREFIX) {
        return match rest {
            "TRUE" => Ok(Command::SetVerbose(true)),
            "FALSE" => Ok(Command::SetVerbose(false)),
            _ => Err(ParseError::UnknownCommand),
        };
    }

    if !line.starts_with(MOVE_PREFIX) {
        return Err(ParseError::UnknownCommand);
    }

    // Work on bytes so a stray multi-byte character cannot break slicing.
    let bytes = line.as_bytes();
    if bytes.len() < MOVE_LINE_LEN {
        return Err(ParseError::LineTooShort);
    }
    if bytes[SEPARATOR_OFFSET] != b',' {
        return Err(ParseError::MissingSeparator);
    }

    let lateral = parse_field(&bytes[LATERAL_FIELD], Axis::Lateral)?;
    let longitudinal = parse_field(&bytes[LONGITUDINAL_FIELD], Axis::Longitudinal)?;

    Ok(Command::Move(Directive {
        lateral,
        longitudinal,
    }))
}

/// Decodes one fixed-width bias-encoded field back to a signed fraction.
fn parse_field(field: &[u8], axis: Axis) -> Result<f32, ParseError> {
    let text = core::str::from_utf8(field).map_err(|_| ParseError::BadField(axis))?;
    let raw: f32 = text.parse().map_err(|_| ParseError::BadField(axis))?;
    if !(0.0..=2.0).contains(&raw) {
        return Err(ParseError::OutOfRange(axis));
    }
    Ok(raw - WIRE_BIAS)
}

/// Encodes a directive as its canonical movement line (no terminator).
///
/// The wire format carries one decimal place per field, so fractions are
/// quantized to 0.1 of full scale.
pub fn encode_move(directive: &Directive) -> heapless::String<MOVE_LINE_LEN> {
    let mut line = heapless::String::new();
    // cannot overflow: in-range fields always format as three bytes
    let _ = write!(
        line,
        "CMD: {:.1},{:.1}",
        directive.lateral + WIRE_BIAS,
        directive.longitudinal + WIRE_BIAS
    );
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement(line: &str) -> Directive {
        match parse_line(line) {
            Ok(Command::Move(d)) => d,
            other => panic!("expected movement from {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn decodes_movement_line() {
        let d = movement("CMD: 1.5,0.5");
        assert!((d.lateral - 0.5).abs() < 1e-6);
        assert!((d.longitudinal + 0.5).abs() < 1e-6);
    }

    #[test]
    fn decodes_neutral_line() {
        let d = movement("CMD: 1.0,1.0");
        assert_eq!(d, Directive::NEUTRAL);
    }

    #[test]
    fn decodes_full_scale_endpoints() {
        let d = movement("CMD: 0.0,2.0");
        assert!((d.lateral + 1.0).abs() < 1e-6);
        assert!((d.longitudinal - 1.0).abs() < 1e-6);
    }

    #[test]
    fn accepts_line_terminators() {
        assert_eq!(movement("CMD: 1.5,0.5\n"), movement("CMD: 1.5,0.5\r\n"));
    }

    #[test]
    fn rejects_unknown_command() {
        assert_eq!(parse_line("garbage"), Err(ParseError::UnknownCommand));
        assert_eq!(parse_line(""), Err(ParseError::UnknownCommand));
    }

    #[test]
    fn rejects_short_movement_line() {
        assert_eq!(parse_line("CMD: 1.5"), Err(ParseError::LineTooShort));
        assert_eq!(parse_line("CMD: 1.5,0."), Err(ParseError::LineTooShort));
    }

    #[test]
    fn rejects_missing_separator() {
        assert_eq!(parse_line("CMD: 1.5;0.5"), Err(ParseError::MissingSeparator));
    }

    #[test]
    fn rejects_malformed_field() {
        assert_eq!(
            parse_line("CMD: a.b,1.0"),
            Err(ParseError::BadField(Axis::Lateral))
        );
        assert_eq!(
            parse_line("CMD: 1.0,x.y"),
            Err(ParseError::BadField(Axis::Longitudinal))
        );
    }

    #[test]
    fn rejects_out_of_range_field() {
        assert_eq!(
            parse_line("CMD: 3.5,1.0"),
            Err(ParseError::OutOfRange(Axis::Lateral))
        );
        assert_eq!(
            parse_line("CMD: 1.0,2.1"),
            Err(ParseError::OutOfRange(Axis::Longitudinal))
        );
    }

    #[test]
    fn parses_debug_toggle() {
        assert_eq!(parse_line("CMD:DEBUG TRUE"), Ok(Command::SetVerbose(true)));
        assert_eq!(
            parse_line("CMD:DEBUG FALSE\n"),
            Ok(Command::SetVerbose(false))
        );
        assert_eq!(parse_line("CMD:DEBUG MAYBE"), Err(ParseError::UnknownCommand));
    }

    #[test]
    fn encodes_canonical_line() {
        let d = Directive {
            lateral: 0.5,
            longitudinal: -0.5,
        };
        assert_eq!(encode_move(&d).as_str(), "CMD: 1.5,0.5");
        assert_eq!(encode_move(&Directive::NEUTRAL).as_str(), "CMD: 1.0,1.0");
    }

    #[test]
    fn decode_then_encode_is_identity_on_wire_lattice() {
        // every representable wire value pair, 0.0 through 2.0 in tenths
        for i in 0..=20u32 {
            for j in 0..=20u32 {
                let line = format!("CMD: {:.1},{:.1}", i as f32 / 10.0, j as f32 / 10.0);
                let d = movement(&line);
                assert!(d.in_range(), "{line} decoded out of range");
                assert_eq!(encode_move(&d).as_str(), line, "round trip of {line}");
            }
        }
    }
}
