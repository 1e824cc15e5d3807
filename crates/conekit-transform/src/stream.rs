//! Structured output stream.
//!
//! Every rewritten line is an explicit variant; inserted commands
//! (rotation-only moves, retracts, axis resets) are data, not spliced
//! strings, so the translate pass and tests can see what they are.

use std::fmt;

use conekit_core::MotionCommand;

/// One line of the rewritten stream.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputLine {
    /// A transformed motion line.
    Move(MotionCommand),
    /// Rotary-only move, inserted for a rotation too large to ride on a
    /// motion line.
    Rotation { u: f64 },
    /// Filament retract before an inserted rotation.
    Retract { e: f64 },
    /// Re-prime after an inserted rotation.
    Reextrude { e: f64 },
    /// `G92` rotary coordinate reset; repositions the counter without
    /// moving the axis.
    AxisReset { u: f64 },
    /// A line passed through untransformed.
    Raw(String),
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputLine::Move(cmd) => write!(f, "{}", cmd),
            OutputLine::Rotation { u } => write!(f, "G1 U{:.2}", u),
            OutputLine::Retract { e } => write!(f, "G1 E{:.3}", e),
            OutputLine::Reextrude { e } => write!(f, "G1 E{:.3}", e),
            OutputLine::AxisReset { u } => write!(f, "G92 U{:.2}", u),
            OutputLine::Raw(text) => f.write_str(text),
        }
    }
}

/// Render a stream to G-code text, one line per entry.
pub fn render(lines: &[OutputLine]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserted_command_formats() {
        assert_eq!(OutputLine::Rotation { u: 190.0 }.to_string(), "G1 U190.00");
        assert_eq!(OutputLine::Retract { e: -0.8 }.to_string(), "G1 E-0.800");
        assert_eq!(OutputLine::Reextrude { e: 0.8 }.to_string(), "G1 E0.800");
        assert_eq!(
            OutputLine::AxisReset { u: -170.25 }.to_string(),
            "G92 U-170.25"
        );
    }

    #[test]
    fn test_raw_is_verbatim() {
        let line = OutputLine::Raw("M106 S255 ; fan".to_string());
        assert_eq!(line.to_string(), "M106 S255 ; fan");
    }

    #[test]
    fn test_render_joins_lines() {
        let lines = vec![
            OutputLine::Raw("; start".to_string()),
            OutputLine::Rotation { u: 10.0 },
        ];
        assert_eq!(render(&lines), "; start\nG1 U10.00\n");
    }
}
