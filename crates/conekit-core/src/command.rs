//! Parsed representation of G-code lines.
//!
//! A stream is modeled as a sequence of [`GcodeLine`]s: recognized motion
//! commands become [`MotionCommand`]s, everything else stays verbatim text.
//! Commands are immutable once parsed; rewriting a move produces a new
//! record.

/// Motion word of a move line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionMode {
    /// `G0` rapid positioning.
    Rapid,
    /// `G1` controlled (feed) move.
    Feed,
}

impl MotionMode {
    /// The G-code word for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionMode::Rapid => "G0",
            MotionMode::Feed => "G1",
        }
    }
}

/// One parsed `G0`/`G1` line.
///
/// Any absent coordinate means "unchanged from the current machine state".
/// Words the parser does not interpret (feed rates, malformed numbers,
/// unknown letters) are preserved verbatim in `extras` so they survive the
/// rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionCommand {
    pub mode: MotionMode,
    /// Absolute X target, planar units.
    pub x: Option<f64>,
    /// Absolute Y target, planar units.
    pub y: Option<f64>,
    /// Absolute Z target.
    pub z: Option<f64>,
    /// Extrusion amount for this move, signed.
    pub e: Option<f64>,
    /// Rotary-axis angle, degrees.
    pub u: Option<f64>,
    /// Uninterpreted words, kept in input order.
    pub extras: Vec<String>,
    /// Trailing comment including the leading `;`.
    pub comment: Option<String>,
}

impl MotionCommand {
    /// An empty move with the given motion word.
    pub fn new(mode: MotionMode) -> Self {
        MotionCommand {
            mode,
            x: None,
            y: None,
            z: None,
            e: None,
            u: None,
            extras: Vec::new(),
            comment: None,
        }
    }

    /// True when the move deposits material.
    pub fn is_extruding(&self) -> bool {
        self.e.is_some()
    }

    /// True when the move carries at least one of X, Y, Z.
    pub fn has_geometry(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.z.is_some()
    }
}

/// One line of a G-code stream.
#[derive(Debug, Clone, PartialEq)]
pub enum GcodeLine {
    /// A recognized `G0`/`G1` motion command.
    Move(MotionCommand),
    /// Any other line, preserved verbatim (comments, other G/M words,
    /// blank lines).
    Other(String),
}
