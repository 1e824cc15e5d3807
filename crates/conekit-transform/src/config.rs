//! Configuration for the backtransformation and translate passes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransformError};

/// Cone orientation: whether the build surface bulges away from the center
/// axis or recedes toward it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConeType {
    /// Surface bulges away from the center; mapped Z grows with radius.
    Outward,
    /// Surface recedes toward the center; mapped Z drops with radius.
    Inward,
}

impl ConeType {
    /// Sign applied to the cone Z offset.
    pub fn z_sign(&self) -> f64 {
        match self {
            ConeType::Outward => 1.0,
            ConeType::Inward => -1.0,
        }
    }

    /// True for the inward orientation, which flips the head by half a turn.
    pub fn is_inward(&self) -> bool {
        matches!(self, ConeType::Inward)
    }
}

impl fmt::Display for ConeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConeType::Outward => write!(f, "outward"),
            ConeType::Inward => write!(f, "inward"),
        }
    }
}

impl FromStr for ConeType {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "outward" => Ok(ConeType::Outward),
            "inward" => Ok(ConeType::Inward),
            other => Err(TransformError::UnknownConeType(other.to_string())),
        }
    }
}

/// Rotary-angle policy keeping the head oriented against the cone surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    /// Head always points along the radius through the current point.
    Radial,
    /// Head follows the normal of the travel direction, flipped to the
    /// side facing away from the center.
    Tangential,
    /// Radial on infill and hidden walls, tangential on visible perimeters.
    Mixed,
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleMode::Radial => write!(f, "radial"),
            AngleMode::Tangential => write!(f, "tangential"),
            AngleMode::Mixed => write!(f, "mixed"),
        }
    }
}

impl FromStr for AngleMode {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "radial" => Ok(AngleMode::Radial),
            "tangential" => Ok(AngleMode::Tangential),
            "mixed" => Ok(AngleMode::Mixed),
            other => Err(TransformError::UnknownAngleMode(other.to_string())),
        }
    }
}

/// Parameters of the backtransformation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Cone orientation.
    pub cone_type: ConeType,
    /// Cone half-angle in degrees, `0 <= angle < 90`.
    pub cone_angle: f64,
    /// Longest allowed pre-mapping segment; longer moves are subdivided.
    pub max_segment_length: f64,
    /// Rotary-angle strategy.
    pub angle_mode: AngleMode,
}

impl Default for TransformConfig {
    fn default() -> Self {
        TransformConfig {
            cone_type: ConeType::Outward,
            cone_angle: 45.0,
            max_segment_length: 5.0,
            angle_mode: AngleMode::Radial,
        }
    }
}

impl TransformConfig {
    /// Validate parameter ranges. Called once at setup; the per-line
    /// pipeline assumes a valid configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.cone_angle.is_finite() || self.cone_angle < 0.0 || self.cone_angle >= 90.0 {
            return Err(TransformError::InvalidConeAngle(self.cone_angle));
        }
        if !self.max_segment_length.is_finite() || self.max_segment_length <= 0.0 {
            return Err(TransformError::InvalidSegmentLength(self.max_segment_length));
        }
        Ok(())
    }
}

/// Parameters of the post-translate pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    /// Rigid shift in X.
    pub shift_x: f64,
    /// Rigid shift in Y.
    pub shift_y: f64,
    /// Desired minimum Z after shifting (first-layer height); also the
    /// floor no Z may fall below.
    pub z_min: f64,
    /// Nozzle misalignment along the head direction.
    pub offset_parallel: f64,
    /// Nozzle misalignment across the head direction.
    pub offset_perpendicular: f64,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        TranslateConfig {
            shift_x: 0.0,
            shift_y: 0.0,
            z_min: 0.3,
            offset_parallel: 0.0,
            offset_perpendicular: 0.0,
        }
    }
}

impl TranslateConfig {
    /// Validate that every parameter is a finite number.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("shift_x", self.shift_x),
            ("shift_y", self.shift_y),
            ("z_min", self.z_min),
            ("offset_parallel", self.offset_parallel),
            ("offset_perpendicular", self.offset_perpendicular),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(TransformError::InvalidTranslateParameter { name, value });
            }
        }
        Ok(())
    }
}
