//! Cone mapping: planar (unrolled) coordinates onto the conical surface.
//!
//! The slicer produces G-code for a virtual flat plane; the physical
//! surface is a cone with the configured half-angle. Planar X/Y shrink by
//! `cos(angle)` and every point picks up a Z offset proportional to its
//! scaled radius, signed by the cone orientation.

use crate::config::{ConeType, TransformConfig};

/// Precomputed mapping from planar coordinates to the cone.
#[derive(Debug, Clone, Copy)]
pub struct ConeMapping {
    scale: f64,
    slope: f64,
}

impl ConeMapping {
    pub fn new(cone_type: ConeType, cone_angle_deg: f64) -> Self {
        let angle = cone_angle_deg.to_radians();
        ConeMapping {
            scale: angle.cos(),
            slope: cone_type.z_sign() * angle.tan(),
        }
    }

    pub fn from_config(config: &TransformConfig) -> Self {
        ConeMapping::new(config.cone_type, config.cone_angle)
    }

    /// XY scale factor applied to planar coordinates (`cos` of the
    /// half-angle, `1/sqrt(2)` for the 45-degree cone).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Scale a planar point into mapped space.
    pub fn map_xy(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.scale, y * self.scale)
    }

    /// Cone Z offset for an already-scaled point.
    pub fn z_offset(&self, x: f64, y: f64) -> f64 {
        self.slope * x.hypot(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_outward_45_degrees() {
        let cone = ConeMapping::new(ConeType::Outward, 45.0);
        let (x, y) = cone.map_xy(10.0, 0.0);
        assert!((x - 10.0 / 2.0_f64.sqrt()).abs() < EPS);
        assert!(y.abs() < EPS);
        // At 45 degrees the Z offset equals the scaled radius.
        assert!((cone.z_offset(x, y) - x).abs() < EPS);
    }

    #[test]
    fn test_inward_offset_is_negative() {
        let cone = ConeMapping::new(ConeType::Inward, 45.0);
        let (x, y) = cone.map_xy(3.0, 4.0);
        assert!(cone.z_offset(x, y) < 0.0);
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let cone = ConeMapping::new(ConeType::Outward, 0.0);
        assert_eq!(cone.map_xy(7.5, -2.0), (7.5, -2.0));
        assert_eq!(cone.z_offset(7.5, -2.0), 0.0);
        assert_eq!(cone.scale(), 1.0);
    }

    #[test]
    fn test_sixteen_degree_cone() {
        let cone = ConeMapping::new(ConeType::Outward, 16.0);
        let (x, _) = cone.map_xy(10.0, 0.0);
        let expected_scale = 16.0_f64.to_radians().cos();
        assert!((x - 10.0 * expected_scale).abs() < EPS);
        let expected_offset = x * 16.0_f64.to_radians().tan();
        assert!((cone.z_offset(x, 0.0) - expected_offset).abs() < EPS);
    }
}
