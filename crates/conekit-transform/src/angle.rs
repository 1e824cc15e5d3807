//! Rotary-angle strategies.
//!
//! The head must stay normal to the local cone surface while following the
//! toolpath. Three policies compute the raw angle for a sub-move from its
//! mapped planar geometry; all return values wrapped to `(-pi, pi]`, with
//! half a turn added on inward cones where the head faces the opposite way.

use std::f64::consts::PI;

use crate::config::AngleMode;

/// Wrap an angle into `(-pi, pi]`.
pub fn wrap_to_pi(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(2.0 * PI);
    if wrapped > PI {
        wrapped - 2.0 * PI
    } else {
        wrapped
    }
}

/// Head points along the radius through the end point.
pub fn radial_angle(end: (f64, f64), inward: bool) -> f64 {
    let mut angle = end.1.atan2(end.0);
    if inward {
        angle += PI;
    }
    wrap_to_pi(angle)
}

/// Head follows the normal of the travel direction, flipped to the side
/// facing away from the center so the lean matches the radial convention.
///
/// Degenerate cases: a zero-length move or an end point on the axis falls
/// back to the radial angle; a normal within 0.01 of perpendicular to the
/// radial direction keeps its own orientation (neither side faces the
/// center there).
pub fn tangential_angle(start: (f64, f64), end: (f64, f64), inward: bool) -> f64 {
    let normal = (-(end.1 - start.1), end.0 - start.0);
    let len_normal = normal.0.hypot(normal.1);
    let len_point = end.0.hypot(end.1);

    let mut angle = if len_normal * len_point == 0.0 {
        end.1.atan2(end.0)
    } else {
        let inner = (normal.0 * end.0 + normal.1 * end.1) / (len_normal * len_point);
        if inner.abs() <= 0.01 {
            normal.1.atan2(normal.0)
        } else {
            // Only the sign of the projection matters to atan2; it picks
            // the outward-facing side of the normal.
            let head = (inner * normal.0, inner * normal.1);
            head.1.atan2(head.0)
        }
    };

    if inward {
        angle += PI;
    }
    wrap_to_pi(angle)
}

impl AngleMode {
    /// Raw head angle for one sub-move, wrapped to `(-pi, pi]`.
    pub fn angle_for(
        &self,
        start: (f64, f64),
        end: (f64, f64),
        inward: bool,
        visible: bool,
    ) -> f64 {
        match self {
            AngleMode::Radial => radial_angle(end, inward),
            AngleMode::Tangential => tangential_angle(start, end, inward),
            AngleMode::Mixed => {
                if visible {
                    tangential_angle(start, end, inward)
                } else {
                    radial_angle(end, inward)
                }
            }
        }
    }

    /// Whether each sub-move samples its own angle. Tangential moves share
    /// one angle per move; mixed mode shares it only while extruding on a
    /// visible boundary, so a single perimeter stroke does not wobble.
    pub fn per_segment_sampling(&self, extruding: bool, visible: bool) -> bool {
        match self {
            AngleMode::Radial => true,
            AngleMode::Tangential => false,
            AngleMode::Mixed => !(extruding && visible),
        }
    }

    /// Tangential orientation is undefined without an XY word; the head
    /// holds its previous angle instead of swinging radially.
    pub fn holds_angle_without_xy(&self) -> bool {
        matches!(self, AngleMode::Tangential)
    }
}
