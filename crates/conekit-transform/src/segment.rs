//! Move subdivision.
//!
//! A long straight move on the plane bends once mapped onto the cone, so
//! moves are split until the chordal deviation stays acceptable. The split
//! count comes from the pre-mapping distance; interpolation happens on the
//! already-scaled coordinates, with the cone Z recomputed at every sample.

use crate::cone::ConeMapping;

/// Sub-point samples for one move in mapped space.
#[derive(Debug, Clone)]
pub struct SegmentPlan {
    /// `num_segments + 1` mapped points including the start point.
    pub points: Vec<(f64, f64, f64)>,
    /// Planar distance of the whole move before mapping.
    pub planar_distance: f64,
}

impl SegmentPlan {
    pub fn num_segments(&self) -> usize {
        self.points.len() - 1
    }
}

/// Splits moves against a maximum pre-mapping segment length.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter {
    max_length: f64,
}

impl Segmenter {
    pub fn new(max_length: f64) -> Self {
        Segmenter { max_length }
    }

    /// Plan the sub-points for a move from `from` to `to` (planar
    /// coordinates) at layer height `z_layer`.
    ///
    /// A move with no XY delta still yields one segment, so Z-only and
    /// extrusion-only moves flow through the same path.
    pub fn plan(
        &self,
        cone: &ConeMapping,
        from: (f64, f64),
        to: (f64, f64),
        z_layer: f64,
    ) -> SegmentPlan {
        let planar_distance = (to.0 - from.0).hypot(to.1 - from.1);
        let num_segments = (planar_distance / self.max_length).floor() as usize + 1;

        let (start_x, start_y) = cone.map_xy(from.0, from.1);
        let (end_x, end_y) = cone.map_xy(to.0, to.1);

        let mut points = Vec::with_capacity(num_segments + 1);
        for i in 0..=num_segments {
            let t = i as f64 / num_segments as f64;
            let x = start_x + (end_x - start_x) * t;
            let y = start_y + (end_y - start_y) * t;
            points.push((x, y, z_layer + cone.z_offset(x, y)));
        }

        SegmentPlan {
            points,
            planar_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConeType;

    const EPS: f64 = 1e-6;

    fn cone_45() -> ConeMapping {
        ConeMapping::new(ConeType::Outward, 45.0)
    }

    #[test]
    fn test_split_count_uses_planar_distance() {
        // 10 mm planar move against a 5 mm limit: floor(10/5) + 1 = 3.
        let plan = Segmenter::new(5.0).plan(&cone_45(), (0.0, 0.0), (10.0, 0.0), 0.0);
        assert_eq!(plan.num_segments(), 3);
        assert!((plan.planar_distance - 10.0).abs() < EPS);
    }

    #[test]
    fn test_two_way_split_positions() {
        let plan = Segmenter::new(6.0).plan(&cone_45(), (0.0, 0.0), (10.0, 0.0), 0.0);
        assert_eq!(plan.num_segments(), 2);
        let half = 10.0 / 2.0_f64.sqrt() / 2.0;
        assert!((plan.points[1].0 - half).abs() < EPS);
        assert!((plan.points[2].0 - 2.0 * half).abs() < EPS);
        // On the 45-degree outward cone each sample's Z offset equals its
        // radius.
        assert!((plan.points[1].2 - half).abs() < EPS);
        assert!((plan.points[2].2 - 2.0 * half).abs() < EPS);
    }

    #[test]
    fn test_short_move_is_single_segment() {
        let plan = Segmenter::new(5.0).plan(&cone_45(), (0.0, 0.0), (3.0, 0.0), 1.0);
        assert_eq!(plan.num_segments(), 1);
        assert_eq!(plan.points.len(), 2);
    }

    #[test]
    fn test_zero_distance_move() {
        let plan = Segmenter::new(5.0).plan(&cone_45(), (4.0, 3.0), (4.0, 3.0), 2.0);
        assert_eq!(plan.num_segments(), 1);
        assert_eq!(plan.planar_distance, 0.0);
        assert_eq!(plan.points[0], plan.points[1]);
    }

    #[test]
    fn test_layer_z_is_not_interpolated() {
        // The layer height applies uniformly; only the cone offset varies.
        let plan = Segmenter::new(5.0).plan(&cone_45(), (0.0, 0.0), (10.0, 0.0), 4.0);
        for (i, &(x, y, z)) in plan.points.iter().enumerate() {
            let radius = x.hypot(y);
            assert!((z - (4.0 + radius)).abs() < EPS, "sample {}", i);
        }
    }

    #[test]
    fn test_endpoints_are_exact() {
        let cone = cone_45();
        let plan = Segmenter::new(2.0).plan(&cone, (-3.0, 7.0), (11.0, -4.0), 0.5);
        let (sx, sy) = cone.map_xy(-3.0, 7.0);
        let (ex, ey) = cone.map_xy(11.0, -4.0);
        assert_eq!((plan.points[0].0, plan.points[0].1), (sx, sy));
        let last = plan.points[plan.points.len() - 1];
        assert_eq!((last.0, last.1), (ex, ey));
    }

    #[test]
    fn test_mapped_sub_chords_stay_bounded() {
        let cone = cone_45();
        let max_length = 5.0;
        let plan = Segmenter::new(max_length).plan(&cone, (0.0, 0.0), (14.0, 3.0), 0.0);
        let bound = max_length * cone.scale() + 1e-9;
        for pair in plan.points.windows(2) {
            let chord = (pair[1].0 - pair[0].0).hypot(pair[1].1 - pair[0].1);
            assert!(chord <= bound, "chord {} exceeds {}", chord, bound);
        }
    }
}
