//! Extrusion rescaling.
//!
//! Mapped chords are shorter than their planar originals, so the extrusion
//! amount shrinks with them. The rescale runs twice per move: once at the
//! whole-move level with the mapping scale as correction, then per
//! sub-segment to apportion the amount by mapped chord length.

/// Fixed retract / re-extrude magnitude around a large in-place rotation.
pub const ROTATION_RETRACT: f64 = 0.8;

/// `e * new_length * correction / old_length`, with a zero-length original
/// defined as amount 0.
pub fn rescale_extrusion(e: f64, old_length: f64, new_length: f64, correction: f64) -> f64 {
    if old_length == 0.0 {
        0.0
    } else {
        e * new_length * correction / old_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_original_length() {
        assert_eq!(rescale_extrusion(1.5, 0.0, 3.0, 1.0), 0.0);
    }

    #[test]
    fn test_proportional_to_new_length() {
        let e = rescale_extrusion(2.0, 4.0, 1.0, 1.0);
        assert!((e - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_correction_factor() {
        // Whole-move form: old_length = segment count, new_length = 1,
        // correction = cos of the cone angle.
        let corr = 1.0 / 2.0_f64.sqrt();
        let e = rescale_extrusion(1.0, 2.0, 1.0, corr);
        assert!((e - corr / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_extrusion_keeps_sign() {
        let e = rescale_extrusion(-0.8, 2.0, 1.0, 1.0);
        assert!((e + 0.4).abs() < 1e-12);
    }
}
