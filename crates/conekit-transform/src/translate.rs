//! Post-transform placement pass.
//!
//! Shifts the finished toolpath on the build plate, floors the lowest
//! depositing layer onto the bed, and compensates a nozzle mounted off the
//! rotary axis. Runs after the backtransformation so every correction
//! applies to final machine coordinates.

use tracing::debug;

use crate::config::TranslateConfig;
use crate::error::Result;
use crate::stream::OutputLine;

/// Shift and floor a transformed stream in place.
///
/// The lowest Z among lines that carry both E and Z sets the vertical
/// shift that lands the part on `z_min`; all motion is then clamped to
/// that floor. Nozzle offsets rotate with the running U angle, which is
/// read off a line before its coordinates are adjusted.
pub fn translate(lines: &mut [OutputLine], config: &TranslateConfig) -> Result<()> {
    config.validate()?;

    let lowest = lines
        .iter()
        .filter_map(|line| match line {
            OutputLine::Move(cmd) if cmd.e.is_some() => cmd.z,
            _ => None,
        })
        .fold(f64::INFINITY, f64::min);
    let shift = if lowest.is_finite() {
        config.z_min - lowest
    } else {
        0.0
    };
    debug!(shift, floor = config.z_min, "vertical placement computed");

    let mut angle: f64 = 0.0;
    for line in lines.iter_mut() {
        match line {
            OutputLine::Move(cmd) => {
                if let Some(u) = cmd.u {
                    angle = u.to_radians();
                }
                if let Some(x) = cmd.x.as_mut() {
                    *x += config.shift_x - config.offset_parallel * angle.cos()
                        + config.offset_perpendicular * angle.sin();
                }
                if let Some(y) = cmd.y.as_mut() {
                    *y += config.shift_y - config.offset_parallel * angle.sin()
                        - config.offset_perpendicular * angle.cos();
                }
                if let Some(z) = cmd.z.as_mut() {
                    *z = (*z + shift).max(config.z_min);
                }
            }
            OutputLine::Rotation { u } | OutputLine::AxisReset { u } => {
                angle = u.to_radians();
            }
            _ => {}
        }
    }
    Ok(())
}
