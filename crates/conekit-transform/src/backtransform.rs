//! The backtransformation pass.
//!
//! One sequential sweep over the stream: motion lines are remapped onto
//! the cone, subdivided, annotated with rotary angles, and re-emitted;
//! everything else passes through verbatim. All cross-line coupling lives
//! in [`MachineState`], owned here and nowhere else.

use conekit_core::{parse_line, GcodeLine, MotionCommand};
use tracing::{debug, warn};

use crate::angle::wrap_to_pi;
use crate::cone::ConeMapping;
use crate::config::TransformConfig;
use crate::error::Result;
use crate::region::RegionTracker;
use crate::rescale::{rescale_extrusion, ROTATION_RETRACT};
use crate::segment::Segmenter;
use crate::state::MachineState;
use crate::stream::OutputLine;
use crate::unwrap::{round_to, unwrap_angles};

/// Largest rotation allowed to ride on a motion line, degrees.
const MAX_INLINE_ROTATION: f64 = 30.0;
/// Continuous-angle magnitude (degrees) beyond which the rotary counter is
/// reset with a `G92`.
const AXIS_RESET_LIMIT: f64 = 3600.0;
/// Clearance above the highest extruded point for travel moves.
const TRAVEL_CLEARANCE: f64 = 1.0;

/// Drives the backtransformation over a G-code stream.
pub struct Backtransformer {
    config: TransformConfig,
    cone: ConeMapping,
    segmenter: Segmenter,
    state: MachineState,
    region: RegionTracker,
    warned_relative: bool,
    warned_absolute_e: bool,
}

impl Backtransformer {
    /// Validate the configuration and set up a pass.
    pub fn new(config: TransformConfig) -> Result<Self> {
        config.validate()?;
        let cone = ConeMapping::from_config(&config);
        let segmenter = Segmenter::new(config.max_segment_length);
        Ok(Backtransformer {
            config,
            cone,
            segmenter,
            state: MachineState::new(),
            region: RegionTracker::new(),
            warned_relative: false,
            warned_absolute_e: false,
        })
    }

    /// Transform a whole stream in input order.
    pub fn transform<'a, I>(&mut self, lines: I) -> Vec<OutputLine>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut out = Vec::new();
        for line in lines {
            self.process_line(line, &mut out);
        }
        out
    }

    /// Process one input line, appending its rewritten form to `out`.
    pub fn process_line(&mut self, line: &str, out: &mut Vec<OutputLine>) {
        self.region.observe(line);
        self.check_modal_words(line);

        match parse_line(line) {
            GcodeLine::Move(cmd) if cmd.has_geometry() => self.emit_move(cmd, out),
            // Moves without any of X/Y/Z have no geometry to transform.
            _ => out.push(OutputLine::Raw(line.to_string())),
        }
    }

    fn emit_move(&mut self, cmd: MotionCommand, out: &mut Vec<OutputLine>) {
        let inward = self.config.cone_type.is_inward();
        let mode = self.config.angle_mode;
        let visible = self.region.visible();
        let extruding = cmd.is_extruding();

        let x_new = cmd.x.unwrap_or(self.state.x);
        let y_new = cmd.y.unwrap_or(self.state.y);
        self.state.update_x = cmd.x.is_some();
        self.state.update_y = cmd.y.is_some();
        if let Some(z) = cmd.z {
            self.state.z_layer = z;
        }

        let plan = self.segmenter.plan(
            &self.cone,
            (self.state.x, self.state.y),
            (x_new, y_new),
            self.state.z_layer,
        );
        let num_segments = plan.num_segments();
        let mut points = plan.points;

        // Depositing moves raise the ceiling; travels are capped to a flat
        // top just above it so the nozzle never dives back onto the part.
        if extruding {
            let peak = points.iter().map(|p| p.2).fold(f64::NEG_INFINITY, f64::max);
            self.state.raise_z_max(peak);
        } else {
            for point in &mut points {
                point.2 = point.2.min(self.state.z_max + TRAVEL_CLEARANCE);
            }
        }

        // Raw angle per sub-move boundary; element 0 carries continuity.
        let mut raw_angles = Vec::with_capacity(num_segments + 1);
        raw_angles.push(self.state.angle);
        if mode.holds_angle_without_xy() && !self.state.update_x && !self.state.update_y {
            let held = wrap_to_pi(self.state.angle);
            raw_angles.resize(num_segments + 1, held);
        } else if mode.per_segment_sampling(extruding, visible) {
            for pair in points.windows(2) {
                let start = (pair[0].0, pair[0].1);
                let end = (pair[1].0, pair[1].1);
                raw_angles.push(mode.angle_for(start, end, inward, visible));
            }
        } else {
            let start = (points[0].0, points[0].1);
            let end = (points[num_segments].0, points[num_segments].1);
            let shared = mode.angle_for(start, end, inward, visible);
            raw_angles.resize(num_segments + 1, shared);
        }
        let u_values = unwrap_angles(&raw_angles);

        // Whole-move rescale folds in the mapping scale; the per-segment
        // pass below apportions by mapped chord length.
        let planar_share = plan.planar_distance / num_segments as f64;
        let e_template = cmd
            .e
            .map(|e| rescale_extrusion(e, num_segments as f64, 1.0, self.cone.scale()));

        for j in 0..num_segments {
            let (px, py, pz) = points[j];
            let (x, y, z) = points[j + 1];
            let chord = ((x - px).powi(2) + (y - py).powi(2) + (z - pz).powi(2)).sqrt();

            let mut sub = MotionCommand::new(cmd.mode);
            sub.x = cmd.x.map(|_| x);
            sub.y = cmd.y.map(|_| y);
            sub.z = Some(z);
            sub.e = e_template.map(|e| rescale_extrusion(e, planar_share, chord, 1.0));
            sub.extras = cmd.extras.clone();
            sub.comment = cmd.comment.clone();

            let step = u_values[j + 1] - u_values[j];
            if step.abs() <= MAX_INLINE_ROTATION {
                sub.u = Some(u_values[j + 1]);
                out.push(OutputLine::Move(sub));
            } else {
                // Too large to combine with motion: retract, swing the
                // head alone, re-prime, then run the move without U.
                debug!(step, "inserting standalone rotation");
                out.push(OutputLine::Retract {
                    e: -ROTATION_RETRACT,
                });
                out.push(OutputLine::Rotation {
                    u: u_values[j + 1],
                });
                out.push(OutputLine::Reextrude { e: ROTATION_RETRACT });
                out.push(OutputLine::Move(sub));
            }
        }

        // Continuity baseline for the next move; a counter past the safe
        // range is re-referenced to the wrapped angle instead.
        if u_values.iter().any(|u| u.abs() > AXIS_RESET_LIMIT) {
            let raw_final = raw_angles[num_segments];
            let reset_u = round_to(raw_final.to_degrees(), 2);
            debug!(u = reset_u, "rotary counter beyond safe range, resetting");
            out.push(OutputLine::AxisReset { u: reset_u });
            self.state.angle = raw_final;
        } else {
            self.state.angle = u_values[num_segments].to_radians();
        }

        if self.state.update_x {
            self.state.x = x_new;
            self.state.update_x = false;
        }
        if self.state.update_y {
            self.state.y = y_new;
            self.state.update_y = false;
        }
    }

    /// One-time warnings for modal words the transform cannot honor.
    fn check_modal_words(&mut self, line: &str) {
        match line.split_whitespace().next() {
            Some("G91") if !self.warned_relative => {
                self.warned_relative = true;
                warn!("G91 relative positioning found; output assumes absolute XYZ targets");
            }
            Some("M82") if !self.warned_absolute_e => {
                self.warned_absolute_e = true;
                warn!("M82 absolute extrusion found; extrusion is rescaled as per-move amounts");
            }
            _ => {}
        }
    }
}

/// One-shot backtransformation of a whole stream.
pub fn backtransform(lines: &[String], config: &TransformConfig) -> Result<Vec<OutputLine>> {
    let mut transformer = Backtransformer::new(config.clone())?;
    Ok(transformer.transform(lines.iter().map(String::as_str)))
}
