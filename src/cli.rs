//! Command-line interface.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use conekit_transform::{TransformConfig, TranslateConfig};

use crate::settings::JobSettings;

/// Backtransform planar G-code for conical printing on a rotary-head
/// printer.
#[derive(Debug, Parser)]
#[command(name = "conekit", version, about = "Backtransforms planar G-code for conical printing", long_about = None)]
pub struct Cli {
    /// Planar G-code file from a conventional slicer
    pub input: PathBuf,

    /// Output file; defaults to `<stem>_bt_<cone>_<mode>.gcode` next to
    /// the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Cone orientation: outward or inward
    #[arg(long, default_value = "outward")]
    pub cone_type: String,

    /// Cone half-angle measured from the build plate, degrees
    #[arg(long, default_value_t = 45.0)]
    pub cone_angle: f64,

    /// Longest allowed sub-move before mapping, millimeters
    #[arg(long, default_value_t = 5.0)]
    pub max_segment_length: f64,

    /// Head orientation strategy: radial, tangential or mixed
    #[arg(long, default_value = "radial")]
    pub angle_mode: String,

    /// Plate shift along X, millimeters
    #[arg(long, default_value_t = 0.0)]
    pub shift_x: f64,

    /// Plate shift along Y, millimeters
    #[arg(long, default_value_t = 0.0)]
    pub shift_y: f64,

    /// Height the lowest deposited layer is floored to, millimeters
    #[arg(long, default_value_t = 0.3)]
    pub z_min: f64,

    /// Nozzle offset along the head direction, millimeters
    #[arg(long, default_value_t = 0.0)]
    pub offset_parallel: f64,

    /// Nozzle offset across the head direction, millimeters
    #[arg(long, default_value_t = 0.0)]
    pub offset_perpendicular: f64,

    /// Settings file (.json or .toml); takes precedence over the
    /// parameter flags
    #[arg(short, long)]
    pub settings: Option<PathBuf>,
}

impl Cli {
    /// Resolve the job settings. A settings file wins over individual
    /// flags; either way the result is validated before use.
    pub fn job_settings(&self) -> Result<JobSettings> {
        if let Some(path) = &self.settings {
            return JobSettings::load_from_file(path);
        }

        let settings = JobSettings {
            transform: TransformConfig {
                cone_type: self.cone_type.parse()?,
                cone_angle: self.cone_angle,
                max_segment_length: self.max_segment_length,
                angle_mode: self.angle_mode.parse()?,
            },
            translate: TranslateConfig {
                shift_x: self.shift_x,
                shift_y: self.shift_y,
                z_min: self.z_min,
                offset_parallel: self.offset_parallel,
                offset_perpendicular: self.offset_perpendicular,
            },
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Output path: the explicit flag, or a name derived from the input.
    pub fn output_path(&self, settings: &JobSettings) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => derived_output_path(&self.input, settings),
        }
    }
}

/// `model.gcode` printed outward with the radial strategy becomes
/// `model_bt_outward_radial.gcode` in the same directory.
pub fn derived_output_path(input: &Path, settings: &JobSettings) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    let name = format!(
        "{}_bt_{}_{}.gcode",
        stem, settings.transform.cone_type, settings.transform.angle_mode
    );
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use conekit_transform::{AngleMode, ConeType};

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["conekit", "model.gcode"]);
        let settings = cli.job_settings().unwrap();
        assert_eq!(settings.transform.cone_type, ConeType::Outward);
        assert_eq!(settings.transform.angle_mode, AngleMode::Radial);
        assert!((settings.transform.cone_angle - 45.0).abs() < 1e-9);
        assert!((settings.transform.max_segment_length - 5.0).abs() < 1e-9);
        assert!((settings.translate.z_min - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "conekit",
            "model.gcode",
            "--cone-type",
            "inward",
            "--angle-mode",
            "mixed",
            "--cone-angle",
            "16",
            "--shift-x",
            "60",
        ]);
        let settings = cli.job_settings().unwrap();
        assert_eq!(settings.transform.cone_type, ConeType::Inward);
        assert_eq!(settings.transform.angle_mode, AngleMode::Mixed);
        assert!((settings.transform.cone_angle - 16.0).abs() < 1e-9);
        assert!((settings.translate.shift_x - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_cone_type_fails() {
        let cli = Cli::parse_from(["conekit", "model.gcode", "--cone-type", "sideways"]);
        assert!(cli.job_settings().is_err());
    }

    #[test]
    fn test_derived_output_name() {
        let cli = Cli::parse_from(["conekit", "parts/model.gcode"]);
        let settings = cli.job_settings().unwrap();
        assert_eq!(
            cli.output_path(&settings),
            PathBuf::from("parts/model_bt_outward_radial.gcode")
        );
    }

    #[test]
    fn test_explicit_output_wins() {
        let cli = Cli::parse_from(["conekit", "model.gcode", "-o", "out.gcode"]);
        let settings = cli.job_settings().unwrap();
        assert_eq!(cli.output_path(&settings), PathBuf::from("out.gcode"));
    }
}
