//! Job settings persistence.
//!
//! A settings file bundles the transform and translate parameters so a
//! printer profile can be reused across jobs. JSON and TOML are accepted,
//! dispatched on the file extension; missing fields fall back to defaults.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use conekit_transform::{TransformConfig, TranslateConfig};

/// Everything one backtransformation job needs besides the file paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSettings {
    pub transform: TransformConfig,
    pub translate: TranslateConfig,
}

impl JobSettings {
    /// Load settings from a `.json` or `.toml` file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;

        let settings: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("invalid JSON settings in {}", path.display()))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .with_context(|| format!("invalid TOML settings in {}", path.display()))?
        } else {
            bail!("settings file must be .json or .toml: {}", path.display());
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.transform.validate()?;
        self.translate.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conekit_transform::{AngleMode, ConeType};
    use std::io::Write;

    #[test]
    fn test_load_toml_settings() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            "[transform]\ncone_type = \"inward\"\nangle_mode = \"tangential\"\n\n\
             [translate]\nshift_x = 60.0\n"
        )
        .unwrap();

        let settings = JobSettings::load_from_file(file.path()).unwrap();
        assert_eq!(settings.transform.cone_type, ConeType::Inward);
        assert_eq!(settings.transform.angle_mode, AngleMode::Tangential);
        // Unlisted fields keep their defaults.
        assert!((settings.transform.cone_angle - 45.0).abs() < 1e-9);
        assert!((settings.translate.shift_x - 60.0).abs() < 1e-9);
        assert!((settings.translate.z_min - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_load_json_settings() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            "{{\"transform\": {{\"cone_angle\": 16.0}}, \"translate\": {{\"z_min\": 0.2}}}}"
        )
        .unwrap();

        let settings = JobSettings::load_from_file(file.path()).unwrap();
        assert!((settings.transform.cone_angle - 16.0).abs() < 1e-9);
        assert!((settings.translate.z_min - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(JobSettings::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[transform]\ncone_angle = 90.0\n").unwrap();
        assert!(JobSettings::load_from_file(file.path()).is_err());
    }
}
