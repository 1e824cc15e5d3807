//! # ConeKit
//!
//! Conical-printing G-code backtransformation. A conventionally sliced
//! planar file is remapped onto a cone so a rotary-head printer can build
//! overhangs without support material: coordinates are scaled and lifted
//! onto the cone surface, long moves are subdivided, the rotary U axis is
//! driven to keep the head normal to the surface, and extrusion amounts
//! are rescaled to the new path lengths.
//!
//! ## Architecture
//!
//! ConeKit is organized as a workspace:
//!
//! 1. **conekit-core** - G-code line model, tolerant parser, formatter, file I/O
//! 2. **conekit-transform** - cone mapping, segmentation, rotary-angle strategies, translate pass
//! 3. **conekit** - the command-line binary

use std::time::Instant;

use tracing::{debug, info};

pub mod cli;
pub mod settings;

pub use cli::Cli;
pub use settings::JobSettings;

pub use conekit_transform::{backtransform, render, translate, OutputLine};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}

/// Run one backtransformation job end to end: read, transform, translate,
/// write.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    debug!(version = VERSION, built = BUILD_DATE, "conekit starting");

    let settings = cli.job_settings()?;
    let output_path = cli.output_path(&settings);

    let started = Instant::now();
    let lines = conekit_core::io::read_lines(&cli.input)?;
    info!(
        lines = lines.len(),
        input = %cli.input.display(),
        cone = %settings.transform.cone_type,
        mode = %settings.transform.angle_mode,
        "read planar G-code"
    );

    let mut output = conekit_transform::backtransform(&lines, &settings.transform)?;
    conekit_transform::translate(&mut output, &settings.translate)?;

    let moves = output
        .iter()
        .filter(|line| matches!(line, OutputLine::Move(_)))
        .count();
    let resets = output
        .iter()
        .filter(|line| matches!(line, OutputLine::AxisReset { .. }))
        .count();
    conekit_core::io::write_text(&output_path, &conekit_transform::render(&output))?;

    info!(
        moves,
        resets,
        output = %output_path.display(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "backtransformation complete"
    );
    Ok(())
}
