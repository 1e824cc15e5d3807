use clap::Parser;

use conekit::{run, Cli};

#[test]
fn test_file_to_file_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ring.gcode");
    std::fs::write(&input, "M104 S210\nG1 X10 Y0 E1.0\n").unwrap();

    let cli = Cli::parse_from([
        "conekit",
        input.to_str().unwrap(),
        "--max-segment-length",
        "6",
    ]);
    run(&cli).unwrap();

    let output = dir.path().join("ring_bt_outward_radial.gcode");
    let gcode = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        gcode,
        "M104 S210\n\
         G1 X3.536 Y0.000 Z0.300 U0.00 E0.35355\n\
         G1 X7.071 Y0.000 Z3.836 U0.00 E0.35355\n"
    );
}

#[test]
fn test_settings_file_drives_the_job() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ring.gcode");
    std::fs::write(&input, "G1 X4 Y0 E0.5\n").unwrap();
    let profile = dir.path().join("profile.toml");
    std::fs::write(
        &profile,
        "[transform]\ncone_type = \"inward\"\nangle_mode = \"tangential\"\n",
    )
    .unwrap();

    let cli = Cli::parse_from([
        "conekit",
        input.to_str().unwrap(),
        "--settings",
        profile.to_str().unwrap(),
    ]);
    run(&cli).unwrap();

    // Output name is derived from the settings file's cone and strategy.
    let output = dir.path().join("ring_bt_inward_tangential.gcode");
    let gcode = std::fs::read_to_string(&output).unwrap();
    // The first inward move swings the head to -90, too far to ride on
    // the motion line.
    assert_eq!(
        gcode,
        "G1 E-0.800\n\
         G1 U-90.00\n\
         G1 E0.800\n\
         G1 X2.828 Y0.000 Z0.300 E0.35355\n"
    );
}

#[test]
fn test_missing_input_is_reported() {
    let cli = Cli::parse_from(["conekit", "/nonexistent/model.gcode"]);
    assert!(run(&cli).is_err());
}
