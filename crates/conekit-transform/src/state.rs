//! Machine state carried across the pass.

/// Running state of the virtual machine during backtransformation.
///
/// Owned and mutated exclusively by the orchestrator; strategies and
/// clamps receive the values they need as arguments.
#[derive(Debug, Clone)]
pub struct MachineState {
    /// Current planar X position (pre-mapping coordinates).
    pub x: f64,
    /// Current planar Y position (pre-mapping coordinates).
    pub y: f64,
    /// Layer height of the current move, from the latest Z word.
    pub z_layer: f64,
    /// Continuous rotary angle, radians, unbounded.
    pub angle: f64,
    /// Highest mapped Z reached while extruding; never decreases.
    pub z_max: f64,
    /// Whether the current move carried an X word.
    pub update_x: bool,
    /// Whether the current move carried a Y word.
    pub update_y: bool,
}

impl Default for MachineState {
    fn default() -> Self {
        MachineState {
            x: 0.0,
            y: 0.0,
            z_layer: 0.0,
            angle: 0.0,
            z_max: 0.0,
            update_x: false,
            update_y: false,
        }
    }
}

impl MachineState {
    pub fn new() -> Self {
        MachineState::default()
    }

    /// Raise the extrusion ceiling; keeps `z_max` monotone.
    pub fn raise_z_max(&mut self, z: f64) {
        if z > self.z_max {
            self.z_max = z;
        }
    }
}
