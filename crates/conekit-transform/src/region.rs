//! Region visibility tracking for the mixed angle strategy.
//!
//! Slicer output tags sections with feature comments (`; feature outer
//! perimeter`, `; feature infill`, ...). Visible boundaries get the
//! tangential head orientation; everything else stays radial. The tracker
//! is a one-flag lexer over marker lines, separate from the motion parse.

/// Marker prefix introducing a slicer feature section.
const FEATURE_MARKER: &str = "; feature";
/// Feature names printed on a visible boundary.
const VISIBLE_FEATURES: [&str; 2] = ["outer perimeter", "inner perimeter"];

/// Tracks whether the stream is currently inside a visible boundary
/// feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionTracker {
    visible: bool,
}

impl RegionTracker {
    pub fn new() -> Self {
        RegionTracker::default()
    }

    /// Update the flag from one raw line. Non-marker lines leave it
    /// unchanged; a marker line sets it to whether the feature is a
    /// visible perimeter.
    pub fn observe(&mut self, line: &str) {
        if line.contains(FEATURE_MARKER) {
            self.visible = VISIBLE_FEATURES.iter().any(|name| line.contains(name));
        }
    }

    /// True while printing a visible outer/inner perimeter.
    pub fn visible(&self) -> bool {
        self.visible
    }
}
