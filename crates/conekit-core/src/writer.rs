//! Fixed-precision G-code formatting.
//!
//! Positions carry 3 decimals, rotary angles 2, extrusion 5. Field order is
//! normalized to `G<n> X Y Z U E <extras> <comment>` regardless of input
//! order.

use std::fmt;

use crate::command::{MotionCommand, MotionMode};

impl fmt::Display for MotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MotionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mode)?;
        if let Some(x) = self.x {
            write!(f, " X{:.3}", x)?;
        }
        if let Some(y) = self.y {
            write!(f, " Y{:.3}", y)?;
        }
        if let Some(z) = self.z {
            write!(f, " Z{:.3}", z)?;
        }
        if let Some(u) = self.u {
            write!(f, " U{:.2}", u)?;
        }
        if let Some(e) = self.e {
            write!(f, " E{:.5}", e)?;
        }
        for token in &self.extras {
            write!(f, " {}", token)?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " {}", comment)?;
        }
        Ok(())
    }
}
