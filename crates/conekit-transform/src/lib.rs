//! ConeKit Transform Crate
//!
//! Turns conventionally sliced planar G-code into toolpaths for conical
//! printing: coordinate remapping onto the cone, move subdivision, rotary
//! axis control, extrusion rescaling, and the final placement pass.

pub mod angle;
pub mod backtransform;
pub mod cone;
pub mod config;
pub mod error;
pub mod region;
pub mod rescale;
pub mod segment;
pub mod state;
pub mod stream;
pub mod translate;
pub mod unwrap;

pub use backtransform::{backtransform, Backtransformer};
pub use cone::ConeMapping;
pub use config::{AngleMode, ConeType, TransformConfig, TranslateConfig};
pub use error::{Result, TransformError};
pub use stream::{render, OutputLine};
pub use translate::translate;
