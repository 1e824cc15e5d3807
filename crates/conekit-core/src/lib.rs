//! # ConeKit Core
//!
//! G-code text layer for ConeKit. Provides the parsed line model
//! ([`MotionCommand`], [`GcodeLine`]), a tolerant word tokenizer that
//! recognizes `G0`/`G1` moves and preserves everything else verbatim,
//! fixed-precision G-code formatting, and file I/O helpers.
//!
//! The parser never fails on a line: fields it cannot interpret are kept
//! as opaque tokens so the emitted stream stays complete for downstream
//! firmware.

pub mod command;
pub mod error;
pub mod io;
pub mod parser;
pub mod writer;

pub use command::{GcodeLine, MotionCommand, MotionMode};
pub use error::{GcodeError, Result};
pub use parser::parse_line;
