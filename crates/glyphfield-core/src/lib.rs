//! Glyphfield Core
//!
//! Shared utilities for the glyphfield text layout crates: hash collections,
//! geometry and math types, colors, logging and profiling.

pub mod alloc;
pub mod color;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
