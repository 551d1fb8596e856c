//! Foundation utilities shared by every other module
//!
//! Math type aliases over nalgebra and logging setup. Nothing in here is
//! specific to collision detection.

pub mod logging;
pub mod math;
