//! Foundation layer shared by the decode pipeline
//!
//! Math types and logging support; no decode logic lives here.

pub mod logging;
pub mod math;
