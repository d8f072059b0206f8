//! Logging support for decoder diagnostics

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging backend (`env_logger`).
///
/// Call once from the application; the library itself only emits through
/// the `log` facade.
pub fn init() {
    env_logger::init();
}
