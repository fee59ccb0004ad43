//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with an explicit filter such as `"shading_engine=debug"`
///
/// Falls back to `RUST_LOG` when `filter` is `None`. Safe to call more than once;
/// later calls leave the first logger in place.
pub fn init_with_filter(filter: Option<&str>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    if builder.try_init().is_err() {
        debug!("Logger already initialized, keeping existing configuration");
    }
}
