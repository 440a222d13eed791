//! Logging utilities and structured logging support
//!
//! The library only talks to the `log` facade. Hosts that want output call
//! one of the init functions once at startup.

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a default filter such as `"info"` or
/// `"scene_merge=debug"`; `RUST_LOG` still takes precedence when set.
pub fn init_with_level(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    // A second init (e.g. from tests) is not an error for the caller.
    let _ = env_logger::Builder::from_env(env).try_init();
}
