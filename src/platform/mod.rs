//! Platform abstraction layer
//!
//! The browser host drives the scene through `web::WebScene`; native builds
//! only get logger setup.

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Install the native logger (no-op if one is already set)
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::try_init();
}
