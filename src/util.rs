// Console logging helpers

use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::JsValue;

use crate::config::EnvName;

static LOGGING: AtomicBool = AtomicBool::new(true);

/// Applies the environment's logging switch. Errors are always reported.
pub fn init_logging(env: EnvName) {
    LOGGING.store(env.logging_enabled(), Ordering::Relaxed);
}

pub fn logging_enabled() -> bool {
    LOGGING.load(Ordering::Relaxed)
}

pub fn clog(msg: &str) {
    if logging_enabled() {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }
}

pub fn cerr(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}
