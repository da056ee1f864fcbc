//! Browser console logging.
//!
//! Messages go to `console.*` on wasm32 and are dropped elsewhere, so the
//! core logic stays runnable under native `cargo test`.

#[cfg(target_arch = "wasm32")]
const PREFIX: &str = "[retrosh]";

#[cfg(target_arch = "wasm32")]
pub fn debug(msg: &str) {
    web_sys::console::debug_1(&format!("{} {}", PREFIX, msg).into());
}

#[cfg(target_arch = "wasm32")]
pub fn info(msg: &str) {
    web_sys::console::info_1(&format!("{} {}", PREFIX, msg).into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&format!("{} {}", PREFIX, msg).into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn debug(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_msg: &str) {}
