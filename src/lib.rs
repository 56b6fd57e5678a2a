#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod background;
mod card;
mod constants;
mod core;
mod dom;
mod frame;
mod render;
mod scheduler;
mod scroll;
mod text;

pub use background::PlasmaBackground;
pub use card::HoverCardHandle;
pub use scroll::ScrollReveal;
pub use text::{IntroHandle, TypewriterHandle};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");
    Ok(())
}

/// Change the console log level at runtime (`error`, `warn`, `info`, `debug`, `trace`).
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) {
    match level.parse::<log::LevelFilter>() {
        Ok(filter) => log::set_max_level(filter),
        Err(_) => log::warn!("unknown log level `{level}`"),
    }
}
