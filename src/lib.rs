//! Page behaviors for the server-rendered customer-management pages.
//!
//! The module is loaded once per page. On start it reads the optional
//! `window.CUSTOMER_APP_CONFIG`, sets up console logging and binds every
//! declarative behavior (tooltips, delete confirmation, form validation,
//! search, responsive tables). The helpers in [`api`] are exported for other
//! page scripts.

pub mod api;
mod app;
mod bootstrap;
pub mod clipboard;
pub mod config;
mod confirm;
pub mod debounce;
mod dom;
pub mod error;
mod search;
mod tables;
pub mod toast;
mod tooltips;
pub mod util;
pub mod validation;

pub use app::Behavior;
pub use config::PageConfig;
pub use error::PageError;

use std::rc::Rc;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

/// Routes `tracing` output to the browser console.
#[cfg(target_arch = "wasm32")]
fn init_tracing(config: &PageConfig) {
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Registry;

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.max_log_level())
            .build(),
    );

    // Another module on the page may have installed a subscriber already.
    let _ = set_global_default(Registry::default().with(wasm_layer));
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing(_config: &PageConfig) {}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, load_error) = match PageConfig::from_window() {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    };
    let config: Rc<PageConfig> = PageConfig::set_current(config);
    init_tracing(&config);

    if let Some(e) = load_error {
        tracing::warn!("falling back to default page config: {e}");
    }

    if let Err(e) = app::boot(config) {
        tracing::error!("page boot failed: {e}");
    }
}
