//! Bindings to the page's global `bootstrap` bundle.
//!
//! The bundle is loaded by the server template. Every constructor is imported
//! with `catch`, so a page without Bootstrap yields an error instead of a
//! thrown exception unwinding through the wasm boundary.

use crate::error::PageError;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Tooltip)]
    pub type Tooltip;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Tooltip")]
    fn new(el: &Element) -> Result<Tooltip, JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap, js_name = Toast)]
    pub type Toast;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Toast")]
    fn new(el: &Element, options: &JsValue) -> Result<Toast, JsValue>;

    #[wasm_bindgen(catch, method)]
    fn show(this: &Toast) -> Result<(), JsValue>;
}

/// Event Bootstrap dispatches on a toast element once its hide transition ends.
pub(crate) const TOAST_HIDDEN_EVENT: &str = "hidden.bs.toast";

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ToastOptions {
    pub autohide: bool,
    pub delay: u32,
}

impl ToastOptions {
    pub fn auto_hide(delay_ms: u32) -> Self {
        Self {
            autohide: true,
            delay: delay_ms,
        }
    }

    fn to_js(self) -> Result<JsValue, PageError> {
        let json = serde_json::to_string(&self)?;
        Ok(js_sys::JSON::parse(&json)?)
    }
}

pub(crate) fn attach_tooltip(el: &Element) -> Result<Tooltip, PageError> {
    Tooltip::new(el).map_err(|e| PageError::bootstrap("Tooltip", e))
}

/// Creates the Bootstrap toast for `el` and shows it.
pub(crate) fn show_toast(el: &Element, options: ToastOptions) -> Result<Toast, PageError> {
    let toast =
        Toast::new(el, &options.to_js()?).map_err(|e| PageError::bootstrap("Toast", e))?;
    toast.show().map_err(|e| PageError::bootstrap("Toast", e))?;
    Ok(toast)
}
