//! Functions other page scripts import from the wasm module, e.g.
//!
//! ```js
//! import init, { showToast, copyToClipboard } from "/js/customer_app_web.js";
//! await init();
//! showToast("已保存");
//! ```

use crate::{clipboard, toast, util};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

/// `showToast(message, type = "success")`
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) -> Result<(), JsValue> {
    let kind = kind.unwrap_or_else(|| toast::SUCCESS.to_string());
    toast::show_toast(message, &kind)?;
    Ok(())
}

/// `copyToClipboard(text)`; the outcome is reported with a toast.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) {
    clipboard::copy_to_clipboard(text);
}

/// `formatDate(date, format = "YYYY-MM-DD HH:mm:ss")`
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date: JsValue, format: Option<String>) -> Result<String, JsValue> {
    let format = format.as_deref().unwrap_or(util::DEFAULT_DATE_FORMAT);
    Ok(util::format_js_date(&date, format)?)
}

/// `showLoading(element)`; a missing element is ignored.
#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(element: Option<HtmlElement>) -> Result<(), JsValue> {
    if let Some(el) = element {
        util::show_loading(&el)?;
    }
    Ok(())
}

/// `hideLoading(element)`; a missing element is ignored.
#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading(element: Option<HtmlElement>) -> Result<(), JsValue> {
    if let Some(el) = element {
        util::hide_loading(&el)?;
    }
    Ok(())
}

#[wasm_bindgen(js_name = scrollToTop)]
pub fn scroll_to_top() -> Result<(), JsValue> {
    util::scroll_to_top()?;
    Ok(())
}
