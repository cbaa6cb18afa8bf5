//! Copy text with the async Clipboard API, falling back to a hidden
//! `<textarea>` plus `document.execCommand("copy")`.

use crate::config::PageConfig;
use crate::dom;
use crate::error::{describe_js, PageError};
use crate::toast::{self, DANGER, SUCCESS};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("async clipboard API is not available")]
    Unavailable,

    #[error("clipboard write rejected: {0}")]
    Rejected(String),

    #[error("legacy copy command was refused")]
    Refused,

    #[error("{0}")]
    Page(String),
}

impl From<PageError> for ClipboardError {
    fn from(err: PageError) -> Self {
        Self::Page(err.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// The two copy paths a browser offers.
#[allow(async_fn_in_trait)]
pub trait ClipboardBackend {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Synchronous fallback. Must clean up whatever it put in the page.
    fn legacy_copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Tries the async path first and the legacy path on any failure.
pub async fn copy_text<B: ClipboardBackend>(backend: &B, text: &str) -> CopyOutcome {
    match backend.write_text(text).await {
        Ok(()) => return CopyOutcome::Copied,
        Err(ClipboardError::Unavailable) => {
            tracing::debug!("async clipboard unavailable, using fallback");
        }
        Err(e) => {
            tracing::error!("copy failed: {e}");
        }
    }

    match backend.legacy_copy(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            tracing::error!("copy failed: {e}");
            CopyOutcome::Failed
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl ClipboardBackend for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = dom::window()?;
        let clipboard = window.navigator().clipboard();
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::Unavailable);
        }

        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(describe_js(&e)))
    }

    fn legacy_copy(&self, text: &str) -> Result<(), ClipboardError> {
        let document = dom::document()?;
        let area: HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(PageError::from)?
            .unchecked_into();
        area.set_value(text);
        let style = area.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("left", "-999999px");
        let _ = style.set_property("top", "-999999px");

        let body = dom::body()?;
        body.append_child(&area).map_err(PageError::from)?;

        let result = exec_copy(&document, &area);
        area.remove();
        result
    }
}

fn exec_copy(
    document: &web_sys::Document,
    area: &HtmlTextAreaElement,
) -> Result<(), ClipboardError> {
    let _ = area.focus();
    area.select();

    let html_doc = document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| ClipboardError::Page("document is not an HTML document".to_string()))?;
    match html_doc.exec_command("copy") {
        Ok(true) => Ok(()),
        Ok(false) => Err(ClipboardError::Refused),
        Err(e) => Err(ClipboardError::Rejected(describe_js(&e))),
    }
}

/// Copies `text` and reports the result with a toast.
pub fn copy_to_clipboard(text: String) {
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = copy_text(&BrowserClipboard, &text).await;
        let config = PageConfig::current();
        match outcome {
            CopyOutcome::Copied => toast::notify(&config.messages.copied, SUCCESS),
            CopyOutcome::Failed => toast::notify(&config.messages.copy_failed, DANGER),
        }
    });
}
