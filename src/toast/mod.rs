//! Auto-hiding toast notifications in a single fixed-position container.

use crate::bootstrap::{self, ToastOptions, TOAST_HIDDEN_EVENT};
use crate::dom;
use crate::error::PageError;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub(crate) const CONTAINER_SELECTOR: &str = ".toast-container";
pub(crate) const CONTAINER_CLASS: &str = "toast-container position-fixed top-0 end-0 p-3";
pub(crate) const CONTAINER_Z_INDEX: &str = "1055";

/// The only kind with its own icon.
pub const SUCCESS: &str = "success";
pub const DANGER: &str = "danger";

/// Classes for the toast element. `kind` is used verbatim as the Bootstrap
/// background suffix (`bg-{kind}`).
pub fn toast_class(kind: &str) -> String {
    format!("toast align-items-center text-white bg-{kind} border-0")
}

/// Font Awesome icon classes: a check for `success`, a warning sign for
/// anything else.
pub fn icon_class(kind: &str) -> &'static str {
    if kind == SUCCESS {
        "fas fa-check me-2"
    } else {
        "fas fa-exclamation-triangle me-2"
    }
}

/// Returns the page's toast container, creating it under `<body>` on first use.
pub(crate) fn ensure_container(document: &Document) -> Result<Element, PageError> {
    if let Some(existing) = document.query_selector(CONTAINER_SELECTOR)? {
        return Ok(existing);
    }

    let container: HtmlElement = document.create_element("div")?.unchecked_into();
    container.set_class_name(CONTAINER_CLASS);
    container
        .style()
        .set_property("z-index", CONTAINER_Z_INDEX)?;
    dom::body()?.append_child(&container)?;
    Ok(container.into())
}

/// Builds the toast markup. The message goes in as a text node.
fn build_toast(document: &Document, message: &str, kind: &str) -> Result<Element, PageError> {
    let toast = document.create_element("div")?;
    toast.set_class_name(&toast_class(kind));
    toast.set_attribute("role", "alert")?;
    toast.set_attribute("aria-live", "assertive")?;
    toast.set_attribute("aria-atomic", "true")?;

    let row = document.create_element("div")?;
    row.set_class_name("d-flex");

    let body = document.create_element("div")?;
    body.set_class_name("toast-body");

    let icon = document.create_element("i")?;
    icon.set_class_name(icon_class(kind));
    body.append_child(&icon)?;
    body.append_child(&document.create_text_node(message))?;

    let close = document.create_element("button")?;
    close.set_attribute("type", "button")?;
    close.set_class_name("btn-close btn-close-white me-2 m-auto");
    close.set_attribute("data-bs-dismiss", "toast")?;

    row.append_child(&body)?;
    row.append_child(&close)?;
    toast.append_child(&row)?;
    Ok(toast)
}

/// Shows `message` in a new toast that hides itself after `delay_ms` and is
/// then removed from the container.
pub fn show_toast_with_delay(message: &str, kind: &str, delay_ms: u32) -> Result<(), PageError> {
    let document = dom::document()?;
    let container = ensure_container(&document)?;
    let toast = build_toast(&document, message, kind)?;
    container.append_child(&toast)?;

    let done = toast.clone();
    EventListener::once(&toast, TOAST_HIDDEN_EVENT, move |_| done.remove()).forget();

    if let Err(e) = bootstrap::show_toast(&toast, ToastOptions::auto_hide(delay_ms)) {
        toast.remove();
        return Err(e);
    }

    tracing::debug!(kind, "toast shown");
    Ok(())
}

pub fn show_toast(message: &str, kind: &str) -> Result<(), PageError> {
    let config = crate::config::PageConfig::current();
    show_toast_with_delay(message, kind, config.toast_delay_ms)
}

/// Fire-and-forget variant for internal callers; failures are only logged.
pub(crate) fn notify(message: &str, kind: &str) {
    if let Err(e) = show_toast(message, kind) {
        tracing::error!("toast failed: {e}");
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_container_is_created_once() {
        let document = dom::document().expect("document");
        let a = ensure_container(&document).expect("container");
        let b = ensure_container(&document).expect("container");

        let b: &web_sys::Node = &b;
        assert!(a.is_same_node(Some(b)));
        let all = document
            .query_selector_all(CONTAINER_SELECTOR)
            .expect("query");
        assert_eq!(all.length(), 1);
    }

    /// Installs a minimal `window.bootstrap.Toast` whose `show` does nothing,
    /// and returns a guard that removes it again.
    struct StubBootstrap;

    impl StubBootstrap {
        fn install() -> Self {
            let stub = js_sys::Function::new_no_args(
                "return { Toast: class { constructor(el, options) { this.el = el; } show() {} } };",
            )
            .call0(&wasm_bindgen::JsValue::NULL)
            .expect("build stub");
            let window = dom::window().expect("window");
            js_sys::Reflect::set(&window, &"bootstrap".into(), &stub).expect("set bootstrap");
            StubBootstrap
        }
    }

    impl Drop for StubBootstrap {
        fn drop(&mut self) {
            if let Ok(window) = dom::window() {
                let _ = js_sys::Reflect::delete_property(&window, &"bootstrap".into());
            }
        }
    }

    #[wasm_bindgen_test]
    fn test_two_toasts_share_the_container() {
        let _bootstrap = StubBootstrap::install();
        let document = dom::document().expect("document");
        let container = ensure_container(&document).expect("container");
        let before = container.child_element_count();

        show_toast_with_delay("First", SUCCESS, 3000).expect("first toast");
        let first = container.last_element_child().expect("first toast element");
        show_toast_with_delay("Second", DANGER, 3000).expect("second toast");
        let second = container.last_element_child().expect("second toast element");

        assert_eq!(container.child_element_count(), before + 2);
        assert_eq!(
            document.query_selector_all(CONTAINER_SELECTOR).expect("query").length(),
            1
        );

        let hidden = web_sys::Event::new(TOAST_HIDDEN_EVENT).expect("event");
        first.dispatch_event(&hidden).expect("dispatch");

        assert_eq!(container.child_element_count(), before + 1);
        assert!(first.parent_node().is_none());
        let second_node: &web_sys::Node = &second;
        assert!(container.contains(Some(second_node)));

        let hidden = web_sys::Event::new(TOAST_HIDDEN_EVENT).expect("event");
        second.dispatch_event(&hidden).expect("dispatch");
        assert_eq!(container.child_element_count(), before);
    }

    #[wasm_bindgen_test]
    fn test_message_is_text_not_markup() {
        let document = dom::document().expect("document");
        let toast = build_toast(&document, "<b>hi</b>", DANGER).expect("toast");

        assert!(toast.query_selector("b").expect("query").is_none());
        assert!(toast.text_content().unwrap_or_default().contains("<b>hi</b>"));
        assert_eq!(toast.get_attribute("role").as_deref(), Some("alert"));
    }

    #[wasm_bindgen_test]
    fn test_missing_bootstrap_leaves_no_orphan_toast() {
        // The test runner page does not load Bootstrap.
        let document = dom::document().expect("document");
        let container = ensure_container(&document).expect("container");
        let before = container.child_element_count();

        let result = show_toast_with_delay("Saved", SUCCESS, 3000);

        assert!(matches!(result, Err(PageError::Bootstrap { .. })));
        assert_eq!(container.child_element_count(), before);
    }
}
