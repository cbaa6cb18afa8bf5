//! Small wrappers over `web_sys` lookups that every behavior repeats.

use crate::error::PageError;
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

pub(crate) fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub(crate) fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub(crate) fn body() -> Result<HtmlElement, PageError> {
    document()?.body().ok_or(PageError::NoBody)
}

/// `querySelectorAll` collected into typed elements. Nodes that fail the cast
/// are skipped.
pub(crate) fn query_all<T: JsCast>(root: &Document, selector: &str) -> Result<Vec<T>, PageError> {
    Ok(typed_nodes(root.query_selector_all(selector)?))
}

pub(crate) fn query_all_within<T: JsCast>(
    root: &Element,
    selector: &str,
) -> Result<Vec<T>, PageError> {
    Ok(typed_nodes(root.query_selector_all(selector)?))
}

fn typed_nodes<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i).and_then(|n| n.dyn_into::<T>().ok()))
        .collect()
}

pub(crate) fn query_one<T: JsCast>(
    root: &Document,
    selector: &str,
) -> Result<Option<T>, PageError> {
    Ok(root
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok()))
}

pub(crate) fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub(crate) fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// Page-lifetime listener: the handler stays attached until the page unloads.
pub(crate) fn listen<F>(target: &EventTarget, event: &'static str, handler: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new(target, event, handler).forget();
}

/// Like [`listen`], but non-passive so the handler may call `preventDefault`.
pub(crate) fn listen_active<F>(target: &EventTarget, event: &'static str, handler: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        event,
        EventListenerOptions::enable_prevent_default(),
        handler,
    )
    .forget();
}

/// Sets the `disabled` property on any form control without knowing its
/// concrete element type.
pub(crate) fn set_disabled(el: &Element, disabled: bool) -> Result<(), PageError> {
    js_sys::Reflect::set(el, &"disabled".into(), &disabled.into())?;
    Ok(())
}
