use crate::config::PageConfig;
use crate::debounce::{BrowserTimers, Debounced};
use crate::dom::{self, listen};
use crate::error::PageError;
use std::rc::Rc;
use web_sys::{Element, HtmlFormElement, HtmlInputElement};

pub(crate) const SEARCH_FORM_SELECTOR: &str = "#searchForm";
pub(crate) const CLEAR_SEARCH_SELECTOR: &str = "#clearSearch";

/// Runs once typing in a search field settles. Results are filtered server
/// side on submit, so there is nothing to do here yet.
fn on_search_settled(field: &str) {
    tracing::trace!(field, "search input settled");
}

fn clear_search() -> Result<(), PageError> {
    let document = dom::document()?;
    if let Some(form) = dom::query_one::<HtmlFormElement>(&document, SEARCH_FORM_SELECTOR)? {
        form.reset();
        form.submit()?;
    }
    Ok(())
}

/// Debounces every input inside `#searchForm` and wires `#clearSearch`.
pub(crate) fn install(config: &Rc<PageConfig>) -> Result<usize, PageError> {
    let document = dom::document()?;
    let mut bound = 0;

    if let Some(form) = dom::query_one::<Element>(&document, SEARCH_FORM_SELECTOR)? {
        for input in dom::query_all_within::<HtmlInputElement>(&form, "input")? {
            let settled = Debounced::new(BrowserTimers, config.search_debounce_ms, |name: String| {
                on_search_settled(&name)
            });
            let target = input.clone();
            listen(&input, "input", move |_| settled.call(target.name()));
            bound += 1;
        }
    }

    if let Some(button) = dom::query_one::<Element>(&document, CLEAR_SEARCH_SELECTOR)? {
        listen(&button, "click", |_| {
            if let Err(e) = clear_search() {
                tracing::error!("clearing search failed: {e}");
            }
        });
        bound += 1;
    }

    Ok(bound)
}
