use crate::bootstrap;
use crate::dom;
use crate::error::PageError;
use web_sys::Element;

pub(crate) const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;

/// Attaches one Bootstrap tooltip per marked element.
pub(crate) fn install() -> Result<usize, PageError> {
    let document = dom::document()?;
    let triggers = dom::query_all::<Element>(&document, TOOLTIP_SELECTOR)?;

    for el in &triggers {
        // Bootstrap keeps the instance reachable through the element.
        bootstrap::attach_tooltip(el)?;
    }

    Ok(triggers.len())
}
