use crate::dom::{self, add_class};
use crate::error::PageError;
use web_sys::Element;

pub(crate) const RESPONSIVE_SELECTOR: &str = ".table-responsive";
pub(crate) const SCROLL_HINT_CLASS: &str = "table-scroll-hint";

pub fn needs_scroll_hint(scroll_width: i32, client_width: i32) -> bool {
    scroll_width > client_width
}

/// Flags overflowing responsive tables. Evaluated once; a later resize does
/// not add or remove the hint.
pub(crate) fn install() -> Result<usize, PageError> {
    let document = dom::document()?;
    let mut hinted = 0;

    for wrapper in dom::query_all::<Element>(&document, RESPONSIVE_SELECTOR)? {
        if needs_scroll_hint(wrapper.scroll_width(), wrapper.client_width()) {
            add_class(&wrapper, SCROLL_HINT_CLASS);
            hinted += 1;
        }
    }

    Ok(hinted)
}
