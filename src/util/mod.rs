use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;
use web_sys::HtmlElement;

pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";
pub(crate) const ORIGINAL_TEXT_ATTR: &str = "data-original-text";
const SPINNER_MARKUP: &str = r#"<span class="spinner-border spinner-border-sm me-2"></span>"#;

/// Calendar fields of a local-time instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    /// 1-based.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl DateParts {
    /// Local-time fields of a JS `Date`; `None` for an invalid date.
    pub fn from_js(d: &js_sys::Date) -> Option<Self> {
        if d.get_time().is_nan() {
            return None;
        }
        Some(Self {
            year: d.get_full_year() as i32,
            month: d.get_month() + 1,
            day: d.get_date(),
            hour: d.get_hours(),
            minute: d.get_minutes(),
            second: d.get_seconds(),
        })
    }
}

/// Substitutes `YYYY`, `MM`, `DD`, `HH`, `mm`, `ss` in that order. Only the
/// first occurrence of each token is replaced.
pub fn format_date(parts: &DateParts, format: &str) -> String {
    let tokens = [
        ("YYYY", parts.year.to_string()),
        ("MM", format!("{:02}", parts.month)),
        ("DD", format!("{:02}", parts.day)),
        ("HH", format!("{:02}", parts.hour)),
        ("mm", format!("{:02}", parts.minute)),
        ("ss", format!("{:02}", parts.second)),
    ];

    tokens
        .iter()
        .fold(format.to_string(), |acc, (token, value)| {
            acc.replacen(token, value, 1)
        })
}

/// Formats anything `new Date(..)` accepts: a `Date`, a timestamp or a date
/// string.
pub fn format_js_date(date: &wasm_bindgen::JsValue, format: &str) -> Result<String, PageError> {
    let d = js_sys::Date::new(date);
    let parts = DateParts::from_js(&d).ok_or(PageError::InvalidDate)?;
    Ok(format_date(&parts, format))
}

pub(crate) fn loading_markup(label: &str) -> String {
    let mut out = String::from(SPINNER_MARKUP);
    for ch in label.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

/// Disables `el` and swaps its content for a spinner, keeping the original
/// markup in `data-original-text`.
pub fn show_loading(el: &HtmlElement) -> Result<(), PageError> {
    dom::set_disabled(el, true)?;
    // A second call while loading must not overwrite the saved content with
    // the spinner.
    if !el.has_attribute(ORIGINAL_TEXT_ATTR) {
        el.set_attribute(ORIGINAL_TEXT_ATTR, &el.inner_html())?;
    }
    el.set_inner_html(&loading_markup(&PageConfig::current().messages.loading));
    Ok(())
}

pub fn hide_loading(el: &HtmlElement) -> Result<(), PageError> {
    dom::set_disabled(el, false)?;
    if let Some(original) = el.get_attribute(ORIGINAL_TEXT_ATTR) {
        if !original.is_empty() {
            el.set_inner_html(&original);
        }
        el.remove_attribute(ORIGINAL_TEXT_ATTR)?;
    }
    Ok(())
}

pub fn scroll_to_top() -> Result<(), PageError> {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&opts);
    Ok(())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlButtonElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn button(label: &str) -> HtmlButtonElement {
        let document = dom::document().expect("document");
        let b: HtmlButtonElement = document
            .create_element("button")
            .expect("create button")
            .unchecked_into();
        b.set_inner_html(label);
        b
    }

    #[wasm_bindgen_test]
    fn test_loading_round_trip_restores_content() {
        let b = button("<i class=\"fa\"></i>Save");

        show_loading(&b).expect("show");
        assert!(b.disabled());
        assert!(b.inner_html().contains("spinner-border"));

        show_loading(&b).expect("show twice");

        hide_loading(&b).expect("hide");
        assert!(!b.disabled());
        assert_eq!(b.inner_html(), "<i class=\"fa\"></i>Save");
        assert!(!b.has_attribute(ORIGINAL_TEXT_ATTR));
    }

    #[wasm_bindgen_test]
    fn test_hide_without_show_only_enables() {
        let b = button("Save");
        b.set_disabled(true);

        hide_loading(&b).expect("hide");
        assert!(!b.disabled());
        assert_eq!(b.inner_html(), "Save");
    }

    #[wasm_bindgen_test]
    fn test_js_date_local_fields() {
        let d = js_sys::Date::new_with_year_month_day_hr_min_sec(2024, 0, 5, 9, 3, 7);
        let out = format_js_date(&d.into(), DEFAULT_DATE_FORMAT).expect("format");
        assert_eq!(out, "2024-01-05 09:03:07");
    }

    #[wasm_bindgen_test]
    fn test_invalid_date_is_error() {
        let err = format_js_date(&"not a date".into(), DEFAULT_DATE_FORMAT);
        assert!(matches!(err, Err(PageError::InvalidDate)));
    }
}
