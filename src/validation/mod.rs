use crate::config::{Messages, PageConfig};
use crate::dom::{self, add_class, listen, listen_active, remove_class};
use crate::error::PageError;
use regex_lite::Regex;
use std::rc::Rc;
use std::sync::LazyLock;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement};

pub(crate) const FORM_SELECTOR: &str = ".needs-validation";
pub(crate) const INVALID_CLASS: &str = "is-invalid";
pub(crate) const VALID_CLASS: &str = "is-valid";
pub(crate) const VALIDATED_CLASS: &str = "was-validated";

/// Mainland mobile number: 11 digits, a leading `1`, then a digit 3-9.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1[3-9]\d{9}$").expect("phone pattern compiles"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Whitespace as the browser's `String.prototype.trim` sees it: Unicode
/// white space plus the byte order mark, without NEL.
fn is_blank(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Inputs that get a live pattern check on every keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum FieldKind {
    Phone,
    Email,
}

impl FieldKind {
    pub fn selector(self) -> &'static str {
        match self {
            FieldKind::Phone => r#"input[type="tel"]"#,
            FieldKind::Email => r#"input[type="email"]"#,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            FieldKind::Phone => &PHONE_PATTERN,
            FieldKind::Email => &EMAIL_PATTERN,
        }
    }

    fn message(self, messages: &Messages) -> &str {
        match self {
            FieldKind::Phone => &messages.invalid_phone,
            FieldKind::Email => &messages.invalid_email,
        }
    }

    /// Checks the trimmed value. Whitespace left inside the value is always
    /// invalid; `regex-lite` only knows ASCII `\s`.
    pub fn check(self, raw: &str) -> FieldVerdict {
        let value = raw.trim_matches(is_blank);
        if value.is_empty() {
            FieldVerdict::Empty
        } else if value.contains(is_blank) {
            FieldVerdict::Invalid
        } else if self.pattern().is_match(value) {
            FieldVerdict::Valid
        } else {
            FieldVerdict::Invalid
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldVerdict {
    /// Nothing typed; the field is neither valid nor invalid.
    Empty,
    Valid,
    Invalid,
}

/// Marks `input` according to `verdict`: custom validity plus the Bootstrap
/// `is-valid`/`is-invalid` classes.
pub(crate) fn apply_verdict(input: &HtmlInputElement, verdict: FieldVerdict, message: &str) {
    match verdict {
        FieldVerdict::Invalid => {
            input.set_custom_validity(message);
            remove_class(input, VALID_CLASS);
            add_class(input, INVALID_CLASS);
        }
        FieldVerdict::Valid => {
            input.set_custom_validity("");
            remove_class(input, INVALID_CLASS);
            add_class(input, VALID_CLASS);
        }
        FieldVerdict::Empty => {
            input.set_custom_validity("");
            remove_class(input, INVALID_CLASS);
            remove_class(input, VALID_CLASS);
        }
    }
}

pub(crate) fn validate_field(input: &HtmlInputElement, kind: FieldKind, messages: &Messages) {
    let verdict = kind.check(&input.value());
    apply_verdict(input, verdict, kind.message(messages));
}

fn on_submit(form: &HtmlFormElement, ev: &Event) {
    if !form.check_validity() {
        ev.prevent_default();
        ev.stop_propagation();

        if let Ok(Some(first)) = form.query_selector(&format!(".{INVALID_CLASS}")) {
            reveal(&first);
        }
    }
    add_class(form, VALIDATED_CLASS);
}

fn reveal(field: &Element) {
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Center);
    field.scroll_into_view_with_scroll_into_view_options(&opts);

    if let Some(el) = field.dyn_ref::<HtmlElement>() {
        let _ = el.focus();
    }
}

/// Hooks submit on every `.needs-validation` form and live checks on phone
/// and email inputs. Returns the number of elements bound.
pub(crate) fn install(config: &Rc<PageConfig>) -> Result<usize, PageError> {
    let document = dom::document()?;
    let mut bound = 0;

    for form in dom::query_all::<HtmlFormElement>(&document, FORM_SELECTOR)? {
        let target = form.clone();
        listen_active(&form, "submit", move |ev| on_submit(&target, ev));
        bound += 1;
    }

    for kind in <FieldKind as strum::IntoEnumIterator>::iter() {
        for input in dom::query_all::<HtmlInputElement>(&document, kind.selector())? {
            let target = input.clone();
            let config = Rc::clone(config);
            listen(&input, "input", move |_| {
                validate_field(&target, kind, &config.messages);
            });
            bound += 1;
        }
        tracing::trace!(%kind, "live field checks bound");
    }

    Ok(bound)
}
