use wasm_bindgen::{JsCast, JsValue};

/// Errors raised while wiring or running page behaviors.
///
/// Field validation never ends up here; invalid input is reported on the
/// field itself.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum PageError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("document has no <body>")]
    NoBody,

    /// A DOM or JS call threw.
    #[error("DOM call failed: {0}")]
    Dom(String),

    /// The Bootstrap global (or one of its components) is missing or threw.
    #[error("bootstrap.{component} failed: {detail}")]
    Bootstrap {
        component: &'static str,
        detail: String,
    },

    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid date value")]
    InvalidDate,
}

impl PageError {
    pub(crate) fn bootstrap(component: &'static str, err: JsValue) -> Self {
        Self::Bootstrap {
            component,
            detail: describe_js(&err),
        }
    }
}

impl From<JsValue> for PageError {
    fn from(err: JsValue) -> Self {
        Self::Dom(describe_js(&err))
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort readable text for a thrown JS value.
pub(crate) fn describe_js(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    format!("{err:?}")
}
