use crate::config::PageConfig;
use crate::dom::{self, listen_active};
use crate::error::PageError;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement};

pub(crate) const DELETE_SELECTOR: &str = "[data-confirm-delete]";
pub(crate) const CUSTOMER_ID_ATTR: &str = "data-customer-id";
pub(crate) const CUSTOMER_NAME_ATTR: &str = "data-customer-name";

/// The customer a delete control points at, read from its data attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: Option<String>,
    pub name: String,
}

impl DeleteTarget {
    pub fn from_element(el: &Element) -> Self {
        Self {
            id: el
                .get_attribute(CUSTOMER_ID_ATTR)
                .filter(|id| !id.trim().is_empty()),
            name: el.get_attribute(CUSTOMER_NAME_ATTR).unwrap_or_default(),
        }
    }
}

/// A browser form submission the guard should perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSubmission {
    pub method: &'static str,
    pub action: String,
}

/// What to submit once the user has answered the prompt, if anything.
pub fn plan_delete(
    config: &PageConfig,
    target: &DeleteTarget,
    confirmed: bool,
) -> Option<FormSubmission> {
    if !confirmed {
        return None;
    }
    let id = target.id.as_deref()?;
    Some(FormSubmission {
        method: "POST",
        action: config.delete_action(id),
    })
}

/// A detached `<form>` carrying the submission's method and action.
fn build_form(submission: &FormSubmission) -> Result<HtmlFormElement, PageError> {
    let form: HtmlFormElement = dom::document()?.create_element("form")?.unchecked_into();
    form.set_method(submission.method);
    form.set_action(&submission.action);
    Ok(form)
}

/// Attaches the form to the page and submits it, navigating away.
fn submit(submission: &FormSubmission) -> Result<(), PageError> {
    let form = build_form(submission)?;
    dom::body()?.append_child(&form)?;
    form.submit()?;
    Ok(())
}

fn on_click(config: &PageConfig, control: &Element) -> Result<(), PageError> {
    let target = DeleteTarget::from_element(control);
    if target.id.is_none() {
        tracing::warn!(name = %target.name, "delete control without {CUSTOMER_ID_ATTR}");
        return Ok(());
    }

    let prompt = config.messages.delete_prompt(&target.name);
    let confirmed = dom::window()?.confirm_with_message(&prompt)?;

    match plan_delete(config, &target, confirmed) {
        Some(submission) => {
            tracing::info!(action = %submission.action, "submitting delete");
            submit(&submission)
        }
        None => {
            tracing::debug!(name = %target.name, "delete declined");
            Ok(())
        }
    }
}

pub(crate) fn install(config: &Rc<PageConfig>) -> Result<usize, PageError> {
    let document = dom::document()?;
    let controls = dom::query_all::<Element>(&document, DELETE_SELECTOR)?;

    for control in &controls {
        let config = Rc::clone(config);
        let el = control.clone();
        listen_active(control, "click", move |ev| {
            ev.prevent_default();
            if let Err(e) = on_click(&config, &el) {
                tracing::error!("delete confirmation failed: {e}");
            }
        });
    }

    Ok(controls.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> DeleteTarget {
        DeleteTarget {
            id: Some("42".to_string()),
            name: "Alice".to_string(),
        }
    }

    #[test]
    fn test_confirmed_delete_posts_to_customer_endpoint() {
        let plan = plan_delete(&PageConfig::default(), &alice(), true);
        assert_eq!(
            plan,
            Some(FormSubmission {
                method: "POST",
                action: "/customers/42/delete".to_string(),
            })
        );
    }

    #[test]
    fn test_declined_delete_does_nothing() {
        assert_eq!(plan_delete(&PageConfig::default(), &alice(), false), None);
    }

    #[test]
    fn test_missing_id_never_submits() {
        let target = DeleteTarget {
            id: None,
            name: "Alice".to_string(),
        };
        assert_eq!(plan_delete(&PageConfig::default(), &target, true), None);
    }

    #[test]
    fn test_prompt_contains_customer_name() {
        let cfg = PageConfig::default();
        assert!(cfg.messages.delete_prompt(&alice().name).contains("Alice"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_target_read_from_attributes() {
        let document = dom::document().expect("document");
        let el = document.create_element("a").expect("create a");
        el.set_attribute(CUSTOMER_ID_ATTR, "42").expect("set id");
        el.set_attribute(CUSTOMER_NAME_ATTR, "Alice").expect("set name");

        assert_eq!(DeleteTarget::from_element(&el), alice_target());
    }

    #[wasm_bindgen_test]
    fn test_blank_id_is_missing() {
        let document = dom::document().expect("document");
        let el = document.create_element("a").expect("create a");
        el.set_attribute(CUSTOMER_ID_ATTR, " ").expect("set id");

        let target = DeleteTarget::from_element(&el);
        assert!(target.id.is_none());
        assert_eq!(target.name, "");
    }

    #[wasm_bindgen_test]
    fn test_delete_form_posts_to_customer_endpoint() {
        let plan = plan_delete(&PageConfig::default(), &alice_target(), true).expect("plan");
        let form = build_form(&plan).expect("form");

        assert_eq!(form.method(), "post");
        assert!(form.action().ends_with("/customers/42/delete"), "{}", form.action());
        assert!(form.parent_node().is_none());
    }

    fn alice_target() -> DeleteTarget {
        DeleteTarget {
            id: Some("42".to_string()),
            name: "Alice".to_string(),
        }
    }
}
