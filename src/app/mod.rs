use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;
use crate::{confirm, search, tables, tooltips, validation};
use std::rc::Rc;
use strum::IntoEnumIterator;

/// Every declarative binding the pages rely on, in install order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Behavior {
    /// `[data-bs-toggle="tooltip"]`
    Tooltips,
    /// `[data-confirm-delete]`
    DeleteConfirm,
    /// `.needs-validation`, `input[type=tel]`, `input[type=email]`
    FormValidation,
    /// `#searchForm`, `#clearSearch`
    Search,
    /// `.table-responsive`
    ResponsiveTables,
}

impl Behavior {
    /// Binds this behavior to the current document; returns how many
    /// elements it touched.
    pub(crate) fn install(self, config: &Rc<PageConfig>) -> Result<usize, PageError> {
        match self {
            Behavior::Tooltips => tooltips::install(),
            Behavior::DeleteConfirm => confirm::install(config),
            Behavior::FormValidation => validation::install(config),
            Behavior::Search => search::install(config),
            Behavior::ResponsiveTables => tables::install(),
        }
    }
}

/// Installs every behavior. One failing behavior does not stop the rest.
pub(crate) fn install_all(config: &Rc<PageConfig>) {
    for behavior in Behavior::iter() {
        match behavior.install(config) {
            Ok(count) => tracing::debug!(%behavior, count, "behavior installed"),
            Err(e) => tracing::error!(%behavior, "behavior failed to install: {e}"),
        }
    }
}

/// Runs [`install_all`] once the document is parsed: right away if it already
/// is, otherwise on `DOMContentLoaded`.
pub(crate) fn boot(config: Rc<PageConfig>) -> Result<(), PageError> {
    let document = dom::document()?;

    if document.ready_state() == "loading" {
        gloo_events::EventListener::once(&document, "DOMContentLoaded", move |_| {
            install_all(&config)
        })
        .forget();
    } else {
        install_all(&config);
    }

    Ok(())
}
