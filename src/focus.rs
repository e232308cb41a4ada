//! Programmatic focus transfer.

use crate::dom::{Document, Element};
use crate::error::{BridgeError, Result};

pub struct FocusDirector<'a, D> {
    document: &'a D,
}

impl<'a, D: Document> FocusDirector<'a, D> {
    pub fn new(document: &'a D) -> Self {
        Self { document }
    }

    /// Moves input focus to the element with `id`.
    pub fn focus_element_by_id(&self, id: &str) -> Result<()> {
        let element = self.document.element_by_id(id).ok_or_else(|| {
            BridgeError::NotFound(format!("could not find element with id `{}`", id))
        })?;

        element.focus();
        tracing::debug!("Focused element '{}'", id);
        Ok(())
    }
}
