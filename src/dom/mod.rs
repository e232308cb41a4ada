//! Host document capabilities.
//!
//! The bridge never touches a global document directly. Everything it needs
//! from the host is expressed through these traits:
//! - [`Document`]: element lookup, creation, body attachment and custom element registration
//! - [`Element`]: a non-owning handle to one live node
//! - [`Console`]: the host's diagnostic channel
//!
//! The browser implementation lives in `web` (wasm32 only); [`memory`]
//! provides an in-memory host used by tests and native simulations.

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::error::Result;

/// A value assigned to a JS property of a custom element.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Handle to a live node owned by someone else.
///
/// Handles are cheap to clone and must not be kept past the operation that
/// resolved them: the owning framework may replace the node at any time.
pub trait Element: Clone {
    fn set_id(&self, id: &str) -> Result<()>;

    fn set_property(&self, name: &str, value: PropertyValue) -> Result<()>;

    fn set_inner_html(&self, markup: &str) -> Result<()>;

    /// Requests input focus. Focusing never fails from the caller's view.
    fn focus(&self);

    /// Calls a zero-argument method exposed by the element's custom element
    /// class, e.g. `toast`. Errors carry the stringified cause.
    fn invoke(&self, method: &str) -> Result<()>;

    /// Detaches the node from its parent, if any.
    fn remove(&self);
}

pub trait Document {
    type Element: Element;

    /// Looks up a node currently attached to the document.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn create_element(&self, tag: &str) -> Result<Self::Element>;

    fn append_to_body(&self, element: &Self::Element) -> Result<()>;

    /// Whether a custom element class is registered for `tag`.
    fn is_defined(&self, tag: &str) -> bool;

    /// Registers `tag` as a subclass of `base` whose `getSymbol` hook always
    /// returns `glyph`.
    fn define_fixed_glyph(&self, tag: &str, base: &str, glyph: &str) -> Result<()>;
}

pub trait Console {
    fn error(&self, message: &str);
}
