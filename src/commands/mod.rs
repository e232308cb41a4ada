//! Operations exposed to the declarative UI layer.
//!
//! Every command converts its errors into an [`Outcome`] so nothing is ever
//! thrown back across the boundary.

pub mod diagnostics;
pub mod focus;
pub mod notification;

/// Success, or a human-readable diagnostic.
pub type Outcome = std::result::Result<(), String>;
