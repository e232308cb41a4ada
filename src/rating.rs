//! Fixed-glyph rating element.
//!
//! `sl-rating` asks its `getSymbol(value)` hook for the markup of every
//! rating unit. We register a thin subclass once at startup whose hook
//! returns the same icon for every unit.

use serde::{Deserialize, Serialize};

use crate::dom::Document;
use crate::error::{BridgeError, Result};
use crate::notifications::escape_attribute;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSettings {
    /// Tag the subclass is registered under.
    #[serde(default = "default_rating_tag")]
    pub tag: String,
    #[serde(default = "default_rating_base")]
    pub base_tag: String,
    #[serde(default = "default_rating_icon")]
    pub icon: String,
}

fn default_rating_tag() -> String {
    "fixed-rating".to_string()
}

fn default_rating_base() -> String {
    "sl-rating".to_string()
}

fn default_rating_icon() -> String {
    "star-fill".to_string()
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            tag: default_rating_tag(),
            base_tag: default_rating_base(),
            icon: default_rating_icon(),
        }
    }
}

/// Glyph returned for every rating unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedGlyph {
    markup: String,
}

impl FixedGlyph {
    pub fn icon(icon_tag: &str, name: &str) -> Self {
        Self {
            markup: format!(
                r#"<{tag} name="{name}"></{tag}>"#,
                tag = icon_tag,
                name = escape_attribute(name)
            ),
        }
    }

    /// Markup for the unit at `value`. The value is ignored.
    pub fn symbol(&self, _value: f64) -> &str {
        &self.markup
    }
}

/// Registers the fixed-glyph rating element.
///
/// Returns `Ok(false)` if the tag is already taken, so calling this again is
/// harmless. Fails when the base rating component is not registered yet.
pub fn register_fixed_rating<D: Document>(
    document: &D,
    icon_tag: &str,
    settings: &RatingSettings,
) -> Result<bool> {
    if document.is_defined(&settings.tag) {
        tracing::debug!("Rating element <{}> already registered", settings.tag);
        return Ok(false);
    }

    if !document.is_defined(&settings.base_tag) {
        return Err(BridgeError::ExternalComponent(format!(
            "base rating element <{}> is not registered",
            settings.base_tag
        )));
    }

    let glyph = FixedGlyph::icon(icon_tag, &settings.icon);
    document.define_fixed_glyph(&settings.tag, &settings.base_tag, glyph.symbol(0.0))?;

    tracing::info!(
        "Registered <{}> extending <{}> with icon '{}'",
        settings.tag,
        settings.base_tag,
        settings.icon
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryDocument;

    #[test]
    fn test_fixed_glyph_ignores_value() {
        let glyph = FixedGlyph::icon("sl-icon", "heart-fill");
        assert_eq!(glyph.symbol(1.0), r#"<sl-icon name="heart-fill"></sl-icon>"#);
        assert_eq!(glyph.symbol(1.0), glyph.symbol(4.5));
    }

    #[test]
    fn test_register_once() {
        let doc = MemoryDocument::new();
        doc.define("sl-rating", &[]);
        let settings = RatingSettings::default();

        assert!(register_fixed_rating(&doc, "sl-icon", &settings).unwrap());
        assert!(!register_fixed_rating(&doc, "sl-icon", &settings).unwrap());

        assert_eq!(doc.base_of("fixed-rating").as_deref(), Some("sl-rating"));
        assert_eq!(
            doc.glyph_for("fixed-rating").as_deref(),
            Some(r#"<sl-icon name="star-fill"></sl-icon>"#)
        );
    }

    #[test]
    fn test_register_without_base_fails() {
        let doc = MemoryDocument::new();
        let err = register_fixed_rating(&doc, "sl-icon", &RatingSettings::default()).unwrap_err();
        assert!(err.to_string().contains("sl-rating"));
        assert!(!doc.is_defined("fixed-rating"));
    }
}
