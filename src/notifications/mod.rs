//! Toast notifications on top of the `sl-alert` component.
//!
//! This module provides:
//! - Notification requests (message, severity, icon, duration)
//! - Text-to-markup encoding for alert content
//! - The notifier, for fresh alerts and for alerts rendered by the caller

mod markup;
mod notifier;
mod request;

pub use markup::{alert_content, escape_attribute, escape_text};
pub use notifier::{Notifier, TOAST_ID_PREFIX};
pub use request::{DisplayDuration, NotificationRequest, Severity};
