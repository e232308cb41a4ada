//! Notification requests.

use std::fmt;
use std::time::Duration;

/// Alert variant. Values outside the known set are forwarded untouched and
/// left to the alert component's own validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
    Other(String),
}

impl Severity {
    /// The `variant` value understood by `sl-alert`.
    pub fn as_variant(&self) -> &str {
        match self {
            Severity::Info => "primary",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
            Severity::Other(raw) => raw,
        }
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        match value {
            "info" | "primary" => Severity::Info,
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "danger" => Severity::Danger,
            other => Severity::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_variant())
    }
}

/// How long an alert stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayDuration {
    For(Duration),
    /// Stays open until the user closes it.
    UntilClosed,
}

impl DisplayDuration {
    /// Interprets a caller-supplied millisecond count. Anything that is not a
    /// finite, non-negative, representable number means the alert stays open.
    pub fn from_millis(ms: f64) -> Self {
        match Duration::try_from_secs_f64(ms / 1000.0) {
            Ok(span) => DisplayDuration::For(span),
            Err(_) => DisplayDuration::UntilClosed,
        }
    }

    /// Value for the alert's `duration` property (`Infinity` when open-ended).
    pub fn as_millis(&self) -> f64 {
        match self {
            DisplayDuration::For(span) => span.as_secs_f64() * 1000.0,
            DisplayDuration::UntilClosed => f64::INFINITY,
        }
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        DisplayDuration::For(Duration::from_millis(3000))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    pub message: String,
    pub severity: Severity,
    pub icon: String,
    pub duration: DisplayDuration,
}

impl NotificationRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
            icon: "info-circle".to_string(),
            duration: DisplayDuration::default(),
        }
    }

    pub fn severity(mut self, severity: impl Into<Severity>) -> Self {
        self.severity = severity.into();
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn duration(mut self, duration: DisplayDuration) -> Self {
        self.duration = duration;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(Severity::from("info").as_variant(), "primary");
        assert_eq!(Severity::from("danger"), Severity::Danger);
        assert_eq!(
            Severity::from("sparkly"),
            Severity::Other("sparkly".to_string())
        );
        assert_eq!(Severity::from("sparkly").as_variant(), "sparkly");
    }

    #[test]
    fn test_duration_sentinels() {
        assert_eq!(
            DisplayDuration::from_millis(5000.0),
            DisplayDuration::For(Duration::from_secs(5))
        );
        assert_eq!(
            DisplayDuration::from_millis(f64::INFINITY),
            DisplayDuration::UntilClosed
        );
        assert_eq!(DisplayDuration::from_millis(-1.0), DisplayDuration::UntilClosed);
        assert_eq!(DisplayDuration::from_millis(f64::NAN), DisplayDuration::UntilClosed);
        assert!(DisplayDuration::UntilClosed.as_millis().is_infinite());
        assert_eq!(DisplayDuration::from_millis(1500.0).as_millis(), 1500.0);
    }
}
