//! Toast alerts driven through the alert component's imperative API.

use uuid::Uuid;

use super::markup::alert_content;
use super::request::NotificationRequest;
use crate::dom::{Document, Element, PropertyValue};
use crate::error::{BridgeError, Result};
use crate::scheduler::FrameScheduler;
use crate::state::Settings;

/// Prefix of the ids given to alerts the notifier creates itself.
pub const TOAST_ID_PREFIX: &str = "toast";

const TOAST_METHOD: &str = "toast";

pub struct Notifier<'a, D, S> {
    document: &'a D,
    frames: &'a S,
    alert_tag: String,
    icon_tag: String,
}

impl<'a, D, S> Notifier<'a, D, S>
where
    D: Document,
    S: FrameScheduler,
{
    pub fn new(document: &'a D, frames: &'a S, settings: &Settings) -> Self {
        Self {
            document,
            frames,
            alert_tag: settings.alert_tag.clone(),
            icon_tag: settings.icon_tag.clone(),
        }
    }

    /// Builds a new alert on the document body and shows it as a toast.
    ///
    /// The alert is not part of the declarative tree; the component removes
    /// it from the body once its duration elapses. If the toast cannot be
    /// triggered the node is taken back out so nothing inert is left behind.
    pub fn notify(&self, request: &NotificationRequest) -> Result<()> {
        let alert = self.document.create_element(&self.alert_tag)?;
        let id = format!("{}-{}", TOAST_ID_PREFIX, Uuid::new_v4());
        alert.set_id(&id)?;
        self.configure(&alert, request)?;
        self.document.append_to_body(&alert)?;

        if let Err(e) = alert.invoke(TOAST_METHOD) {
            alert.remove();
            tracing::warn!("Toast '{}' could not be shown: {}", id, e);
            return Err(e);
        }

        tracing::info!("Toast '{}' shown ({})", id, request.severity);
        Ok(())
    }

    /// Shows an alert the caller rendered itself.
    ///
    /// The caller's tree may not have been flushed yet, so the lookup happens
    /// after exactly one frame boundary. There is no second attempt.
    pub async fn notify_by_id(&self, id: &str, request: &NotificationRequest) -> Result<()> {
        self.frames.next_frame().await;

        let alert = self.document.element_by_id(id).ok_or_else(|| {
            tracing::warn!("Alert '{}' still missing after one frame", id);
            BridgeError::NotFound(format!("no alert element with id `{}` after one frame", id))
        })?;

        self.configure(&alert, request)?;
        alert.invoke(TOAST_METHOD).inspect_err(|e| {
            tracing::warn!("Toast '{}' could not be shown: {}", id, e);
        })?;

        tracing::info!("Toast '{}' shown ({})", id, request.severity);
        Ok(())
    }

    fn configure(&self, alert: &D::Element, request: &NotificationRequest) -> Result<()> {
        alert.set_property(
            "variant",
            PropertyValue::Text(request.severity.as_variant().to_string()),
        )?;
        alert.set_property("closable", PropertyValue::Bool(true))?;
        alert.set_property(
            "duration",
            PropertyValue::Number(request.duration.as_millis()),
        )?;
        alert.set_inner_html(&alert_content(
            &self.icon_tag,
            &request.icon,
            &request.message,
        ))
    }
}
