//! Commands for toast notifications.

use super::Outcome;
use crate::dom::Document;
use crate::notifications::{DisplayDuration, NotificationRequest};
use crate::scheduler::FrameScheduler;
use crate::state::BridgeState;

fn request(message: &str, variant: &str, icon: &str, duration_ms: f64) -> NotificationRequest {
    NotificationRequest::new(message)
        .severity(variant)
        .icon(icon)
        .duration(DisplayDuration::from_millis(duration_ms))
}

/// Shows a toast on a freshly built alert.
pub fn notify<D, S>(
    state: &BridgeState<D, S>,
    message: &str,
    variant: &str,
    icon: &str,
    duration_ms: f64,
) -> Outcome
where
    D: Document,
    S: FrameScheduler,
{
    state
        .notifier()
        .notify(&request(message, variant, icon, duration_ms))
        .map_err(|e| e.to_string())
}

/// Shows a toast on an alert the caller rendered, one frame from now.
pub async fn notify_by_id<D, S>(
    state: &BridgeState<D, S>,
    id: &str,
    message: &str,
    variant: &str,
    icon: &str,
    duration_ms: f64,
) -> Outcome
where
    D: Document,
    S: FrameScheduler,
{
    let request = request(message, variant, icon, duration_ms);
    state
        .notifier()
        .notify_by_id(id, &request)
        .await
        .map_err(|e| e.to_string())
}

/// Registers the fixed-glyph rating element.
pub fn register_rating<D, S>(state: &BridgeState<D, S>) -> Outcome
where
    D: Document,
    S: FrameScheduler,
{
    state.register_rating().map(|_| ()).map_err(|e| e.to_string())
}
