use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::dom::Document;
use crate::error::Result;
use crate::focus::FocusDirector;
use crate::notifications::Notifier;
use crate::rating::{register_fixed_rating, RatingSettings};
use crate::scheduler::FrameScheduler;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_alert_tag")]
    pub alert_tag: String,
    #[serde(default = "default_icon_tag")]
    pub icon_tag: String,
    #[serde(default)]
    pub rating: RatingSettings,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    // Only used by the native timer scheduler
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
}

fn default_alert_tag() -> String {
    "sl-alert".to_string()
}

fn default_icon_tag() -> String {
    "sl-icon".to_string()
}

fn default_log_filter() -> String {
    "shoelace_bridge=info".to_string()
}

fn default_frame_interval() -> u64 {
    16
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alert_tag: default_alert_tag(),
            icon_tag: default_icon_tag(),
            rating: RatingSettings::default(),
            log_filter: default_log_filter(),
            frame_interval_ms: default_frame_interval(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses `json`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                tracing::warn!("Ignoring invalid bridge settings: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }
}

/// The injected host (document and frame scheduler) plus current settings.
///
/// Holds no per-call state: every operation resolves what it needs from the
/// document and lets go of it before returning.
pub struct BridgeState<D, S> {
    pub document: D,
    pub frames: S,
    pub settings: Arc<RwLock<Settings>>,
}

impl<D, S> BridgeState<D, S>
where
    D: Document,
    S: FrameScheduler,
{
    pub fn new(document: D, frames: S, settings: Settings) -> Self {
        Self {
            document,
            frames,
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    pub fn notifier(&self) -> Notifier<'_, D, S> {
        let settings = self.settings.read();
        Notifier::new(&self.document, &self.frames, &settings)
    }

    pub fn focus_director(&self) -> FocusDirector<'_, D> {
        FocusDirector::new(&self.document)
    }

    pub fn update_settings(&self, settings: Settings) {
        tracing::info!(
            "Bridge settings updated: alert=<{}> icon=<{}>",
            settings.alert_tag,
            settings.icon_tag
        );
        *self.settings.write() = settings;
    }

    /// Registers the fixed-glyph rating element. See [`register_fixed_rating`].
    pub fn register_rating(&self) -> Result<bool> {
        let settings = self.settings.read().clone();
        register_fixed_rating(&self.document, &settings.icon_tag, &settings.rating)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<D: Document> BridgeState<D, crate::scheduler::TimerFrames> {
    /// Native host whose frames tick every `frame_interval_ms`.
    pub fn with_timer_frames(document: D, settings: Settings) -> Self {
        let frames = crate::scheduler::TimerFrames::from_settings(&settings);
        Self::new(document, frames, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryDocument;
    use crate::notifications::NotificationRequest;
    use crate::scheduler::ScriptedFrames;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings = Settings::from_json(r#"{"alert_tag":"app-alert","rating":{"icon":"heart"}}"#).unwrap();
        assert_eq!(settings.alert_tag, "app-alert");
        assert_eq!(settings.icon_tag, "sl-icon");
        assert_eq!(settings.rating.icon, "heart");
        assert_eq!(settings.rating.base_tag, "sl-rating");
        assert_eq!(settings.frame_interval_ms, 16);
    }

    #[test]
    fn test_invalid_settings_fall_back() {
        assert_eq!(Settings::load_or_default(Some("{not json")), Settings::default());
        assert_eq!(Settings::load_or_default(None), Settings::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_host_uses_configured_frame_interval() {
        let doc = MemoryDocument::new();
        doc.define("sl-alert", &["toast"]);
        let settings = Settings::load_or_default(Some(r#"{"frame_interval_ms":50}"#));
        let state = BridgeState::with_timer_frames(doc.clone(), settings);
        assert_eq!(state.frames.interval(), std::time::Duration::from_millis(50));

        let late = doc.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            late.render("sl-alert", "late");
        });
        let start = tokio::time::Instant::now();
        state
            .notifier()
            .notify_by_id("late", &NotificationRequest::new("hi"))
            .await
            .unwrap();
        assert!(start.elapsed() >= std::time::Duration::from_millis(50));
    }

    #[test]
    fn test_updated_settings_reach_notifier() {
        let doc = MemoryDocument::new();
        doc.define("app-alert", &["toast"]);
        let state = BridgeState::new(doc.clone(), ScriptedFrames::new(), Settings::default());

        state.update_settings(Settings {
            alert_tag: "app-alert".to_string(),
            ..Settings::default()
        });
        state.notifier().notify(&NotificationRequest::new("hi")).unwrap();

        assert_eq!(doc.body()[0].tag, "app-alert");
    }
}
