//! Frame-boundary scheduling.
//!
//! `next_frame` resolves once, after the host's next rendering pass. It is the
//! single suspension point of the bridge and is never cancelled or retried.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

#[async_trait(?Send)]
pub trait FrameScheduler {
    async fn next_frame(&self);
}

/// Browser scheduler backed by `requestAnimationFrame`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationFrame;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl FrameScheduler for AnimationFrame {
    async fn next_frame(&self) {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            tracing::warn!("No window available, skipping frame deferral");
            return;
        };

        let (tx, rx) = futures::channel::oneshot::channel::<()>();
        let callback = Closure::once(move || {
            let _ = tx.send(());
        });

        if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            tracing::warn!("requestAnimationFrame failed: {:?}", e);
            return;
        }

        // The closure must outlive the frame callback.
        let _ = rx.await;
        drop(callback);
    }
}

/// Native scheduler that treats a fixed timer tick as a frame.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy)]
pub struct TimerFrames {
    interval: std::time::Duration,
}

#[cfg(not(target_arch = "wasm32"))]
impl TimerFrames {
    pub fn new(interval: std::time::Duration) -> Self {
        Self { interval }
    }

    pub fn from_settings(settings: &crate::state::Settings) -> Self {
        Self::new(std::time::Duration::from_millis(settings.frame_interval_ms))
    }

    pub fn interval(&self) -> std::time::Duration {
        self.interval
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for TimerFrames {
    fn default() -> Self {
        Self::from_settings(&crate::state::Settings::default())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl FrameScheduler for TimerFrames {
    async fn next_frame(&self) {
        tokio::time::sleep(self.interval).await;
    }
}

type RenderPass = Box<dyn FnOnce() + Send>;

/// Deterministic scheduler: work queued with [`ScriptedFrames::on_next_frame`]
/// runs at the next frame boundary, before the awaiting continuation resumes.
/// Stands in for a declarative framework flushing its tree.
#[derive(Clone, Default)]
pub struct ScriptedFrames {
    pending: Arc<Mutex<Vec<RenderPass>>>,
    elapsed: Arc<AtomicUsize>,
}

impl ScriptedFrames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_next_frame(&self, pass: impl FnOnce() + Send + 'static) {
        self.pending.lock().push(Box::new(pass));
    }

    /// Number of frame boundaries crossed so far.
    pub fn elapsed(&self) -> usize {
        self.elapsed.load(Ordering::Acquire)
    }
}

#[async_trait(?Send)]
impl FrameScheduler for ScriptedFrames {
    async fn next_frame(&self) {
        let due = std::mem::take(&mut *self.pending.lock());
        self.elapsed.fetch_add(1, Ordering::AcqRel);
        for pass in due {
            pass();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;

    #[tokio::test]
    async fn test_scripted_frame_runs_queued_pass_once() {
        let frames = ScriptedFrames::new();
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();
        frames.on_next_frame(move || flag.store(true, Ordering::Release));

        assert!(!ran.load(Ordering::Acquire));
        frames.next_frame().await;
        assert!(ran.load(Ordering::Acquire));
        assert_eq!(frames.elapsed(), 1);

        frames.next_frame().await;
        assert_eq!(frames.elapsed(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_frame_elapses() {
        let frames = TimerFrames::default();
        let start = tokio::time::Instant::now();
        frames.next_frame().await;
        assert!(start.elapsed() >= std::time::Duration::from_millis(16));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_frames_follow_configured_interval() {
        let settings = crate::state::Settings {
            frame_interval_ms: 40,
            ..Default::default()
        };
        let frames = TimerFrames::from_settings(&settings);
        assert_eq!(frames.interval(), std::time::Duration::from_millis(40));

        let start = tokio::time::Instant::now();
        frames.next_frame().await;
        assert!(start.elapsed() >= std::time::Duration::from_millis(40));
    }
}
