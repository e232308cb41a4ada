pub mod commands;
pub mod dom;
pub mod error;
pub mod focus;
pub mod notifications;
pub mod rating;
pub mod scheduler;
pub mod state;
pub mod telemetry;

#[cfg(target_arch = "wasm32")]
mod exports;

pub use commands::Outcome;
pub use error::{BridgeError, Result};
pub use state::{BridgeState, Settings};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryDocument;
    use crate::scheduler::ScriptedFrames;

    // One host, every operation, no panics across the boundary.
    #[tokio::test]
    async fn test_bridge_round_trip() {
        telemetry::init_tracing("shoelace_bridge=debug");

        let doc = MemoryDocument::new();
        doc.define("sl-alert", &["toast"]);
        doc.define("sl-rating", &[]);
        doc.render("sl-input", "email");
        let bridge = BridgeState::new(doc.clone(), ScriptedFrames::new(), Settings::default());

        assert_eq!(commands::notification::register_rating(&bridge), Ok(()));
        assert_eq!(
            commands::notification::notify(&bridge, "Welcome & <hello>", "info", "info-circle", 3000.0),
            Ok(())
        );
        assert_eq!(commands::focus::focus_element_by_id(&bridge, "email"), Ok(()));

        let late = doc.clone();
        bridge.frames.on_next_frame(move || {
            late.render("sl-alert", "form-error");
        });
        assert_eq!(
            commands::notification::notify_by_id(&bridge, "form-error", "Invalid", "danger", "x", 0.0).await,
            Ok(())
        );

        let failures: Vec<Outcome> = vec![
            commands::focus::focus_element_by_id(&bridge, "missing"),
            commands::notification::notify_by_id(&bridge, "missing", "m", "info", "i", 1.0).await,
        ];
        assert!(failures.iter().all(|o| o.is_err()));

        commands::diagnostics::console_error(&bridge.document, "unrecoverable");
        assert_eq!(doc.console_messages(), vec!["unrecoverable".to_string()]);

        let toasts: Vec<_> = doc.body().into_iter().filter(|n| n.tag == "sl-alert").collect();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].rendered_text(), "Welcome & <hello>");
    }
}
