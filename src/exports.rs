//! JS entry points for the declarative UI layer.
//!
//! Outcomes cross the boundary as plain objects: `{ ok: true }` or
//! `{ ok: false, error: "…" }`. Nothing here throws into JS.

use std::rc::Rc;

use js_sys::{Object, Promise, Reflect};
use once_cell::unsync::OnceCell;
use wasm_bindgen::prelude::*;

use crate::commands::{self, Outcome};
use crate::dom::web::WebDocument;
use crate::error::Result;
use crate::scheduler::AnimationFrame;
use crate::state::{BridgeState, Settings};
use crate::telemetry::init_tracing;

type WebBridge = BridgeState<WebDocument, AnimationFrame>;

/// Global a host page may set to a settings JSON string before the module loads.
const SETTINGS_GLOBAL: &str = "shoelaceBridgeSettings";

thread_local! {
    static BRIDGE: OnceCell<Rc<WebBridge>> = OnceCell::new();
}

fn startup_settings() -> Settings {
    let json = web_sys::window()
        .and_then(|window| Reflect::get(&window, &JsValue::from_str(SETTINGS_GLOBAL)).ok())
        .and_then(|value| value.as_string());
    Settings::load_or_default(json.as_deref())
}

fn bridge() -> Result<Rc<WebBridge>> {
    BRIDGE.with(|cell| {
        cell.get_or_try_init(|| {
            let document = WebDocument::global()?;
            Ok(Rc::new(BridgeState::new(document, AnimationFrame, startup_settings())))
        })
        .cloned()
    })
}

fn outcome_to_js(outcome: Outcome) -> JsValue {
    let object = Object::new();
    let _ = Reflect::set(&object, &"ok".into(), &JsValue::from_bool(outcome.is_ok()));
    if let Err(diagnostic) = outcome {
        let _ = Reflect::set(&object, &"error".into(), &JsValue::from_str(&diagnostic));
    }
    object.into()
}

fn with_bridge(run: impl FnOnce(&WebBridge) -> Outcome) -> JsValue {
    let outcome = bridge().map_err(|e| e.to_string()).and_then(|b| run(b.as_ref()));
    outcome_to_js(outcome)
}

#[wasm_bindgen(start)]
pub fn start() {
    init_tracing(&startup_settings().log_filter);
    match bridge() {
        Ok(bridge) => {
            // Shoelace may load after us; `registerRating` can be called again later.
            if let Err(e) = bridge.register_rating() {
                tracing::debug!("Rating element not registered at startup: {}", e);
            }
        }
        Err(e) => tracing::warn!("Bridge unavailable: {}", e),
    }
}

/// Replaces the bridge settings from a JSON document. The log filter only
/// applies at startup, through the `shoelaceBridgeSettings` global.
#[wasm_bindgen]
pub fn configure(settings_json: &str) -> JsValue {
    with_bridge(|bridge| {
        let settings = Settings::from_json(settings_json).map_err(|e| e.to_string())?;
        bridge.update_settings(settings);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn notify(message: &str, variant: &str, icon: &str, duration: f64) -> JsValue {
    with_bridge(|bridge| commands::notification::notify(bridge, message, variant, icon, duration))
}

/// Resolves to the outcome object after one animation frame.
#[wasm_bindgen(js_name = notifyById)]
pub fn notify_by_id(id: String, message: String, variant: String, icon: String, duration: f64) -> Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        let outcome = match bridge() {
            Ok(bridge) => {
                commands::notification::notify_by_id(bridge.as_ref(), &id, &message, &variant, &icon, duration)
                    .await
            }
            Err(e) => Err(e.to_string()),
        };
        Ok(outcome_to_js(outcome))
    })
}

#[wasm_bindgen(js_name = focusElementById)]
pub fn focus_element_by_id(id: &str) -> JsValue {
    with_bridge(|bridge| commands::focus::focus_element_by_id(bridge, id))
}

#[wasm_bindgen(js_name = consoleError)]
pub fn console_error(message: &str) {
    match bridge() {
        Ok(bridge) => commands::diagnostics::console_error(&bridge.document, message),
        Err(_) => web_sys::console::error_1(&JsValue::from_str(message)),
    }
}

#[wasm_bindgen(js_name = registerRating)]
pub fn register_rating() -> JsValue {
    with_bridge(commands::notification::register_rating)
}
