//! Browser document backed by `web-sys`.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::{Console, Document, Element, PropertyValue};
use crate::error::{BridgeError, Result};

/// Stringifies a thrown JS value the way `String(err)` would.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.to_string());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[derive(Clone)]
pub struct WebDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebDocument {
    pub fn global() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| BridgeError::Dom("window is unavailable".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| BridgeError::Dom("document is unavailable".to_string()))?;
        Ok(Self { window, document })
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn create_element(&self, tag: &str) -> Result<WebElement> {
        self.document
            .create_element(tag)
            .map(WebElement)
            .map_err(|e| BridgeError::Dom(describe(&e)))
    }

    fn append_to_body(&self, element: &WebElement) -> Result<()> {
        let body = self
            .document
            .body()
            .ok_or_else(|| BridgeError::Dom("document body is unavailable".to_string()))?;
        body.append_child(&element.0)
            .map(|_| ())
            .map_err(|e| BridgeError::Dom(describe(&e)))
    }

    fn is_defined(&self, tag: &str) -> bool {
        !self.window.custom_elements().get(tag).is_undefined()
    }

    fn define_fixed_glyph(&self, tag: &str, base: &str, glyph: &str) -> Result<()> {
        let registry = self.window.custom_elements();
        let base_class = registry.get(base);
        if base_class.is_undefined() {
            return Err(BridgeError::ExternalComponent(format!(
                "`{}` is not a registered custom element",
                base
            )));
        }

        let factory = Function::new_with_args(
            "base, glyph",
            "return class extends base { constructor() { super(); this.getSymbol = () => glyph; } };",
        );
        let class = factory
            .call2(&JsValue::NULL, &base_class, &JsValue::from_str(glyph))
            .map_err(|e| BridgeError::ExternalComponent(describe(&e)))?
            .dyn_into::<Function>()
            .map_err(|_| BridgeError::ExternalComponent("subclass is not a constructor".to_string()))?;

        registry
            .define(tag, &class)
            .map_err(|e| BridgeError::Dom(describe(&e)))
    }
}

impl Console for WebDocument {
    fn error(&self, message: &str) {
        web_sys::console::error_1(&JsValue::from_str(message));
    }
}

const ELEMENT_FOCUS: &str = "focus";

#[derive(Clone)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    /// Calls a zero-argument method looked up on the element at runtime.
    fn call(&self, method: &str) -> std::result::Result<JsValue, JsValue> {
        let function = Reflect::get(&self.0, &JsValue::from_str(method))?
            .dyn_into::<Function>()
            .map_err(|_| {
                JsValue::from(js_sys::TypeError::new(&format!(
                    "element.{} is not a function",
                    method
                )))
            })?;
        function.call0(&self.0)
    }
}

impl Element for WebElement {
    fn set_id(&self, id: &str) -> Result<()> {
        self.0.set_id(id);
        Ok(())
    }

    fn set_property(&self, name: &str, value: PropertyValue) -> Result<()> {
        let js = match value {
            PropertyValue::Bool(b) => JsValue::from_bool(b),
            PropertyValue::Number(n) => JsValue::from_f64(n),
            PropertyValue::Text(s) => JsValue::from_str(&s),
        };
        Reflect::set(&self.0, &JsValue::from_str(name), &js)
            .map(|_| ())
            .map_err(|e| BridgeError::Dom(describe(&e)))
    }

    fn set_inner_html(&self, markup: &str) -> Result<()> {
        self.0.set_inner_html(markup);
        Ok(())
    }

    fn focus(&self) {
        // HTMLElement and SVGElement both expose `focus` on their prototype.
        if let Err(e) = self.call(ELEMENT_FOCUS) {
            tracing::warn!("focus() on '{}' failed: {}", self.0.id(), describe(&e));
        }
    }

    fn invoke(&self, method: &str) -> Result<()> {
        let returned = self
            .call(method)
            .map_err(|e| BridgeError::ExternalComponent(describe(&e)))?;

        // Promises such as `toast()` settle when the alert hides; only watch
        // for a late rejection.
        if let Ok(promise) = returned.dyn_into::<Promise>() {
            let id = self.0.id();
            let method = method.to_string();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    tracing::warn!("{}() on '{}' rejected: {}", method, id, describe(&e));
                }
            });
        }
        Ok(())
    }

    fn remove(&self) {
        self.0.remove();
    }
}
