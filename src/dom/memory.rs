//! In-memory host document.
//!
//! Models just enough of a browser document for the bridge: nodes with an id,
//! JS properties and inner markup, a body, a focus owner, a custom element
//! registry and a console. Custom elements answer `invoke` only for the
//! methods they were defined with, so a missing or failing component can be
//! simulated per tag.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;

use super::{Console, Document, Element, PropertyValue};
use crate::error::{BridgeError, Result};

/// Copy of a node's state at the time it was read.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSnapshot {
    pub tag: String,
    pub id: Option<String>,
    pub properties: HashMap<String, PropertyValue>,
    pub inner_html: String,
    pub attached: bool,
    /// Methods successfully invoked on the node, in call order.
    pub invoked: Vec<String>,
}

impl NodeSnapshot {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            properties: HashMap::new(),
            inner_html: String::new(),
            attached: false,
            invoked: Vec::new(),
        }
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// The text a reader would see: tags dropped, entities decoded.
    pub fn rendered_text(&self) -> String {
        let mut text = String::with_capacity(self.inner_html.len());
        let mut in_tag = false;
        for ch in self.inner_html.chars() {
            match ch {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                _ if !in_tag => text.push(ch),
                _ => {}
            }
        }

        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&nbsp;", "\u{a0}")
            .replace("&amp;", "&")
    }
}

#[derive(Debug, Clone, Default)]
struct CustomElement {
    methods: HashSet<String>,
    failure: Option<String>,
    base: Option<String>,
    glyph: Option<String>,
}

#[derive(Debug, Default)]
struct DocState {
    nodes: Vec<NodeSnapshot>,
    body: Vec<usize>,
    focused: Option<usize>,
    registry: HashMap<String, CustomElement>,
    console: Vec<String>,
}

impl DocState {
    fn find(&self, id: &str) -> Option<usize> {
        self.nodes
            .iter()
            .position(|node| node.attached && node.id.as_deref() == Some(id))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    state: Arc<Mutex<DocState>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a custom element class exposing `methods`.
    pub fn define(&self, tag: &str, methods: &[&str]) {
        let mut state = self.state.lock();
        let entry = state.registry.entry(tag.to_string()).or_default();
        entry.methods = methods.iter().map(|m| m.to_string()).collect();
    }

    /// Makes every method of `tag` throw `message`.
    pub fn fail_methods(&self, tag: &str, message: &str) {
        let mut state = self.state.lock();
        let entry = state.registry.entry(tag.to_string()).or_default();
        entry.failure = Some(message.to_string());
    }

    /// Creates and attaches a node the way the owning framework would.
    pub fn render(&self, tag: &str, id: &str) -> MemoryElement {
        let mut state = self.state.lock();
        let mut node = NodeSnapshot::new(tag);
        node.id = Some(id.to_string());
        node.attached = true;
        state.nodes.push(node);
        let key = state.nodes.len() - 1;
        state.body.push(key);
        MemoryElement {
            key,
            state: self.state.clone(),
        }
    }

    pub fn detach(&self, id: &str) {
        let mut state = self.state.lock();
        if let Some(key) = state.find(id) {
            detach_node(&mut state, key);
        }
    }

    pub fn snapshot(&self, id: &str) -> Option<NodeSnapshot> {
        let state = self.state.lock();
        state.find(id).map(|key| state.nodes[key].clone())
    }

    /// Nodes currently attached to the body, in append order.
    pub fn body(&self) -> Vec<NodeSnapshot> {
        let state = self.state.lock();
        state.body.iter().map(|&key| state.nodes[key].clone()).collect()
    }

    pub fn focused_id(&self) -> Option<String> {
        let state = self.state.lock();
        state.focused.and_then(|key| state.nodes[key].id.clone())
    }

    pub fn console_messages(&self) -> Vec<String> {
        self.state.lock().console.clone()
    }

    /// The glyph a fixed-glyph element renders for any value.
    pub fn glyph_for(&self, tag: &str) -> Option<String> {
        self.state
            .lock()
            .registry
            .get(tag)
            .and_then(|def| def.glyph.clone())
    }

    pub fn base_of(&self, tag: &str) -> Option<String> {
        self.state
            .lock()
            .registry
            .get(tag)
            .and_then(|def| def.base.clone())
    }
}

fn detach_node(state: &mut DocState, key: usize) {
    state.nodes[key].attached = false;
    state.body.retain(|&k| k != key);
    if state.focused == Some(key) {
        state.focused = None;
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        let key = self.state.lock().find(id)?;
        Some(MemoryElement {
            key,
            state: self.state.clone(),
        })
    }

    fn create_element(&self, tag: &str) -> Result<MemoryElement> {
        if tag.is_empty() || tag.contains(|c: char| c.is_whitespace() || c == '<' || c == '>') {
            return Err(BridgeError::Dom(format!(
                "InvalidCharacterError: `{}` is not a valid tag name",
                tag
            )));
        }

        let mut state = self.state.lock();
        state.nodes.push(NodeSnapshot::new(tag));
        Ok(MemoryElement {
            key: state.nodes.len() - 1,
            state: self.state.clone(),
        })
    }

    fn append_to_body(&self, element: &MemoryElement) -> Result<()> {
        let mut state = self.state.lock();
        state.nodes[element.key].attached = true;
        if !state.body.contains(&element.key) {
            state.body.push(element.key);
        }
        Ok(())
    }

    fn is_defined(&self, tag: &str) -> bool {
        self.state.lock().registry.contains_key(tag)
    }

    fn define_fixed_glyph(&self, tag: &str, base: &str, glyph: &str) -> Result<()> {
        let mut state = self.state.lock();
        if state.registry.contains_key(tag) {
            return Err(BridgeError::Dom(format!(
                "NotSupportedError: `{}` has already been defined",
                tag
            )));
        }
        let methods = match state.registry.get(base) {
            Some(def) => def.methods.clone(),
            None => {
                return Err(BridgeError::ExternalComponent(format!(
                    "`{}` is not a registered custom element",
                    base
                )))
            }
        };

        state.registry.insert(
            tag.to_string(),
            CustomElement {
                methods,
                failure: None,
                base: Some(base.to_string()),
                glyph: Some(glyph.to_string()),
            },
        );
        Ok(())
    }
}

impl Console for MemoryDocument {
    fn error(&self, message: &str) {
        self.state.lock().console.push(message.to_string());
    }
}

#[derive(Debug, Clone)]
pub struct MemoryElement {
    key: usize,
    state: Arc<Mutex<DocState>>,
}

impl MemoryElement {
    pub fn snapshot(&self) -> NodeSnapshot {
        self.state.lock().nodes[self.key].clone()
    }
}

impl Element for MemoryElement {
    fn set_id(&self, id: &str) -> Result<()> {
        self.state.lock().nodes[self.key].id = Some(id.to_string());
        Ok(())
    }

    fn set_property(&self, name: &str, value: PropertyValue) -> Result<()> {
        self.state.lock().nodes[self.key]
            .properties
            .insert(name.to_string(), value);
        Ok(())
    }

    fn set_inner_html(&self, markup: &str) -> Result<()> {
        self.state.lock().nodes[self.key].inner_html = markup.to_string();
        Ok(())
    }

    fn focus(&self) {
        let mut state = self.state.lock();
        if state.nodes[self.key].attached {
            state.focused = Some(self.key);
        }
    }

    fn invoke(&self, method: &str) -> Result<()> {
        let mut state = self.state.lock();
        let tag = state.nodes[self.key].tag.clone();
        let missing = || format!("TypeError: element.{} is not a function", method);

        let outcome = match state.registry.get(&tag) {
            Some(def) if def.methods.contains(method) => match &def.failure {
                Some(message) => Err(message.clone()),
                None => Ok(()),
            },
            _ => Err(missing()),
        };

        match outcome {
            Ok(()) => {
                state.nodes[self.key].invoked.push(method.to_string());
                Ok(())
            }
            Err(cause) => Err(BridgeError::ExternalComponent(cause)),
        }
    }

    fn remove(&self) {
        let mut state = self.state.lock();
        detach_node(&mut state, self.key);
    }
}
