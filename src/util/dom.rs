//! [`PageSurface`] over the live document.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{describe, log_js_err};
use crate::config::PageConfig;
use crate::surface::{NodeSet, PageSurface};

/// The document element plus the selectors for each node set.
pub struct WebSurface {
    document: Document,
    root: Element,
    selectors: HashMap<NodeSet, String>,
}

impl WebSurface {
    /// Bind to `document`. `None` when it has no root element.
    #[must_use]
    pub fn new(document: Document, config: &PageConfig) -> Option<Self> {
        let root = document.document_element()?;
        let selectors = HashMap::from([
            (NodeSet::Cards, config.card_selector.clone()),
            (NodeSet::Translatable, config.translatable_selector.clone()),
            (NodeSet::LocaleSwitches, config.locale_switch_selector.clone()),
        ]);
        Some(Self { document, root, selectors })
    }

    fn root_style(&self) -> Option<web_sys::CssStyleDeclaration> {
        self.root.dyn_ref::<HtmlElement>().map(HtmlElement::style)
    }
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::debug!("querySelectorAll({selector}) failed: {}", describe(&e));
            return Vec::new();
        }
    };
    let mut elements = Vec::new();
    for i in 0..list.length() {
        if let Some(node) = list.get(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                elements.push(element);
            }
        }
    }
    elements
}

impl PageSurface for WebSurface {
    type Node = Element;

    fn remove_root_classes(&mut self, classes: &[&str]) {
        let list = self.root.class_list();
        for class in classes {
            log_js_err("classList.remove", list.remove_1(class));
        }
    }

    fn add_root_classes(&mut self, classes: &[&str]) {
        let list = self.root.class_list();
        for class in classes {
            log_js_err("classList.add", list.add_1(class));
        }
    }

    fn clear_root_background(&mut self) {
        if let Some(style) = self.root_style() {
            log_js_err("style.removeProperty", style.remove_property("background-color"));
        }
    }

    fn set_root_lang(&mut self, tag: &str) {
        log_js_err("setAttribute(lang)", self.root.set_attribute("lang", tag));
    }

    fn nodes(&self, set: NodeSet) -> Vec<Element> {
        self.selectors
            .get(&set)
            .map_or_else(Vec::new, |selector| query_all(&self.document, selector))
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn toggle_class(&mut self, node: &Element, class: &str, on: bool) {
        log_js_err("classList.toggle", node.class_list().toggle_with_force(class, on));
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_z_index(&mut self, node: &Element, z: i32) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            log_js_err("style.zIndex", el.style().set_property("z-index", &z.to_string()));
        }
    }

    fn replay_entrance(&mut self, node: &Element) {
        let Some(el) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = el.style();
        log_js_err("style.animation", style.set_property("animation", "none"));
        // Reading layout flushes the `none` assignment before it is lifted,
        // so the stylesheet animation starts over.
        el.offset_width();
        log_js_err("style.animation", style.remove_property("animation"));
    }
}
