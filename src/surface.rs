//! The slice of the document the controllers read and write.
//!
//! DESIGN
//! ======
//! Controllers never touch `web-sys` directly. They go through
//! [`PageSurface`], which the browser build implements over the live DOM and
//! [`MemoryPage`] implements over plain data for native callers and tests.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::collections::{BTreeSet, HashMap};

use crate::config::PageConfig;

/// Node groups the controllers operate on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeSet {
    /// The three stacked cascade cards.
    Cards,
    /// Elements carrying a translation key.
    Translatable,
    /// Locale-switch buttons.
    LocaleSwitches,
}

/// Document operations needed by the theme and locale controllers.
pub trait PageSurface {
    /// Handle to one element.
    type Node;

    fn remove_root_classes(&mut self, classes: &[&str]);
    fn add_root_classes(&mut self, classes: &[&str]);

    /// Drop any inline background override left on the root by a transition.
    fn clear_root_background(&mut self);

    fn set_root_lang(&mut self, tag: &str);

    /// All nodes currently in `set`, in document order.
    fn nodes(&self, set: NodeSet) -> Vec<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn toggle_class(&mut self, node: &Self::Node, class: &str, on: bool);
    fn set_text(&mut self, node: &Self::Node, text: &str);
    fn set_z_index(&mut self, node: &Self::Node, z: i32);

    /// Restart the node's entrance animation from the beginning.
    fn replay_entrance(&mut self, node: &Self::Node);
}

/// One element in a [`MemoryPage`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryNode {
    pub attributes: HashMap<String, String>,
    pub classes: BTreeSet<String>,
    pub text: String,
    pub z_index: Option<i32>,
    /// Number of entrance replays requested.
    pub replays: u32,
}

impl MemoryNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_owned());
        self
    }

    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// Identifies a node inside a [`MemoryPage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub set: NodeSet,
    pub index: usize,
}

/// Plain-data page used off the browser.
#[derive(Clone, Debug)]
pub struct MemoryPage {
    pub root_classes: BTreeSet<String>,
    pub root_lang: Option<String>,
    /// Inline background left on the root, `None` once cleared.
    pub root_background: Option<String>,
    /// Number of background clears requested.
    pub background_clears: u32,
    /// Attribute [`Self::card`] matches card keys against.
    card_key_attr: String,
    sets: HashMap<NodeSet, Vec<MemoryNode>>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self {
            root_classes: BTreeSet::new(),
            root_lang: None,
            root_background: None,
            background_clears: 0,
            card_key_attr: PageConfig::default().card_key_attr,
            sets: HashMap::new(),
        }
    }
}

impl MemoryPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// [`Self::with_config`] over the default attribute names
    /// (`data-theme`, `data-i18n`, `data-lang`).
    #[must_use]
    pub fn standard(translatable: &[(&str, &str)], locales: &[&str]) -> Self {
        Self::with_config(&PageConfig::default(), translatable, locales)
    }

    /// Three cards, the given translatable elements, and one switch button
    /// per locale name, tagged with the attribute names from `config`.
    #[must_use]
    pub fn with_config(config: &PageConfig, translatable: &[(&str, &str)], locales: &[&str]) -> Self {
        let mut page = Self { card_key_attr: config.card_key_attr.clone(), ..Self::default() };
        for key in ["light", "dark", "p5"] {
            page.push(NodeSet::Cards, MemoryNode::new().attr(&config.card_key_attr, key));
        }
        for (key, text) in translatable {
            page.push(
                NodeSet::Translatable,
                MemoryNode::new().attr(&config.translation_key_attr, key).text(text),
            );
        }
        for lang in locales {
            page.push(NodeSet::LocaleSwitches, MemoryNode::new().attr(&config.locale_switch_attr, lang));
        }
        page
    }

    pub fn push(&mut self, set: NodeSet, node: MemoryNode) -> NodeId {
        let nodes = self.sets.entry(set).or_default();
        nodes.push(node);
        NodeId { set, index: nodes.len() - 1 }
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&MemoryNode> {
        self.sets.get(&id.set)?.get(id.index)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut MemoryNode> {
        self.sets.get_mut(&id.set)?.get_mut(id.index)
    }

    /// All nodes of `set`, in insertion order.
    #[must_use]
    pub fn set(&self, set: NodeSet) -> &[MemoryNode] {
        self.sets.get(&set).map_or(&[], Vec::as_slice)
    }

    /// The card whose key attribute equals `key`.
    #[must_use]
    pub fn card(&self, key: &str) -> Option<&MemoryNode> {
        self.set(NodeSet::Cards)
            .iter()
            .find(|node| node.attributes.get(&self.card_key_attr).map(String::as_str) == Some(key))
    }

    #[must_use]
    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }
}

impl PageSurface for MemoryPage {
    type Node = NodeId;

    fn remove_root_classes(&mut self, classes: &[&str]) {
        for class in classes {
            self.root_classes.remove(*class);
        }
    }

    fn add_root_classes(&mut self, classes: &[&str]) {
        for class in classes {
            self.root_classes.insert((*class).to_owned());
        }
    }

    fn clear_root_background(&mut self) {
        self.root_background = None;
        self.background_clears += 1;
    }

    fn set_root_lang(&mut self, tag: &str) {
        self.root_lang = Some(tag.to_owned());
    }

    fn nodes(&self, set: NodeSet) -> Vec<NodeId> {
        (0..self.set(set).len()).map(|index| NodeId { set, index }).collect()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.node(*node)?.attributes.get(name).cloned()
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.node(*node).is_some_and(|n| n.has_class(class))
    }

    fn toggle_class(&mut self, node: &NodeId, class: &str, on: bool) {
        if let Some(n) = self.node_mut(*node) {
            if on {
                n.classes.insert(class.to_owned());
            } else {
                n.classes.remove(class);
            }
        }
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        if let Some(n) = self.node_mut(*node) {
            text.clone_into(&mut n.text);
        }
    }

    fn set_z_index(&mut self, node: &NodeId, z: i32) {
        if let Some(n) = self.node_mut(*node) {
            n.z_index = Some(z);
        }
    }

    fn replay_entrance(&mut self, node: &NodeId) {
        if let Some(n) = self.node_mut(*node) {
            n.replays += 1;
        }
    }
}
