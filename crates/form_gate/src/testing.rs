//! In-memory document for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::MarkupContract;
use crate::dom::FormDom;

pub type NodeId = usize;

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    parent: Option<NodeId>,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    styles: HashMap<String, String>,
    value: String,
    checked: bool,
    text: String,
}

/// Nodes are stored in document order; a node's index is its handle.
pub struct MemoryDom {
    markup: MarkupContract,
    nodes: RefCell<Vec<NodeData>>,
}

pub struct ElementBuilder<'a> {
    dom: &'a MemoryDom,
    node: NodeId,
}

impl<'a> ElementBuilder<'a> {
    pub fn class(self, class: &str) -> Self {
        self.dom.set_class(&self.node, class, true);
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        self.dom.nodes.borrow_mut()[self.node]
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn html_id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn style(self, property: &str, value: &str) -> Self {
        self.dom.set_style(&self.node, property, value);
        self
    }

    pub fn node(self) -> NodeId {
        self.node
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        Self {
            markup: MarkupContract::standard(),
            nodes: RefCell::new(Vec::new()),
        }
    }

    /// Append a new element as the last child of `parent`.
    pub fn element(&self, parent: Option<NodeId>, tag: &str) -> ElementBuilder<'_> {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeData {
            tag: tag.to_string(),
            parent,
            ..NodeData::default()
        });
        ElementBuilder {
            dom: self,
            node: nodes.len() - 1,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn set_value(&self, node: NodeId, value: &str) {
        self.nodes.borrow_mut()[node].value = value.to_string();
    }

    pub fn set_checked(&self, node: NodeId, checked: bool) {
        self.nodes.borrow_mut()[node].checked = checked;
    }

    pub fn text(&self, node: NodeId) -> String {
        self.nodes.borrow()[node].text.clone()
    }

    pub fn children_with_class(&self, parent: NodeId, class: &str) -> Vec<NodeId> {
        (0..self.len())
            .filter(|&node| self.parent(&node) == Some(parent) && self.has_class(&node, class))
            .collect()
    }

    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.parent(&node);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(&parent);
        }
        false
    }

    fn descendants(&self, scope: Option<NodeId>) -> Vec<NodeId> {
        (0..self.len())
            .filter(|&node| scope.map_or(true, |scope| self.is_descendant(node, scope)))
            .collect()
    }

    fn first_descendant_with_class(&self, scope: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(Some(scope))
            .into_iter()
            .find(|node| self.has_class(node, class))
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(&node);
        (node + 1..self.len()).find(|&other| self.parent(&other) == parent)
    }

    fn tag(&self, node: NodeId) -> String {
        self.nodes.borrow()[node].tag.clone()
    }
}

impl FormDom for MemoryDom {
    type Node = NodeId;

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.borrow()[*node].parent
    }

    fn is_form(&self, node: &NodeId) -> bool {
        self.tag(*node) == "form"
    }

    fn html_id(&self, node: &NodeId) -> Option<String> {
        self.attribute(node, "id").filter(|id| !id.is_empty())
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[*node].attributes.get(name).cloned()
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[*node].classes.iter().any(|c| c == class)
    }

    fn set_class(&self, node: &NodeId, class: &str, enabled: bool) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[*node].classes;
        let present = classes.iter().any(|c| c == class);
        if enabled && !present {
            classes.push(class.to_string());
        } else if !enabled {
            classes.retain(|c| c != class);
        }
    }

    fn value(&self, node: &NodeId) -> String {
        self.nodes.borrow()[*node].value.clone()
    }

    fn is_multiline(&self, node: &NodeId) -> bool {
        self.tag(*node) == "textarea"
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let styles = &mut nodes[*node].styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn style(&self, node: &NodeId, property: &str) -> String {
        self.nodes.borrow()[*node]
            .styles
            .get(property)
            .cloned()
            .unwrap_or_default()
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.nodes.borrow_mut()[*node].text = text.to_string();
    }

    fn fields(&self, scope: Option<&NodeId>) -> Vec<NodeId> {
        let attribute = self.markup.field_attribute;
        self.descendants(scope.copied())
            .into_iter()
            .filter(|node| {
                let tag = self.tag(*node);
                (tag == "input" || tag == "textarea") && self.attribute(node, attribute).is_some()
            })
            .collect()
    }

    fn consent_checked(&self, form: &NodeId) -> bool {
        let class = self.markup.consent_selector.trim_start_matches('.');
        self.first_descendant_with_class(*form, class)
            .and_then(|custom| self.next_sibling(custom))
            .map(|input| self.nodes.borrow()[input].checked)
            .unwrap_or(false)
    }

    fn submit_container(&self, form: &NodeId) -> Option<NodeId> {
        let class = self.markup.submit_selector.trim_start_matches('.');
        let button = self.first_descendant_with_class(*form, class)?;
        self.parent(&button)
    }

    fn error_text(&self, host: &NodeId) -> Option<NodeId> {
        self.first_descendant_with_class(*host, self.markup.error_text_class)
    }

    fn create_error_text(&self, host: &NodeId) -> Option<NodeId> {
        let node = self
            .element(Some(*host), "div")
            .class(self.markup.error_text_class)
            .class(self.markup.hidden_class)
            .node();
        Some(node)
    }

    fn steps(&self) -> Vec<NodeId> {
        let class = self.markup.step_selector.trim_start_matches('.');
        (0..self.len())
            .filter(|node| self.has_class(node, class))
            .collect()
    }
}
