//! In-memory element tree standing in for a rendered page.

use chalkboard_modal_core::{DisplayValue, DocumentPort, ElementId, PortError};

/// Handle into an [`InMemoryDocument`]. Handles stay valid for the
/// document's lifetime; elements are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    display: DisplayValue,
}

/// Declarative description of an element to append.
#[derive(Debug, Clone)]
pub struct ElementSpec {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    display: DisplayValue,
}

impl ElementSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            id: None,
            classes: Vec::new(),
            display: DisplayValue::Block,
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_owned());
        self
    }

    /// Start the element with display `"none"`, as stylesheets do for
    /// modal containers.
    pub fn hidden(mut self) -> Self {
        self.display = DisplayValue::None;
        self
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryDocument {
    nodes: Vec<Node>,
}

impl InMemoryDocument {
    /// An empty document holding only the body element.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                tag: "body".to_owned(),
                id: None,
                classes: Vec::new(),
                parent: None,
                children: Vec::new(),
                display: DisplayValue::Block,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn append(&mut self, parent: NodeId, spec: ElementSpec) -> NodeId {
        let node = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag: spec.tag,
            id: spec.id,
            classes: spec.classes,
            parent: Some(parent),
            children: Vec::new(),
            display: spec.display,
        });
        self.nodes[parent.0].children.push(node);
        node
    }
}

impl Default for InMemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentPort for InMemoryDocument {
    type Handle = NodeId;

    fn element_by_id(&self, id: &ElementId) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.id.as_deref() == Some(id.as_str()))
            .map(NodeId)
    }

    fn query_descendant(&self, root: &NodeId, class: &str) -> Option<NodeId> {
        // Preorder walk over the subtree, excluding the root itself.
        let mut stack: Vec<NodeId> = self.nodes[root.0].children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            if self.nodes[node.0].classes.iter().any(|c| c == class) {
                return Some(node);
            }
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        None
    }

    fn contains(&self, root: &NodeId, node: &NodeId) -> bool {
        let mut current = Some(*node);
        while let Some(n) = current {
            if n == *root {
                return true;
            }
            current = self.nodes[n.0].parent;
        }
        false
    }

    fn display(&self, element: &NodeId) -> Result<DisplayValue, PortError> {
        self.nodes
            .get(element.0)
            .map(|node| node.display)
            .ok_or_else(|| PortError::Backend(format!("stale handle {element:?}")))
    }

    fn set_display(&mut self, element: &NodeId, value: DisplayValue) -> Result<(), PortError> {
        match self.nodes.get_mut(element.0) {
            Some(node) => {
                node.display = value;
                Ok(())
            }
            None => Err(PortError::Backend(format!("stale handle {element:?}"))),
        }
    }
}
