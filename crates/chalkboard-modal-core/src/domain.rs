use serde::{Deserialize, Serialize};

/// Identifier attribute of a document element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Values the binder writes to a modal's display style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayValue {
    Block,
    None,
}

impl DisplayValue {
    /// The literal style value as it appears in the document.
    pub fn as_css(self) -> &'static str {
        match self {
            DisplayValue::Block => "block",
            DisplayValue::None => "none",
        }
    }
}

/// One modal/trigger wiring entry. The caller configures these; the
/// binder resolves them against the document at bind time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingPair {
    pub modal: ElementId,
    pub trigger: ElementId,
}

impl BindingPair {
    pub fn new(modal: impl Into<ElementId>, trigger: impl Into<ElementId>) -> Self {
        Self {
            modal: modal.into(),
            trigger: trigger.into(),
        }
    }
}
