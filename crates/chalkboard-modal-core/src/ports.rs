use thiserror::Error;

use crate::domain::{DisplayValue, ElementId};

#[derive(Debug, Error)]
pub enum PortError {
    #[error("no element with id `{0}` in document")]
    MissingElement(ElementId),
    #[error("no `.{class}` descendant under `#{modal}`")]
    MissingCloseControl { modal: ElementId, class: String },
    #[error("document backend error: {0}")]
    Backend(String),
}

/// Element lookup and style access injected into the binder by its host.
pub trait DocumentPort {
    /// Opaque reference to a live element.
    type Handle: Clone + PartialEq + std::fmt::Debug;

    fn element_by_id(&self, id: &ElementId) -> Option<Self::Handle>;

    /// First descendant of `root` carrying `class`, in document order.
    /// `root` itself is not a candidate.
    fn query_descendant(&self, root: &Self::Handle, class: &str) -> Option<Self::Handle>;

    /// Whether `node` is `root` itself or one of its descendants.
    fn contains(&self, root: &Self::Handle, node: &Self::Handle) -> bool;

    fn display(&self, element: &Self::Handle) -> Result<DisplayValue, PortError>;

    fn set_display(
        &mut self,
        element: &Self::Handle,
        value: DisplayValue,
    ) -> Result<(), PortError>;
}
