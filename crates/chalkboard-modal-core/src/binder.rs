//! Wires show/hide click subscriptions onto modal dialogs.

use crate::domain::{BindingPair, ElementId};
use crate::ports::{DocumentPort, PortError};
use crate::state_machine::{visibility_transition, Visibility, VisibilityEvent, VisibilityTransition};

/// A pointer click, carrying the element it originally targeted.
#[derive(Debug, Clone)]
pub struct ClickEvent<H> {
    pub target: H,
}

impl<H> ClickEvent<H> {
    pub fn new(target: H) -> Self {
        Self { target }
    }
}

/// One wired modal: the three click subscriptions a successful bind
/// registers (trigger shows, close control hides, backdrop hides).
#[derive(Debug, Clone)]
struct ModalBinding<H> {
    pair: BindingPair,
    modal: H,
    trigger: H,
    close: H,
}

/// A pair `bind_all` could not wire, with the reason.
#[derive(Debug)]
pub struct BindingFailure {
    pub pair: BindingPair,
    pub error: PortError,
}

/// Outcome of one initialization pass over the configured pairs.
#[derive(Debug, Default)]
pub struct BindingSummary {
    pub bound: usize,
    pub failures: Vec<BindingFailure>,
}

impl BindingSummary {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One handler invocation applied by a dispatched click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    pub modal: ElementId,
    pub transition: VisibilityTransition,
}

/// Everything a dispatched click did. Empty when the click landed on
/// nothing any binding subscribes to.
#[derive(Debug, Default)]
pub struct ClickOutcome {
    pub transitions: Vec<TransitionRecord>,
}

impl ClickOutcome {
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

pub struct ModalBinder<D: DocumentPort> {
    document: D,
    close_class: String,
    bindings: Vec<ModalBinding<D::Handle>>,
}

impl<D: DocumentPort> ModalBinder<D> {
    pub fn new(document: D, close_class: impl Into<String>) -> Self {
        Self {
            document,
            close_class: close_class.into(),
            bindings: Vec::new(),
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Number of registered bindings. Binding the same pair twice
    /// accumulates; callers wire each pair exactly once.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Resolve one pair against the document and register its three
    /// click subscriptions. A failed lookup registers nothing.
    pub fn bind(&mut self, pair: &BindingPair) -> Result<(), PortError> {
        let modal = self
            .document
            .element_by_id(&pair.modal)
            .ok_or_else(|| PortError::MissingElement(pair.modal.clone()))?;
        let trigger = self
            .document
            .element_by_id(&pair.trigger)
            .ok_or_else(|| PortError::MissingElement(pair.trigger.clone()))?;
        let close = self
            .document
            .query_descendant(&modal, &self.close_class)
            .ok_or_else(|| PortError::MissingCloseControl {
                modal: pair.modal.clone(),
                class: self.close_class.clone(),
            })?;

        self.bindings.push(ModalBinding {
            pair: pair.clone(),
            modal,
            trigger,
            close,
        });
        Ok(())
    }

    /// Initialization entry point: attempt every configured pair once.
    /// A missing element fails that pair alone; the remaining pairs
    /// still bind, and the failure is reported in the summary.
    pub fn bind_all(&mut self, pairs: &[BindingPair]) -> BindingSummary {
        let mut summary = BindingSummary::default();
        for pair in pairs {
            match self.bind(pair) {
                Ok(()) => summary.bound += 1,
                Err(error) => summary.failures.push(BindingFailure {
                    pair: pair.clone(),
                    error,
                }),
            }
        }
        summary
    }

    /// Dispatch one click to every binding, in registration order.
    ///
    /// Trigger and close-control subscriptions match the element or any
    /// descendant of it; the backdrop subscription fires only when the
    /// target is exactly the modal element, so clicks on modal content
    /// never close it.
    pub fn handle_click(
        &mut self,
        event: &ClickEvent<D::Handle>,
    ) -> Result<ClickOutcome, PortError> {
        let mut outcome = ClickOutcome::default();
        for binding in &self.bindings {
            if self.document.contains(&binding.trigger, &event.target) {
                let record = apply(&mut self.document, binding, VisibilityEvent::TriggerClick)?;
                outcome.transitions.push(record);
            }
            if self.document.contains(&binding.close, &event.target) {
                let record = apply(&mut self.document, binding, VisibilityEvent::CloseClick)?;
                outcome.transitions.push(record);
            }
            if event.target == binding.modal {
                let record = apply(&mut self.document, binding, VisibilityEvent::BackdropClick)?;
                outcome.transitions.push(record);
            }
        }
        Ok(outcome)
    }

    /// Current visibility of a modal, looked up by id.
    pub fn visibility(&self, modal: &ElementId) -> Result<Visibility, PortError> {
        let handle = self
            .document
            .element_by_id(modal)
            .ok_or_else(|| PortError::MissingElement(modal.clone()))?;
        Ok(Visibility::from_display(self.document.display(&handle)?))
    }
}

/// Run one subscription handler: the display write happens even when
/// the modal is already in the resulting state, as a handler would.
fn apply<D: DocumentPort>(
    document: &mut D,
    binding: &ModalBinding<D::Handle>,
    event: VisibilityEvent,
) -> Result<TransitionRecord, PortError> {
    let from = Visibility::from_display(document.display(&binding.modal)?);
    let (to, transition) = visibility_transition(from, event);
    document.set_display(&binding.modal, to.display())?;
    Ok(TransitionRecord {
        modal: binding.pair.modal.clone(),
        transition,
    })
}
