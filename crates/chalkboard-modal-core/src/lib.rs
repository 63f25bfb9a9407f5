pub mod binder;
pub mod domain;
pub mod ports;
pub mod state_machine;

pub use binder::{
    BindingFailure, BindingSummary, ClickEvent, ClickOutcome, ModalBinder, TransitionRecord,
};
pub use domain::{BindingPair, DisplayValue, ElementId};
pub use ports::{DocumentPort, PortError};
pub use state_machine::{visibility_transition, Visibility, VisibilityEvent, VisibilityTransition};
