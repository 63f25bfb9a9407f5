use crate::domain::DisplayValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn display(self) -> DisplayValue {
        match self {
            Visibility::Shown => DisplayValue::Block,
            Visibility::Hidden => DisplayValue::None,
        }
    }

    pub fn from_display(value: DisplayValue) -> Self {
        match value {
            DisplayValue::Block => Visibility::Shown,
            DisplayValue::None => Visibility::Hidden,
        }
    }
}

/// Click-driven events a bound modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEvent {
    TriggerClick,
    CloseClick,
    BackdropClick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityTransition {
    pub from: Visibility,
    pub to: Visibility,
    pub reason: &'static str,
}

/// No transition is illegal; repeated events are user-visible no-ops,
/// but the handler still runs and the record is still produced.
pub fn visibility_transition(
    from: Visibility,
    event: VisibilityEvent,
) -> (Visibility, VisibilityTransition) {
    let (to, reason) = match event {
        VisibilityEvent::TriggerClick => (Visibility::Shown, "trigger click"),
        VisibilityEvent::CloseClick => (Visibility::Hidden, "close control click"),
        VisibilityEvent::BackdropClick => (Visibility::Hidden, "backdrop click"),
    };
    (to, VisibilityTransition { from, to, reason })
}
