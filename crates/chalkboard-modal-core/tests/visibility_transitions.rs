use chalkboard_modal_core::{
    visibility_transition, DisplayValue, Visibility, VisibilityEvent,
};

#[test]
fn trigger_click_shows_hidden_modal() {
    let (to, t) = visibility_transition(Visibility::Hidden, VisibilityEvent::TriggerClick);
    assert_eq!(to, Visibility::Shown);
    assert_eq!(t.from, Visibility::Hidden);
    assert_eq!(t.to, Visibility::Shown);
    assert_eq!(t.reason, "trigger click");
}

#[test]
fn close_click_hides_shown_modal() {
    let (to, t) = visibility_transition(Visibility::Shown, VisibilityEvent::CloseClick);
    assert_eq!(to, Visibility::Hidden);
    assert_eq!(t.reason, "close control click");
}

#[test]
fn backdrop_click_hides_shown_modal() {
    let (to, t) = visibility_transition(Visibility::Shown, VisibilityEvent::BackdropClick);
    assert_eq!(to, Visibility::Hidden);
    assert_eq!(t.reason, "backdrop click");
}

#[test]
fn repeated_events_are_recorded_noops() {
    let (to, t) = visibility_transition(Visibility::Shown, VisibilityEvent::TriggerClick);
    assert_eq!(to, Visibility::Shown);
    assert_eq!(t.from, t.to);

    let (to, t) = visibility_transition(Visibility::Hidden, VisibilityEvent::BackdropClick);
    assert_eq!(to, Visibility::Hidden);
    assert_eq!(t.from, t.to);
}

#[test]
fn visibility_maps_to_literal_display_values() {
    assert_eq!(Visibility::Shown.display(), DisplayValue::Block);
    assert_eq!(Visibility::Hidden.display(), DisplayValue::None);
    assert_eq!(Visibility::Shown.display().as_css(), "block");
    assert_eq!(Visibility::Hidden.display().as_css(), "none");
    assert_eq!(Visibility::from_display(DisplayValue::Block), Visibility::Shown);
    assert_eq!(Visibility::from_display(DisplayValue::None), Visibility::Hidden);
}
