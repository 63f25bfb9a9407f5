mod common;

use chalkboard_modal_adapters::{build_admin_page, ModalWiringConfig};
use chalkboard_modal_core::{ClickEvent, ModalBinder};
use common::{bound_admin_binder, click, display_of};

#[test]
fn bindings_never_affect_other_modals() {
    let (mut binder, handles) = bound_admin_binder();

    click(&mut binder, handles.teacher.trigger);
    assert_eq!(display_of(&binder, handles.teacher.modal), "block");
    assert_eq!(display_of(&binder, handles.student.modal), "none");
    assert_eq!(display_of(&binder, handles.subjects.modal), "none");
    assert_eq!(display_of(&binder, handles.class.modal), "none");

    click(&mut binder, handles.teacher.modal);
    click(&mut binder, handles.student.trigger);
    assert_eq!(display_of(&binder, handles.student.modal), "block");
    assert_eq!(display_of(&binder, handles.teacher.modal), "none");
}

#[test]
fn closing_one_modal_leaves_another_shown() {
    let (mut binder, handles) = bound_admin_binder();

    click(&mut binder, handles.teacher.trigger);
    click(&mut binder, handles.class.trigger);
    click(&mut binder, handles.teacher.close);

    assert_eq!(display_of(&binder, handles.teacher.modal), "none");
    assert_eq!(display_of(&binder, handles.class.modal), "block");
}

#[test]
fn rebinding_a_pair_accumulates_subscriptions() {
    let (document, handles) = build_admin_page();
    let config = ModalWiringConfig::default();
    let mut binder = ModalBinder::new(document, config.close_control_class.clone());

    binder.bind(&config.pairs[0]).expect("first bind");
    binder.bind(&config.pairs[0]).expect("second bind");
    assert_eq!(binder.binding_count(), 2);

    // Both registered listeners run for one click.
    let outcome = binder
        .handle_click(&ClickEvent::new(handles.teacher.trigger))
        .expect("dispatch click");
    assert_eq!(outcome.transitions.len(), 2);
}
