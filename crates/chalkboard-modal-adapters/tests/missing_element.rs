use chalkboard_modal_adapters::{
    build_admin_page, ElementSpec, InMemoryDocument, ModalWiringConfig,
};
use chalkboard_modal_core::{BindingPair, ClickEvent, DocumentPort, ModalBinder, PortError};

#[test]
fn unknown_modal_id_fails_without_breaking_remaining_pairs() {
    let (document, handles) = build_admin_page();
    let mut config = ModalWiringConfig::default();
    // A pair that points at nothing, ahead of the real ones.
    config
        .pairs
        .insert(0, BindingPair::new("staffModal", "addStaff"));

    let mut binder = ModalBinder::new(document, config.close_control_class.clone());
    let summary = binder.bind_all(&config.pairs);

    assert_eq!(summary.bound, 4);
    assert_eq!(summary.failures.len(), 1);
    assert!(summary.failures[0].error.to_string().contains("staffModal"));

    // The surviving pairs still work.
    binder
        .handle_click(&ClickEvent::new(handles.teacher.trigger))
        .expect("dispatch click");
    let display = binder
        .document()
        .display(&handles.teacher.modal)
        .expect("read display");
    assert_eq!(display.as_css(), "block");
}

#[test]
fn missing_trigger_is_reported_by_id() {
    let (document, _handles) = build_admin_page();
    let mut binder = ModalBinder::new(document, "close");

    let err = binder
        .bind(&BindingPair::new("teacherModal", "addHeadmaster"))
        .expect_err("trigger does not exist");
    assert!(matches!(err, PortError::MissingElement(_)));
    assert!(err.to_string().contains("addHeadmaster"));
    assert_eq!(binder.binding_count(), 0);
}

#[test]
fn modal_without_close_control_is_rejected() {
    let mut document = InMemoryDocument::new();
    let root = document.root();
    document.append(root, ElementSpec::new("div").id("bareModal").hidden());
    document.append(root, ElementSpec::new("button").id("openBare"));

    let mut binder = ModalBinder::new(document, "close");
    let err = binder
        .bind(&BindingPair::new("bareModal", "openBare"))
        .expect_err("close control is required");
    assert!(matches!(err, PortError::MissingCloseControl { .. }));
    assert!(err.to_string().contains("bareModal"));
    assert_eq!(binder.binding_count(), 0);
}

#[test]
fn close_control_lookup_ignores_the_modal_element_itself() {
    // A modal carrying the close class on itself still has no close
    // control descendant.
    let mut document = InMemoryDocument::new();
    let root = document.root();
    document.append(
        root,
        ElementSpec::new("div").id("oddModal").class("close").hidden(),
    );
    document.append(root, ElementSpec::new("button").id("openOdd"));

    let mut binder = ModalBinder::new(document, "close");
    let err = binder
        .bind(&BindingPair::new("oddModal", "openOdd"))
        .expect_err("self-classed modal must not satisfy the lookup");
    assert!(matches!(err, PortError::MissingCloseControl { .. }));
}
