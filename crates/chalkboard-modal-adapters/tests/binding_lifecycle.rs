mod common;

use chalkboard_modal_core::{ElementId, Visibility};
use common::{bound_admin_binder, click, display_of};

#[test]
fn trigger_click_shows_each_modal() {
    let (mut binder, handles) = bound_admin_binder();

    for dialog in [handles.teacher, handles.student, handles.subjects, handles.class] {
        assert_eq!(display_of(&binder, dialog.modal), "none");
        let outcome = click(&mut binder, dialog.trigger);
        assert_eq!(outcome.transitions.len(), 1);
        assert_eq!(display_of(&binder, dialog.modal), "block");
    }
}

#[test]
fn close_control_click_hides_each_modal() {
    let (mut binder, handles) = bound_admin_binder();

    for dialog in [handles.teacher, handles.student, handles.subjects, handles.class] {
        click(&mut binder, dialog.trigger);
        let outcome = click(&mut binder, dialog.close);
        assert_eq!(display_of(&binder, dialog.modal), "none");
        assert_eq!(outcome.transitions.len(), 1);
        assert_eq!(outcome.transitions[0].transition.reason, "close control click");
    }
}

#[test]
fn show_then_backdrop_click_hides() {
    let (mut binder, handles) = bound_admin_binder();

    click(&mut binder, handles.teacher.trigger);
    assert_eq!(display_of(&binder, handles.teacher.modal), "block");

    click(&mut binder, handles.teacher.modal);
    assert_eq!(display_of(&binder, handles.teacher.modal), "none");
    assert_eq!(
        binder
            .visibility(&ElementId::new("teacherModal"))
            .expect("visibility by id"),
        Visibility::Hidden
    );
}

#[test]
fn repeated_trigger_clicks_keep_modal_shown() {
    let (mut binder, handles) = bound_admin_binder();

    click(&mut binder, handles.student.trigger);
    let outcome = click(&mut binder, handles.student.trigger);
    // The handler ran again even though nothing visibly changed.
    assert_eq!(outcome.transitions.len(), 1);
    assert_eq!(outcome.transitions[0].transition.from, outcome.transitions[0].transition.to);
    assert_eq!(display_of(&binder, handles.student.modal), "block");
}
