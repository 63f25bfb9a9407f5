//! Built-in admin page: the element tree the chalkboard GUI and the
//! integration tests bind against.

use crate::memory_dom::{ElementSpec, InMemoryDocument, NodeId};

pub const TEACHER_MODAL_ID: &str = "teacherModal";
pub const ADD_TEACHER_ID: &str = "addTeacher";
pub const STUDENT_MODAL_ID: &str = "studentModal";
pub const ADD_STUDENT_ID: &str = "addStudent";
pub const SUBJECTS_MODAL_ID: &str = "subjectsModal";
pub const ADD_SUBJECTS_ID: &str = "addSubjects";
pub const CLASS_MODAL_ID: &str = "classModal";
pub const ADD_GROUP_ID: &str = "addGroup";

/// Class marker locating each modal's close control.
pub const CLOSE_CONTROL_CLASS: &str = "close";

/// Handles to one dialog's elements.
#[derive(Debug, Clone, Copy)]
pub struct DialogHandles {
    /// The modal container; also the backdrop for outside-click checks.
    pub modal: NodeId,
    pub close: NodeId,
    /// The form body inside the modal content; clicks here must not
    /// close the dialog.
    pub form: NodeId,
    pub trigger: NodeId,
}

#[derive(Debug, Clone, Copy)]
pub struct AdminPageHandles {
    pub teacher: DialogHandles,
    pub student: DialogHandles,
    pub subjects: DialogHandles,
    pub class: DialogHandles,
}

/// Build the admin page: a toolbar with the four trigger buttons and
/// four hidden modal containers, each with a close control and a form
/// body under a content element.
pub fn build_admin_page() -> (InMemoryDocument, AdminPageHandles) {
    let mut doc = InMemoryDocument::new();
    let root = doc.root();

    let toolbar = doc.append(root, ElementSpec::new("nav"));
    let add_teacher = doc.append(toolbar, ElementSpec::new("button").id(ADD_TEACHER_ID));
    let add_student = doc.append(toolbar, ElementSpec::new("button").id(ADD_STUDENT_ID));
    let add_subjects = doc.append(toolbar, ElementSpec::new("button").id(ADD_SUBJECTS_ID));
    let add_group = doc.append(toolbar, ElementSpec::new("button").id(ADD_GROUP_ID));

    let handles = AdminPageHandles {
        teacher: append_modal(&mut doc, root, TEACHER_MODAL_ID, add_teacher),
        student: append_modal(&mut doc, root, STUDENT_MODAL_ID, add_student),
        subjects: append_modal(&mut doc, root, SUBJECTS_MODAL_ID, add_subjects),
        class: append_modal(&mut doc, root, CLASS_MODAL_ID, add_group),
    };
    (doc, handles)
}

fn append_modal(
    doc: &mut InMemoryDocument,
    root: NodeId,
    id: &str,
    trigger: NodeId,
) -> DialogHandles {
    let modal = doc.append(root, ElementSpec::new("div").id(id).class("modal").hidden());
    let content = doc.append(modal, ElementSpec::new("div").class("modal-content"));
    let close = doc.append(content, ElementSpec::new("span").class(CLOSE_CONTROL_CLASS));
    let form = doc.append(content, ElementSpec::new("form"));
    DialogHandles {
        modal,
        close,
        form,
        trigger,
    }
}
