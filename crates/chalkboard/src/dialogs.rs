//! The four admin "Add …" dialogs
//!
//! Each render function draws one dialog window and reports what the
//! user did with it; the app translates the action into a click on the
//! bound document.

use eframe::egui;

use crate::state::{ClassForm, ClassRecord, StudentForm, SubjectForm, SubjectRecord, TeacherForm};
use crate::ui;
use crate::validation::FieldError;

/// What a rendered dialog asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    /// Submit button pressed; the form should be validated and committed.
    Submit,
    /// The ✕ close glyph was pressed.
    CloseRequested,
    /// A pointer click landed outside the dialog window.
    ClickedOutside,
}

fn dialog_window<R>(
    ctx: &egui::Context,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> Option<egui::InnerResponse<Option<R>>> {
    egui::Window::new(title)
        .id(egui::Id::new(title))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(360.0)
        .show(ctx, add_contents)
}

/// Outside-click detection shared by all dialogs: only reported when
/// nothing inside the window produced an action first.
fn finish(action: DialogAction, response: Option<egui::InnerResponse<Option<()>>>) -> DialogAction {
    if action == DialogAction::None {
        if let Some(inner) = response {
            if inner.response.clicked_elsewhere() {
                return DialogAction::ClickedOutside;
            }
        }
    }
    action
}

fn close_glyph_row(ui: &mut egui::Ui, action: &mut DialogAction) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui::close_glyph(ui) {
            *action = DialogAction::CloseRequested;
        }
    });
}

pub fn add_teacher_dialog(
    ctx: &egui::Context,
    form: &mut TeacherForm,
    subjects: &[SubjectRecord],
    errors: &[FieldError],
) -> DialogAction {
    let mut action = DialogAction::None;

    let response = dialog_window(ctx, "Add Teacher", |ui| {
        close_glyph_row(ui, &mut action);
        ui::labeled_text_field(ui, "First name:", &mut form.first_name, "Ada");
        ui::labeled_text_field(ui, "Last name:", &mut form.last_name, "Lovelace");
        ui::labeled_text_field(ui, "Phone:", &mut form.phone, "01632 960123");
        ui::labeled_text_field(ui, "Email:", &mut form.email, "a.lovelace@school.example");
        ui::labeled_text_field(ui, "Home address:", &mut form.home_address, "12 Byron Row");

        ui.horizontal(|ui| {
            ui.label("Subject:");
            let selected = if form.subject.is_empty() {
                "select a subject".to_owned()
            } else {
                form.subject.clone()
            };
            egui::ComboBox::from_id_salt("teacher_subject")
                .selected_text(selected)
                .width(180.0)
                .show_ui(ui, |ui| {
                    for subject in subjects {
                        ui.selectable_value(&mut form.subject, subject.name.clone(), &subject.name);
                    }
                });
        });

        ui::labeled_text_field(ui, "Hours per week:", &mut form.hours, "20");
        ui::field_errors(ui, errors);
        ui.add_space(8.0);
        if ui.button("Add teacher").clicked() {
            action = DialogAction::Submit;
        }
    });

    finish(action, response)
}

pub fn add_student_dialog(
    ctx: &egui::Context,
    form: &mut StudentForm,
    classes: &[ClassRecord],
    errors: &[FieldError],
) -> DialogAction {
    let mut action = DialogAction::None;

    let response = dialog_window(ctx, "Add Student", |ui| {
        close_glyph_row(ui, &mut action);
        ui::labeled_text_field(ui, "First name:", &mut form.first_name, "Grace");
        ui::labeled_text_field(ui, "Last name:", &mut form.last_name, "Hopper");
        ui::labeled_text_field(ui, "Email:", &mut form.email, "g.hopper@school.example");

        ui.horizontal(|ui| {
            ui.label("Class:");
            let selected = if form.class_name.is_empty() {
                "select a class".to_owned()
            } else {
                form.class_name.clone()
            };
            egui::ComboBox::from_id_salt("student_class")
                .selected_text(selected)
                .width(180.0)
                .show_ui(ui, |ui| {
                    for class in classes {
                        ui.selectable_value(&mut form.class_name, class.name.clone(), &class.name);
                    }
                });
        });

        ui::field_errors(ui, errors);
        ui.add_space(8.0);
        if ui.button("Add student").clicked() {
            action = DialogAction::Submit;
        }
    });

    finish(action, response)
}

pub fn add_subject_dialog(
    ctx: &egui::Context,
    form: &mut SubjectForm,
    errors: &[FieldError],
) -> DialogAction {
    let mut action = DialogAction::None;

    let response = dialog_window(ctx, "Add Subject", |ui| {
        close_glyph_row(ui, &mut action);
        ui::labeled_text_field(ui, "Subject name:", &mut form.name, "Mathematics");
        ui::labeled_text_field(ui, "Hours per week:", &mut form.hours, "4");
        ui::field_errors(ui, errors);
        ui.add_space(8.0);
        if ui.button("Add subject").clicked() {
            action = DialogAction::Submit;
        }
    });

    finish(action, response)
}

pub fn add_class_dialog(
    ctx: &egui::Context,
    form: &mut ClassForm,
    errors: &[FieldError],
) -> DialogAction {
    let mut action = DialogAction::None;

    let response = dialog_window(ctx, "Add Class", |ui| {
        close_glyph_row(ui, &mut action);
        ui::labeled_text_field(ui, "Class name:", &mut form.name, "7B");
        ui::field_errors(ui, errors);
        ui.add_space(8.0);
        if ui.button("Add class").clicked() {
            action = DialogAction::Submit;
        }
    });

    finish(action, response)
}
