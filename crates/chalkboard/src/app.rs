//! Main application state and update loop

use eframe::egui;

use chalkboard_modal_adapters::{
    build_admin_page, AdminPageHandles, InMemoryDocument, ModalWiringConfig, NodeId,
};
use chalkboard_modal_core::{ClickEvent, DisplayValue, DocumentPort, ModalBinder};

use crate::dialogs::{self, DialogAction};
use crate::state::{
    ClassForm, Roster, StudentForm, SubjectForm, TeacherForm, ROSTER_STORAGE_KEY,
};
use crate::ui;
use crate::validation::{
    validate_class_form, validate_student_form, validate_subject_form, validate_teacher_form,
    FieldError,
};

/// The main application state
pub struct App {
    /// Bound document model driving dialog visibility
    binder: ModalBinder<InMemoryDocument>,
    /// Handles into the admin page element tree
    handles: AdminPageHandles,
    /// Persisted roster data
    roster: Roster,

    // Dialog inputs, one per modal
    teacher_form: TeacherForm,
    student_form: StudentForm,
    subject_form: SubjectForm,
    class_form: ClassForm,

    // Validation complaints shown inside each dialog
    teacher_errors: Vec<FieldError>,
    student_errors: Vec<FieldError>,
    subject_errors: Vec<FieldError>,
    class_errors: Vec<FieldError>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let roster = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, ROSTER_STORAGE_KEY))
            .unwrap_or_default();

        let (document, handles) = build_admin_page();
        let config = ModalWiringConfig::default();
        let mut binder = ModalBinder::new(document, config.close_control_class.clone());
        let summary = binder.bind_all(&config.pairs);
        for failure in &summary.failures {
            tracing::warn!(
                modal = %failure.pair.modal,
                trigger = %failure.pair.trigger,
                "dialog left unbound: {}",
                failure.error
            );
        }
        tracing::info!(bound = summary.bound, "admin dialogs wired");

        Self {
            binder,
            handles,
            roster,
            teacher_form: TeacherForm::default(),
            student_form: StudentForm::default(),
            subject_form: SubjectForm::default(),
            class_form: ClassForm::default(),
            teacher_errors: Vec::new(),
            student_errors: Vec::new(),
            subject_errors: Vec::new(),
            class_errors: Vec::new(),
        }
    }

    fn is_shown(&self, modal: NodeId) -> bool {
        matches!(
            self.binder.document().display(&modal),
            Ok(DisplayValue::Block)
        )
    }

    /// Deliver one click, with its most specific target, to the binder.
    fn dispatch(&mut self, target: NodeId) {
        match self.binder.handle_click(&ClickEvent::new(target)) {
            Ok(outcome) => {
                for record in &outcome.transitions {
                    tracing::info!(
                        modal = %record.modal,
                        from = ?record.transition.from,
                        to = ?record.transition.to,
                        "{}",
                        record.transition.reason
                    );
                }
            }
            Err(err) => tracing::error!("click dispatch failed: {err}"),
        }
    }

    fn roster_tables(&self, ui: &mut egui::Ui) {
        ui::section_header(ui, "Teachers");
        if self.roster.teachers.is_empty() {
            ui.weak("No teachers yet.");
        } else {
            egui::Grid::new("teachers_grid").striped(true).show(ui, |ui| {
                ui.strong("Name");
                ui.strong("Subject");
                ui.strong("Email");
                ui.strong("Phone");
                ui.strong("Hours/week");
                ui.end_row();
                for teacher in &self.roster.teachers {
                    ui.label(format!("{} {}", teacher.first_name, teacher.last_name));
                    ui.label(&teacher.subject);
                    ui.label(&teacher.email);
                    ui.label(&teacher.phone);
                    ui.label(teacher.hours_per_week.to_string());
                    ui.end_row();
                }
            });
        }

        ui::section_header(ui, "Students");
        if self.roster.students.is_empty() {
            ui.weak("No students yet.");
        } else {
            egui::Grid::new("students_grid").striped(true).show(ui, |ui| {
                ui.strong("Name");
                ui.strong("Class");
                ui.strong("Email");
                ui.end_row();
                for student in &self.roster.students {
                    ui.label(format!("{} {}", student.first_name, student.last_name));
                    ui.label(&student.class_name);
                    ui.label(&student.email);
                    ui.end_row();
                }
            });
        }

        ui::section_header(ui, "Subjects");
        if self.roster.subjects.is_empty() {
            ui.weak("No subjects yet.");
        } else {
            egui::Grid::new("subjects_grid").striped(true).show(ui, |ui| {
                ui.strong("Subject");
                ui.strong("Hours/week");
                ui.end_row();
                for subject in &self.roster.subjects {
                    ui.label(&subject.name);
                    ui.label(subject.hours_per_week.to_string());
                    ui.end_row();
                }
            });
        }

        ui::section_header(ui, "Classes");
        if self.roster.classes.is_empty() {
            ui.weak("No classes yet.");
        } else {
            egui::Grid::new("classes_grid").striped(true).show(ui, |ui| {
                ui.strong("Class");
                ui.end_row();
                for class in &self.roster.classes {
                    ui.label(&class.name);
                    ui.end_row();
                }
            });
        }
    }
}

impl eframe::App for App {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, ROSTER_STORAGE_KEY, &self.roster);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The single click this frame, resolved to its most specific
        // document target. Backdrop clicks only count when no widget
        // claimed the click first.
        let mut clicked: Option<NodeId> = None;
        let mut backdrop: Option<NodeId> = None;

        egui::TopBottomPanel::top("admin_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui::styled_heading(ui, "Chalkboard");
                ui.separator();
                if ui.button("Add Teacher").clicked() {
                    clicked = Some(self.handles.teacher.trigger);
                }
                if ui.button("Add Student").clicked() {
                    clicked = Some(self.handles.student.trigger);
                }
                if ui.button("Add Subject").clicked() {
                    clicked = Some(self.handles.subjects.trigger);
                }
                if ui.button("Add Class").clicked() {
                    clicked = Some(self.handles.class.trigger);
                }
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(format!(
                    "build {} · {}",
                    env!("GIT_HASH"),
                    env!("BUILD_TIME")
                ));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.roster_tables(ui);
            });
        });

        if self.is_shown(self.handles.teacher.modal) {
            match dialogs::add_teacher_dialog(
                ctx,
                &mut self.teacher_form,
                &self.roster.subjects,
                &self.teacher_errors,
            ) {
                DialogAction::Submit => match validate_teacher_form(&self.teacher_form) {
                    Ok(record) => {
                        self.roster.teachers.push(record);
                        self.teacher_form.clear();
                        self.teacher_errors.clear();
                        clicked.get_or_insert(self.handles.teacher.close);
                    }
                    Err(errors) => self.teacher_errors = errors,
                },
                DialogAction::CloseRequested => {
                    clicked.get_or_insert(self.handles.teacher.close);
                }
                DialogAction::ClickedOutside => {
                    backdrop.get_or_insert(self.handles.teacher.modal);
                }
                DialogAction::None => {}
            }
        }

        if self.is_shown(self.handles.student.modal) {
            match dialogs::add_student_dialog(
                ctx,
                &mut self.student_form,
                &self.roster.classes,
                &self.student_errors,
            ) {
                DialogAction::Submit => match validate_student_form(&self.student_form) {
                    Ok(record) => {
                        self.roster.students.push(record);
                        self.student_form.clear();
                        self.student_errors.clear();
                        clicked.get_or_insert(self.handles.student.close);
                    }
                    Err(errors) => self.student_errors = errors,
                },
                DialogAction::CloseRequested => {
                    clicked.get_or_insert(self.handles.student.close);
                }
                DialogAction::ClickedOutside => {
                    backdrop.get_or_insert(self.handles.student.modal);
                }
                DialogAction::None => {}
            }
        }

        if self.is_shown(self.handles.subjects.modal) {
            match dialogs::add_subject_dialog(ctx, &mut self.subject_form, &self.subject_errors) {
                DialogAction::Submit => match validate_subject_form(&self.subject_form) {
                    Ok(record) => {
                        self.roster.subjects.push(record);
                        self.subject_form.clear();
                        self.subject_errors.clear();
                        clicked.get_or_insert(self.handles.subjects.close);
                    }
                    Err(errors) => self.subject_errors = errors,
                },
                DialogAction::CloseRequested => {
                    clicked.get_or_insert(self.handles.subjects.close);
                }
                DialogAction::ClickedOutside => {
                    backdrop.get_or_insert(self.handles.subjects.modal);
                }
                DialogAction::None => {}
            }
        }

        if self.is_shown(self.handles.class.modal) {
            match dialogs::add_class_dialog(ctx, &mut self.class_form, &self.class_errors) {
                DialogAction::Submit => match validate_class_form(&self.class_form) {
                    Ok(record) => {
                        self.roster.classes.push(record);
                        self.class_form.clear();
                        self.class_errors.clear();
                        clicked.get_or_insert(self.handles.class.close);
                    }
                    Err(errors) => self.class_errors = errors,
                },
                DialogAction::CloseRequested => {
                    clicked.get_or_insert(self.handles.class.close);
                }
                DialogAction::ClickedOutside => {
                    backdrop.get_or_insert(self.handles.class.modal);
                }
                DialogAction::None => {}
            }
        }

        if let Some(target) = clicked.or(backdrop) {
            self.dispatch(target);
        }
    }
}
