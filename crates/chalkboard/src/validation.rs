//! Form validation for the admin dialogs

use crate::state::{
    ClassForm, ClassRecord, StudentForm, StudentRecord, SubjectForm, SubjectRecord, TeacherForm,
    TeacherRecord,
};

/// A rejected form field and what was wrong with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: String,
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError {
            field,
            problem: "must not be empty".to_owned(),
        });
    }
    trimmed.to_owned()
}

fn require_email(errors: &mut Vec<FieldError>, field: &'static str, value: &str) -> String {
    let email = require(errors, field, value);
    if !email.is_empty() && !email.contains('@') {
        errors.push(FieldError {
            field,
            problem: "must contain `@`".to_owned(),
        });
    }
    email
}

fn parse_hours(errors: &mut Vec<FieldError>, field: &'static str, value: &str) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(hours) if hours > 0 => hours,
        Ok(_) => {
            errors.push(FieldError {
                field,
                problem: "must be at least 1".to_owned(),
            });
            0
        }
        Err(_) => {
            errors.push(FieldError {
                field,
                problem: "must be a whole number of hours".to_owned(),
            });
            0
        }
    }
}

pub fn validate_teacher_form(form: &TeacherForm) -> Result<TeacherRecord, Vec<FieldError>> {
    let mut errors = Vec::new();
    let first_name = require(&mut errors, "first name", &form.first_name);
    let last_name = require(&mut errors, "last name", &form.last_name);
    let phone = require(&mut errors, "phone", &form.phone);
    let email = require_email(&mut errors, "email", &form.email);
    let home_address = require(&mut errors, "home address", &form.home_address);
    let subject = require(&mut errors, "subject", &form.subject);
    let hours_per_week = parse_hours(&mut errors, "hours per week", &form.hours);

    if errors.is_empty() {
        Ok(TeacherRecord {
            first_name,
            last_name,
            phone,
            email,
            home_address,
            subject,
            hours_per_week,
        })
    } else {
        Err(errors)
    }
}

pub fn validate_student_form(form: &StudentForm) -> Result<StudentRecord, Vec<FieldError>> {
    let mut errors = Vec::new();
    let first_name = require(&mut errors, "first name", &form.first_name);
    let last_name = require(&mut errors, "last name", &form.last_name);
    let email = require_email(&mut errors, "email", &form.email);
    let class_name = require(&mut errors, "class", &form.class_name);

    if errors.is_empty() {
        Ok(StudentRecord {
            first_name,
            last_name,
            email,
            class_name,
        })
    } else {
        Err(errors)
    }
}

pub fn validate_subject_form(form: &SubjectForm) -> Result<SubjectRecord, Vec<FieldError>> {
    let mut errors = Vec::new();
    let name = require(&mut errors, "subject name", &form.name);
    let hours_per_week = parse_hours(&mut errors, "hours per week", &form.hours);

    if errors.is_empty() {
        Ok(SubjectRecord {
            name,
            hours_per_week,
        })
    } else {
        Err(errors)
    }
}

pub fn validate_class_form(form: &ClassForm) -> Result<ClassRecord, Vec<FieldError>> {
    let mut errors = Vec::new();
    let name = require(&mut errors, "class name", &form.name);

    if errors.is_empty() {
        Ok(ClassRecord { name })
    } else {
        Err(errors)
    }
}
