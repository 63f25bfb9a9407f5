//! Application state types
//!
//! Roster records are what the dialogs commit; form structs hold the
//! in-progress inputs, one per dialog.

use serde::{Deserialize, Serialize};

/// Storage key for the persisted roster.
pub const ROSTER_STORAGE_KEY: &str = "chalkboard_roster";

/// One teacher on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherRecord {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub home_address: String,
    pub subject: String,
    pub hours_per_week: u32,
}

/// One student, assigned to a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub name: String,
    pub hours_per_week: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
}

/// Roster data the admin screen manages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub teachers: Vec<TeacherRecord>,
    pub students: Vec<StudentRecord>,
    pub subjects: Vec<SubjectRecord>,
    pub classes: Vec<ClassRecord>,
}

/// "Add teacher" dialog inputs.
#[derive(Debug, Clone, Default)]
pub struct TeacherForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub home_address: String,
    pub subject: String,
    pub hours: String,
}

impl TeacherForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// "Add student" dialog inputs.
#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub class_name: String,
}

impl StudentForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// "Add subject" dialog inputs.
#[derive(Debug, Clone, Default)]
pub struct SubjectForm {
    pub name: String,
    pub hours: String,
}

impl SubjectForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// "Add class" dialog inputs.
#[derive(Debug, Clone, Default)]
pub struct ClassForm {
    pub name: String,
}

impl ClassForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
