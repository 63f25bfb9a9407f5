use chalkboard_modal_core::BindingPair;
use serde::{Deserialize, Serialize};

use crate::admin_page;

/// Static modal wiring: which trigger opens which modal, and the class
/// marker locating each modal's close control. Hosts inject this into
/// the binder once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalWiringConfig {
    pub close_control_class: String,
    pub pairs: Vec<BindingPair>,
}

impl Default for ModalWiringConfig {
    fn default() -> Self {
        Self {
            close_control_class: admin_page::CLOSE_CONTROL_CLASS.to_owned(),
            pairs: vec![
                BindingPair::new(admin_page::TEACHER_MODAL_ID, admin_page::ADD_TEACHER_ID),
                BindingPair::new(admin_page::STUDENT_MODAL_ID, admin_page::ADD_STUDENT_ID),
                BindingPair::new(admin_page::SUBJECTS_MODAL_ID, admin_page::ADD_SUBJECTS_ID),
                BindingPair::new(admin_page::CLASS_MODAL_ID, admin_page::ADD_GROUP_ID),
            ],
        }
    }
}
