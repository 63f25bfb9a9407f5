#![allow(dead_code)]

use chalkboard_modal_adapters::{
    build_admin_page, AdminPageHandles, InMemoryDocument, ModalWiringConfig, NodeId,
};
use chalkboard_modal_core::{ClickEvent, ClickOutcome, DocumentPort, ModalBinder};

pub type AdminBinder = ModalBinder<InMemoryDocument>;

/// Admin page with all four pairs bound, plus the element handles.
pub fn bound_admin_binder() -> (AdminBinder, AdminPageHandles) {
    let (document, handles) = build_admin_page();
    let config = ModalWiringConfig::default();
    let mut binder = ModalBinder::new(document, config.close_control_class.clone());
    let summary = binder.bind_all(&config.pairs);
    assert!(summary.is_complete(), "admin page must bind cleanly");
    assert_eq!(summary.bound, config.pairs.len());
    (binder, handles)
}

pub fn click(binder: &mut AdminBinder, target: NodeId) -> ClickOutcome {
    binder.handle_click(&ClickEvent::new(target)).expect("dispatch click")
}

pub fn display_of(binder: &AdminBinder, node: NodeId) -> &'static str {
    binder
        .document()
        .display(&node)
        .expect("read display")
        .as_css()
}
