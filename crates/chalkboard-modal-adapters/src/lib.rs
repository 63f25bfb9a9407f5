pub mod admin_page;
pub mod config;
pub mod memory_dom;

pub use admin_page::{build_admin_page, AdminPageHandles, DialogHandles};
pub use config::ModalWiringConfig;
pub use memory_dom::{ElementSpec, InMemoryDocument, NodeId};
