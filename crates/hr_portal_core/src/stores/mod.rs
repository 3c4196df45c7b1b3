//! crates/hr_portal_core/src/stores/mod.rs
//!
//! The four client-side state containers. Each is a cloneable handle over
//! shared state; dependencies come in through the constructors.

pub mod auth;
pub mod documents;
pub mod employees;
pub mod ui;

pub use auth::AuthStore;
pub use documents::{format_file_size, DocumentStore, FileUpload, UploadError};
pub use employees::{EmployeeStore, ViewMode};
pub use ui::{ActiveModal, UiStore, NOTIFICATION_CAPACITY};
