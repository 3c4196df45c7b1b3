pub mod domain;
pub mod fixtures;
pub mod ports;
pub mod simulated;
pub mod stores;
pub mod views;

pub use domain::{
    AuthState, AuthUser, AuthUserPatch, Document, DocumentPatch, DocumentStatus, DocumentType,
    Employee, EmployeePatch, EmployeeStatus, NewNotification, Notification, NotificationKind,
};
pub use ports::{Clock, DirectoryService, PortError, PortResult, SessionRepository};
pub use stores::{AuthStore, DocumentStore, EmployeeStore, UiStore};
