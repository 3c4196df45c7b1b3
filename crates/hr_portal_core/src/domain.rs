//! crates/hr_portal_core/src/domain.rs
//!
//! Defines the core records of the HR portal: documents, employees, the
//! signed-in user and UI notifications, plus the typed patches used for
//! partial updates.
//!
//! The JSON shape (camelCase) is shared by the gateway, the persisted auth
//! session and the HTTP directory adapter.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

//=========================================================================================
// Documents
//=========================================================================================

/// File format of a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Pdf,
    Docx,
    Doc,
}

impl DocumentType {
    /// Maps a file extension (without the dot, any case) to a document type.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "doc" => Some(Self::Doc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Active,
    Draft,
    Pending,
    Archived,
}

impl DocumentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Archived => "archived",
        }
    }
}

/// A document held by the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Human readable size, e.g. `2.4 MB`.
    pub size: String,
    pub status: DocumentStatus,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub category: String,
}

/// Partial update for a [`Document`]. Present fields overwrite, absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: Option<DocumentType>,
    pub size: Option<String>,
    pub status: Option<DocumentStatus>,
    pub created_at: Option<NaiveDate>,
    pub updated_at: Option<NaiveDate>,
    pub category: Option<String>,
}

impl Document {
    pub fn apply(&mut self, patch: &DocumentPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(doc_type) = patch.doc_type {
            self.doc_type = doc_type;
        }
        if let Some(size) = &patch.size {
            self.size = size.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = created_at;
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = updated_at;
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
    }
}

//=========================================================================================
// Employees
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Onboarding,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Onboarding => "onboarding",
            Self::Inactive => "inactive",
        }
    }
}

/// An employee record.
///
/// `documents_signed` and `documents_pending` are independent counters written
/// by whoever owns the record. They are not derived from any document collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub status: EmployeeStatus,
    #[serde(default)]
    pub avatar: Option<String>,
    pub join_date: NaiveDate,
    pub documents_signed: u32,
    pub documents_pending: u32,
}

impl Employee {
    pub fn total_assigned(&self) -> u32 {
        self.documents_signed + self.documents_pending
    }

    /// Share of assigned documents already signed, rounded to a whole percent.
    /// An employee with nothing assigned reports 0.
    pub fn completion_percent(&self) -> u32 {
        let total = self.total_assigned();
        if total == 0 {
            return 0;
        }
        ((f64::from(self.documents_signed) / f64::from(total)) * 100.0).round() as u32
    }

    pub fn apply(&mut self, patch: &EmployeePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(role) = &patch.role {
            self.role = role.clone();
        }
        if let Some(department) = &patch.department {
            self.department = department.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(avatar) = &patch.avatar {
            self.avatar = avatar.clone();
        }
        if let Some(join_date) = patch.join_date {
            self.join_date = join_date;
        }
        if let Some(signed) = patch.documents_signed {
            self.documents_signed = signed;
        }
        if let Some(pending) = patch.documents_pending {
            self.documents_pending = pending;
        }
    }
}

/// Partial update for an [`Employee`].
///
/// `avatar` is doubly optional: `Some(None)` clears the avatar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub avatar: Option<Option<String>>,
    pub join_date: Option<NaiveDate>,
    pub documents_signed: Option<u32>,
    pub documents_pending: Option<u32>,
}

//=========================================================================================
// Auth
//=========================================================================================

/// The signed-in user as known to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUserPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl AuthUser {
    pub fn apply(&mut self, patch: &AuthUserPatch) {
        if let Some(id) = &patch.id {
            self.id = id.clone();
        }
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(role) = &patch.role {
            self.role = role.clone();
        }
    }
}

/// Client session state. Authentication is derived from the presence of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    user: Option<AuthUser>,
}

impl AuthState {
    pub fn logged_out() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: AuthUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn user_mut(&mut self) -> Option<&mut AuthUser> {
        self.user.as_mut()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

//=========================================================================================
// Notifications
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

/// A notification as submitted by a caller, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNotification {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub read: bool,
}

impl NewNotification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            read: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Millisecond timestamp, strictly increasing within one store.
    pub id: i64,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
