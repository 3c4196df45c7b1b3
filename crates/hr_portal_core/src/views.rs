//! crates/hr_portal_core/src/views.rs
//!
//! Read-side helpers for the list and dashboard pages: client-side filters
//! over the store collections and the dashboard headline numbers.

use crate::domain::{Document, DocumentStatus, Employee, EmployeeStatus};

/// Wildcard accepted by the department and category selectors.
pub const ANY: &str = "All";

fn is_wildcard(selection: &str) -> bool {
    selection.is_empty() || selection.eq_ignore_ascii_case(ANY)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

//=========================================================================================
// Employees
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeQuery {
    /// Matched against name and email, case-insensitively.
    pub search: String,
    pub department: String,
    /// `all` or a status name, any case.
    pub status: String,
}

impl Default for EmployeeQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            department: ANY.to_string(),
            status: ANY.to_string(),
        }
    }
}

impl EmployeeQuery {
    pub fn matches(&self, employee: &Employee) -> bool {
        let matches_search = contains_ignore_case(&employee.name, &self.search)
            || contains_ignore_case(&employee.email, &self.search);
        let matches_department =
            is_wildcard(&self.department) || employee.department == self.department;
        let matches_status = is_wildcard(&self.status)
            || employee.status.as_str().eq_ignore_ascii_case(&self.status);
        matches_search && matches_department && matches_status
    }
}

pub fn filter_employees<'a>(employees: &'a [Employee], query: &EmployeeQuery) -> Vec<&'a Employee> {
    employees.iter().filter(|e| query.matches(e)).collect()
}

//=========================================================================================
// Documents
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentQuery {
    /// Matched against the document name, case-insensitively.
    pub search: String,
    pub category: String,
    pub status: String,
}

impl Default for DocumentQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ANY.to_string(),
            status: ANY.to_string(),
        }
    }
}

impl DocumentQuery {
    pub fn matches(&self, doc: &Document) -> bool {
        contains_ignore_case(&doc.name, &self.search)
            && (is_wildcard(&self.category) || doc.category == self.category)
            && (is_wildcard(&self.status) || doc.status.as_str().eq_ignore_ascii_case(&self.status))
    }
}

pub fn filter_documents<'a>(documents: &'a [Document], query: &DocumentQuery) -> Vec<&'a Document> {
    documents.iter().filter(|d| query.matches(d)).collect()
}

//=========================================================================================
// Dashboard
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_documents: usize,
    pub active_documents: usize,
    pub active_employees: usize,
    pub pending_signatures: u32,
}

impl DashboardSummary {
    pub fn compute(documents: &[Document], employees: &[Employee]) -> Self {
        Self {
            total_documents: documents.len(),
            active_documents: documents
                .iter()
                .filter(|d| d.status == DocumentStatus::Active)
                .count(),
            active_employees: employees
                .iter()
                .filter(|e| e.status == EmployeeStatus::Active)
                .count(),
            pending_signatures: employees.iter().map(|e| e.documents_pending).sum(),
        }
    }
}
