//! crates/hr_portal_core/src/fixtures.rs
//!
//! Hard-coded sample records. They seed the employee store, back the
//! simulated directory and are what the gateway serves.

use chrono::NaiveDate;

use crate::domain::{Document, DocumentStatus, DocumentType, Employee, EmployeeStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Every literal below is a valid calendar date.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn document(
    id: &str,
    name: &str,
    doc_type: DocumentType,
    size: &str,
    status: DocumentStatus,
    created_at: NaiveDate,
    updated_at: NaiveDate,
    category: &str,
) -> Document {
    Document {
        id: id.to_string(),
        name: name.to_string(),
        doc_type,
        size: size.to_string(),
        status,
        created_at,
        updated_at,
        category: category.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    name: &str,
    email: &str,
    role: &str,
    department: &str,
    status: EmployeeStatus,
    join_date: NaiveDate,
    documents_signed: u32,
    documents_pending: u32,
) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        status,
        avatar: None,
        join_date,
        documents_signed,
        documents_pending,
    }
}

/// The document fixture set, in display order.
#[rustfmt::skip]
pub fn documents() -> Vec<Document> {
    use DocumentStatus::*;
    use DocumentType::*;
    vec![
        document("1", "Employee Handbook 2024.pdf", Pdf, "2.4 MB", Active, date(2024, 1, 15), date(2024, 2, 20), "HR Policy"),
        document("2", "Non-Disclosure Agreement.docx", Docx, "156 KB", Pending, date(2024, 2, 10), date(2024, 2, 10), "Legal"),
        document("3", "Benefits Enrollment Form.pdf", Pdf, "890 KB", Active, date(2024, 1, 20), date(2024, 1, 20), "Benefits"),
        document("4", "Remote Work Policy.pdf", Pdf, "1.2 MB", Draft, date(2024, 2, 18), date(2024, 2, 22), "HR Policy"),
        document("5", "Performance Review Template.docx", Docx, "234 KB", Active, date(2023, 12, 1), date(2024, 1, 5), "Performance"),
        document("6", "Code of Conduct.pdf", Pdf, "3.1 MB", Active, date(2023, 11, 15), date(2024, 2, 1), "HR Policy"),
    ]
}

/// The employee fixture set, in display order.
#[rustfmt::skip]
pub fn employees() -> Vec<Employee> {
    use EmployeeStatus::*;
    vec![
        employee("1", "Sarah Chen", "sarah.chen@company.com", "Senior Engineer", "Engineering", Active, date(2022, 3, 15), 5, 1),
        employee("2", "Marcus Johnson", "marcus.j@company.com", "Product Manager", "Product", Active, date(2021, 8, 22), 7, 0),
        employee("3", "Emily Rodriguez", "emily.r@company.com", "HR Specialist", "HR", Active, date(2023, 1, 10), 6, 2),
        employee("4", "David Kim", "david.kim@company.com", "Designer", "Design", Onboarding, date(2024, 2, 15), 2, 4),
        employee("5", "Lisa Thompson", "lisa.t@company.com", "Marketing Lead", "Marketing", Active, date(2022, 11, 5), 8, 0),
        employee("6", "James Wilson", "james.w@company.com", "Sales Director", "Sales", Inactive, date(2020, 6, 18), 10, 0),
        employee("7", "Anna Martinez", "anna.m@company.com", "Data Analyst", "Analytics", Active, date(2023, 7, 12), 4, 1),
        employee("8", "Robert Taylor", "rob.t@company.com", "DevOps Engineer", "Engineering", Active, date(2022, 9, 30), 6, 0),
    ]
}
