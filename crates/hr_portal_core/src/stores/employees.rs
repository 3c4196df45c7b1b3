//! crates/hr_portal_core/src/stores/employees.rs
//!
//! The employee store: the raw collection plus the list-view selections.
//! Filtering is left to the view (see `views::filter_employees`).

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{Employee, EmployeePatch};
use crate::fixtures;
use crate::views::EmployeeQuery;

/// Status filter value that matches every employee.
pub const ALL_STATUSES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone)]
struct EmployeeState {
    employees: Vec<Employee>,
    view_mode: ViewMode,
    search_query: String,
    filter_status: String,
}

#[derive(Clone)]
pub struct EmployeeStore {
    state: Arc<Mutex<EmployeeState>>,
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore {
    /// A store seeded with the employee fixtures.
    pub fn new() -> Self {
        Self::with_employees(fixtures::employees())
    }

    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            state: Arc::new(Mutex::new(EmployeeState {
                employees,
                view_mode: ViewMode::default(),
                search_query: String::new(),
                filter_status: ALL_STATUSES.to_string(),
            })),
        }
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.lock().employees.clone()
    }

    pub fn add_employee(&self, employee: Employee) {
        self.lock().employees.insert(0, employee);
    }

    pub fn update_employee(&self, id: &str, patch: &EmployeePatch) {
        for employee in self.lock().employees.iter_mut().filter(|e| e.id == id) {
            employee.apply(patch);
        }
    }

    /// Removes the first employee with `id`, if any.
    pub fn delete_employee(&self, id: &str) {
        let mut state = self.lock();
        if let Some(pos) = state.employees.iter().position(|e| e.id == id) {
            state.employees.remove(pos);
        }
    }

    // --- View state ---

    pub fn view_mode(&self) -> ViewMode {
        self.lock().view_mode
    }

    pub fn set_view_mode(&self, mode: ViewMode) {
        self.lock().view_mode = mode;
    }

    pub fn search_query(&self) -> String {
        self.lock().search_query.clone()
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        self.lock().search_query = query.into();
    }

    pub fn filter_status(&self) -> String {
        self.lock().filter_status.clone()
    }

    pub fn set_filter_status(&self, status: impl Into<String>) {
        self.lock().filter_status = status.into();
    }

    /// The current selections as a query; the department is left open.
    pub fn query(&self) -> EmployeeQuery {
        let state = self.lock();
        EmployeeQuery {
            search: state.search_query.clone(),
            status: state.filter_status.clone(),
            ..EmployeeQuery::default()
        }
    }

    fn lock(&self) -> MutexGuard<'_, EmployeeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmployeeStatus;

    #[test]
    fn starts_with_fixtures_and_default_view_state() {
        let store = EmployeeStore::new();
        assert_eq!(store.employees(), fixtures::employees());
        assert_eq!(store.view_mode(), ViewMode::Grid);
        assert_eq!(store.search_query(), "");
        assert_eq!(store.filter_status(), ALL_STATUSES);
    }

    #[test]
    fn add_update_delete() {
        let store = EmployeeStore::new();
        let mut hire = fixtures::employees()[0].clone();
        hire.id = "9".into();
        hire.name = "New Hire".into();
        store.add_employee(hire);
        assert_eq!(store.employees()[0].id, "9");

        store.update_employee(
            "9",
            &EmployeePatch {
                status: Some(EmployeeStatus::Onboarding),
                documents_pending: Some(3),
                ..Default::default()
            },
        );
        let updated = &store.employees()[0];
        assert_eq!(updated.status, EmployeeStatus::Onboarding);
        assert_eq!(updated.documents_pending, 3);
        assert_eq!(updated.name, "New Hire");

        let before = store.employees().len();
        store.delete_employee("9");
        store.delete_employee("missing");
        assert_eq!(store.employees().len(), before - 1);
    }

    #[test]
    fn view_selections_do_not_touch_the_collection() {
        let store = EmployeeStore::new();
        store.set_view_mode(ViewMode::List);
        store.set_search_query("sarah");
        store.set_filter_status("inactive");
        assert_eq!(store.employees().len(), fixtures::employees().len());

        let query = store.query();
        assert_eq!(query.search, "sarah");
        assert_eq!(query.status, "inactive");
        assert_eq!(store.view_mode(), ViewMode::List);
    }
}
