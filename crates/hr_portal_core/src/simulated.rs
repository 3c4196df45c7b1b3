//! crates/hr_portal_core/src/simulated.rs
//!
//! In-process implementations of the ports: a fixture-backed directory with
//! simulated latency, a manual clock and an in-memory session repository.

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::domain::{AuthState, Document, Employee};
use crate::fixtures;
use crate::ports::{Clock, DirectoryService, PortError, PortResult, SessionRepository};

//=========================================================================================
// FixtureDirectory
//=========================================================================================

/// Serves the fixture collections, optionally after a simulated network delay.
#[derive(Clone)]
pub struct FixtureDirectory {
    clock: Arc<dyn Clock>,
    latency: Duration,
    documents: Arc<[Document]>,
    employees: Arc<[Employee]>,
}

impl FixtureDirectory {
    pub fn new(clock: Arc<dyn Clock>, latency: Duration) -> Self {
        Self {
            clock,
            latency,
            documents: fixtures::documents().into(),
            employees: fixtures::employees().into(),
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            self.clock.sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl DirectoryService for FixtureDirectory {
    async fn list_documents(&self) -> PortResult<Vec<Document>> {
        self.simulate_latency().await;
        Ok(self.documents.to_vec())
    }

    async fn get_document(&self, id: &str) -> PortResult<Document> {
        self.simulate_latency().await;
        self.documents
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| PortError::NotFound("Document".to_string()))
    }

    async fn list_employees(&self) -> PortResult<Vec<Employee>> {
        self.simulate_latency().await;
        Ok(self.employees.to_vec())
    }

    async fn get_employee(&self, id: &str) -> PortResult<Employee> {
        self.simulate_latency().await;
        self.employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| PortError::NotFound("Employee".to_string()))
    }
}

//=========================================================================================
// ManualClock
//=========================================================================================

/// A clock that only moves when told to. `sleep` advances it and returns at once.
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// A clock frozen at `millis` since the Unix epoch.
    pub fn at_millis(millis: i64) -> Self {
        let start = Utc
            .timestamp_millis_opt(millis)
            .single()
            .unwrap_or_default();
        Self::new(start)
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += ChronoDuration::from_std(by).unwrap_or_else(|_| ChronoDuration::zero());
    }
}

#[async_trait]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}

//=========================================================================================
// MemorySessionRepository
//=========================================================================================

#[derive(Clone, Default)]
struct MemorySlot {
    stored: Option<AuthState>,
    corrupt: bool,
    writes: usize,
}

/// Keeps the persisted session in memory. Clones share the same slot, which
/// is how tests simulate a reload.
#[derive(Clone, Default)]
pub struct MemorySessionRepository {
    slot: Arc<Mutex<MemorySlot>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next loads fail as if the stored data were unreadable.
    pub fn corrupt(&self) {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .corrupt = true;
    }

    /// Number of successful `save_session` calls.
    pub fn writes(&self) -> usize {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).writes
    }
}

impl SessionRepository for MemorySessionRepository {
    fn load_session(&self) -> PortResult<Option<AuthState>> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.corrupt {
            return Err(PortError::Storage("stored session is malformed".to_string()));
        }
        Ok(slot.stored.clone())
    }

    fn save_session(&self, state: &AuthState) -> PortResult<()> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.stored = Some(state.clone());
        slot.corrupt = false;
        slot.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> FixtureDirectory {
        FixtureDirectory::new(Arc::new(ManualClock::at_millis(0)), Duration::ZERO)
    }

    #[tokio::test]
    async fn every_fixture_document_is_found_by_id() {
        let dir = directory();
        for doc in fixtures::documents() {
            assert_eq!(dir.get_document(&doc.id).await.unwrap(), doc);
        }
        for emp in fixtures::employees() {
            assert_eq!(dir.get_employee(&emp.id).await.unwrap(), emp);
        }
    }

    #[tokio::test]
    async fn unknown_ids_report_the_entity_name() {
        let dir = directory();
        let err = dir.get_document("missing").await.unwrap_err();
        assert_eq!(err.to_string(), "Document not found");
        let err = dir.get_employee("missing").await.unwrap_err();
        assert_eq!(err.to_string(), "Employee not found");
    }

    #[tokio::test]
    async fn latency_is_spent_on_the_injected_clock() {
        let clock = ManualClock::at_millis(1_000);
        let dir = FixtureDirectory::new(Arc::new(clock.clone()), Duration::from_millis(800));
        dir.list_documents().await.unwrap();
        assert_eq!(clock.now().timestamp_millis(), 1_800);
    }

    #[test]
    fn corrupt_slot_fails_to_load_until_rewritten() {
        let repo = MemorySessionRepository::new();
        repo.corrupt();
        assert!(repo.load_session().is_err());
        repo.save_session(&AuthState::logged_out()).unwrap();
        assert_eq!(repo.load_session().unwrap(), Some(AuthState::logged_out()));
    }
}
