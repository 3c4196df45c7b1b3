//! crates/hr_portal_core/src/ports.rs
//!
//! Defines the service contracts (traits) the stores depend on.
//! Stores receive these as injected `Arc<dyn …>` handles, so the core never
//! touches the filesystem, the network or the wall clock directly.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::domain::{AuthState, Document, Employee};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    /// Lookup by id failed. Carries the entity name, e.g. `Document`.
    #[error("{0} not found")]
    NotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Operation cancelled")]
    Cancelled,
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Durable storage for the client's auth session.
pub trait SessionRepository: Send + Sync {
    /// Returns `Ok(None)` when nothing is stored and an error when the stored
    /// data cannot be read back.
    fn load_session(&self) -> PortResult<Option<AuthState>>;

    fn save_session(&self, state: &AuthState) -> PortResult<()>;
}

/// Time source. Simulated latency goes through `sleep` so tests can skip it.
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    async fn sleep(&self, duration: Duration);
}

/// Read access to the document and employee collections.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    async fn list_documents(&self) -> PortResult<Vec<Document>>;

    /// Fails with `PortError::NotFound("Document")` for unknown ids.
    async fn get_document(&self, id: &str) -> PortResult<Document>;

    async fn list_employees(&self) -> PortResult<Vec<Employee>>;

    /// Fails with `PortError::NotFound("Employee")` for unknown ids.
    async fn get_employee(&self, id: &str) -> PortResult<Employee>;
}
