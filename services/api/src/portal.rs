//! services/api/src/portal.rs
//!
//! A headless portal client: the four stores wired to the gateway over HTTP,
//! a session file on disk and the wall clock.

use hr_portal_core::domain::{AuthUser, Document, NewNotification, NotificationKind};
use hr_portal_core::ports::{Clock, SessionRepository};
use hr_portal_core::stores::{AuthStore, DocumentStore, EmployeeStore, UiStore};
use hr_portal_core::views::DashboardSummary;
use std::sync::Arc;
use tracing::info;

use crate::adapters::{FileSessionRepository, HttpGateway, TokioClock};
use crate::config::{ClientConfig, SESSION_NAMESPACE};
use crate::error::ApiError;

pub struct PortalClient {
    pub auth: AuthStore,
    pub ui: UiStore,
    pub documents: DocumentStore,
    pub employees: EmployeeStore,
    gateway: Arc<HttpGateway>,
}

impl PortalClient {
    /// Wires the stores from configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        let gateway = Arc::new(HttpGateway::new(
            reqwest::Client::new(),
            config.gateway_url.clone(),
        ));
        let repo = Arc::new(FileSessionRepository::new(
            &config.session_dir,
            SESSION_NAMESPACE,
        ));
        Self::new(gateway, repo, Arc::new(TokioClock))
    }

    /// Rehydrates the session from `repo`. Employees start from the fixtures;
    /// documents stay empty until `refresh_documents`.
    pub fn new(
        gateway: Arc<HttpGateway>,
        repo: Arc<dyn SessionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            auth: AuthStore::rehydrate(repo),
            ui: UiStore::new(clock.clone()),
            documents: DocumentStore::new(gateway.clone(), clock),
            employees: EmployeeStore::new(),
            gateway,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser, ApiError> {
        let user = self.gateway.login(email, password).await?;
        self.auth.login(user.clone())?;
        info!(email = %user.email, "Signed in");
        self.ui.add_notification(NewNotification::new(
            format!("Signed in as {}", user.email),
            NotificationKind::Success,
        ));
        Ok(user)
    }

    pub fn logout(&self) -> Result<(), ApiError> {
        self.auth.logout()?;
        self.ui.add_notification(NewNotification::new("Signed out", NotificationKind::Info));
        Ok(())
    }

    pub async fn refresh_documents(&self) -> Result<Vec<Document>, ApiError> {
        self.documents.fetch_documents().await?;
        Ok(self.documents.documents())
    }

    /// Dashboard headline numbers over freshly fetched documents.
    pub async fn summary(&self) -> Result<DashboardSummary, ApiError> {
        let documents = self.refresh_documents().await?;
        Ok(DashboardSummary::compute(
            &documents,
            &self.employees.employees(),
        ))
    }
}
