//! services/api/src/adapters/gateway_client.rs
//!
//! An HTTP client for the gateway. It implements the `DirectoryService` port,
//! so the document store can fetch over the network instead of from fixtures.

use async_trait::async_trait;
use hr_portal_core::domain::{AuthUser, Document, Employee};
use hr_portal_core::ports::{DirectoryService, PortError, PortResult};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::web::auth::{LoginRequest, LoginResponse};

#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Appends `segments` to the base URL, keeping any path prefix it has.
    /// Each segment is percent-encoded, so ids cannot alter the route.
    fn endpoint(&self, segments: &[&str]) -> PortResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PortError::Unexpected(format!("gateway url {} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GETs the endpoint and decodes the JSON body. A 404 maps to `NotFound(entity)`.
    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str], entity: &str) -> PortResult<T> {
        let url = self.endpoint(segments)?;
        debug!(%url, "Gateway request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PortError::NotFound(entity.to_string()));
        }
        let response = response
            .error_for_status()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        response
            .json::<T>()
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))
    }

    /// Signs in through the gateway and returns the user it hands back.
    pub async fn login(&self, email: &str, password: &str) -> PortResult<AuthUser> {
        let response = self
            .client
            .post(self.endpoint(&["api", "auth", "login"])?)
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(body.user)
    }
}

#[async_trait]
impl DirectoryService for HttpGateway {
    async fn list_documents(&self) -> PortResult<Vec<Document>> {
        self.get_json(&["api", "documents"], "Document").await
    }

    async fn get_document(&self, id: &str) -> PortResult<Document> {
        self.get_json(&["api", "documents", id], "Document").await
    }

    async fn list_employees(&self) -> PortResult<Vec<Employee>> {
        self.get_json(&["api", "employees"], "Employee").await
    }

    async fn get_employee(&self, id: &str) -> PortResult<Employee> {
        self.get_json(&["api", "employees", id], "Employee").await
    }
}
