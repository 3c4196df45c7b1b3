//! crates/hr_portal_core/src/stores/documents.rs
//!
//! The document store. Local mutations are synchronous; `fetch_documents`
//! goes through the injected `DirectoryService` and `upload_document`
//! spends its simulated transfer time on the injected `Clock`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::domain::{Document, DocumentPatch, DocumentStatus, DocumentType};
use crate::ports::{Clock, DirectoryService, PortError, PortResult};

/// Category given to freshly uploaded documents.
pub const UPLOAD_CATEGORY: &str = "Uncategorized";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
}

/// A file handed to the store by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub size_bytes: u64,
}

#[derive(Default)]
struct DocumentState {
    documents: Vec<Document>,
    /// Fetches started but not yet finished.
    in_flight: usize,
    /// Generation of the most recently started fetch.
    latest_fetch: u64,
    last_error: Option<PortError>,
}

#[derive(Clone)]
pub struct DocumentStore {
    state: Arc<Mutex<DocumentState>>,
    directory: Arc<dyn DirectoryService>,
    clock: Arc<dyn Clock>,
    upload_latency: Duration,
}

/// Decrements the in-flight count when a fetch ends, however it ends.
struct FetchGuard {
    state: Arc<Mutex<DocumentState>>,
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

impl DocumentStore {
    /// Creates an empty store. Call `fetch_documents` to load the collection.
    pub fn new(directory: Arc<dyn DirectoryService>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(Mutex::new(DocumentState::default())),
            directory,
            clock,
            upload_latency: Duration::ZERO,
        }
    }

    /// Sets the simulated transfer time of `upload_document`.
    pub fn with_upload_latency(mut self, latency: Duration) -> Self {
        self.upload_latency = latency;
        self
    }

    pub fn documents(&self) -> Vec<Document> {
        self.lock().documents.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().in_flight > 0
    }

    /// Error of the last fetch, cleared by the next successful one.
    pub fn last_error(&self) -> Option<PortError> {
        self.lock().last_error.clone()
    }

    /// Replaces the collection with the directory's documents.
    ///
    /// When fetches overlap, the most recently started one wins and the
    /// results of the others are dropped. The loading flag is cleared once
    /// every fetch has finished, on success and on failure.
    pub async fn fetch_documents(&self) -> PortResult<()> {
        let (generation, _guard) = self.begin_fetch();
        let result = self.directory.list_documents().await;
        self.finish_fetch(generation, result)
    }

    /// Like `fetch_documents`, but gives up with `PortError::Cancelled` as soon
    /// as `cancel` fires. A cancelled fetch leaves the collection untouched.
    pub async fn fetch_documents_until(&self, cancel: &CancellationToken) -> PortResult<()> {
        let (generation, _guard) = self.begin_fetch();
        let result = tokio::select! {
            _ = cancel.cancelled() => Err(PortError::Cancelled),
            listed = self.directory.list_documents() => listed,
        };
        self.finish_fetch(generation, result)
    }

    fn begin_fetch(&self) -> (u64, FetchGuard) {
        let mut state = self.lock();
        state.in_flight += 1;
        state.latest_fetch += 1;
        let generation = state.latest_fetch;
        debug!(generation, "Fetching documents");
        (
            generation,
            FetchGuard {
                state: Arc::clone(&self.state),
            },
        )
    }

    fn finish_fetch(&self, generation: u64, result: PortResult<Vec<Document>>) -> PortResult<()> {
        let mut state = self.lock();
        let current = generation == state.latest_fetch;
        match result {
            Ok(documents) if current => {
                info!(count = documents.len(), "Documents loaded");
                state.documents = documents;
                state.last_error = None;
                Ok(())
            }
            Ok(_) => {
                debug!(generation, "Discarding superseded document fetch");
                Ok(())
            }
            Err(PortError::Cancelled) => {
                debug!(generation, "Document fetch cancelled");
                Err(PortError::Cancelled)
            }
            Err(e) => {
                warn!("Failed to fetch documents: {}", e);
                if current {
                    state.last_error = Some(e.clone());
                }
                Err(e)
            }
        }
    }

    /// Puts `doc` first. Neither required fields nor id uniqueness are checked.
    pub fn add_document(&self, doc: Document) {
        self.lock().documents.insert(0, doc);
    }

    /// Merges `patch` into the records with `id`. Unknown ids are ignored.
    pub fn update_document(&self, id: &str, patch: &DocumentPatch) {
        for doc in self.lock().documents.iter_mut().filter(|d| d.id == id) {
            doc.apply(patch);
        }
    }

    /// Removes the first record with `id`, if any.
    pub fn delete_document(&self, id: &str) {
        let mut state = self.lock();
        if let Some(pos) = state.documents.iter().position(|d| d.id == id) {
            state.documents.remove(pos);
        }
    }

    /// Turns an uploaded file into a new document at the top of the list.
    ///
    /// Only `pdf`, `doc` and `docx` files are accepted. The record gets a
    /// millisecond-timestamp id taken once the simulated transfer completes.
    pub async fn upload_document(&self, upload: FileUpload) -> Result<Document, UploadError> {
        let extension = upload
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or_default();
        let doc_type = DocumentType::from_extension(extension)
            .ok_or_else(|| UploadError::UnsupportedFileType(upload.file_name.clone()))?;

        if !self.upload_latency.is_zero() {
            self.clock.sleep(self.upload_latency).await;
        }

        let now = self.clock.now();
        let doc = Document {
            id: now.timestamp_millis().to_string(),
            name: upload.file_name,
            doc_type,
            size: format_file_size(upload.size_bytes),
            status: DocumentStatus::Active,
            created_at: now.date_naive(),
            updated_at: now.date_naive(),
            category: UPLOAD_CATEGORY.to_string(),
        };
        info!(id = %doc.id, name = %doc.name, "Document uploaded");
        self.add_document(doc.clone());
        Ok(doc)
    }

    fn lock(&self) -> MutexGuard<'_, DocumentState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Renders a byte count the way the document list shows it, e.g. `1.5 KB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut unit = 0;
    let mut scale = 1u64;
    while unit < UNITS.len() - 1 && bytes >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }
    let value = ((bytes as f64 / scale as f64) * 10.0).round() / 10.0;
    if value.fract() == 0.0 {
        format!("{:.0} {}", value, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
