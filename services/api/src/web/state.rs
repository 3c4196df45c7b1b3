//! services/api/src/web/state.rs
//!
//! Defines the shared states of the gateway and the front door.

use hr_portal_core::ports::DirectoryService;
use reqwest::{redirect, Client, Url};
use std::sync::Arc;

use crate::web::static_files::Frontend;

//=========================================================================================
// AppState (Gateway)
//=========================================================================================

/// The gateway state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn DirectoryService>,
    pub frontend: Arc<Frontend>,
}

//=========================================================================================
// ProxyState (Front Door)
//=========================================================================================

#[derive(Clone)]
pub struct ProxyState {
    pub client: Client,
    /// Base URL of the gateway; the request path and query are appended as-is.
    pub backend_url: Url,
}

impl ProxyState {
    /// Builds the forwarding client. Redirects are not followed, so a 3xx from
    /// the gateway reaches the browser unchanged.
    pub fn new(backend_url: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().redirect(redirect::Policy::none()).build()?;
        Ok(Self {
            client,
            backend_url,
        })
    }
}
