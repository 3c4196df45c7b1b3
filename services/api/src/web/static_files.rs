//! services/api/src/web/static_files.rs
//!
//! Locates the built client bundle and serves it: static assets first, then
//! `index.html` for any other GET so client-side routes work on reload.

use axum::{http::Method, Router};
use std::path::{Path, PathBuf};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info};

use crate::error::ApiError;

/// The entry document every candidate directory is probed for.
pub const INDEX_FILE: &str = "index.html";

/// Returns the first candidate directory that contains an `index.html`.
pub fn resolve_static_root(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|dir| dir.is_dir() && dir.join(INDEX_FILE).is_file())
        .cloned()
}

/// Outcome of static-file discovery, kept for serving and diagnostics.
#[derive(Debug, Clone)]
pub struct Frontend {
    root: Option<PathBuf>,
    searched: Vec<PathBuf>,
}

impl Frontend {
    /// Probes `candidates` in order. Finding nothing is logged, not fatal.
    pub fn discover(candidates: Vec<PathBuf>) -> Self {
        let root = resolve_static_root(&candidates);
        match &root {
            Some(dir) => info!("Serving static files from {}", dir.display()),
            None => error!("Static files not found; searched {:?}", candidates),
        }
        Self {
            root,
            searched: candidates,
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn searched(&self) -> &[PathBuf] {
        &self.searched
    }

    /// Installs the catch-all on `router`: the bundle when it was found,
    /// otherwise a handler that reports the failed lookup.
    pub fn attach(&self, router: Router) -> Router {
        match &self.root {
            Some(root) => {
                let spa = ServeDir::new(root).fallback(ServeFile::new(root.join(INDEX_FILE)));
                router.fallback_service(spa)
            }
            None => {
                let searched = self.searched.clone();
                router.fallback(move |method: Method| {
                    let searched = searched.clone();
                    async move {
                        if method == Method::GET || method == Method::HEAD {
                            ApiError::FrontendMissing { searched }
                        } else {
                            ApiError::RouteNotFound
                        }
                    }
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_directory_with_an_index_wins() {
        let empty = tempfile::tempdir().unwrap();
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(first.path().join(INDEX_FILE), "<html>1</html>").unwrap();
        std::fs::write(second.path().join(INDEX_FILE), "<html>2</html>").unwrap();

        let candidates = vec![
            empty.path().join("missing"),
            empty.path().to_path_buf(),
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ];
        assert_eq!(
            resolve_static_root(&candidates),
            Some(first.path().to_path_buf())
        );
    }

    #[test]
    fn no_match_resolves_to_none() {
        let empty = tempfile::tempdir().unwrap();
        let frontend = Frontend::discover(vec![empty.path().to_path_buf()]);
        assert_eq!(frontend.root(), None);
        assert_eq!(frontend.searched(), [empty.path().to_path_buf()]);
    }

    #[test]
    fn an_index_that_is_a_directory_does_not_count() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(INDEX_FILE)).unwrap();
        assert_eq!(resolve_static_root(&[dir.path().to_path_buf()]), None);
    }
}
