//! services/api/src/lib.rs
//!
//! The HR portal gateway, its front door and the adapters that connect the
//! core stores to the outside world.

pub mod adapters;
pub mod config;
pub mod error;
pub mod portal;
pub mod web;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global `tracing` subscriber at `level`.
pub fn init_tracing(level: tracing::Level) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
