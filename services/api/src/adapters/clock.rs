//! services/api/src/adapters/clock.rs
//!
//! The wall-clock implementation of the `Clock` port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hr_portal_core::ports::Clock;
use std::time::Duration;

/// System time and `tokio::time::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleep_waits_on_the_tokio_timer() {
        let started = tokio::time::Instant::now();
        TokioClock.sleep(Duration::from_millis(800)).await;
        assert!(started.elapsed() >= Duration::from_millis(800));
    }
}
