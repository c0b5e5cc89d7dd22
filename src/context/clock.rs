use async_trait::async_trait;
use std::time::Duration;

/// Timer seam so the wait loop and shutdown sequencer can be tested
/// without real elapsed time.
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
