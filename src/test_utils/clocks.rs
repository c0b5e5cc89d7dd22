use crate::context::clock::Clock;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Returns immediately from every sleep and records the requested
/// durations in order.
#[derive(Clone, Default)]
pub struct RecordingClock {
    pub sleeps: Arc<Mutex<Vec<Duration>>>,
}

#[async_trait]
impl Clock for RecordingClock {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}
