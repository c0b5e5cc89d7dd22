/// Per-run configuration, parsed once at startup and passed explicitly to
/// every component.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Container name of the managed server, as known to the Docker daemon.
    pub server_name: String,
    /// Keep polling until players log off instead of exiting immediately.
    pub wait: bool,
    /// Broadcast an hourly notice to players while waiting.
    pub announce_waiting: bool,
    /// Maximum minutes to wait for players to log off; -1 waits forever.
    pub max_wait_minutes: i64,
}

impl RunConfig {
    /// The wait bound in minutes, or `None` when waiting is unbounded.
    ///
    /// Any negative value means unbounded, so a typo like `-5` never turns
    /// into an already-expired bound.
    pub fn wait_bound(&self) -> Option<u64> {
        if self.max_wait_minutes < 0 {
            None
        } else {
            Some(self.max_wait_minutes as u64)
        }
    }
}
