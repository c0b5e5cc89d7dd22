use crate::config::RunConfig;
use crate::console::ServerConsole;
use crate::context::clock::Clock;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub const MESSAGE_RESTARTING_IN_5_MINS: &str = "Server will restart in 5 mins!";
pub const MESSAGE_RESTARTING_IN_1_MIN: &str = "Server will restart in 1 min!";
pub const MESSAGE_RESTARTING_IN_30_SEC: &str = "Server will restart in 30 seconds!";
pub const MESSAGE_RESTARTING_NOW: &str = "Server is restarting NOW!";

/// Stops the server after a fixed five-minute graduated warning.
pub struct ShutdownSequencer {
    console: ServerConsole,
    clock: Arc<dyn Clock>,
    config: RunConfig,
}

impl ShutdownSequencer {
    pub fn new(console: ServerConsole, clock: Arc<dyn Clock>, config: RunConfig) -> Self {
        Self {
            console,
            clock,
            config,
        }
    }

    /// Warns connected players at 5 minutes, 1 minute, 30 seconds and
    /// zero, then issues the stop command.
    ///
    /// Once entered the sequence always runs to completion: failed
    /// broadcasts are logged and skipped, and the stop is issued exactly
    /// once either way. `reached_max_wait` only selects the log line
    /// announcing the sequence.
    pub async fn run(&self, players_online: u32, reached_max_wait: bool) {
        if reached_max_wait {
            info!(
                "The server '{}' reached the maximum amount of time to wait for players \
                 to log off ({} mins), {} players online. Commencing restart sequence.",
                self.config.server_name, self.config.max_wait_minutes, players_online
            );
        } else {
            info!(
                "Restarting server '{}' with {} players online.",
                self.config.server_name, players_online
            );
        }

        self.announce(MESSAGE_RESTARTING_IN_5_MINS).await;
        self.clock.sleep(Duration::from_secs(60 * 4)).await;
        self.announce(MESSAGE_RESTARTING_IN_1_MIN).await;
        self.clock.sleep(Duration::from_secs(30)).await;
        self.announce(MESSAGE_RESTARTING_IN_30_SEC).await;
        self.clock.sleep(Duration::from_secs(30)).await;
        self.announce(MESSAGE_RESTARTING_NOW).await;
        self.clock.sleep(Duration::from_secs(2)).await;

        let stop = self.console.stop_server().await;
        if !stop.success {
            warn!(
                "Stop command reported failure on server '{}'",
                self.config.server_name
            );
        }
    }

    async fn announce(&self, message: &str) {
        let reply = self.console.broadcast(message).await;
        if !reply.success {
            warn!(
                "Failed to broadcast '{message}' on server '{}'",
                self.config.server_name
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::clocks::RecordingClock;
    use crate::test_utils::docker_clients::ScriptedDockerClient;
    use crate::test_utils::{broadcast_messages, stop_count};

    fn sequencer_with(
        docker: Arc<ScriptedDockerClient>,
        clock: Arc<RecordingClock>,
    ) -> ShutdownSequencer {
        let config = RunConfig {
            server_name: "mc".to_string(),
            wait: true,
            announce_waiting: false,
            max_wait_minutes: 5,
        };
        ShutdownSequencer::new(
            ServerConsole::new(docker, config.server_name.clone()),
            clock,
            config,
        )
    }

    #[tokio::test]
    async fn test_announcements_run_in_order_and_stop_is_issued_once() {
        let docker = Arc::new(ScriptedDockerClient::default());
        let clock = Arc::new(RecordingClock::default());

        sequencer_with(docker.clone(), clock).run(2, true).await;

        let calls = docker.exec_calls.lock().unwrap().clone();
        assert_eq!(
            broadcast_messages(&calls),
            vec![
                MESSAGE_RESTARTING_IN_5_MINS,
                MESSAGE_RESTARTING_IN_1_MIN,
                MESSAGE_RESTARTING_IN_30_SEC,
                MESSAGE_RESTARTING_NOW,
            ]
        );
        assert_eq!(stop_count(&calls), 1);
        // stop comes last
        assert_eq!(calls.last().unwrap()[1], "stop");
    }

    #[tokio::test]
    async fn test_delays_between_announcements() {
        let docker = Arc::new(ScriptedDockerClient::default());
        let clock = Arc::new(RecordingClock::default());

        sequencer_with(docker, clock.clone()).run(1, false).await;

        let sleeps = clock.sleeps.lock().unwrap().clone();
        assert_eq!(
            sleeps,
            vec![
                Duration::from_secs(240),
                Duration::from_secs(30),
                Duration::from_secs(30),
                Duration::from_secs(2),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_broadcasts_do_not_abort_the_sequence() {
        let docker = Arc::new(ScriptedDockerClient {
            say_fails: true,
            ..Default::default()
        });
        let clock = Arc::new(RecordingClock::default());

        sequencer_with(docker.clone(), clock).run(2, true).await;

        let calls = docker.exec_calls.lock().unwrap().clone();
        assert_eq!(broadcast_messages(&calls).len(), 4);
        assert_eq!(stop_count(&calls), 1);
    }
}
