use crate::config::RunConfig;
use crate::console::ServerConsole;
use crate::context::AppContext;
use crate::context::clock::Clock;
use crate::sequencer::ShutdownSequencer;
use crate::status::{StatusError, StatusProbe};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const POLL_INTERVAL: Duration = Duration::from_secs(60);

pub const MESSAGE_WAITING_ON_RESTART: &str = "Server will restart when all players log off.";

/// Terminal state of one run. Every path through the control loop ends in
/// exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestartOutcome {
    /// Stop was issued; the container's restart policy brings the server
    /// back up.
    Restarted { waited_mins: u64 },
    /// The maximum wait was reached; the warning sequence ran and stop was
    /// issued.
    NoticeGiven { waited_mins: u64 },
    /// The server was not reachable to begin with.
    NotUp,
    /// The server went offline while waiting for players to log off.
    WentOffline { waited_mins: u64 },
    /// Players were online and waiting is disabled; the server was left
    /// running.
    LeftRunning,
}

impl RestartOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RestartOutcome::Restarted { .. }
            | RestartOutcome::NoticeGiven { .. }
            | RestartOutcome::LeftRunning => 0,
            RestartOutcome::NotUp | RestartOutcome::WentOffline { .. } => 1,
        }
    }
}

/// The top-level control loop: decides between restarting immediately,
/// waiting for an empty server, giving up after the maximum wait, or
/// aborting because the server went offline.
pub struct Restarter {
    console: ServerConsole,
    status: StatusProbe,
    sequencer: ShutdownSequencer,
    clock: Arc<dyn Clock>,
    config: RunConfig,
}

impl Restarter {
    pub fn new(ctx: &AppContext, config: RunConfig) -> Self {
        let console = ServerConsole::new(ctx.docker_client(), config.server_name.clone());
        Self {
            status: StatusProbe::new(console.clone()),
            sequencer: ShutdownSequencer::new(console.clone(), ctx.clock(), config.clone()),
            clock: ctx.clock(),
            console,
            config,
        }
    }

    /// Runs the restart decision once. Status parse failures propagate to
    /// the caller; everything else ends in a [`RestartOutcome`].
    pub async fn run(&self) -> Result<RestartOutcome, StatusError> {
        let server_name = &self.config.server_name;

        if !self.status.is_up().await {
            info!("Server '{server_name}' wasn't up in the first place, exiting!");
            return Ok(RestartOutcome::NotUp);
        }

        if self.status.player_count().await? == 0 {
            self.console.stop_server().await;
            info!(
                "Successfully restarted server '{server_name}' with 0 players online, \
                 had to wait 0 mins!"
            );
            return Ok(RestartOutcome::Restarted { waited_mins: 0 });
        }

        if !self.config.wait {
            info!(
                "Players are online on server '{server_name}' and waiting is disabled, \
                 leaving it running."
            );
            return Ok(RestartOutcome::LeftRunning);
        }

        let mut waited_mins: u64 = 1;

        loop {
            self.clock.sleep(POLL_INTERVAL).await;

            if !self.status.is_up().await {
                info!(
                    "Server '{server_name}' went offline while waiting for players to \
                     log off, had waited for {waited_mins} mins!"
                );
                return Ok(RestartOutcome::WentOffline { waited_mins });
            }

            let players_online = self.status.player_count().await?;
            if players_online == 0 {
                self.console.stop_server().await;
                info!(
                    "Successfully restarted server '{server_name}' with 0 players online, \
                     have waited for {waited_mins} mins!"
                );
                return Ok(RestartOutcome::Restarted { waited_mins });
            }

            if let Some(bound) = self.config.wait_bound()
                && waited_mins >= bound
            {
                self.sequencer.run(players_online, true).await;
                return Ok(RestartOutcome::NoticeGiven { waited_mins });
            }

            if waited_mins % 60 == 0 || waited_mins == 1 {
                info!(
                    "Still waiting to restart server '{server_name}', {players_online} \
                     players online, have waited for {waited_mins} mins!"
                );
                if self.config.announce_waiting {
                    self.console.broadcast(MESSAGE_WAITING_ON_RESTART).await;
                }
            }

            waited_mins += 1;
        }
    }
}
