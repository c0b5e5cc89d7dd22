use crate::context::docker_client::DockerClient;
use std::sync::Arc;
use tracing::debug;

/// Entry point for remote console commands inside the itzg/minecraft-server
/// image.
const RCON_BIN: &str = "rcon-cli";

const STOP_COMMAND: &str = "stop";

/// Output and success signal of one remote console command.
#[derive(Debug, Clone)]
pub struct ConsoleOutput {
    pub output: String,
    pub success: bool,
}

/// Sends remote console commands to the managed server through the Docker
/// exec channel.
#[derive(Clone)]
pub struct ServerConsole {
    docker_client: Arc<dyn DockerClient>,
    server_name: String,
}

impl ServerConsole {
    pub fn new(docker_client: Arc<dyn DockerClient>, server_name: impl Into<String>) -> Self {
        Self {
            docker_client,
            server_name: server_name.into(),
        }
    }

    /// Runs a console command on the server and returns its output and a
    /// success signal.
    ///
    /// The command is split on spaces and forwarded verbatim to `rcon-cli`.
    /// A non-zero exit or a channel failure both come back as
    /// `success: false`; whatever output was captured is kept. A single
    /// failed call is conclusive, there are no retries.
    pub async fn run_command(&self, command: &str) -> ConsoleOutput {
        let mut cmd = vec![RCON_BIN.to_string()];
        cmd.extend(command.split(' ').map(String::from));

        match self.docker_client.exec(&self.server_name, cmd).await {
            Ok(result) => ConsoleOutput {
                success: result.exit_code == 0,
                output: result.stdout,
            },
            Err(err) => {
                debug!(
                    "Command '{command}' failed to reach server '{}': {err}",
                    self.server_name
                );
                ConsoleOutput {
                    output: String::new(),
                    success: false,
                }
            }
        }
    }

    /// Broadcasts a chat message to all connected players.
    pub async fn broadcast(&self, message: &str) -> ConsoleOutput {
        self.run_command(&format!("say {message}")).await
    }

    /// Issues the stop command. The container's restart policy is expected
    /// to bring the server back up.
    pub async fn stop_server(&self) -> ConsoleOutput {
        self.run_command(STOP_COMMAND).await
    }
}
