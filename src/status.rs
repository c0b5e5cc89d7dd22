use crate::console::ServerConsole;
use thiserror::Error;

const LIVENESS_COMMAND: &str = "whitelist";
const LIST_COMMAND: &str = "list";
const LIST_PREFIX: &str = "There are ";

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("player list query failed: {0:?}")]
    CommandFailed(String),
    #[error("unexpected player list output: {0:?}")]
    UnexpectedListOutput(String),
}

/// Reads the live state of the managed server over the remote console.
pub struct StatusProbe {
    console: ServerConsole,
}

impl StatusProbe {
    pub fn new(console: ServerConsole) -> Self {
        Self { console }
    }

    /// Liveness probe. Only the success signal of a lightweight query
    /// matters; the output is ignored.
    pub async fn is_up(&self) -> bool {
        self.console.run_command(LIVENESS_COMMAND).await.success
    }

    /// Number of players currently connected.
    ///
    /// Unparseable output is an error, never zero.
    pub async fn player_count(&self) -> Result<u32, StatusError> {
        let reply = self.console.run_command(LIST_COMMAND).await;
        if !reply.success {
            return Err(StatusError::CommandFailed(reply.output));
        }
        parse_player_count(&reply.output)
    }
}

/// Parses the count out of a reply shaped like
/// "There are 3 of a max of 20 players online: Alice, Bob, Carol".
fn parse_player_count(output: &str) -> Result<u32, StatusError> {
    let unexpected = || StatusError::UnexpectedListOutput(output.to_string());

    let rest = output
        .trim_start()
        .strip_prefix(LIST_PREFIX)
        .ok_or_else(unexpected)?;
    let count = rest
        .split(' ')
        .next()
        .filter(|token| !token.is_empty())
        .ok_or_else(unexpected)?;

    count.parse().map_err(|_| unexpected())
}
