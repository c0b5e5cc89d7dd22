//! Test utilities shared across the crate's test modules.
//!
//! Provides Docker client mocks (ScriptedDockerClient,
//! FixedResponseDockerClient), the RecordingClock, and helpers for reading
//! recorded exec calls back out.

pub mod clocks;
pub mod docker_clients;

/// A `list` reply in the live server's format.
pub fn list_output(players_online: u32) -> String {
    format!("There are {players_online} of a max of 20 players online: \n")
}

/// The broadcast messages among the recorded exec calls, in order, with
/// the `say` prefix stripped and the message reassembled.
pub fn broadcast_messages(calls: &[Vec<String>]) -> Vec<String> {
    calls
        .iter()
        .filter(|cmd| cmd.get(1).map(String::as_str) == Some("say"))
        .map(|cmd| cmd[2..].join(" "))
        .collect()
}

/// How many stop commands were issued.
pub fn stop_count(calls: &[Vec<String>]) -> usize {
    calls
        .iter()
        .filter(|cmd| cmd.get(1).map(String::as_str) == Some("stop"))
        .count()
}
