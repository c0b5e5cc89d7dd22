use crate::context::docker_client::{DockerClient, ExecOutput};
use crate::test_utils::list_output;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Returns one canned reply for every exec call and records the calls.
#[derive(Clone)]
pub struct FixedResponseDockerClient {
    pub stdout: String,
    pub exit_code: i64,
    pub error: Option<String>,
    pub exec_calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl Default for FixedResponseDockerClient {
    fn default() -> Self {
        Self {
            stdout: String::new(),
            exit_code: 0,
            error: None,
            exec_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl DockerClient for FixedResponseDockerClient {
    async fn exec(&self, _container: &str, cmd: Vec<String>) -> Result<ExecOutput, String> {
        self.exec_calls.lock().unwrap().push(cmd);
        if let Some(ref error) = self.error {
            return Err(error.clone());
        }
        Ok(ExecOutput {
            stdout: self.stdout.clone(),
            exit_code: self.exit_code,
        })
    }
}

/// Answers rcon commands per verb from per-call scripts, falling back to a
/// fixed reply when a script runs dry. Records every exec call.
#[derive(Clone)]
pub struct ScriptedDockerClient {
    pub exec_calls: Arc<Mutex<Vec<Vec<String>>>>,
    /// Per-call liveness answers for `whitelist`; empty means up.
    pub whitelist_results: Arc<Mutex<VecDeque<bool>>>,
    /// Per-call replies for `list`; empty falls back to
    /// `fallback_list_output`.
    pub list_outputs: Arc<Mutex<VecDeque<String>>>,
    pub fallback_list_output: String,
    /// Make every `say` exit non-zero.
    pub say_fails: bool,
}

impl Default for ScriptedDockerClient {
    fn default() -> Self {
        Self {
            exec_calls: Arc::new(Mutex::new(Vec::new())),
            whitelist_results: Arc::new(Mutex::new(VecDeque::new())),
            list_outputs: Arc::new(Mutex::new(VecDeque::new())),
            fallback_list_output: String::new(),
            say_fails: false,
        }
    }
}

impl ScriptedDockerClient {
    /// A server that is up and reports `players_online` on every `list`.
    pub fn with_players_online(players_online: u32) -> Self {
        Self {
            fallback_list_output: list_output(players_online),
            ..Default::default()
        }
    }

    /// Queue `list` replies for the next calls, one per count.
    pub fn push_list_outputs(&self, counts: &[u32]) {
        let mut outputs = self.list_outputs.lock().unwrap();
        outputs.extend(counts.iter().map(|&count| list_output(count)));
    }
}

#[async_trait]
impl DockerClient for ScriptedDockerClient {
    async fn exec(&self, _container: &str, cmd: Vec<String>) -> Result<ExecOutput, String> {
        self.exec_calls.lock().unwrap().push(cmd.clone());

        match cmd.get(1).map(String::as_str) {
            Some("whitelist") => {
                let up = self
                    .whitelist_results
                    .lock()
                    .unwrap()
                    .pop_front()
                    .unwrap_or(true);
                if up {
                    Ok(ExecOutput {
                        stdout: "Whitelist is now turned on\n".to_string(),
                        exit_code: 0,
                    })
                } else {
                    Err("Error response from daemon: container is not running".to_string())
                }
            }
            Some("list") => {
                let stdout = self
                    .list_outputs
                    .lock()
                    .unwrap()
                    .pop_front()
                    .unwrap_or_else(|| self.fallback_list_output.clone());
                Ok(ExecOutput {
                    stdout,
                    exit_code: 0,
                })
            }
            Some("say") => Ok(ExecOutput {
                stdout: String::new(),
                exit_code: if self.say_fails { 1 } else { 0 },
            }),
            _ => Ok(ExecOutput {
                stdout: String::new(),
                exit_code: 0,
            }),
        }
    }
}
