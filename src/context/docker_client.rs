use async_trait::async_trait;
use bollard::Docker;
use bollard::exec::{CreateExecOptions, StartExecOptions, StartExecResults};
use futures_util::stream::StreamExt;

/// Captured result of one command run inside a container.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    pub stdout: String,
    pub exit_code: i64,
}

#[async_trait]
pub trait DockerClient: Send + Sync {
    /// Run a command inside a running container, wait for it to finish,
    /// and return its combined output and exit code.
    ///
    /// `Err` means the command never ran (daemon unreachable, container
    /// missing); a command that ran and failed comes back as `Ok` with a
    /// non-zero exit code and whatever output it produced.
    async fn exec(&self, container: &str, cmd: Vec<String>) -> Result<ExecOutput, String>;
}

#[derive(Clone)]
pub struct DefaultDockerClient {
    docker: Docker,
}

impl DefaultDockerClient {
    pub fn new() -> Self {
        match Docker::connect_with_local_defaults() {
            Ok(docker) => Self { docker },
            Err(e) => panic!(
                "Failed to connect to Docker: {e}\n\n\
                Please ensure Docker is installed and running:\n\
                  - On macOS: Open Docker Desktop application\n\
                  - On Linux: Run 'sudo systemctl start docker' or 'sudo service docker start'\n\
                  - Check Docker status with: 'docker ps'"
            ),
        }
    }
}

impl Default for DefaultDockerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DockerClient for DefaultDockerClient {
    async fn exec(&self, container: &str, cmd: Vec<String>) -> Result<ExecOutput, String> {
        let exec = self
            .docker
            .create_exec(
                container,
                CreateExecOptions {
                    cmd: Some(cmd),
                    attach_stdout: Some(true),
                    attach_stderr: Some(true),
                    ..Default::default()
                },
            )
            .await
            .map_err(|e| format!("Failed to create exec in container '{container}': {e}"))?;

        let mut stdout = String::new();
        let results = self
            .docker
            .start_exec(&exec.id, None::<StartExecOptions>)
            .await
            .map_err(|e| format!("Failed to start exec in container '{container}': {e}"))?;

        if let StartExecResults::Attached { mut output, .. } = results {
            while let Some(chunk) = output.next().await {
                match chunk {
                    Ok(log) => stdout.push_str(&log.to_string()),
                    Err(e) => return Err(format!("Failed to read exec output: {e}")),
                }
            }
        }

        let inspect = self
            .docker
            .inspect_exec(&exec.id)
            .await
            .map_err(|e| format!("Failed to inspect exec in container '{container}': {e}"))?;

        Ok(ExecOutput {
            stdout,
            exit_code: inspect.exit_code.unwrap_or(-1),
        })
    }
}
