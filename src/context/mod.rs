pub mod clock;
pub mod docker_client;

use clock::Clock;
use docker_client::DockerClient;

use std::sync::Arc;

/// Holds the injectable collaborators every component reaches the outside
/// world through: the Docker command channel and the clock.
#[derive(Clone)]
pub struct AppContext {
    docker_client: Arc<dyn DockerClient>,
    clock: Arc<dyn Clock>,
}

impl AppContext {
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder::new()
    }

    pub fn docker_client(&self) -> Arc<dyn DockerClient> {
        Arc::clone(&self.docker_client)
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}

pub struct AppContextBuilder {
    docker_client: Option<Arc<dyn DockerClient>>,
    clock: Option<Arc<dyn Clock>>,
}

impl AppContextBuilder {
    pub fn new() -> Self {
        Self {
            docker_client: None,
            clock: None,
        }
    }

    #[allow(dead_code)]
    pub fn with_docker_client(mut self, docker_client: Arc<dyn DockerClient>) -> Self {
        self.docker_client = Some(docker_client);
        self
    }

    #[allow(dead_code)]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> AppContext {
        AppContext {
            docker_client: self
                .docker_client
                .unwrap_or_else(|| Arc::new(docker_client::DefaultDockerClient::new())),
            clock: self.clock.unwrap_or_else(|| Arc::new(clock::SystemClock)),
        }
    }
}

impl Default for AppContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl AppContext {
    pub fn new_with_test_doubles(
        docker_client: Arc<dyn DockerClient>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        AppContextBuilder::new()
            .with_docker_client(docker_client)
            .with_clock(clock)
            .build()
    }
}
