use clap::Parser;
use std::path::PathBuf;
use tracing::error;

use mcrestart::config::RunConfig;
use mcrestart::context::AppContext;
use mcrestart::restarter::Restarter;

#[derive(Parser)]
#[command(name = "mcrestart")]
#[command(
    version,
    about = "Restarts a containerized Minecraft server once players have logged off",
    long_about = None
)]
struct Cli {
    /// Container name of the server, as in the docker compose file
    #[arg(long)]
    server_name: String,

    /// Keep waiting until players log off to restart the server
    #[arg(long, overrides_with = "_no_wait")]
    wait: bool,

    /// Exit instead of waiting when players are online (default)
    #[arg(long = "no-wait")]
    _no_wait: bool,

    /// While waiting, announce the pending restart to players every hour
    #[arg(long, overrides_with = "_no_announce_waiting")]
    announce_waiting: bool,

    /// Do not announce the pending restart while waiting (default)
    #[arg(long = "no-announce-waiting")]
    _no_announce_waiting: bool,

    /// Maximum minutes to wait for players to log off, -1 to wait forever
    #[arg(long, default_value_t = -1)]
    max_wait: i64,

    /// Directory the restarts.log file is written to
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = mcrestart::logging::init(&cli.log_dir) {
        eprintln!("Failed to set up logging: {err}");
        std::process::exit(1);
    }

    let config = RunConfig {
        server_name: cli.server_name,
        wait: cli.wait,
        announce_waiting: cli.announce_waiting,
        max_wait_minutes: cli.max_wait,
    };

    let ctx = AppContext::builder().build();
    let restarter = Restarter::new(&ctx, config);

    match restarter.run().await {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(err) => {
            error!("Failed to read the server's status: {err}");
            std::process::exit(1);
        }
    }
}
