mod cli;

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::EnvFilter;
use webshot_lib::{serve, AppState, Config, IdleSettings};

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config {
        hard_deadline: Duration::from_secs(args.deadline),
        idle: IdleSettings {
            idle_duration: Duration::from_millis(args.idle_duration),
            max_wait: Duration::from_millis(args.idle_max_wait),
            active_tolerance: args.idle_tolerance,
            ..IdleSettings::default()
        },
        chrome_executable: args.chrome,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let state = AppState {
        config: Arc::new(config),
    };

    if let Err(err) = serve(addr, state).await {
        error!(error = %err, "server exited with error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
