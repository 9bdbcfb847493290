use std::path::PathBuf;
use std::process::ExitCode;

use coinstreak_lib::application::services::ConfigService;
use coinstreak_lib::presentation::commands::export_dashboard_json;
use coinstreak_lib::presentation::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ConfigService::from_default_dir() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config);

    let seed_override = std::env::args_os().nth(1).map(PathBuf::from);
    let state = AppState::new(config, seed_override);

    match export_dashboard_json(&state).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.code, "Failed to build dashboard: {}", e.message);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &ConfigService) {
    let level = config.get_log_level();
    let log_dir = ConfigService::default_log_dir();

    let result = log_dir.and_then(|dir| {
        coinstreak_infrastructure::logging::init_logger(dir.clone(), level.as_str())
            .map(|_| dir)
    });

    match result {
        Ok(dir) => {
            tracing::info!("coinstreak starting...");
            tracing::info!("File logging initialized at: {}", dir.display());
        }
        Err(e) => {
            eprintln!("Failed to initialize file logging: {}", e);
            eprintln!("Falling back to console logging only");

            let _ = tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_str())),
                )
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true)
                .try_init();
        }
    }
}
