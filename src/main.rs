#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    use pixelforge_landing::core::config::{Config, DEFAULT_LOG_LEVEL};
    use pixelforge_landing::core::error::ServerError;
    use pixelforge_landing::server;
    use std::process::ExitCode;
    use tracing_subscriber::EnvFilter;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    // Initialize tracing; RUST_LOG takes precedence over LOG_LEVEL
    let default_filter = config
        .as_ref()
        .map(|c| c.log_level.as_str())
        .unwrap_or(DEFAULT_LOG_LEVEL);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match config {
        Ok(config) => {
            tracing::info!(
                "Config loaded: log_level={}, compression={}, precompressed_assets={}",
                config.log_level,
                config.compression,
                config.precompressed_assets
            );
            server::serve(config).await
        }
        Err(err) => Err(ServerError::from(err)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
