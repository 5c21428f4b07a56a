//! DEEPSPACE game client binary.
//!
//! Composition root: loads configuration and content, sets up logging,
//! then injects the frontend into the [`Client`](deepspace_client::Client).
//!
//! # Features
//!
//! - `frontend-cli`: line-oriented terminal UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Built-in content
//! cargo run -p deepspace-client
//!
//! # Content from a directory, answers piped in
//! CONTENT_DATA_DIR=./data CLI_ECHO_INPUT=1 cargo run -p deepspace-client < answers.txt
//! ```

use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli()?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
fn run_cli() -> Result<()> {
    use client_bootstrap::{SessionBuilder, SessionConfig};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use deepspace_client::Client;

    // 1. Load configuration from environment
    let session_config = SessionConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging, pinning the session id so the log directory matches
    let session_id = session_config.resolved_session_id();
    let session_config = session_config.with_session_id(session_id.clone());
    logging::setup_logging(&session_id)?;

    tracing::info!("Starting DEEPSPACE client");
    tracing::info!("Session ID: {}", session_id);

    // 3. Load content
    let setup = SessionBuilder::new(session_config).build()?;
    tracing::info!(
        "Content: {}",
        setup
            .config
            .data_dir
            .as_ref()
            .map_or_else(|| "built-in".to_string(), |dir| dir.display().to_string())
    );

    // 4. Build frontend and client
    let frontend = CliFrontend::new(frontend_config, cli_config);
    let client = Client::builder()
        .content(setup.content)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    let report = client.run()?;

    tracing::info!(resolved = report.is_some(), "Client shutdown complete");
    Ok(())
}
