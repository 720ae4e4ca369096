use patentlens_api::{setup, telemetry};
use patentlens_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    telemetry::init_telemetry();

    // Initialize the application (storage, state, routes)
    let (_state, router) = setup::initialize_app(config.clone())?;

    // Start the server
    setup::server::start_server(&config, router).await?;

    Ok(())
}
