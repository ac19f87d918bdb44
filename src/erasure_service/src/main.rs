use color_eyre::eyre::Result;
use erasure_adapters::config::ErasureServiceSetting;
use erasure_service::{build_service, tracing::init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = ErasureServiceSetting::load()?;

    // Firebase clients are created once and shared by every request
    let account_service = build_service(&config).await?;

    let allowed_origins = config.application.allowed_origins.clone();

    let listener = TcpListener::bind(&config.application.address).await?;
    tracing::info!("Starting account deletion service...");

    account_service
        .run_standalone(listener, Some(allowed_origins))
        .await?;

    Ok(())
}
