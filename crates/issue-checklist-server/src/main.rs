use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use issue_checklist_server::{build_router, config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    tracing::info!("📋 Issue checklist webhook initializing...");

    let config = Config::from_env().context("Invalid configuration")?;
    let port = config.port;

    tracing::info!(
        project_node_id = %config.project_node_id,
        github_api_url = %config.github_api_url,
        template = %config.template_path.display(),
        "⚙️  Configuration loaded"
    );

    // Read per request, so only warn here
    if !config.template_path.is_file() {
        tracing::warn!(
            "⚠️  Checklist template {} not found - updates will fail until it exists",
            config.template_path.display()
        );
    }

    let state = AppState::from_config(config).context("Failed to build GitHub client")?;
    let router = build_router(state);

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    tracing::info!("✅ Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("👋 Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
