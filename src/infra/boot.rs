use std::net::SocketAddr;
use std::sync::Arc;

use crate::clients::vocus::{VocusApi, VocusRemote};
use crate::domain::SiteLinks;
use crate::infra::config::{AppConfig, Config};
use crate::tools::tool_router::{VocusRouter, VocusSvc};

/// Build the `(handler, router)` factory shared by both transports. The
/// upstream client is constructed once and shared by every session.
pub fn make_factory(
    app_cfg: &AppConfig,
) -> anyhow::Result<impl Fn() -> (VocusSvc, VocusRouter) + Send + Sync + Clone + 'static> {
    let api: Arc<dyn VocusApi> = Arc::new(VocusRemote::from_config(&app_cfg.vocus)?);
    let links = SiteLinks::new(app_cfg.vocus.site_base.clone());
    Ok(move || (VocusSvc::new(api.clone(), links.clone()), VocusSvc::router()))
}

pub async fn run_server() -> anyhow::Result<()> {
    let cfg = Config::from_env();
    let app_cfg = cfg.app_config()?;
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        api_base = %app_cfg.vocus.api_base,
        retries = app_cfg.vocus.retries,
        "BOOT vocus-mcp-server"
    );

    let factory = make_factory(&app_cfg)?;

    // Stdio mode: run MCP over stdio ONLY (no HTTP).
    if cfg.mode == "stdio" {
        crate::infra::runtime::mcp_transport::serve_stdio(factory)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let app = crate::infra::http_app::build_app(factory);
    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;
    Ok(())
}
