use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;

use crate::infra::config::{AppConfig, Config};
use crate::tools::search::SearchArgs;

#[derive(Parser)]
#[command(name = "vocus-mcp-server")]
#[command(about = "Vocus content MCP server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server (HTTP or stdio, per MODE)
    Serve,
    /// Health check a running server
    Health {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Validate environment and VOCUS_CONFIG without starting the server
    Config,
    /// Fetch the hot-contents feed once and print the envelope
    Hot,
    /// Search by title once and print the envelope
    Search {
        #[arg(short, long)]
        title: String,
    },
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    run_commands(cli.command.unwrap_or(Commands::Serve)).await
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Serve => match crate::infra::boot::run_server().await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "server exited with error");
                ExitCode::FAILURE
            }
        },
        Commands::Health { url } => match health_check(&url).await {
            Ok(_) => {
                println!("Service is healthy");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Health check failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Config => match validate_config() {
            Ok(_) => {
                println!("Configuration is valid");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Configuration validation failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Hot => print_envelope(fetch_hot_once().await),
        Commands::Search { title } => print_envelope(search_once(&title).await),
    }
}

fn print_envelope(res: anyhow::Result<serde_json::Value>) -> ExitCode {
    match res {
        Ok(v) => {
            println!("{}", serde_json::to_string_pretty(&v).unwrap_or_else(|_| v.to_string()));
            if v["success"] == true {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Request failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn health_check(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/healthz", url.trim_end_matches('/')))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("HTTP {}", response.status()).into())
    }
}

fn validate_config() -> anyhow::Result<AppConfig> {
    let cfg = Config::from_env();

    if !matches!(cfg.mode.as_str(), "server" | "stdio") {
        anyhow::bail!("Invalid MODE: {}. Must be 'server' or 'stdio'", cfg.mode);
    }
    if cfg.mode == "server" && cfg.port == 0 {
        anyhow::bail!("PORT cannot be 0");
    }

    let app_cfg = cfg.app_config()?;
    if app_cfg.vocus.api_base.trim().is_empty() || app_cfg.vocus.site_base.trim().is_empty() {
        anyhow::bail!("vocus.api_base and vocus.site_base must be set");
    }
    if app_cfg.vocus.timeout_secs == 0 {
        anyhow::bail!("vocus.timeout_secs cannot be 0");
    }
    Ok(app_cfg)
}

fn configured_svc() -> anyhow::Result<crate::tools::tool_router::VocusSvc> {
    let app_cfg = Config::from_env().app_config()?;
    let factory = crate::infra::boot::make_factory(&app_cfg)?;
    let (svc, _) = factory();
    Ok(svc)
}

async fn fetch_hot_once() -> anyhow::Result<serde_json::Value> {
    let svc = configured_svc()?;
    Ok(svc.hot_adapter().run(&CancellationToken::new()).await.to_json())
}

async fn search_once(title: &str) -> anyhow::Result<serde_json::Value> {
    let svc = configured_svc()?;
    Ok(svc
        .search_adapter()
        .run(&SearchArgs::with_title(title), &CancellationToken::new())
        .await
        .to_json())
}
