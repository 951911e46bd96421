use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    vocus_mcp_server::infra::logging::init();
    vocus_mcp_server::cli::run().await
}
