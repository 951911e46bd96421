pub fn init() {
    // Initialize tracing subscriber once, honoring RUST_LOG if set.
    // Logs go to stderr so stdio mode keeps stdout for protocol frames.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Record a per-tool metric and mirror it as a log line. No exporter is
/// installed, so the tracing line is what operators see today.
pub fn log_metric(tool: &'static str, metric: &'static str, value: f64) {
    match metric {
        "upstream_latency_ms" => {
            metrics::histogram!("vocus_upstream_latency_ms", "tool" => tool).record(value)
        }
        _ => metrics::counter!(format!("vocus_{metric}"), "tool" => tool).increment(value as u64),
    }
    tracing::info!(tool = tool, metric = metric, value = value, "metric");
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }

    #[test]
    fn log_metric_without_recorder_is_a_noop() {
        super::log_metric("hot_contents", "upstream_error_total", 1.0);
        super::log_metric("hot_contents", "upstream_latency_ms", 12.5);
    }
}
