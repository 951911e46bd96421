use std::time::Duration;

use crate::infra::config::VocusConfig;

/// Build the shared reqwest client from the upstream settings.
pub fn make_http_client_with(cfg: &VocusConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .build()
}

/// Run `op` up to `retries + 1` times, sleeping a fixed `wait` between
/// attempts. Only errors from `op` trigger another attempt.
pub async fn retry_fixed<T, E, Fut, F>(retries: u32, wait: Duration, mut op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut try_num: u32 = 0;
    loop {
        match op(try_num).await {
            Ok(v) => return Ok(v),
            Err(e) => {
                if try_num >= retries {
                    return Err(e);
                }
                tracing::debug!(attempt = try_num, error = %e, "retrying upstream call");
                tokio::time::sleep(wait).await;
                try_num += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn it_retries_then_succeeds() {
        let mut calls = 0;
        let res: Result<i32, String> = retry_fixed(3, Duration::from_millis(1), move |_| {
            calls += 1;
            let c = calls;
            async move {
                if c < 3 {
                    Err("nope".to_string())
                } else {
                    Ok(42)
                }
            }
        })
        .await;
        assert_eq!(res.unwrap(), 42);
    }

    #[tokio::test]
    async fn it_gives_up_after_retry_budget() {
        let mut seen = Vec::new();
        let res: Result<(), String> = retry_fixed(2, Duration::from_millis(1), |n| {
            seen.push(n);
            async move { Err(format!("fail {n}")) }
        })
        .await;
        assert_eq!(res.unwrap_err(), "fail 2");
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn zero_retries_means_single_attempt() {
        let mut calls = 0u32;
        let _: Result<(), String> = retry_fixed(0, Duration::from_millis(1), |_| {
            calls += 1;
            async { Err("x".to_string()) }
        })
        .await;
        assert_eq!(calls, 1);
    }

    #[test]
    fn builds_client_from_defaults() {
        assert!(make_http_client_with(&VocusConfig::default()).is_ok());
    }
}
