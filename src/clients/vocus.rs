use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;

use super::wire::{decode_hot_contents, decode_search, HotContentWire, SearchWire};
use crate::core::error::VocusError;
use crate::infra::config::VocusConfig;
use crate::infra::http::headers::{add_standard_headers, generate_request_id};
use crate::infra::runtime::limits::{make_http_client_with, retry_fixed};

pub const HOT_CONTENTS_PATH: &str = "/api/top5-contents";
pub const SEARCH_PATH: &str = "/api/search";

/// Upstream surface the tools depend on. Implemented by [`VocusRemote`] and
/// by test doubles.
#[async_trait]
pub trait VocusApi: Send + Sync + 'static {
    async fn hot_contents(&self) -> Result<Vec<HotContentWire>, VocusError>;
    async fn search(&self, title: &str) -> Result<SearchWire, VocusError>;
}

/// reqwest-backed client for `api.vocus.cc`.
#[derive(Clone)]
pub struct VocusRemote {
    base: String,
    http: Client,
    retries: u32,
    retry_wait: Duration,
}

impl VocusRemote {
    pub fn new(base: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::from_config(&VocusConfig {
            api_base: base.into(),
            ..VocusConfig::default()
        })
    }

    pub fn from_config(cfg: &VocusConfig) -> Result<Self, reqwest::Error> {
        let http = make_http_client_with(cfg)?;
        Ok(Self {
            base: cfg.api_base.trim_end_matches('/').to_string(),
            http,
            retries: cfg.retries,
            retry_wait: Duration::from_millis(cfg.retry_wait_ms),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// GET `path` with optional query pairs. Transport errors are retried;
    /// any HTTP status is returned as-is with its raw body.
    async fn get_raw(
        &self,
        tool: &'static str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<u8>, VocusError> {
        let url = format!("{}{}", self.base, path);
        let req_id = generate_request_id();
        tracing::debug!(endpoint = %url, request_id = %req_id, "vocus request");

        let start = Instant::now();
        let res = retry_fixed(self.retries, self.retry_wait, |_| {
            let (builder, _rid) =
                add_standard_headers(self.http.get(url.as_str()), Some(req_id.clone()));
            builder.query(query).send()
        })
        .await;

        let resp = match res {
            Ok(resp) => resp,
            Err(e) => {
                crate::infra::logging::log_metric(tool, "upstream_error_total", 1.0);
                tracing::warn!(endpoint = %url, request_id = %req_id, error = %e, "vocus unreachable");
                return Err(VocusError::Connection(e.to_string()));
            }
        };

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| VocusError::Connection(e.to_string()))?;
        let elapsed_ms = start.elapsed().as_millis() as f64;
        crate::infra::logging::log_metric(tool, "upstream_latency_ms", elapsed_ms);

        if !status.is_success() {
            crate::infra::logging::log_metric(tool, "upstream_error_total", 1.0);
            tracing::warn!(endpoint = %url, status = status.as_u16(), "vocus returned error status");
            return Err(VocusError::Upstream {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl VocusApi for VocusRemote {
    async fn hot_contents(&self) -> Result<Vec<HotContentWire>, VocusError> {
        let body = self.get_raw("get_hot_contents", HOT_CONTENTS_PATH, &[]).await?;
        decode_hot_contents(&body).map_err(|e| VocusError::Decode(e.to_string()))
    }

    async fn search(&self, title: &str) -> Result<SearchWire, VocusError> {
        let body = self
            .get_raw("search_contents", SEARCH_PATH, &[("title", title)])
            .await?;
        decode_search(&body).map_err(|e| VocusError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn fast_client(base: String, retries: u32) -> VocusRemote {
        VocusRemote::from_config(&VocusConfig {
            api_base: base,
            retries,
            retry_wait_ms: 1,
            timeout_secs: 5,
            ..VocusConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn it_gets_hot_contents() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).path(HOT_CONTENTS_PATH);
            then.status(200).json_body(json!([
                {"type":"article","content":{"_id":"42","title":"T","abstract":"A","user":{"fullname":"U"},"salon":{"name":"S"}}}
            ]));
        });

        let cli = fast_client(server.base_url(), 0);
        let items = cli.hot_contents().await.unwrap();
        m.assert();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].content.id, "42");
    }

    #[tokio::test]
    async fn it_sends_title_as_query_param() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path(SEARCH_PATH)
                .query_param("title", "雲端 go");
            then.status(200).json_body(json!({"tags":["go"]}));
        });

        let cli = fast_client(server.base_url(), 0);
        let res = cli.search("雲端 go").await.unwrap();
        m.assert();
        assert_eq!(res.tags, vec!["go".to_string()]);
    }

    #[tokio::test]
    async fn it_returns_status_and_body_on_error_without_retrying() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).path(HOT_CONTENTS_PATH);
            then.status(500).body("boom");
        });

        let cli = fast_client(server.base_url(), 2);
        let err = cli.hot_contents().await.unwrap_err();
        m.assert_hits(1);
        assert_eq!(
            err,
            VocusError::Upstream {
                status: 500,
                body: "boom".into()
            }
        );
    }

    #[tokio::test]
    async fn it_reports_decode_failures() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path(HOT_CONTENTS_PATH);
            then.status(200).body("<html>");
        });
        let cli = fast_client(server.base_url(), 0);
        let err = cli.hot_contents().await.unwrap_err();
        assert_eq!(err.kind(), "decode");
    }

    #[tokio::test]
    async fn it_reports_connection_failure_after_retries() {
        // Port 9 (discard) is not listening locally.
        let cli = fast_client("http://127.0.0.1:9".into(), 1);
        let err = cli.search("x").await.unwrap_err();
        assert!(err.to_string().starts_with("connection failure: "));
    }

    #[tokio::test]
    async fn it_sets_request_id_and_user_agent() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path(HOT_CONTENTS_PATH)
                .header_exists("x-request-id")
                .header_exists("user-agent");
            then.status(200).json_body(json!([]));
        });
        let cli = fast_client(server.base_url(), 0);
        assert!(cli.hot_contents().await.unwrap().is_empty());
        m.assert();
    }

    #[test]
    fn trims_trailing_slash_on_base() {
        let cli = VocusRemote::new("https://api.vocus.cc/").unwrap();
        assert_eq!(cli.base(), "https://api.vocus.cc");
    }
}
