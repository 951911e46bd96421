use std::sync::Arc;

use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::clients::vocus::VocusApi;
use crate::clients::wire::SearchWire;
use crate::core::envelope::Envelope;
use crate::core::error::VocusError;
use crate::domain::{ContentLink, CreatorLink, NamedLink, SearchResponse, SiteLinks};

/// Arguments of `search_contents`. Advertised as a required string, but
/// decoded loosely so a missing or mistyped title is reported in the envelope.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchArgs {
    #[schemars(required, with = "String", description = "title keywords to search for")]
    pub title: Option<Value>,
}

impl SearchArgs {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(Value::String(title.into())),
        }
    }
}

/// Title search over contents, creators, salons and tags.
#[derive(Clone)]
pub struct SearchAdapter {
    api: Arc<dyn VocusApi>,
    links: SiteLinks,
}

impl SearchAdapter {
    pub fn new(api: Arc<dyn VocusApi>, links: SiteLinks) -> Self {
        Self { api, links }
    }

    /// Validates `title` before touching the network.
    pub async fn run(
        &self,
        args: &SearchArgs,
        ct: &CancellationToken,
    ) -> Envelope<SearchResponse> {
        let res = match required_title(args) {
            Ok(title) => self.search(&title, ct).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &res {
            tracing::warn!(kind = e.kind(), error = %e, "search_contents failed");
        }
        res.into()
    }

    async fn search(&self, title: &str, ct: &CancellationToken) -> Result<SearchResponse, VocusError> {
        tracing::debug!(title = %title, "search_contents upstream call");
        let wire = tokio::select! {
            _ = ct.cancelled() => return Err(VocusError::Cancelled),
            res = self.api.search(title) => res?,
        };
        Ok(shape_search(&self.links, wire))
    }
}

/// `title` must be a non-blank string; surrounding whitespace is dropped.
pub fn required_title(args: &SearchArgs) -> Result<String, VocusError> {
    args.title
        .as_ref()
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .ok_or(VocusError::InvalidParam("title"))
}

/// Maps each category independently; output lengths match input lengths.
pub fn shape_search(links: &SiteLinks, wire: SearchWire) -> SearchResponse {
    SearchResponse {
        contents: wire
            .contents
            .into_iter()
            .map(|c| ContentLink {
                url: links.content_url(&c.kind, &c.content_id),
                title: c.title,
            })
            .collect(),
        creators: wire
            .creators
            .into_iter()
            .map(|c| CreatorLink {
                url: links.user_url(&c.id),
                fullname: c.fullname,
            })
            .collect(),
        salons: wire
            .salons
            .into_iter()
            .map(|s| NamedLink {
                url: links.salon_url(&s.id),
                name: s.name,
            })
            .collect(),
        tags: wire
            .tags
            .into_iter()
            .map(|tag| NamedLink {
                url: links.tag_url(&tag),
                name: tag,
            })
            .collect(),
    }
}
