use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::clients::vocus::VocusApi;
use crate::clients::wire::HotContentWire;
use crate::core::envelope::Envelope;
use crate::core::error::VocusError;
use crate::domain::{HotContentRecord, SiteLinks};

/// Fetches the hot-contents feed and flattens it into [`HotContentRecord`]s.
#[derive(Clone)]
pub struct HotContentsAdapter {
    api: Arc<dyn VocusApi>,
    links: SiteLinks,
}

impl HotContentsAdapter {
    pub fn new(api: Arc<dyn VocusApi>, links: SiteLinks) -> Self {
        Self { api, links }
    }

    pub async fn run(&self, ct: &CancellationToken) -> Envelope<Vec<HotContentRecord>> {
        let res = tokio::select! {
            _ = ct.cancelled() => Err(VocusError::Cancelled),
            res = self.api.hot_contents() => res,
        };
        match res {
            Ok(items) => Envelope::ok(shape_hot_contents(&self.links, items)),
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "get_hot_contents failed");
                Envelope::fail(&e)
            }
        }
    }
}

/// One record per upstream item, order preserved.
pub fn shape_hot_contents(links: &SiteLinks, items: Vec<HotContentWire>) -> Vec<HotContentRecord> {
    items
        .into_iter()
        .map(|item| {
            let url = links.content_url(&item.kind, &item.content.id);
            HotContentRecord {
                title: item.content.title,
                summary: item.content.summary,
                author: item.content.user.fullname,
                salon: item.content.salon.name,
                url,
            }
        })
        .collect()
}
