//! Output records returned inside tool envelopes.

use serde::{Deserialize, Serialize};

pub mod links;

pub use links::SiteLinks;

/// One flattened entry of the hot-contents feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotContentRecord {
    pub title: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub author: String,
    pub salon: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLink {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorLink {
    pub fullname: String,
    pub url: String,
}

/// Salons and tags share the `{name, url}` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLink {
    pub name: String,
    pub url: String,
}

/// Search results; every category is always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub contents: Vec<ContentLink>,
    pub creators: Vec<CreatorLink>,
    pub salons: Vec<NamedLink>,
    pub tags: Vec<NamedLink>,
}
