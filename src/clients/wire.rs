//! Upstream JSON shapes. Absent or `null` fields decode to their zero value.

use serde::{Deserialize, Deserializer};

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Like `null_as_default`, but also for each element, so `[x, null]` keeps
/// its length.
fn null_items_as_default<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items = Option::<Vec<Option<T>>>::deserialize(d)?.unwrap_or_default();
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

/// One item of `GET /api/top5-contents`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct HotContentWire {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: ContentWire,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentWire {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "abstract", deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user: UserWire,
    #[serde(deserialize_with = "null_as_default")]
    pub salon: SalonRefWire,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserWire {
    #[serde(deserialize_with = "null_as_default")]
    pub fullname: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SalonRefWire {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Body of `GET /api/search?title=...`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchWire {
    #[serde(deserialize_with = "null_items_as_default")]
    pub contents: Vec<SearchContentWire>,
    #[serde(deserialize_with = "null_items_as_default")]
    pub creators: Vec<CreatorWire>,
    #[serde(deserialize_with = "null_items_as_default")]
    pub salons: Vec<SalonWire>,
    #[serde(deserialize_with = "null_items_as_default")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchContentWire {
    #[serde(rename = "contentId", deserialize_with = "null_as_default")]
    pub content_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CreatorWire {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fullname: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SalonWire {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// The feed is a bare array; `null` is treated as empty.
pub fn decode_hot_contents(body: &[u8]) -> Result<Vec<HotContentWire>, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_slice(body);
    let items = null_items_as_default(&mut de)?;
    de.end()?;
    Ok(items)
}

pub fn decode_search(body: &[u8]) -> Result<SearchWire, serde_json::Error> {
    let res: Option<SearchWire> = serde_json::from_slice(body)?;
    Ok(res.unwrap_or_default())
}
